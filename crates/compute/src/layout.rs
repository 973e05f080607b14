/// Binding slots of [`crate::Kernel::MarchStep`].
pub const MARCH_POSITIONS: usize = 0;
pub const MARCH_DIRECTIONS: usize = 1;
pub const MARCH_DISTANCES: usize = 2;
pub const MARCH_PARAMS: usize = 3; // uniform

const _: () = assert!(MARCH_PARAMS + 2 == binding_count(&crate::Kernel::MarchStep) as usize);

/// Return expected number of bindings for each kernel, output placeholder included.
pub const fn binding_count(kernel: &crate::Kernel) -> u32 {
    match kernel {
        crate::Kernel::SphereDistance => 2,
        crate::Kernel::MandelbulbDistance | crate::Kernel::CameraDistance => 3,
        crate::Kernel::MarchStep => 5,
    }
}
