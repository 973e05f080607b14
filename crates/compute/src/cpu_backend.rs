use crate::{kernels, BufferView, ComputeBackend, ComputeError, Kernel};

#[derive(Default, Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ComputeBackend for CpuBackend {
    fn dispatch(
        &self,
        kernel: &Kernel,
        binds: &[BufferView],
        _workgroups: [u32; 3],
    ) -> Result<Vec<Vec<u8>>, ComputeError> {
        for buffer_view in binds {
            let expected_elements = buffer_view.shape.iter().product::<usize>();
            let expected_bytes = expected_elements * buffer_view.element_size_in_bytes;

            if buffer_view.data.len() != expected_bytes {
                return Err(ComputeError::ShapeMismatch(
                    "Buffer data length does not match product of shape dimensions and element size",
                ));
            }
        }
        if binds.len() < kernel.binding_count() as usize {
            return Err(ComputeError::ShapeMismatch("too few buffers bound for kernel"));
        }
        match kernel {
            Kernel::SphereDistance => kernels::handle_sphere_distance(binds),
            Kernel::MandelbulbDistance => kernels::handle_mandelbulb_distance(binds),
            Kernel::MarchStep => kernels::handle_march_step(binds),
            Kernel::CameraDistance => kernels::handle_camera_distance(binds),
        }
    }
}
