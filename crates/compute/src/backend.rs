use crate::{BufferView, ComputeError, Kernel};

pub trait ComputeBackend: Send + Sync + 'static {
    /// Dispatches a kernel with the given bindings and workgroup configuration.
    ///
    /// # Arguments
    /// * `kernel`: The kernel to dispatch.
    /// * `binds`: A slice of `BufferView`s for input and output. Inputs come
    ///            first, the output placeholder is always the last binding.
    /// * `workgroups`: The number of workgroups to dispatch. The CPU backend
    ///            processes the whole batch in one pass and ignores it.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Vec<Vec<u8>>)` where each inner `Vec<u8>` contains the byte data
    /// of one buffer written by the kernel. Most kernels produce a single output;
    /// [`Kernel::MarchStep`] produces positions, applied step lengths and active flags.
    ///
    /// # Errors
    ///
    /// Returns `ComputeError::ShapeMismatch` if any input buffers are invalid and
    /// `ComputeError::InvalidParams` if a uniform buffer holds unusable values.
    fn dispatch(
        &self,
        kernel: &Kernel,
        binds: &[BufferView],
        workgroups: [u32; 3],
    ) -> Result<Vec<Vec<u8>>, ComputeError>;
}
