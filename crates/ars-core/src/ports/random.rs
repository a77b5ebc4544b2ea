/// Injectable randomness source for the mock outputs.
pub trait RandomPort: Send + Sync {
    /// Uniform index in `0..len`. `len` is never zero.
    fn index(&self, len: usize) -> usize;

    /// Uniform draw in `0..100`.
    fn percent(&self) -> u32;
}
