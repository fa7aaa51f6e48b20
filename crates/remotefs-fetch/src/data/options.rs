/// Configuration for fetching operations.
///
/// # Examples
///
/// ```
/// use remotefs_fetch::FetchOptions;
///
/// let options = FetchOptions::default().progress(false);
/// assert!(!options.progress);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Send progress lines to the IO collaborator.
    ///
    /// Default: true
    pub progress: bool,
}

impl Default for FetchOptions {
    fn default() -> Self { Self { progress: true } }
}

impl FetchOptions {
    #[must_use]
    pub fn progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}
