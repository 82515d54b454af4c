use crate::shared::Result;

/// OutputPresenter port for presenting the rendered report
///
/// This port abstracts the output destination (stdout, file, etc.).
pub trait OutputPresenter {
    /// Presents the rendered report to the output destination.
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails.
    fn present(&self, content: &str) -> Result<()>;
}
