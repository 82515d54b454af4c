/// ProgressReporter port for user feedback during data gathering
///
/// Progress goes to a side channel (stderr in the CLI) so the rendered
/// report on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a plain progress message.
    fn report(&self, message: &str);

    /// Marks the start of one data-gathering step.
    fn begin_step(&self, message: &str);

    /// Marks the end of the current data-gathering step.
    fn finish_step(&self, message: &str);

    /// Reports a non-fatal warning (e.g. a degraded data source).
    fn warn(&self, message: &str);
}
