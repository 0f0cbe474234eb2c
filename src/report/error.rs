use thiserror::Error;

/// Errors that can occur while rendering a chart.
#[derive(Debug, Error)]
pub enum ReportError {
    /// No series contained a finite, non-degenerate range to plot.
    #[error("no plottable data")]
    NoData,

    /// The drawing backend failed.
    ///
    /// This covers image encoding, font loading, and file output.
    #[error("chart rendering failed: {context}")]
    Render {
        /// Drawing step that failed.
        context: &'static str,

        /// Underlying drawing error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ReportError {
    /// Creates a render failure error with context.
    pub(super) fn render(
        context: &'static str,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Render {
            context,
            source: Box::new(err),
        }
    }
}
