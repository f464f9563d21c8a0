//! Template rendering error types.

/// Template rendering error.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// Handlebars rendering error.
    #[error("Failed to render {field}: {source}")]
    RenderError {
        field: &'static str,
        #[source]
        source: handlebars::RenderError,
    },

    /// Rendered value is blank.
    #[error("Rendered {field} is empty")]
    Empty { field: &'static str },
}
