use miette::Diagnostic;
use thiserror::Error;

/// Result type for template helper calls.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("expected node to be a section or inner namespace, found a {found}")]
    #[diagnostic(code(metagen::not_a_section))]
    NotASection { found: &'static str },

    #[error("context buffer was not set")]
    #[diagnostic(
        code(metagen::buffer_not_set),
        help("bind an output buffer with `RenderContext::set_buffer` before rendering")
    )]
    BufferNotSet,

    #[error("invalid render options")]
    #[diagnostic(code(metagen::invalid_options))]
    InvalidOptions {
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] metagen_model::Error),
}
