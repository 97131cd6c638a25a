//! Error definitions for the glue code of `spaceless`

use spaceless_core::OptionsError;
use swc_core::common::{Span, Spanned, DUMMY_SP};
use swc_ecma_parser::error::Error as ParseError;

#[derive(Debug)]
pub enum TransformError {
    /// The source is not valid ECMAScript or TypeScript
    Parse(ParseError),

    /// The options document is not valid JSON
    Options(OptionsError),

    /// Code generation failed to write the output
    Emit(std::io::Error),
}

impl std::fmt::Display for TransformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransformError::Parse(e) => write!(f, "failed to parse source: {}", e.kind().msg()),
            TransformError::Options(e) => e.fmt(f),
            TransformError::Emit(e) => write!(f, "failed to emit code: {e}"),
        }
    }
}

impl std::error::Error for TransformError {}

impl From<ParseError> for TransformError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<OptionsError> for TransformError {
    fn from(value: OptionsError) -> Self {
        Self::Options(value)
    }
}

impl From<std::io::Error> for TransformError {
    fn from(value: std::io::Error) -> Self {
        Self::Emit(value)
    }
}

impl Spanned for TransformError {
    fn span(&self) -> Span {
        match self {
            TransformError::Parse(e) => e.span(),
            TransformError::Options(_) | TransformError::Emit(_) => DUMMY_SP,
        }
    }
}
