use swc_core::{
    common::{BytePos, Spanned},
    ecma::ast::{EsVersion, Module},
};
use swc_ecma_parser::{lexer::Lexer, EsSyntax, PResult, Parser, StringInput, Syntax, TsSyntax};
use tracing::warn;

use crate::SourceLang;

/// Parses a module. Recoverable syntax errors are logged and otherwise ignored,
/// since they do not prevent the transformation.
pub fn parse_module(raw: &str, lang: SourceLang) -> PResult<Module> {
    let syntax = match lang {
        SourceLang::Javascript => Syntax::Es(Default::default()),
        SourceLang::Jsx => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
        SourceLang::Typescript => Syntax::Typescript(Default::default()),
        SourceLang::Tsx => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
    };

    let lexer = Lexer::new(
        syntax,
        EsVersion::EsNext,
        StringInput::new(raw, BytePos(0), BytePos(raw.len() as u32)),
        None,
    );

    let mut parser = Parser::new_from(lexer);
    let module = parser.parse_module()?;

    for error in parser.take_errors() {
        warn!(
            lo = error.span().lo.0,
            hi = error.span().hi.0,
            "recovered from syntax error: {}",
            error.kind().msg()
        );
    }

    Ok(module)
}
