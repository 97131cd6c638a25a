use swc_core::{
    common::{comments::SingleThreadedComments, BytePos},
    ecma::ast::{EsVersion, Expr, Module},
};
use swc_ecma_parser::{lexer::Lexer, EsSyntax, Parser, StringInput, Syntax};

pub fn parse_javascript_module(
    input: &str,
    span_start: u32,
    es_config: EsSyntax,
) -> Result<(Module, SingleThreadedComments), swc_ecma_parser::error::Error> {
    let comments = SingleThreadedComments::default();

    let lexer = Lexer::new(
        Syntax::Es(es_config),
        EsVersion::EsNext,
        StringInput::new(
            input,
            BytePos(span_start),
            BytePos(span_start + input.len() as u32),
        ),
        Some(&comments),
    );

    let mut parser = Parser::new_from(lexer);

    parser.parse_module().map(|module| (module, comments))
}

pub fn parse_javascript_expr(
    input: &str,
    span_start: u32,
    es_config: EsSyntax,
) -> Result<(Box<Expr>, SingleThreadedComments), swc_ecma_parser::error::Error> {
    let comments = SingleThreadedComments::default();

    let lexer = Lexer::new(
        Syntax::Es(es_config),
        EsVersion::EsNext,
        StringInput::new(
            input,
            BytePos(span_start),
            BytePos(span_start + input.len() as u32),
        ),
        Some(&comments),
    );

    let mut parser = Parser::new_from(lexer);

    parser.parse_expr().map(|expr| (expr, comments))
}
