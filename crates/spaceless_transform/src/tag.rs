use spaceless_core::Keyword;
use swc_core::ecma::ast::Expr;

/// Recognizes `spaceless` and `inline` when used as a bare identifier tag.
/// `ns.spaceless`, `spaceless()` or `(spaceless)` never match.
pub fn match_tag(tag: &Expr) -> Option<Keyword> {
    let Expr::Ident(ident) = tag else {
        return None;
    };

    Keyword::from_ident(&ident.sym)
}
