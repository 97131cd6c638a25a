use spaceless_core::{RuleSet, SpacelessOptions};
use swc_core::{
    common::DUMMY_SP,
    ecma::ast::{TaggedTpl, Tpl},
};
use tracing::debug;

use crate::match_tag;

/// Result of [`transform_tagged_tpl`]
#[derive(Debug)]
pub enum TaggedTplOutcome {
    /// The tag is not a keyword, the node is untouched
    Unmatched,
    /// The rewritten template, to be put in place of the tagged expression
    Replace(Box<Tpl>),
}

/// Rewrites the quasis of a tagged template whose tag is a keyword.
///
/// On [`TaggedTplOutcome::Replace`] the template is moved out of `tagged`,
/// leaving an empty one behind. The caller is expected to substitute the whole node.
pub fn transform_tagged_tpl(
    tagged: &mut TaggedTpl,
    options: &SpacelessOptions,
) -> TaggedTplOutcome {
    let Some(keyword) = match_tag(&tagged.tag) else {
        return TaggedTplOutcome::Unmatched;
    };

    let rule_set = RuleSet::for_keyword(keyword, options);
    rule_set.apply_all(tagged.tpl.quasis.iter_mut());

    debug!(
        keyword = keyword.as_str(),
        quasis = tagged.tpl.quasis.len(),
        rules = rule_set.len(),
        "stripped whitespace from tagged template"
    );

    let tpl = std::mem::replace(
        &mut tagged.tpl,
        Box::new(Tpl {
            span: DUMMY_SP,
            exprs: vec![],
            quasis: vec![],
        }),
    );

    TaggedTplOutcome::Replace(tpl)
}
