//! Core of `spaceless`: the whitespace rules, their configuration
//! and their application to the static segments of a template literal.
//!
//! The crate knows nothing about tree traversal. A host walks the AST,
//! decides which keyword a tagged template uses and hands its segments
//! to a [`RuleSet`].
//!
//! ```
//! use spaceless_core::{Keyword, RuleSet, Segment, SpacelessOptions};
//!
//! let mut segments = vec![Segment::new("<ul>\n  <li>One</li>\n</ul>")];
//! let rule_set = RuleSet::for_keyword(Keyword::Spaceless, &SpacelessOptions::default());
//! rule_set.apply_all(segments.iter_mut());
//!
//! assert_eq!(segments[0].raw, "<ul><li>One</li></ul>");
//! ```

#[macro_use]
extern crate lazy_static;

mod error;
mod escapes;
mod inline_tags;
mod keywords;
mod options;
mod patterns;
mod rule_set;
mod rules;
mod segment;

pub use error::OptionsError;
pub use escapes::{escape_interpolations, unescape_whitespace};
pub use inline_tags::is_inline_tag;
pub use keywords::{Keyword, KEYWORDS};
pub use options::SpacelessOptions;
pub use rule_set::{Replacement, Rule, RuleSet};
pub use rules::{SpacelessRule, SpacelessRules};
pub use segment::{Segment, TemplateSegment};
