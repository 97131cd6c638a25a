//! SWC integration of `spaceless`.
//!
//! Finds tagged templates such as
//! ```js
//! const html = spaceless`
//!   <ul>
//!     <li>${item}</li>
//!   </ul>
//! `;
//! ```
//! rewrites their static text with the rules of [`spaceless_core`]
//! and replaces them with the bare template literal.

mod tag;
mod tagged_tpl;
mod visitor;

#[cfg(test)]
mod test_utils;

pub use spaceless_core::{Keyword, RuleSet, SpacelessOptions, SpacelessRule};
pub use tag::match_tag;
pub use tagged_tpl::{transform_tagged_tpl, TaggedTplOutcome};
pub use visitor::{transform_module, transform_program, SpacelessVisitor};
