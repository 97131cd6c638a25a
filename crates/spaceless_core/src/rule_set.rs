use std::borrow::Cow;

use flagset::Flags;
use regex::{Captures, Regex};
use smallvec::SmallVec;
use tracing::trace;

use crate::{
    escapes::{escape_interpolations, unescape_whitespace},
    inline_tags::is_inline_tag,
    patterns::{
        AFTER_CLOSE_RE, AFTER_OPEN_RE, BEFORE_CLOSE_RE, BEFORE_TAGS_RE, BETWEEN_TAGS_RE,
        EDGES_RE, INDENTED_LINES_RE, NEW_LINES_RE, WHITESPACE_RE,
    },
    Keyword, SpacelessOptions, SpacelessRule, TemplateSegment,
};

/// What a match of a [`Rule`] is replaced with
#[derive(Clone, Copy)]
pub enum Replacement {
    /// Replacement string, `${1}`-style group references are expanded
    Template(&'static str),
    /// Replacement computed from the captures of each match
    Computed(fn(&Captures) -> String),
}

impl std::fmt::Debug for Replacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Replacement::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Replacement::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// A single find-and-replace operation
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub replacement: Replacement,
}

impl Rule {
    /// Replaces all non-overlapping matches.
    /// Returns [`Cow::Borrowed`] when nothing matched.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.replacement {
            Replacement::Template(template) => self.pattern.replace_all(text, template),
            Replacement::Computed(compute) => self
                .pattern
                .replace_all(text, |captures: &Captures| compute(captures)),
        }
    }
}

/// Ordered rules to apply to every segment of one template literal
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: SmallVec<[Rule; 8]>,
}

impl RuleSet {
    /// Selects the rules for a matched keyword.
    /// Only [`Keyword::Spaceless`] reads the options.
    pub fn for_keyword(keyword: Keyword, options: &SpacelessOptions) -> RuleSet {
        match keyword {
            Keyword::Spaceless => RuleSet::from_options(options),
            Keyword::Inline => RuleSet::inline(),
        }
    }

    /// Builds the enabled rules in their declaration order
    pub fn from_options(options: &SpacelessOptions) -> RuleSet {
        let rules = SpacelessRule::LIST
            .iter()
            .copied()
            .filter(|rule| options.is_enabled(*rule))
            .map(RuleSet::rule)
            .collect();

        RuleSet { rules }
    }

    /// Joins lines, dropping the indentation which follows each line break
    pub fn inline() -> RuleSet {
        RuleSet {
            rules: SmallVec::from_slice(&[Rule {
                name: Keyword::Inline.as_str(),
                pattern: &*INDENTED_LINES_RE,
                replacement: Replacement::Template(" "),
            }]),
        }
    }

    /// Turns every whitespace run into a single space
    pub fn collapse_all() -> RuleSet {
        RuleSet {
            rules: SmallVec::from_slice(&[Rule {
                name: "collapse-all",
                pattern: &*WHITESPACE_RE,
                replacement: Replacement::Template(" "),
            }]),
        }
    }

    /// The rule backing a named toggle
    pub fn rule(rule: SpacelessRule) -> Rule {
        let (pattern, replacement): (&'static Regex, Replacement) = match rule {
            SpacelessRule::RemoveNewLines => (&*NEW_LINES_RE, Replacement::Template("")),
            SpacelessRule::RemoveBeforeTags => (&*BEFORE_TAGS_RE, Replacement::Template("<")),
            SpacelessRule::RemoveBetweenTags => {
                (&*BETWEEN_TAGS_RE, Replacement::Template("><${1}"))
            }
            SpacelessRule::RemoveBeforeClose => (&*BEFORE_CLOSE_RE, Replacement::Template("</")),
            SpacelessRule::RemoveAfterClose => {
                (&*AFTER_CLOSE_RE, Replacement::Computed(strip_after_block_close))
            }
            SpacelessRule::RemoveAfterOpen => (&*AFTER_OPEN_RE, Replacement::Template("<${1}>")),
            SpacelessRule::RemoveInContent => (&*WHITESPACE_RE, Replacement::Template(" ")),
            SpacelessRule::TrimEdges => (&*EDGES_RE, Replacement::Template("")),
        };

        Rule {
            name: rule.as_str(),
            pattern,
            replacement,
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Runs the rules in order, each one on the output of the previous.
    /// Returns `None` when no rule matched.
    pub fn apply_str(&self, input: &str) -> Option<String> {
        let mut output: Option<String> = None;

        for rule in self.rules.iter() {
            let current = output.as_deref().unwrap_or(input);
            if let Cow::Owned(replaced) = rule.apply(current) {
                trace!(rule = rule.name, "rule matched");
                output = Some(replaced);
            }
        }

        output
    }

    /// Same as [`RuleSet::apply_str`], but always returns the resulting text
    pub fn transform(&self, input: &str) -> String {
        self.apply_str(input).unwrap_or_else(|| input.to_owned())
    }

    /// Rewrites both representations of a segment.
    ///
    /// Escaped whitespace in `raw` is unescaped before the rules run, and a `${`
    /// formed by the removal is escaped, so `raw` still reads as `cooked`.
    pub fn apply(&self, segment: &mut impl TemplateSegment) {
        let rewritten = {
            let raw = unescape_whitespace(segment.raw());
            self.apply_str(&raw)
        };

        if let Some(raw) = rewritten {
            segment.set_raw(escape_interpolations(&raw).into_owned());
        }

        let cooked = segment.cooked().and_then(|cooked| self.apply_str(cooked));
        if let Some(cooked) = cooked {
            segment.set_cooked(cooked);
        }
    }

    /// Rewrites every segment in place, keeping their count and order
    pub fn apply_all<'s, S>(&self, segments: impl IntoIterator<Item = &'s mut S>)
    where
        S: TemplateSegment + 's,
    {
        for segment in segments {
            self.apply(segment);
        }
    }
}

/// `</div>  ` -> `</div>`, but `</span>  ` stays
fn strip_after_block_close(captures: &Captures) -> String {
    let tag_name = &captures[1];
    if is_inline_tag(tag_name) {
        captures[0].to_owned()
    } else {
        format!("</{tag_name}>")
    }
}
