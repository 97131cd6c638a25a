use phf::phf_map;
use strum_macros::{AsRefStr, IntoStaticStr};

/// A tag identifier recognized by the transformer
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
pub enum Keyword {
    /// `spaceless`, driven by [`crate::SpacelessOptions`]
    #[strum(serialize = "spaceless")]
    Spaceless,
    /// `inline`, a fixed rule joining indented lines with a single space
    #[strum(serialize = "inline")]
    Inline,
}

pub static KEYWORDS: phf::Map<&'static str, Keyword> = phf_map! {
    "spaceless" => Keyword::Spaceless,
    "inline" => Keyword::Inline,
};

impl Keyword {
    /// Looks up an identifier name. Matching is exact and case-sensitive.
    #[inline]
    pub fn from_ident(name: &str) -> Option<Keyword> {
        KEYWORDS.get(name).copied()
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
