use swc_core::ecma::ast::TplElement;

/// A static text part of a template literal.
///
/// `raw` is the text exactly as written in the source,
/// `cooked` is the same text with escape sequences interpreted.
/// `cooked` is absent when the raw text contains an invalid escape,
/// which tagged templates allow.
pub trait TemplateSegment {
    fn raw(&self) -> &str;
    fn set_raw(&mut self, raw: String);
    fn cooked(&self) -> Option<&str>;
    fn set_cooked(&mut self, cooked: String);
}

impl TemplateSegment for TplElement {
    #[inline]
    fn raw(&self) -> &str {
        &self.raw
    }

    #[inline]
    fn set_raw(&mut self, raw: String) {
        self.raw = raw.into();
    }

    #[inline]
    fn cooked(&self) -> Option<&str> {
        self.cooked.as_deref()
    }

    #[inline]
    fn set_cooked(&mut self, cooked: String) {
        self.cooked = Some(cooked.into());
    }
}

/// Owned segment, for hosts without their own segment type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub raw: String,
    pub cooked: Option<String>,
}

impl Segment {
    /// Segment without escape sequences, so `cooked` equals `raw`
    pub fn new(text: impl Into<String>) -> Segment {
        let raw = text.into();
        Segment {
            cooked: Some(raw.clone()),
            raw,
        }
    }
}

impl TemplateSegment for Segment {
    fn raw(&self) -> &str {
        &self.raw
    }

    fn set_raw(&mut self, raw: String) {
        self.raw = raw;
    }

    fn cooked(&self) -> Option<&str> {
        self.cooked.as_deref()
    }

    fn set_cooked(&mut self, cooked: String) {
        self.cooked = Some(cooked);
    }
}
