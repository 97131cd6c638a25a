use phf::phf_set;

/// Inline-level elements. Whitespace after their closing tag is content,
/// e.g. `<b>bold</b> text`.
static INLINE_TAGS: phf::Set<&'static str> = phf_set! {
    "a",
    "abbr",
    "b",
    "bdi",
    "bdo",
    "cite",
    "code",
    "dfn",
    "em",
    "i",
    "kbd",
    "mark",
    "q",
    "rp",
    "rt",
    "ruby",
    "s",
    "samp",
    "small",
    "span",
    "strong",
    "sub",
    "sup",
    "time",
    "u",
    "var",
};

/// Checks whether the tag name denotes an inline-level element, ignoring ASCII case
pub fn is_inline_tag(tag_name: &str) -> bool {
    if tag_name.bytes().any(|b| b.is_ascii_uppercase()) {
        INLINE_TAGS.contains(tag_name.to_ascii_lowercase().as_str())
    } else {
        INLINE_TAGS.contains(tag_name)
    }
}
