//! Compiled patterns shared by all rule sets.
//!
//! Whitespace here means space, tab, line feed and carriage return.
//! Tag names are matched permissively: ASCII letters, digits and hyphens.

use regex::Regex;

lazy_static! {
    pub static ref NEW_LINES_RE: Regex = Regex::new(r"[\n\r]+").unwrap();
    pub static ref BEFORE_TAGS_RE: Regex = Regex::new(r"[ \t\n\r]+<").unwrap();
    pub static ref BETWEEN_TAGS_RE: Regex = Regex::new(r"(?i)>[ \t\n\r]+<(/?)").unwrap();
    pub static ref BEFORE_CLOSE_RE: Regex = Regex::new(r"(?i)[ \t\n\r]+</").unwrap();
    pub static ref AFTER_CLOSE_RE: Regex =
        Regex::new(r"(?i)</([a-z0-9-]+)>[ \t\n\r]+").unwrap();
    pub static ref AFTER_OPEN_RE: Regex = Regex::new(r"(?i)<([a-z0-9-]+)>[ \t\n\r]+").unwrap();
    pub static ref WHITESPACE_RE: Regex = Regex::new(r"[ \t\n\r]+").unwrap();
    pub static ref EDGES_RE: Regex = Regex::new(r"^[ \t\n\r]+|[ \t\n\r]+$").unwrap();
    pub static ref INDENTED_LINES_RE: Regex = Regex::new(r"(?:\n\s*)+").unwrap();
}
