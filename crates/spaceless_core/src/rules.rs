use flagset::{flags, FlagSet};
use strum_macros::{AsRefStr, EnumString, IntoStaticStr};

flags! {
    /// Named whitespace rules of the `spaceless` keyword.
    ///
    /// Declaration order is the application order:
    /// a rule always sees the output of the rules declared before it.
    #[derive(AsRefStr, EnumString, IntoStaticStr)]
    pub enum SpacelessRule: u8 {
        /// Deletes every run of `\n` and `\r`
        #[strum(serialize = "remove-new-lines")]
        RemoveNewLines,
        /// `  <` becomes `<`
        #[strum(serialize = "remove-before-tags")]
        RemoveBeforeTags,
        /// `>  <` becomes `><`, `>  </` becomes `></`
        #[strum(serialize = "remove-between-tags")]
        RemoveBetweenTags,
        /// `  </` becomes `</`
        #[strum(serialize = "remove-before-close")]
        RemoveBeforeClose,
        /// `</div>  ` becomes `</div>`, inline elements such as `</span>` are kept as is
        #[strum(serialize = "remove-after-close")]
        RemoveAfterClose,
        /// `<div>  ` becomes `<div>`
        #[strum(serialize = "remove-after-open")]
        RemoveAfterOpen,
        /// Any whitespace run becomes a single space
        #[strum(serialize = "remove-in-content")]
        RemoveInContent,
        /// Leading and trailing whitespace of each segment is removed
        #[strum(serialize = "trim-edges")]
        TrimEdges,
    }
}

pub type SpacelessRules = FlagSet<SpacelessRule>;

impl SpacelessRule {
    /// Rules which apply unless explicitly disabled
    pub fn defaults() -> SpacelessRules {
        SpacelessRule::RemoveNewLines
            | SpacelessRule::RemoveBeforeTags
            | SpacelessRule::RemoveBetweenTags
            | SpacelessRule::RemoveBeforeClose
            | SpacelessRule::RemoveAfterClose
    }

    #[inline]
    pub fn is_enabled_by_default(self) -> bool {
        SpacelessRule::defaults().contains(self)
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
