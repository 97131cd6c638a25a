use std::str::FromStr;

use serde_json::Value;
use tracing::debug;

use crate::{OptionsError, SpacelessRule, SpacelessRules};

/// Configuration of the `spaceless` keyword.
///
/// JSON form: `{ "remove-in-content": true, "remove-new-lines": false }`.
/// Keys which are absent, unknown or not booleans leave the defaults in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpacelessOptions {
    pub rules: SpacelessRules,
}

impl Default for SpacelessOptions {
    fn default() -> Self {
        SpacelessOptions {
            rules: SpacelessRule::defaults(),
        }
    }
}

impl SpacelessOptions {
    /// Every rule disabled
    pub fn none() -> Self {
        SpacelessOptions {
            rules: SpacelessRules::default(),
        }
    }

    #[inline]
    pub fn is_enabled(&self, rule: SpacelessRule) -> bool {
        self.rules.contains(rule)
    }

    /// Explicitly enables or disables a rule. `None` keeps the current state.
    pub fn set(&mut self, rule: SpacelessRule, value: Option<bool>) {
        match value {
            Some(true) => self.rules |= rule,
            Some(false) => self.rules -= rule,
            None => {}
        }
    }

    #[must_use]
    pub fn with(mut self, rule: SpacelessRule, enabled: bool) -> Self {
        self.set(rule, Some(enabled));
        self
    }

    /// Reads overrides from a JSON object on top of the defaults
    pub fn from_json_value(value: &Value) -> Self {
        let mut options = SpacelessOptions::default();
        options.merge_json_value(value);
        options
    }

    /// Parses a JSON document. Blank input means defaults.
    pub fn from_json_str(input: &str) -> Result<Self, OptionsError> {
        if input.trim().is_empty() {
            return Ok(SpacelessOptions::default());
        }

        let value: Value = serde_json::from_str(input)?;
        Ok(SpacelessOptions::from_json_value(&value))
    }

    /// Applies the boolean entries of a JSON object, ignoring everything else
    pub fn merge_json_value(&mut self, value: &Value) {
        let Value::Object(entries) = value else {
            if !value.is_null() {
                debug!(?value, "spaceless options are not an object, using defaults");
            }
            return;
        };

        for (key, value) in entries {
            let Ok(rule) = SpacelessRule::from_str(key) else {
                debug!(key = key.as_str(), "ignoring unknown spaceless option");
                continue;
            };

            let explicit = value.as_bool();
            if explicit.is_none() {
                debug!(key = key.as_str(), ?value, "ignoring non-boolean spaceless option");
            }

            self.set(rule, explicit);
        }
    }
}
