//! Field configuration
//!
//! Fields can be described as data and built at startup, so a bad pattern
//! stops the host before any user types into the field.
//!
//! ```json
//! {
//!   "template": "### ###",
//!   "placeholder": "#",
//!   "min_chars": 6,
//!   "rule": { "kind": "postal_code" }
//! }
//! ```

use fieldguard_mask::{DEFAULT_PLACEHOLDER, Template};
use fieldguard_validator::foundation::Validate;
use fieldguard_validator::validators::{MatchesRegex, POSTAL_CODE_MIN_CHARS, min_length, postal_code};
use serde::{Deserialize, Serialize};

use crate::binding::{FieldBinding, POSTAL_CODE_TEMPLATE};
use crate::error::ConfigError;

/// Validation rule of a configured field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    /// US ZIP or Canadian postal code.
    PostalCode,
    /// Custom regular expression, matched against the normalized text.
    Regex {
        pattern: String,
        #[serde(default)]
        case_insensitive: bool,
    },
    /// Minimum number of chars.
    MinLength { min: usize },
}

impl RuleConfig {
    /// Compiles the rule.
    pub fn build(&self) -> Result<Box<dyn Validate<Input = str> + Send + Sync>, ConfigError> {
        let rule: Box<dyn Validate<Input = str> + Send + Sync> = match self {
            Self::PostalCode => Box::new(postal_code()),
            Self::Regex {
                pattern,
                case_insensitive,
            } => {
                let compiled = if *case_insensitive {
                    MatchesRegex::case_insensitive(pattern)
                } else {
                    MatchesRegex::new(pattern)
                };
                Box::new(compiled.map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })?)
            }
            Self::MinLength { min } => Box::new(min_length(*min)),
        };
        Ok(rule)
    }
}

/// Configuration of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Input mask; the field is unmasked when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    /// Placeholder character of `template`.
    #[serde(default = "default_placeholder")]
    pub placeholder: char,
    /// Normalized length at which validation starts firing.
    pub min_chars: usize,
    pub rule: RuleConfig,
}

fn default_placeholder() -> char {
    DEFAULT_PLACEHOLDER
}

impl FieldConfig {
    /// Configuration equivalent to [`FieldBinding::postal_code`].
    #[must_use]
    pub fn postal_code() -> Self {
        Self {
            template: Some(POSTAL_CODE_TEMPLATE.to_string()),
            placeholder: DEFAULT_PLACEHOLDER,
            min_chars: POSTAL_CODE_MIN_CHARS,
            rule: RuleConfig::PostalCode,
        }
    }

    /// Parses a single field configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds a dormant binding, compiling the rule up front.
    pub fn build(&self) -> Result<FieldBinding, ConfigError> {
        let rule = self.rule.build()?;
        let binding = FieldBinding::from_boxed(rule, self.min_chars);
        Ok(match &self.template {
            Some(template) => binding.with_template(Template::new(template.as_str(), self.placeholder)),
            None => binding,
        })
    }
}
