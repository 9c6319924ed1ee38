//! Field bindings

use std::fmt;

use fieldguard_mask::Template;
use fieldguard_validator::activation::ActivatableValidator;
use fieldguard_validator::foundation::{Validate, ValidationResult};
use fieldguard_validator::validators::{POSTAL_CODE_MIN_CHARS, postal_code};

use crate::event::FieldEvent;

/// Template used by [`FieldBinding::postal_code`].
pub const POSTAL_CODE_TEMPLATE: &str = "### ###";

type Rule = Box<dyn Validate<Input = str> + Send + Sync>;

/// One bound text field: its display text, optional input mask, validation
/// rule and activation state.
///
/// Owned by the host (usually through a [`FieldRegistry`](crate::FieldRegistry))
/// and mutated in place on every event.
pub struct FieldBinding {
    template: Option<Template>,
    rule: Rule,
    validator: ActivatableValidator<String>,
}

impl FieldBinding {
    /// Creates an unmasked binding that validates with `rule` once the
    /// normalized text reaches `min_chars`.
    pub fn new<V>(rule: V, min_chars: usize) -> Self
    where
        V: Validate<Input = str> + Send + Sync + 'static,
    {
        Self::from_boxed(Box::new(rule), min_chars)
    }

    pub(crate) fn from_boxed(rule: Rule, min_chars: usize) -> Self {
        Self {
            template: None,
            rule,
            validator: ActivatableValidator::new(String::new(), min_chars),
        }
    }

    /// Masks input with `template` before storing it.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    /// A US ZIP / Canadian postal code field: `### ###` mask, validation
    /// from six characters on.
    pub fn postal_code() -> Self {
        Self::new(postal_code(), POSTAL_CODE_MIN_CHARS)
            .with_template(Template::new(POSTAL_CODE_TEMPLATE, '#'))
    }

    /// Formats and stores new raw text, returning what the field should
    /// display.
    pub fn input(&mut self, raw: &str) -> &str {
        let text = match &self.template {
            Some(template) => template.apply(raw),
            None => raw.to_owned(),
        };
        tracing::trace!(raw, text = %text, "field input");
        *self.validator.source_mut() = text;
        self.validator.source()
    }

    /// Validates the stored text if the field is active and reports the
    /// verdict to `on_result`.
    pub fn validate<F>(&mut self, on_result: F)
    where
        F: FnOnce(bool),
    {
        self.validator.validate_with(&*self.rule, on_result);
    }

    /// Structured form of [`validate`](Self::validate); `None` while dormant.
    pub fn check(&mut self) -> Option<ValidationResult<()>> {
        self.validator.check(&*self.rule)
    }

    /// Applies a host event and returns the text to display.
    pub fn handle<F>(&mut self, event: FieldEvent, on_result: F) -> &str
    where
        F: FnOnce(bool),
    {
        tracing::trace!(event = event.name(), "field event");
        if let FieldEvent::TextChanged(raw) = event {
            self.input(&raw);
        }
        self.validate(on_result);
        self.text()
    }

    /// Returns the current display text.
    #[must_use]
    pub fn text(&self) -> &str {
        self.validator.source()
    }

    /// Returns true once validation has started firing.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.validator.is_active()
    }

    #[must_use]
    pub fn min_chars(&self) -> usize {
        self.validator.gate().min_chars()
    }

    #[must_use]
    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    /// Returns true if the display text fills the whole mask.
    ///
    /// Unmasked fields are always complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.template
            .as_ref()
            .is_none_or(|template| template.is_complete(self.text()))
    }
}

impl fmt::Debug for FieldBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldBinding")
            .field("template", &self.template.as_ref().map(Template::as_str))
            .field("text", &self.text())
            .field("min_chars", &self.min_chars())
            .field("active", &self.is_active())
            .finish_non_exhaustive()
    }
}
