//! Activatable validator

use crate::activation::{ActivationGate, TextSource};
use crate::foundation::{Validate, ValidationResult};

/// Removes every whitespace char, keeping everything else in order.
///
/// This is the normalization applied before the activation length is
/// measured and before the predicate runs.
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates a field's text once it has grown long enough.
///
/// Holds the field's [`TextSource`] and an [`ActivationGate`]. One instance
/// per bound field; the gate state lives and dies with it.
///
/// # Examples
///
/// ```rust
/// use fieldguard_validator::activation::ActivatableValidator;
///
/// let mut field = ActivatableValidator::new(String::from("123"), 6);
/// let mut calls = 0;
///
/// field.validate(|text| text.len() == 6, |_| calls += 1);
/// assert_eq!(calls, 0);
///
/// *field.source_mut() = String::from("123 456");
/// field.validate(|text| text == "123456", |valid| {
///     assert!(valid);
///     calls += 1;
/// });
/// assert_eq!(calls, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ActivatableValidator<S> {
    source: S,
    gate: ActivationGate,
}

impl<S: TextSource> ActivatableValidator<S> {
    /// Creates a dormant validator over `source`.
    pub fn new(source: S, min_chars: usize) -> Self {
        Self {
            source,
            gate: ActivationGate::new(min_chars),
        }
    }

    /// Returns the source text with whitespace stripped.
    #[must_use]
    pub fn normalized_text(&self) -> String {
        strip_whitespace(&self.source.text())
    }

    /// Returns true if validation should run now.
    ///
    /// Activates the validator as a side effect the first time the
    /// normalized text reaches the threshold.
    pub fn should_validate(&mut self) -> bool {
        if self.gate.is_active() {
            return true;
        }
        let len = self.normalized_text().chars().count();
        self.gate.observe(len)
    }

    /// Runs `predicate` against the normalized text and hands its verdict to
    /// `on_result`.
    ///
    /// Does nothing, and never calls `on_result`, while the validator is
    /// dormant. Otherwise `on_result` is called exactly once.
    pub fn validate<P, F>(&mut self, predicate: P, on_result: F)
    where
        P: FnOnce(&str) -> bool,
        F: FnOnce(bool),
    {
        if !self.should_validate() {
            tracing::trace!(min_chars = self.gate.min_chars(), "validation suppressed");
            return;
        }
        let text = self.normalized_text();
        let valid = predicate(&text);
        tracing::trace!(valid, "field validated");
        on_result(valid);
    }

    /// Runs `validator` under the same gate as [`validate`](Self::validate).
    ///
    /// Returns `None` while dormant.
    pub fn check<V>(&mut self, validator: &V) -> Option<ValidationResult<()>>
    where
        V: Validate<Input = str> + ?Sized,
    {
        if !self.should_validate() {
            return None;
        }
        Some(validator.validate(&self.normalized_text()))
    }

    /// Callback form of [`check`](Self::check).
    pub fn validate_with<V, F>(&mut self, validator: &V, on_result: F)
    where
        V: Validate<Input = str> + ?Sized,
        F: FnOnce(bool),
    {
        self.validate(|text| validator.is_valid(text), on_result);
    }
}

impl<S> ActivatableValidator<S> {
    /// Returns true once the threshold has been reached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.gate.is_active()
    }

    #[must_use]
    pub fn gate(&self) -> &ActivationGate {
        &self.gate
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable access for hosts that push text into an owned source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}
