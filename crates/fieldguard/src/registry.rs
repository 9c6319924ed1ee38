//! Field registry

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::binding::FieldBinding;
use crate::config::FieldConfig;
use crate::error::ConfigError;
use crate::event::FieldEvent;

/// Owns one [`FieldBinding`] per field id.
///
/// Bindings are mutated in place, so activation state survives between
/// events for as long as the field stays bound.
///
/// # Examples
///
/// ```rust
/// use fieldguard::{FieldBinding, FieldEvent, FieldRegistry};
///
/// let mut fields = FieldRegistry::new();
/// fields.bind(1_u32, FieldBinding::postal_code());
///
/// let mut verdict = None;
/// fields.dispatch(&1, FieldEvent::TextChanged("12345".into()), |ok| verdict = Some(ok));
/// assert_eq!(verdict, None);
///
/// fields.dispatch(&1, FieldEvent::TextChanged("123456".into()), |ok| verdict = Some(ok));
/// assert_eq!(verdict, Some(false));
/// ```
#[derive(Debug)]
pub struct FieldRegistry<K> {
    bindings: HashMap<K, FieldBinding>,
}

impl<K> Default for FieldRegistry<K> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> FieldRegistry<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a field, returning the binding it replaces.
    ///
    /// Rebinding starts from a fresh, dormant state.
    pub fn bind(&mut self, id: K, binding: FieldBinding) -> Option<FieldBinding> {
        let previous = self.bindings.insert(id, binding);
        tracing::debug!(
            fields = self.bindings.len(),
            replaced = previous.is_some(),
            "field bound"
        );
        previous
    }

    /// Discards a field's binding and its state.
    pub fn unbind<Q>(&mut self, id: &Q) -> Option<FieldBinding>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let removed = self.bindings.remove(id);
        if removed.is_some() {
            tracing::debug!(fields = self.bindings.len(), "field unbound");
        }
        removed
    }

    #[must_use]
    pub fn get<Q>(&self, id: &Q) -> Option<&FieldBinding>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.bindings.get(id)
    }

    pub fn get_mut<Q>(&mut self, id: &Q) -> Option<&mut FieldBinding>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.bindings.get_mut(id)
    }

    #[must_use]
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.bindings.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterates over the bound field ids in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &K> {
        self.bindings.keys()
    }

    /// Routes an event to a field and returns its new display text.
    ///
    /// Unknown ids return `None` without calling `on_result`.
    pub fn dispatch<Q, F>(&mut self, id: &Q, event: FieldEvent, on_result: F) -> Option<String>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
        F: FnOnce(bool),
    {
        let Some(binding) = self.bindings.get_mut(id) else {
            tracing::trace!(event = event.name(), "event for unbound field dropped");
            return None;
        };
        Some(binding.handle(event, on_result).to_owned())
    }
}

impl FieldRegistry<String> {
    /// Builds a registry from named field configurations.
    ///
    /// Fails on the first field that does not build; the error names it.
    pub fn from_configs<I, N>(configs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (N, FieldConfig)>,
        N: Into<String>,
    {
        let mut registry = Self::new();
        for (name, config) in configs {
            let name = name.into();
            let binding = config.build().map_err(|e| e.for_field(name.clone()))?;
            registry.bind(name, binding);
        }
        Ok(registry)
    }

    /// Parses a JSON object of `name → field config` and builds it.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let configs: HashMap<String, FieldConfig> = serde_json::from_str(json)?;
        Self::from_configs(configs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_unbind() {
        let mut fields = FieldRegistry::new();
        assert!(fields.is_empty());
        assert!(fields.bind("zip", FieldBinding::postal_code()).is_none());
        assert!(fields.contains("zip"));
        assert_eq!(fields.len(), 1);

        assert!(fields.unbind("zip").is_some());
        assert!(fields.unbind("zip").is_none());
        assert!(fields.is_empty());
    }

    #[test]
    fn test_state_persists_between_events() {
        let mut fields = FieldRegistry::new();
        fields.bind("zip", FieldBinding::postal_code());
        fields.dispatch("zip", FieldEvent::TextChanged("123456".into()), |_| {});
        assert!(fields.get("zip").unwrap().is_active());

        let mut verdict = None;
        let shown = fields.dispatch("zip", FieldEvent::TextChanged("1".into()), |ok| {
            verdict = Some(ok);
        });
        assert_eq!(shown.as_deref(), Some("1"));
        assert_eq!(verdict, Some(false));
    }

    #[test]
    fn test_rebinding_resets_state() {
        let mut fields = FieldRegistry::new();
        fields.bind("zip", FieldBinding::postal_code());
        fields.dispatch("zip", FieldEvent::TextChanged("123456".into()), |_| {});

        let previous = fields.bind("zip", FieldBinding::postal_code()).unwrap();
        assert!(previous.is_active());
        assert!(!fields.get("zip").unwrap().is_active());
        assert_eq!(fields.get("zip").unwrap().text(), "");
    }

    #[test]
    fn test_unknown_field() {
        let mut fields: FieldRegistry<String> = FieldRegistry::new();
        let mut called = false;
        let shown = fields.dispatch("nope", FieldEvent::SubmitRequested, |_| called = true);
        assert!(shown.is_none());
        assert!(!called);
    }

    #[test]
    fn test_fields_are_independent() {
        let mut fields = FieldRegistry::new();
        fields.bind("billing", FieldBinding::postal_code());
        fields.bind("shipping", FieldBinding::postal_code());

        fields.dispatch("billing", FieldEvent::TextChanged("k1a0b1".into()), |_| {});
        assert!(fields.get("billing").unwrap().is_active());
        assert!(!fields.get("shipping").unwrap().is_active());

        let mut ids: Vec<_> = fields.ids().copied().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["billing", "shipping"]);
    }

    #[test]
    fn test_get_mut() {
        let mut fields = FieldRegistry::new();
        fields.bind(7_u8, FieldBinding::postal_code());
        let shown = fields.get_mut(&7).unwrap().input("123456").to_owned();
        assert_eq!(shown, "123 456");
    }
}
