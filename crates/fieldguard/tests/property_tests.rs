//! Property tests for field bindings and the registry.

use fieldguard::prelude::*;
use proptest::prelude::*;

proptest! {
    /// What a masked field shows is exactly the mask applied to the raw text.
    #[test]
    fn displayed_text_is_the_formatted_input(raw in "[a-zA-Z0-9 -]{0,16}") {
        let mut zip = FieldBinding::postal_code();
        let shown = zip.input(&raw).to_owned();
        prop_assert_eq!(shown, format_with_pattern(&raw, "### ###", '#'));
    }

    /// Once any event activates a field, every later event reports a verdict.
    #[test]
    fn every_event_reports_after_activation(
        inputs in prop::collection::vec("[a-z0-9]{0,8}", 1..8),
    ) {
        let mut fields = FieldRegistry::new();
        fields.bind("zip", FieldBinding::postal_code());

        let mut active = false;
        for raw in inputs {
            let mut reported = false;
            fields.dispatch("zip", FieldEvent::TextChanged(raw), |_| reported = true);
            active |= reported;
            prop_assert_eq!(reported, active);
            prop_assert_eq!(fields.get("zip").map(FieldBinding::is_active), Some(active));
        }
    }

    /// Focus and submit never change what the field displays.
    #[test]
    fn focus_and_submit_keep_the_text(raw in "[a-z0-9]{0,8}") {
        let mut zip = FieldBinding::postal_code();
        let shown = zip.input(&raw).to_owned();
        prop_assert_eq!(zip.handle(FieldEvent::FocusLost, |_| {}), shown.as_str());
        prop_assert_eq!(zip.handle(FieldEvent::SubmitRequested, |_| {}), shown.as_str());
    }
}
