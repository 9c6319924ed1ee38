//! End-to-end tests driving fields the way a UI host does.

use fieldguard::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Presentation state a host would keep per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cue {
    Neutral,
    Valid,
    Invalid,
}

struct Host {
    fields: FieldRegistry<String>,
    zip_text: String,
    zip_cue: Cue,
}

impl Host {
    fn new() -> Self {
        fieldguard::log::init_test();
        let mut fields = FieldRegistry::new();
        fields.bind("zip".to_string(), FieldBinding::postal_code());
        Self {
            fields,
            zip_text: String::new(),
            zip_cue: Cue::Neutral,
        }
    }

    fn send(&mut self, event: FieldEvent) {
        let mut cue = self.zip_cue;
        if let Some(shown) = self.fields.dispatch("zip", event, |ok| {
            cue = if ok { Cue::Valid } else { Cue::Invalid };
        }) {
            self.zip_text = shown;
        }
        self.zip_cue = cue;
    }

    fn type_key(&mut self, key: char) {
        let mut raw = self.zip_text.clone();
        raw.push(key);
        self.send(FieldEvent::TextChanged(raw));
    }

    fn backspace(&mut self) {
        let mut raw = self.zip_text.clone();
        raw.pop();
        self.send(FieldEvent::TextChanged(raw));
    }
}

#[test]
fn typing_a_canadian_code() {
    let mut host = Host::new();
    let mut cues = Vec::new();
    for key in "K1A0B1".chars() {
        host.type_key(key);
        cues.push(host.zip_cue);
    }

    assert_eq!(host.zip_text, "K1A 0B1");
    assert_eq!(
        cues,
        vec![
            Cue::Neutral,
            Cue::Neutral,
            Cue::Neutral,
            Cue::Neutral,
            Cue::Neutral,
            Cue::Valid,
        ]
    );
}

#[test]
fn deleting_after_activation_turns_invalid() {
    let mut host = Host::new();
    for key in "K1A0B1".chars() {
        host.type_key(key);
    }
    host.backspace();
    assert_eq!(host.zip_text, "K1A 0B");
    assert_eq!(host.zip_cue, Cue::Invalid);

    host.type_key('9');
    assert_eq!(host.zip_text, "K1A 0B9");
    assert_eq!(host.zip_cue, Cue::Valid);
}

#[test]
fn short_zip_never_lights_up_before_activation() {
    let mut host = Host::new();
    for key in "12345".chars() {
        host.type_key(key);
    }
    host.send(FieldEvent::FocusLost);
    host.send(FieldEvent::SubmitRequested);

    // Five digits stay below the six-char activation threshold.
    assert_eq!(host.zip_text, "123 45");
    assert_eq!(host.zip_cue, Cue::Neutral);
}

#[test]
fn pasted_text_is_masked_and_truncated() {
    let mut host = Host::new();
    host.send(FieldEvent::TextChanged("k1a-0b1 extra".to_string()));
    assert_eq!(host.zip_text, "k1a 0b1");
    assert_eq!(host.zip_cue, Cue::Valid);
}

#[rstest]
#[case::zip_plus_four_is_cut_by_the_mask("12345-6789", "123 456", Cue::Invalid)]
#[case::six_digits("123456", "123 456", Cue::Invalid)]
#[case::lowercase_canadian("m5v3l9", "m5v 3l9", Cue::Valid)]
fn paste_cases(#[case] pasted: &str, #[case] shown: &str, #[case] cue: Cue) {
    let mut host = Host::new();
    host.send(FieldEvent::TextChanged(pasted.to_string()));
    assert_eq!(host.zip_text, shown);
    assert_eq!(host.zip_cue, cue);
}

#[test]
fn registry_from_json_document() {
    let mut fields = FieldRegistry::from_json(
        r####"{
            "zip": { "template": "### ###", "min_chars": 6, "rule": { "kind": "postal_code" } },
            "phone": {
                "template": "(###) ###-####",
                "min_chars": 10,
                "rule": { "kind": "regex", "pattern": "^\\(?\\d{3}\\)?-?\\d{3}-?\\d{4}$" }
            }
        }"####,
    )
    .unwrap();
    assert_eq!(fields.len(), 2);

    let mut verdict = None;
    let shown = fields.dispatch(
        "phone",
        FieldEvent::TextChanged("5550101999".into()),
        |ok| verdict = Some(ok),
    );
    assert_eq!(shown.as_deref(), Some("(555) 010-1999"));
    assert_eq!(verdict, Some(true));
}

#[test]
fn registry_names_the_broken_field() {
    let err = FieldRegistry::from_configs([
        ("zip", FieldConfig::postal_code()),
        (
            "code",
            FieldConfig {
                template: None,
                placeholder: '#',
                min_chars: 1,
                rule: RuleConfig::Regex {
                    pattern: "[unclosed".to_string(),
                    case_insensitive: false,
                },
            },
        ),
    ])
    .unwrap_err();

    insta::assert_snapshot!(err.to_string(), @r#"field "code": invalid validation pattern "[unclosed""#);
    assert!(std::error::Error::source(&err).is_some());
}
