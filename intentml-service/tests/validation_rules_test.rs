//! Tests for the validation engine over hand-built contexts

use intentml_core::config::ValidationConfig;
use intentml_service::validator::{
    DiagnosticKind, IntentSchema, ValidationContext, ValidationEngine,
};
use pretty_assertions::assert_eq;

fn engine() -> ValidationEngine {
    ValidationEngine::new(ValidationConfig::default())
}

fn schema(name: &str) -> IntentSchema {
    IntentSchema {
        name: name.to_string(),
        slots: vec![],
    }
}

fn utterances(entries: &[(&str, &[&str])]) -> indexmap::IndexMap<String, Vec<String>> {
    entries
        .iter()
        .map(|(intent, samples)| {
            (
                (*intent).to_string(),
                samples.iter().map(ToString::to_string).collect(),
            )
        })
        .collect()
}

#[test]
fn test_symmetric_difference_reported_both_directions() {
    let context = ValidationContext {
        utterances: utterances(&[(
            "A",
            &["sample one"],
        ), (
            "B",
            &["sample two"],
        )]),
        intents: vec![schema("A"), schema("C")],
        ..ValidationContext::default()
    };

    let report = engine().validate(&context);
    assert_eq!(report.count_of(DiagnosticKind::UtterancesNotInSchema), 1);
    assert_eq!(report.count_of(DiagnosticKind::IntentsWithoutUtterances), 1);

    let stray = report
        .diagnostics
        .iter()
        .find(|d| d.kind == DiagnosticKind::UtterancesNotInSchema)
        .expect("stray utterance diagnostic");
    assert!(stray.message.contains('B'));
    let missing = report
        .diagnostics
        .iter()
        .find(|d| d.kind == DiagnosticKind::IntentsWithoutUtterances)
        .expect("missing utterances diagnostic");
    assert!(missing.message.contains('C'));
}

#[test]
fn test_minimum_utterance_boundary() {
    let at_minimum = ValidationContext {
        utterances: utterances(&[(
            "AMAZON.HelpIntent",
            &["help", "help me", "what now", "options", "guide me"],
        )]),
        intents: vec![schema("AMAZON.HelpIntent")],
        ..ValidationContext::default()
    };
    let report = engine().validate(&at_minimum);
    assert_eq!(report.count_of(DiagnosticKind::MinimumUtterancesNotMet), 0);

    let below_minimum = ValidationContext {
        utterances: utterances(&[(
            "AMAZON.HelpIntent",
            &["help", "help me", "what now", "options"],
        )]),
        intents: vec![schema("AMAZON.HelpIntent")],
        ..ValidationContext::default()
    };
    let report = engine().validate(&below_minimum);
    assert_eq!(report.count_of(DiagnosticKind::MinimumUtterancesNotMet), 1);
}

#[test]
fn test_diagnostics_accumulate_across_rules() {
    let context = ValidationContext {
        utterances: utterances(&[
            ("A", &["and shared phrase", "shared phrase"]),
            ("B", &["shared phrase", "b's % phrase"]),
        ]),
        intents: vec![schema("A"), schema("B")],
        ..ValidationContext::default()
    };

    let report = engine().validate(&context);
    assert_eq!(
        report.count_of(DiagnosticKind::DuplicateUtteranceAcrossIntents),
        1
    );
    assert_eq!(report.count_of(DiagnosticKind::LeadingConnectingWord), 1);
    assert_eq!(
        report.count_of(DiagnosticKind::InvalidUtteranceCharacters),
        1
    );
    // Help/Cancel/Stop are absent.
    assert_eq!(report.count_of(DiagnosticKind::MissingBuiltinIntent), 3);
    // Never a panic, always a report.
    assert!(!report.is_clean());
}

#[test]
fn test_report_display_lists_kinds() {
    let report = engine().validate(&ValidationContext::default());
    let rendered = report.to_string();
    assert!(rendered.contains("MissingUtterances"));
    assert!(rendered.contains("MissingIntentSchema"));
}
