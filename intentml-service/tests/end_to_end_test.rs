//! End-to-end tests over the public pipeline API

use intentml_core::{IntentMLConfig, SheetSource};
use intentml_service::generator::ArtifactContent;
use intentml_service::validator::DiagnosticKind;
use intentml_service::CompilerPipeline;
use pretty_assertions::assert_eq;

fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect()
}

fn source(sheet_title: &str, rows: &[&[&str]]) -> SheetSource {
    SheetSource {
        source_id: "spreadsheet-1".to_string(),
        source_title: "Helper App en-US".to_string(),
        sheet_title: sheet_title.to_string(),
        grid: grid(rows),
    }
}

/// One built-in intent with five phrases, no slot sheets: the schema
/// rules stay quiet and the Alexa model carries exactly that intent.
#[test]
fn test_minimal_built_in_intent_scenario() {
    let sources = vec![
        source("INTENT", &[&["intent"], &["AMAZON.HelpIntent"]]),
        source(
            "UTTERANCES_MAIN",
            &[
                &["AMAZON.HelpIntent"],
                &["help"],
                &["help me"],
                &["what can I do"],
                &["what are my options"],
                &["how does this work"],
            ],
        ),
        source(
            "INVOCATION_NAMES",
            &[
                &["environment", "invocationName"],
                &["production", "helper app"],
            ],
        ),
    ];

    let pipeline = CompilerPipeline::new(IntentMLConfig::default());
    let output = pipeline.compile(sources).expect("compiles");

    // Sample minimums, character set, parity, slot and template rules
    // all stay quiet.
    for kind in [
        DiagnosticKind::MinimumUtterancesNotMet,
        DiagnosticKind::InvalidUtteranceCharacters,
        DiagnosticKind::InvalidSlotCharacters,
        DiagnosticKind::UtterancesNotInSchema,
        DiagnosticKind::IntentsWithoutUtterances,
        DiagnosticKind::SlotNotInSchema,
        DiagnosticKind::SlotNotDeclaredOnIntent,
        DiagnosticKind::TemplateSlotMismatch,
        DiagnosticKind::DuplicateSlotInUtterance,
    ] {
        assert_eq!(output.report.count_of(kind), 0, "unexpected {kind}");
    }
    // The help intent is declared, so only cancel and stop are reported.
    assert_eq!(output.report.count_of(DiagnosticKind::MissingBuiltinIntent), 2);

    let interaction = output
        .artifacts
        .iter()
        .find(|a| a.path == "alexa/production/interaction-model/en-US.json")
        .expect("interaction model");
    let ArtifactContent::Json(doc) = &interaction.content else {
        panic!("expected JSON content");
    };
    let intents = doc["interactionModel"]["languageModel"]["intents"]
        .as_array()
        .expect("intents array");
    assert_eq!(intents.len(), 1);
    assert_eq!(intents[0]["name"], "AMAZON.HelpIntent");
    assert_eq!(intents[0]["samples"].as_array().expect("samples").len(), 5);
    assert_eq!(intents[0]["slots"].as_array().expect("slots").len(), 0);
}

/// A full project compiles every platform set for every invocation pair
/// and keeps artifact paths disjoint.
#[test]
fn test_full_project_compiles_all_platforms() {
    let sources = vec![
        source(
            "INTENT",
            &[
                &[
                    "intent",
                    "slotName",
                    "slotType",
                    "startIntent",
                    "endIntent",
                    "canFulfillIntent",
                ],
                &["LaunchIntent", "", "", "true", "", ""],
                &["TravelIntent", "{country}", "{LIST_OF_COUNTRIES}", "", "", "yes"],
                &["AMAZON.HelpIntent", "", "", "", "", ""],
                &["AMAZON.CancelIntent", "", "", "", "true", ""],
                &["AMAZON.StopIntent", "", "", "", "true", ""],
            ],
        ),
        source(
            "UTTERANCES_MAIN",
            &[
                &[
                    "LaunchIntent",
                    "TravelIntent",
                    "AMAZON.HelpIntent",
                    "AMAZON.CancelIntent",
                    "AMAZON.StopIntent",
                ],
                &["open helper", "go to {country}", "help", "cancel", "stop"],
                &["start helper", "visit {country}", "help me", "cancel that", "stop it"],
                &["", "", "what can I do", "never mind", "quit"],
                &["", "", "what are my options", "forget it", "exit"],
                &["", "", "how does this work", "cancel please", "stop now"],
            ],
        ),
        source(
            "LIST_OF_COUNTRIES",
            &[
                &["synonym", "value"],
                &["usa", "united states"],
                &["", "america"],
                &["france", ""],
            ],
        ),
        source(
            "VIEWS_FILE",
            &[
                &["path", "en-US"],
                &["launch.say", "welcome to helper"],
                &["launch.say", "hello from helper"],
            ],
        ),
        source(
            "SKILL_GENERAL_INFORMATION",
            &[
                &["key", "value"],
                &["alexa.manifestVersion", "1.0"],
                &["dialogflow.description", "a travel helper"],
            ],
        ),
        source(
            "INVOCATION_NAMES",
            &[
                &["environment", "invocationName"],
                &["production", "helper app"],
                &["staging", "helper app staging"],
            ],
        ),
    ];

    let pipeline = CompilerPipeline::new(IntentMLConfig::default());
    let output = pipeline.compile(sources).expect("compiles");

    let paths: Vec<&str> = output.artifacts.iter().map(|a| a.path.as_str()).collect();
    for expected in [
        "alexa/production/interaction-model/en-US.json",
        "alexa/production/manifest.json",
        "alexa/production/can-fulfill-intents.json",
        "alexa/staging/interaction-model/en-US.json",
        "dialogflow/production/intents/LaunchIntent.json",
        "dialogflow/production/intents/TravelIntent_usersays_en.json",
        "dialogflow/production/entities/list-of-countries.json",
        "dialogflow/production/package.json",
        "dialogflow/production/agent.json",
        "cortana/production/en-US.json",
        "views/views.json",
        "synonyms/en-US/list-of-countries.json",
        "entities/en-US/list-of-countries.txt",
    ] {
        assert!(paths.contains(&expected), "missing {expected}");
    }

    let mut deduped = paths.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), paths.len(), "artifact paths must be disjoint");

    // The required intents are all present, the fixture is clean.
    assert_eq!(output.report.count_of(DiagnosticKind::MissingBuiltinIntent), 0);
    assert_eq!(output.report.count_of(DiagnosticKind::TemplateSlotMismatch), 0);

    // Alexa manifest only sees its own namespace.
    let manifest = output
        .artifacts
        .iter()
        .find(|a| a.path == "alexa/production/manifest.json")
        .expect("manifest");
    let ArtifactContent::Json(doc) = &manifest.content else {
        panic!("expected JSON content");
    };
    assert_eq!(doc["manifest"]["manifestVersion"], "1.0");
    assert!(doc["manifest"].get("description").is_none());

    // The view bundle accumulated both phrasings.
    let views = output
        .artifacts
        .iter()
        .find(|a| a.path == "views/views.json")
        .expect("views");
    let ArtifactContent::Json(doc) = &views.content else {
        panic!("expected JSON content");
    };
    assert_eq!(
        doc["en-US"]["launch"]["say"],
        serde_json::json!(["welcome to helper", "hello from helper"])
    );
}
