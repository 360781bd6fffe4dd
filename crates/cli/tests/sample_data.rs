//! Black-box tests over the sample catalog and invoices in `data/`.

use std::path::PathBuf;

use playbill_cli::{Args, OutputFormat, compute_all, render, run};
use playbill_pricing::PricingRules;

fn data(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(file)
}

fn args(format: OutputFormat) -> Args {
    Args {
        plays: data("plays.json"),
        invoices: data("invoices.json"),
        json: format == OutputFormat::Json,
        pricing: None,
    }
}

#[test]
fn prints_text_statements_for_sample_data() {
    let output = run(&args(OutputFormat::Text)).unwrap();

    let expected = "\
Statement for BigCo
  Hamlet: $290.00 (55 seats)
  As You Like It: $220.00 (35 seats)
  Othello: $140.00 (40 seats)
Amount owed is $650.00
You earned 47 credits

Statement for Globe Society
  Henry V: $70.00 (25 seats)
  The Winter's Tale: $65.00 (21 seats)
Amount owed is $135.00
You earned 15 credits
";
    assert_eq!(output, expected);
}

#[test]
fn prints_json_statements_for_sample_data() {
    let output = run(&args(OutputFormat::Json)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    let statements = value.as_array().unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[0]["customer"], "BigCo");
    assert_eq!(statements[0]["total_amount"], 65_000);
    assert_eq!(statements[0]["total_volume_credits"], 47);
    assert_eq!(statements[0]["lines"][1]["genre"], "comedy");
    assert_eq!(statements[1]["lines"][1]["play_id"], "winters-tale");
}

#[test]
fn bad_invoice_fails_the_run_with_context() {
    let plays = std::fs::read_to_string(data("plays.json")).unwrap();
    let invoices = r#"[
        {"customer": "BigCo", "performances": [{"playID": "hamlet", "audience": 55}]},
        {"customer": "Oddball", "performances": [{"playID": "macbeth", "audience": 5}]}
    ]"#;

    let err = compute_all(&plays, invoices, &PricingRules::HOUSE).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("invoice #2"));
    assert!(message.contains("Oddball"));
    assert!(message.contains("unknown play: macbeth"));
}

#[test]
fn unknown_genre_in_catalog_only_fails_invoices_using_it() {
    let plays = r#"{
        "hamlet": {"name": "Hamlet", "type": "tragedy"},
        "tosca": {"name": "Tosca", "type": "opera"}
    }"#;

    let ok = r#"[{"customer": "A", "performances": [{"playID": "hamlet", "audience": 30}]}]"#;
    let statements = compute_all(plays, ok, &PricingRules::HOUSE).unwrap();
    assert_eq!(
        render(&statements, OutputFormat::Text).unwrap(),
        "Statement for A\n  Hamlet: $40.00 (30 seats)\nAmount owed is $40.00\nYou earned 0 credits\n"
    );

    let bad = r#"[{"customer": "B", "performances": [{"playID": "tosca", "audience": 30}]}]"#;
    let err = compute_all(plays, bad, &PricingRules::HOUSE).unwrap_err();
    assert!(format!("{err:#}").contains("unknown type: opera"));
}

#[test]
fn rate_card_override_changes_amounts() {
    let dir = std::env::temp_dir().join(format!("playbill-rates-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rates.json");
    std::fs::write(
        &path,
        r#"{ "tragedy": {
            "base_amount": 10000,
            "audience_threshold": 50,
            "over_threshold_per_person": 100,
            "credit_threshold": 50
        } }"#,
    )
    .unwrap();

    let args = Args {
        pricing: Some(path),
        ..args(OutputFormat::Text)
    };
    let output = run(&args).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    // Hamlet: 10000 + 100 * 5; Othello: base only.
    assert!(output.contains("  Hamlet: $105.00 (55 seats)\n"));
    assert!(output.contains("  Othello: $100.00 (40 seats)\n"));
}
