#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use debuggable::{Branding, Debuggable, Report, render};

fn load_reports(filename: &str) -> Vec<Report> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

fn report_by_identifier(reports: &[Report], identifier: &str) -> Report {
    reports
        .iter()
        .find(|r| r.identifier() == identifier)
        .unwrap_or_else(|| panic!("missing fixture report: {identifier}"))
        .clone()
}

#[test]
fn catalog_reports_roundtrip_through_single_report_loader() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/reports.json");
    let data = std::fs::read_to_string(&path).unwrap();
    let raw: Vec<serde_json::Value> = serde_json::from_str(&data).unwrap();

    for entry in raw {
        let report = Report::from_json(&entry.to_string())
            .unwrap_or_else(|e| panic!("fixture entry failed contract validation: {e}"));
        assert!(!report.identifier().is_empty());
    }
}

#[test]
fn full_report_renders_every_section_in_order() {
    let reports = load_reports("reports.json");
    let report = report_by_identifier(&reports, "App.FileError.missing");

    let output = render(&report, &Branding::new("App"));
    assert_eq!(
        output,
        "File Error: file not found\n\n\
         Identifier: App.FileError.missing\n\n\
         Here are some possible causes: \n\
         - path misspelled\n\
         - file was deleted\n\n\
         These suggestions could address the issue: \n\
         - check the path\n\n\
         App's documentation talks about this: \n\
         - https://docs.example/files\n\n\
         These external discussion links might be helpful: \n\
         - https://stackoverflow.com/q/1234\n\n\
         See these issue-tracker links for discussion on this topic: \n\
         - https://github.com/example/app/issues/42"
    );
}

#[test]
fn minimal_report_renders_two_sections() {
    let reports = load_reports("reports.json");
    let report = report_by_identifier(&reports, "App.NetworkError.timeout");

    let output = render(&report, &Branding::new("App"));
    assert_eq!(
        output,
        "Network Error: connection timed out after 30s\n\n\
         Identifier: App.NetworkError.timeout"
    );
    assert_eq!(output.matches("\n\n").count(), 1);
}

#[test]
fn partial_report_skips_absent_sections() {
    let reports = load_reports("reports.json");
    let report = report_by_identifier(&reports, "App.ConfigError.missing_key");

    let output = render(&report, &Branding::new("App"));
    assert_eq!(
        output,
        "Configuration Error: configuration key `listen_addr` is not set\n\n\
         Identifier: App.ConfigError.missing_key\n\n\
         Here are some possible causes: \n\
         - config file is stale\n\n\
         These suggestions could address the issue: \n\
         - set `listen_addr` in app.toml\n\
         - pass --listen-addr"
    );
    assert!(!output.contains("documentation talks about this"));
    assert!(!output.contains("issue-tracker"));
}

#[test]
fn default_branding_names_a_neutral_project() {
    let report = Report::builder(
        debuggable::Kind::new("File Error", "App.FileError"),
        "file not found",
        "missing",
    )
    .documentation_link("https://docs.example/files")
    .build()
    .unwrap();

    let output = render(&report, &Branding::default());
    assert!(output.contains("This project's documentation talks about this: "));
}

#[test]
fn debug_report_matches_default_branding_render() {
    let reports = load_reports("reports.json");
    let report = report_by_identifier(&reports, "App.FileError.missing");
    assert_eq!(report.debug_report(), render(&report, &Branding::default()));
}
