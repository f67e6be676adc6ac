//! Integration tests for selector file loading and view reports.

use std::fs;
use std::path::PathBuf;

use insta::assert_json_snapshot;
use rowkit_cli::commands::build_view_report;
use rowkit_cli::render::{summary_line, view_table};
use rowkit_cli::selector_file::{SelectorFile, load_selector_file};
use rowkit_model::FilterState;

const RIDERS: &str = r#"{
    "options": {"scope_titles": ["North", "South"]},
    "sections": [
        {
            "title": "Riders",
            "options": [
                {"code": "R1", "label": "Alice", "scopes": ["North"]},
                {"code": "R2", "label": "Bob", "scopes": ["South"]}
            ]
        },
        {
            "title": "Depots",
            "options": [{"code": "D1", "label": "Tampines"}]
        }
    ]
}"#;

fn riders() -> SelectorFile {
    SelectorFile::from_json(RIDERS).unwrap()
}

fn unique_temp_file(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "rowkit-{}-{}-{}.json",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    path
}

#[test]
fn scope_view_snapshot() {
    let report = build_view_report(riders(), None, Some("south"), false).unwrap();

    assert_json_snapshot!(report, @r#"
    {
      "filter": {
        "kind": "scope",
        "value": "South"
      },
      "visible": 2,
      "total": 3,
      "sections": [
        {
          "index": 0,
          "title": "Riders",
          "options": [
            {
              "code": "R2",
              "label": "Bob",
              "scopes": [
                "South"
              ]
            }
          ]
        },
        {
          "index": 1,
          "title": "Depots",
          "options": [
            {
              "code": "D1",
              "label": "Tampines"
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn query_keeps_empty_sections_unless_hidden() {
    let report = build_view_report(riders(), Some("ali"), None, false).unwrap();
    assert_eq!(report.filter, FilterState::TextQuery("ali".to_string()));
    assert_eq!(report.sections.len(), 2);
    assert!(report.sections[1].options.is_empty());
    assert_eq!(summary_line(&report), "1 of 3 options (query \"ali\")");

    let hidden = build_view_report(riders(), Some("ali"), None, true).unwrap();
    assert_eq!(hidden.sections.len(), 1);
    assert_eq!(hidden.sections[0].index, 0);
}

#[test]
fn filtering_scope_shadows_query() {
    let report = build_view_report(riders(), Some("Alice"), Some("South"), false).unwrap();
    assert_eq!(report.filter, FilterState::Scope("South".to_string()));
    assert_eq!(report.visible, 2);
}

#[test]
fn first_scope_without_all_scope_shadows_query() {
    let json = RIDERS.replace(
        r#""scope_titles": ["North", "South"]"#,
        r#""scope_titles": ["North", "South"], "show_all_scope": false"#,
    );
    let file = SelectorFile::from_json(&json).unwrap();
    assert!(!file.options.show_all_scope);

    let report = build_view_report(file, Some("bob"), None, false).unwrap();
    assert_eq!(report.filter, FilterState::Scope("North".to_string()));
    assert_eq!(report.ignored_query.as_deref(), Some("bob"));
    let codes: Vec<&str> = report
        .sections
        .iter()
        .flat_map(|section| section.options.iter().map(|o| o.code.as_str()))
        .collect();
    assert_eq!(codes, vec!["R1", "D1"]);
    assert_eq!(
        summary_line(&report),
        "2 of 3 options (scope North), query \"bob\" ignored"
    );
}

#[test]
fn filtering_scope_records_ignored_query() {
    let report = build_view_report(riders(), Some("Alice"), Some("South"), false).unwrap();
    assert_eq!(report.ignored_query.as_deref(), Some("Alice"));

    let unfiltered = build_view_report(riders(), Some("Alice"), Some("ALL"), false).unwrap();
    assert_eq!(unfiltered.ignored_query, None);
}

#[test]
fn all_scope_lets_query_through() {
    let report = build_view_report(riders(), Some("tamp"), Some("ALL"), true).unwrap();
    assert_eq!(report.filter, FilterState::TextQuery("tamp".to_string()));
    assert_eq!(report.visible, 1);
    assert_eq!(report.sections[0].title.as_deref(), Some("Depots"));
}

#[test]
fn unknown_scope_lists_available_labels() {
    let error = build_view_report(riders(), None, Some("East"), false).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("unknown scope 'East'"));
    assert!(message.contains("ALL, North, South"));
}

#[test]
fn empty_sections_render_placeholder_row() {
    let report = build_view_report(riders(), Some("bob"), None, false).unwrap();
    let rendered = view_table(&report).to_string();
    assert!(rendered.contains("Bob"));
    assert!(rendered.contains("no matches"));
    assert!(!rendered.contains("Alice"));
}

#[test]
fn duplicate_scope_titles_are_rejected() {
    let json = r#"{"options": {"scope_titles": ["North", "North"]}}"#;
    let error = SelectorFile::from_json(json).unwrap_err();
    assert!(error.to_string().contains("invalid scope configuration"));
}

#[test]
fn missing_sections_default_to_empty() {
    let file = SelectorFile::from_json(r#"{"options": {}}"#).unwrap();
    assert_eq!(file.sections.section_count(), 0);
    assert!(file.options.show_all_scope);
}

#[test]
fn load_selector_file_reads_from_disk() {
    let path = unique_temp_file("riders");
    fs::write(&path, RIDERS).unwrap();

    let file = load_selector_file(&path).unwrap();
    assert_eq!(file.sections.option_count(), 3);

    fs::remove_file(&path).unwrap();
    let error = load_selector_file(&path).unwrap_err();
    assert!(error.to_string().starts_with("read selector file"));
}
