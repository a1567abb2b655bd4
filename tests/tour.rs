use std::fs;

use chrono::Weekday;
use tempfile::TempDir;
use tour_basics::{catalog, select, Host, Runner, Section, TourConfig, TourError};

fn run_with(config: &TourConfig) -> String {
    let host = Host::from_config(&config.host).unwrap();
    let demos = catalog();
    let picked = select(&demos, &config.sections, &config.skip, None).unwrap();

    let mut buf = Vec::new();
    Runner::new(&host, false).run(&mut buf, &picked).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_full_tour_from_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tour.toml");
    fs::write(
        &path,
        r#"
        sections = ["flow_control", "more_types"]

        [host]
        platform = "linux"
        weekday = "Thursday"

        [output]
        color = false
        "#,
    )
    .unwrap();

    let config = TourConfig::load(&path).unwrap();
    let text = run_with(&config);

    assert!(text.starts_with("=== Flow control ===\n"));
    assert!(text.contains("\n=== More types ===\n"));
    assert!(text.contains("Rust runs on Linux.\n"));
    assert!(text.contains("When's Saturday?\nIn two days.\n"));
    assert!(text.contains("counting\ndone\n9\n8\n7\n6\n5\n4\n3\n2\n1\n0\n"));
    assert!(text.contains("[John XXX George Ringo]"));
    assert!(text.contains("The value: 0 Present? false"));
    assert_eq!(text.matches("PASS").count(), 4);
    assert!(text.trim_end().ends_with("89"));
}

#[test]
fn test_skip_leaves_demo_out() {
    let config = TourConfig {
        sections: vec![Section::MoreTypes],
        skip: vec!["word_count".into(), "pointers".into()],
        ..TourConfig::default()
    };
    let text = run_with(&config);

    assert!(!text.contains("Flow control"));
    assert!(!text.contains("--- word_count ---"));
    assert!(!text.contains("PASS"));
    assert!(text.starts_with("=== More types ===\n--- struct_printing ---\n"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    let err = TourConfig::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, TourError::ReadConfig { .. }));
}

#[test]
fn test_bad_weekday_in_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tour.toml");
    fs::write(&path, "[host]\nweekday = \"Caturday\"\n").unwrap();

    let config = TourConfig::load(&path).unwrap();
    let err = Host::from_config(&config.host).unwrap_err();
    assert!(matches!(err, TourError::UnknownWeekday(_)));
}

#[test]
fn test_single_demo_ignores_sections() {
    let host = Host {
        platform: "windows".into(),
        today: Weekday::Sat,
    };
    let demos = catalog();
    let picked = select(&demos, &[Section::MoreTypes], &[], Some("platform_switch")).unwrap();

    let mut buf = Vec::new();
    Runner::new(&host, false).run(&mut buf, &picked).unwrap();
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "=== Flow control ===\n--- platform_switch ---\nRust runs on windows.\n"
    );
}
