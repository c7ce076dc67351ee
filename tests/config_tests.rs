use aki_tui::config::{Config, HANGMAN_LIVES, PELLET_SCORE, TITLE_MAX_CHARS};
use std::collections::HashMap;
use std::io::Write;
mod common;

#[ctor::ctor]
fn _init() { common::init(); }

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn config_defaults() {
    let c = Config::new();
    assert_eq!(c.poll_interval_ms, 100);
    assert_eq!(c.tick_interval_ms, 180);
    assert_eq!(c.ai_delay_ms, 450);
    assert_eq!(c.chase_probability, 0.75);
    assert_eq!(c.reply_delay_min_ms, 1000);
    assert_eq!(c.reply_delay_max_ms, 2000);
    assert_eq!(c.fallback_delay_ms, 1500);
    assert_eq!(c.log_dir, "logs");
}

#[test]
fn constants_values() {
    assert_eq!(TITLE_MAX_CHARS, 40);
    assert_eq!(PELLET_SCORE, 10);
    assert_eq!(HANGMAN_LIVES, 6);
}

#[test]
fn overrides_from_lookup() {
    let c = Config::from_lookup(lookup(&[
        ("AKI_TICK_MS", "250"),
        ("AKI_AI_DELAY_MS", " 900 "),
        ("AKI_CHASE_PROBABILITY", "0.5"),
        ("AKI_LOG_DIR", "/tmp/aki"),
    ]))
    .expect("valid overrides");
    assert_eq!(c.tick_interval_ms, 250);
    assert_eq!(c.ai_delay_ms, 900);
    assert_eq!(c.chase_probability, 0.5);
    assert_eq!(c.log_dir, "/tmp/aki");
    // 指定のないキーは既定値のまま
    assert_eq!(c.poll_interval_ms, 100);
}

#[test]
fn blank_log_dir_is_ignored() {
    let c = Config::from_lookup(lookup(&[("AKI_LOG_DIR", "   ")])).expect("config");
    assert_eq!(c.log_dir, "logs");
}

#[test]
fn invalid_values_are_errors() {
    assert!(Config::from_lookup(lookup(&[("AKI_TICK_MS", "fast")])).is_err());
    assert!(Config::from_lookup(lookup(&[("AKI_POLL_MS", "0")])).is_err());
    assert!(Config::from_lookup(lookup(&[("AKI_CHASE_PROBABILITY", "1.5")])).is_err());
    assert!(Config::from_lookup(lookup(&[("AKI_CHASE_PROBABILITY", "x")])).is_err());

    let err = Config::from_lookup(lookup(&[("AKI_AI_DELAY_MS", "-3")])).unwrap_err();
    assert!(format!("{err:#}").contains("AKI_AI_DELAY_MS"));
}

#[test]
fn dotenv_file_values_flow_into_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(".env");
    let mut file = std::fs::File::create(&path).expect("create .env");
    writeln!(file, "AKI_TICK_MS=120").unwrap();
    writeln!(file, "AKI_CHASE_PROBABILITY=0.25").unwrap();

    let vars: HashMap<String, String> = dotenvy::from_path_iter(&path)
        .expect("read .env")
        .collect::<Result<_, _>>()
        .expect("parse .env");
    let c = Config::from_lookup(|key| vars.get(key).cloned()).expect("config");
    assert_eq!(c.tick_interval_ms, 120);
    assert_eq!(c.chase_probability, 0.25);
    assert_eq!(c.tick_interval(), std::time::Duration::from_millis(120));
}
