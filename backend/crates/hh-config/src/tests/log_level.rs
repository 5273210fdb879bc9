use crate::LogLevel;

use std::str::FromStr;

use log::LevelFilter;

#[test]
fn given_known_level_names_when_parsed_then_map_to_filters() {
    assert_eq!(LogLevel::from_str("off").unwrap().0, LevelFilter::Off);
    assert_eq!(LogLevel::from_str("ERROR").unwrap().0, LevelFilter::Error);
    assert_eq!(LogLevel::from_str("warning").unwrap().0, LevelFilter::Warn);
    assert_eq!(LogLevel::from_str(" debug ").unwrap().0, LevelFilter::Debug);
    assert_eq!(LogLevel::from_str("trace").unwrap().0, LevelFilter::Trace);
}

#[test]
fn given_unknown_level_name_when_parsed_then_defaults_to_info() {
    assert_eq!(LogLevel::from_str("verbose").unwrap().0, LevelFilter::Info);
}

#[test]
fn given_level_when_displayed_then_lowercase_name() {
    assert_eq!(LogLevel(LevelFilter::Warn).to_string(), "warn");
    assert_eq!(LogLevel::default().to_string(), "info");
}
