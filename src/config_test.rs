use super::*;

#[test]
fn defaults_match_stock_markup() {
    let config = SiteConfig::default();
    assert_eq!(config.theme.storage_key, "theme");
    assert_eq!(config.theme.toggle_id, "darkModeToggle");
    assert_eq!(config.fade_in.selector, ".fade-in-section");
    assert_eq!(config.fade_in.visible_class, "is-visible");
    assert!((config.fade_in.threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(config.nav.link_selector, ".nav-links a");
    assert_eq!(config.nav.current_class, "current-page");
    assert_eq!(config.form.form_id, "recommendationForm");
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn partial_json_keeps_other_defaults() {
    let config = SiteConfig::from_json(r#"{"theme":{"storage_key":"site-theme"},"log_level":"debug"}"#)
        .expect("valid config");
    assert_eq!(config.theme.storage_key, "site-theme");
    assert_eq!(config.theme.toggle_id, "darkModeToggle");
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.nav, NavConfig::default());
}

#[test]
fn threshold_is_clamped() {
    let config = SiteConfig::from_json(r#"{"fade_in":{"threshold":4.5}}"#).expect("valid config");
    assert!((config.fade_in.threshold - 1.0).abs() < f64::EPSILON);

    let config = SiteConfig::from_json(r#"{"fade_in":{"threshold":-1}}"#).expect("valid config");
    assert!(config.fade_in.threshold.abs() < f64::EPSILON);
}

#[test]
fn invalid_json_is_an_error() {
    let err = SiteConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, SiteError::Config(_)));
}

#[test]
fn unknown_log_level_is_an_error() {
    assert!(SiteConfig::from_json(r#"{"log_level":"loud"}"#).is_err());
}

#[test]
fn optional_json_falls_back_to_defaults() {
    assert_eq!(SiteConfig::from_optional_json(None), SiteConfig::default());
    assert_eq!(SiteConfig::from_optional_json(Some("   ")), SiteConfig::default());
    assert_eq!(SiteConfig::from_optional_json(Some("[1, 2")), SiteConfig::default());
}

#[test]
fn log_level_maps_to_log_crate() {
    assert_eq!(LogLevel::Warn.to_level(), log::Level::Warn);
    assert_eq!(LogLevel::Trace.to_level(), log::Level::Trace);
}
