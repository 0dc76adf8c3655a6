//! End-to-end tests: profile loading, configuration and dashboard composition.

use identity_core::profile::{mock_user_free, mock_user_paid};
use identity_core::{
    load_profile, parse_profile, CoreError, DashboardSession, DashboardView, EngineConfig, Screen,
    SessionAction, Sheet, SheetContent, Tier, ValidationError,
};
use tempfile::TempDir;

#[test]
fn test_profile_json_file_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("profile.json");
    std::fs::write(&path, serde_json::to_string_pretty(&mock_user_paid()).unwrap()).unwrap();

    let loaded = load_profile(&path).unwrap();
    assert_eq!(loaded, mock_user_paid());
}

#[test]
fn test_invalid_profile_is_rejected() {
    let mut json = serde_json::to_value(mock_user_free()).unwrap();
    json["dailyEffort"] = serde_json::json!([1, 2, 3]);
    let err = parse_profile(&json.to_string()).unwrap_err();
    assert!(matches!(
        err,
        CoreError::Validation(ValidationError::EffortLength { len: 3 })
    ));
}

#[test]
fn test_missing_profile_file() {
    let temp = TempDir::new().unwrap();
    let err = load_profile(&temp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, CoreError::Profile(_)));
}

#[test]
fn test_dashboard_is_idempotent() {
    let config = EngineConfig::default();
    for user in [mock_user_paid(), mock_user_free()] {
        assert_eq!(DashboardView::build(&user, &config), DashboardView::build(&user, &config));
    }
}

#[test]
fn test_config_drives_dashboard() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");

    let mut config = EngineConfig::load_from(&path).unwrap();
    assert_eq!(config, EngineConfig::default());
    config.set("highlights.total_slots", "12").unwrap();
    config.set("calendar.reference_date", "2026-01-09").unwrap();
    config.set("membership.entry_tier", "Elite").unwrap();
    config.save_to(&path).unwrap();

    let config = EngineConfig::load_from(&path).unwrap();
    let view = DashboardView::build(&mock_user_paid(), &config);
    assert_eq!(view.highlights.summary, "3 / 12 unlocked");
    assert!(view.week.cells[4].is_today());
    let membership = view.membership.unwrap();
    assert_eq!(membership.unlocked_tiers(), vec![Tier::Honor, Tier::Elite]);
}

#[test]
fn test_session_drives_dashboard() {
    let config = EngineConfig::default();
    let session = DashboardSession::default().apply_all([
        SessionAction::TogglePaid,
        SessionAction::Navigate(Screen::EffortBreakdown),
    ]);
    assert_eq!(session.screen, Screen::EffortBreakdown);
    let view = DashboardView::for_session(&session, &config);
    assert_eq!(view.header.name, "Karim Islam");
    assert!(view.membership.is_none());

    let session = session
        .apply(SessionAction::Back)
        .apply(SessionAction::OpenSheet(Sheet::Effort));
    let sheet = SheetContent::for_session(&session, &session.active_profile()).unwrap();
    assert_eq!(sheet.title, "Effort Score");
}

#[test]
fn test_dashboard_serializes() {
    let view = DashboardView::build(&mock_user_paid(), &EngineConfig::default());
    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["effort"]["zone"], "High");
    assert_eq!(json["header"]["avatar"]["kind"], "initials");
    assert_eq!(json["month"]["subtitle"], "January 2026");
}
