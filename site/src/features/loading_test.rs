use super::*;

#[test]
fn default_schedule_fades_then_hides() {
    let schedule = FadeSchedule::from_config(&SiteConfig::default());
    assert_eq!(schedule.fade_after_ms, 1000);
    assert_eq!(schedule.hide_after_ms, 500);
    assert_eq!(schedule.total_ms(), 1500);
}

#[test]
fn schedule_follows_config_overrides() {
    let config = SiteConfig { loading_fade_delay_ms: 0, loading_hide_delay_ms: 250, ..SiteConfig::default() };
    let schedule = FadeSchedule::from_config(&config);
    assert_eq!(schedule, FadeSchedule { fade_after_ms: 0, hide_after_ms: 250 });
}

#[test]
fn total_saturates() {
    let schedule = FadeSchedule { fade_after_ms: u32::MAX, hide_after_ms: 10 };
    assert_eq!(schedule.total_ms(), u32::MAX);
}
