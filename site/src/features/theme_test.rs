use super::*;

#[derive(Default)]
struct MemoryStore {
    value: Option<Theme>,
    writes: usize,
}

impl ThemeStore for MemoryStore {
    fn load(&self) -> Option<Theme> {
        self.value
    }

    fn save(&mut self, theme: Theme) {
        self.value = Some(theme);
        self.writes += 1;
    }
}

#[derive(Default)]
struct RecordingView {
    attribute: Option<&'static str>,
    icon: Option<&'static str>,
}

impl ThemeView for RecordingView {
    fn show(&mut self, theme: Theme) {
        self.attribute = Some(theme.as_str());
        self.icon = Some(theme.icon_class());
    }
}

fn stored(theme: Theme) -> MemoryStore {
    MemoryStore { value: Some(theme), writes: 0 }
}

// --- Theme ---

#[test]
fn theme_round_trips_through_its_string_form() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_parse_rejects_unknown_values() {
    assert_eq!(Theme::parse("sepia"), None);
    assert_eq!(Theme::parse(""), None);
    assert_eq!(Theme::parse("DARK"), None);
}

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn theme_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Theme::Dark).expect("serialize"), "\"dark\"");
}

// --- init ---

#[test]
fn init_without_preference_leaves_page_default() {
    let controller = ThemeController::init(MemoryStore::default(), RecordingView::default(), None, None);
    assert_eq!(controller.current(), Theme::Light);
    assert_eq!(controller.view().attribute, None);
}

#[test]
fn init_applies_stored_dark_preference() {
    let controller = ThemeController::init(stored(Theme::Dark), RecordingView::default(), None, None);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.view().attribute, Some("dark"));
    assert_eq!(controller.view().icon, Some("bx bx-sun"));
}

#[test]
fn init_stored_preference_beats_system_preference() {
    let controller = ThemeController::init(stored(Theme::Light), RecordingView::default(), None, Some(true));
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn init_follows_system_dark_when_nothing_stored() {
    let controller = ThemeController::init(MemoryStore::default(), RecordingView::default(), None, Some(true));
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.view().attribute, Some("dark"));
}

#[test]
fn init_does_not_write_to_store() {
    let controller = ThemeController::init(stored(Theme::Dark), RecordingView::default(), None, None);
    assert_eq!(controller.store().writes, 0);
}

#[test]
fn init_seeds_from_theme_already_on_page() {
    let controller = ThemeController::init(MemoryStore::default(), RecordingView::default(), Some(Theme::Dark), None);
    assert_eq!(controller.current(), Theme::Dark);
    assert_eq!(controller.view().icon, Some("bx bx-sun"));
}

#[test]
fn init_stored_preference_beats_page_theme() {
    let controller = ThemeController::init(stored(Theme::Light), RecordingView::default(), Some(Theme::Dark), None);
    assert_eq!(controller.current(), Theme::Light);
}

#[test]
fn init_page_theme_beats_system_preference() {
    let controller =
        ThemeController::init(MemoryStore::default(), RecordingView::default(), Some(Theme::Light), Some(true));
    assert_eq!(controller.current(), Theme::Light);
}

// --- toggle ---

#[test]
fn first_toggle_without_preference_goes_dark_and_persists() {
    let mut controller = ThemeController::init(MemoryStore::default(), RecordingView::default(), None, None);
    assert_eq!(controller.toggle(), Theme::Dark);
    assert_eq!(controller.view().attribute, Some("dark"));
    assert_eq!(controller.store().value, Some(Theme::Dark));
    assert_eq!(controller.store().value.map(Theme::as_str), controller.view().attribute);
}

#[test]
fn toggle_twice_returns_to_light() {
    let mut controller = ThemeController::init(MemoryStore::default(), RecordingView::default(), None, None);
    controller.toggle();
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(controller.view().icon, Some("bx bx-moon"));
    assert_eq!(controller.store().value, Some(Theme::Light));
    assert_eq!(controller.store().writes, 2);
}

#[test]
fn first_toggle_on_dark_page_goes_light() {
    let mut controller =
        ThemeController::init(MemoryStore::default(), RecordingView::default(), Some(Theme::Dark), None);
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(controller.view().attribute, Some("light"));
    assert_eq!(controller.store().value, Some(Theme::Light));
}

#[test]
fn toggle_from_stored_dark_goes_light() {
    let mut controller = ThemeController::init(stored(Theme::Dark), RecordingView::default(), None, None);
    assert_eq!(controller.toggle(), Theme::Light);
    assert_eq!(controller.view().attribute, Some("light"));
}
