use super::*;

#[test]
fn cycle_photo_wraps() {
    let mut state = HomeState::default();
    state.cycle_photo(2);
    assert_eq!(state.photo_index, 1);
    state.cycle_photo(2);
    assert_eq!(state.photo_index, 0);
}

#[test]
fn cycle_photo_with_no_photos_stays_at_zero() {
    let mut state = HomeState::default();
    state.cycle_photo(0);
    assert_eq!(state.photo_index, 0);
}

#[test]
fn toggle_name_switches_display() {
    let mut state = HomeState::default();
    assert_eq!(state.display_name(), "Anıl!");
    state.toggle_name();
    assert_eq!(state.display_name(), "Moksha");
    state.toggle_name();
    assert_eq!(state.display_name(), "Anıl!");
}

#[test]
fn wave_only_on_first_switch_to_alias() {
    let mut state = HomeState::default();
    assert!(state.toggle_name());
    assert!(state.waving);
    state.end_wave();
    assert!(!state.waving);

    assert!(!state.toggle_name());
    assert!(!state.toggle_name());
    assert!(!state.waving);
    assert!(state.has_waved);
}

#[test]
fn switching_back_during_wave_keeps_wave() {
    let mut state = HomeState::default();
    state.toggle_name();
    assert!(!state.toggle_name());
    assert!(state.waving);
}
