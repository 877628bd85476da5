use super::*;
use crate::content::PORTFOLIO_ROWS;

fn project(id: &str) -> &'static Project {
    PORTFOLIO_ROWS
        .iter()
        .flat_map(|r| r.projects.iter())
        .find(|p| p.id == id)
        .unwrap()
}

// =============================================================
// Scrolling
// =============================================================

#[test]
fn arrow_steps_are_symmetric() {
    assert_eq!(ScrollDirection::Left.delta(), -340.0);
    assert_eq!(ScrollDirection::Right.delta(), 340.0);
}

#[test]
fn vertical_wheel_becomes_horizontal() {
    assert_eq!(wheel_to_horizontal(2.0, 120.0), Some(120.0));
    assert_eq!(wheel_to_horizontal(0.0, -80.0), Some(-80.0));
}

#[test]
fn horizontal_or_diagonal_wheel_passes_through() {
    assert_eq!(wheel_to_horizontal(60.0, 10.0), None);
    assert_eq!(wheel_to_horizontal(40.0, 40.0), None);
    assert_eq!(wheel_to_horizontal(0.0, 0.0), None);
}

// =============================================================
// Media
// =============================================================

#[test]
fn mp4_is_video() {
    assert_eq!(media_kind("/portfolio/Ocean/ocean.mp4"), MediaKind::Video);
    assert_eq!(media_kind("/portfolio/Desert/desertnight.jpg"), MediaKind::Image);
}

#[test]
fn gallery_wins_over_thumbnail() {
    let CardMedia::Strip(items) = card_media(project("d5")) else {
        panic!("expected strip");
    };
    assert_eq!(items.len(), 3);
}

#[test]
fn video_thumbnail_is_single_video() {
    assert_eq!(
        card_media(project("d6")),
        CardMedia::Single { url: "/portfolio/Ocean/ocean.mp4", kind: MediaKind::Video }
    );
}

#[test]
fn missing_media_is_placeholder() {
    let bare = Project { thumbnail: None, gallery: &[], ..*project("d1") };
    assert_eq!(card_media(&bare), CardMedia::Placeholder { color: "#82E83A" });
}

// =============================================================
// Hover
// =============================================================

#[test]
fn hover_tracks_one_card_and_clears_on_leave() {
    let mut hover = RowHover::default();
    hover.enter("d1");
    hover.enter("d3");
    assert!(hover.is_hovered("d3"));
    assert!(!hover.is_hovered("d1"));
    hover.leave_row();
    assert_eq!(hover.hovered, None);
}
