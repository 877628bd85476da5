use super::*;

#[test]
fn breakpoint_is_exclusive() {
    assert!(is_mobile_width(767.9));
    assert!(!is_mobile_width(768.0));
    assert!(!is_mobile_width(1440.0));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn ssr_has_no_width_and_is_desktop() {
    assert_eq!(width(), None);
    assert!(!is_mobile());
}
