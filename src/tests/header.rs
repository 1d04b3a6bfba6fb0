use super::{
    Fade, HeaderChrome, HeaderController, HeaderMode, HeaderState, DEFAULT_THRESHOLD, FADE_IN,
    FADE_OUT,
};
use std::time::Duration;

#[test]
fn test_initial_chrome_is_expanded_look() {
    let chrome = HeaderChrome::new(true, true);
    assert!(!chrome.with_shadow);
    assert!(chrome.top_rounded);
    assert_eq!(chrome.logo, Some(Fade::hidden()));
}

#[test]
fn test_scrolling_past_threshold_compacts() {
    let mut chrome = HeaderChrome::new(true, true);
    let mut header = HeaderController::new(true, DEFAULT_THRESHOLD);
    assert_eq!(header.install(&mut chrome, 0.0), Some(HeaderState::Expanded));

    assert_eq!(header.on_scroll(&mut chrome, 11.0), Some(HeaderState::Compact));
    assert!(chrome.with_shadow);
    assert!(!chrome.top_rounded);
    assert_eq!(
        chrome.logo,
        Some(Fade {
            visible: true,
            duration: FADE_IN
        })
    );
    assert_eq!(chrome.description, chrome.logo);
}

#[test]
fn test_threshold_is_exclusive() {
    let mut chrome = HeaderChrome::new(true, true);
    let mut header = HeaderController::new(true, DEFAULT_THRESHOLD);
    assert_eq!(header.on_scroll(&mut chrome, 10.0), Some(HeaderState::Expanded));
    assert!(!chrome.with_shadow);
}

#[test]
fn test_returning_to_top_expands_with_fast_fade() {
    let mut chrome = HeaderChrome::new(true, true);
    let mut header = HeaderController::new(true, DEFAULT_THRESHOLD);
    header.on_scroll(&mut chrome, 500.0);
    assert_eq!(header.on_resize(&mut chrome, 3.0), Some(HeaderState::Expanded));

    assert!(!chrome.with_shadow);
    assert!(chrome.top_rounded);
    assert_eq!(
        chrome.logo,
        Some(Fade {
            visible: false,
            duration: FADE_OUT
        })
    );
}

#[test]
fn test_repeated_events_are_idempotent() {
    let mut chrome = HeaderChrome::new(true, false);
    let mut header = HeaderController::new(true, DEFAULT_THRESHOLD);
    header.on_scroll(&mut chrome, 50.0);
    let after_first = chrome.clone();
    header.on_scroll(&mut chrome, 60.0);
    header.on_resize(&mut chrome, 70.0);
    assert_eq!(chrome, after_first);
    assert_eq!(chrome.description, None, "absent elements stay absent");
}

#[test]
fn test_static_header_is_compact_once_and_ignores_scroll() {
    let mut chrome = HeaderChrome::new(true, true);
    let mut header = HeaderController::new(false, DEFAULT_THRESHOLD);
    assert_eq!(header.mode(), HeaderMode::Static);
    assert_eq!(header.install(&mut chrome, 0.0), Some(HeaderState::Compact));

    let expected = HeaderChrome {
        with_shadow: true,
        top_rounded: false,
        logo: Some(Fade {
            visible: true,
            duration: Duration::ZERO,
        }),
        description: Some(Fade {
            visible: true,
            duration: Duration::ZERO,
        }),
    };
    assert_eq!(chrome, expected);

    header.on_scroll(&mut chrome, 0.0);
    header.on_resize(&mut chrome, 0.0);
    assert_eq!(chrome, expected);
    assert_eq!(header.state(), Some(HeaderState::Compact));
}

#[test]
fn test_state_is_none_before_first_event() {
    let header = HeaderController::new(true, DEFAULT_THRESHOLD);
    assert_eq!(header.state(), None);
}
