//! Fixed header chrome that compacts once the page is scrolled.
//!
//! The header has two looks. At the top of the page it is expanded: no shadow, the active
//! navigation item has rounded top corners, and the logo and description are hidden. Once the
//! page is scrolled past a small threshold it turns compact: shadowed, square active item, logo
//! and description faded in.
//!
//! ```text
//! Expanded --(offset > threshold)--> Compact
//!    ^                                  |
//!    |_______(offset <= threshold)______|
//! ```
//!
//! Pages that opt out of the animation get the compact look once, without fades, and never
//! react to scrolling.

use std::time::Duration;

/// Scroll distance, in pixels, beyond which the header compacts.
pub const DEFAULT_THRESHOLD: f64 = 10.0;
/// Fade-in time for logo and description when compacting.
pub const FADE_IN: Duration = Duration::from_millis(300);
/// Fade-out time for logo and description when expanding.
pub const FADE_OUT: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Whether the header follows scrolling.
pub enum HeaderMode {
    /// Toggle between expanded and compact on every scroll and resize.
    Animated,
    /// Compact styling applied once; scroll and resize are ignored.
    Static,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Current look of the header.
pub enum HeaderState {
    /// Top of the page.
    Expanded,
    /// Scrolled.
    Compact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Visibility of a fading header element and the transition that produced it.
pub struct Fade {
    /// Whether the element is (or is becoming) visible.
    pub visible: bool,
    /// Duration of the last transition; zero when shown or hidden without animation.
    pub duration: Duration,
}

impl Fade {
    #[must_use]
    /// A hidden element that has not been animated yet.
    pub fn hidden() -> Self {
        Self {
            visible: false,
            duration: Duration::ZERO,
        }
    }

    /// Fade towards `visible`. A fade to the current visibility is a no-op.
    fn fade_to(&mut self, visible: bool, duration: Duration) -> bool {
        if self.visible == visible {
            return false;
        }
        self.visible = visible;
        self.duration = duration;
        true
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Observable state of the header elements.
///
/// `logo` and `description` are `None` when the page has no such element.
pub struct HeaderChrome {
    /// `with-shadow` class on the fixed header.
    pub with_shadow: bool,
    /// `top-rounded` class on the active navigation item.
    pub top_rounded: bool,
    /// Header logo.
    pub logo: Option<Fade>,
    /// Header description.
    pub description: Option<Fade>,
}

impl HeaderChrome {
    #[must_use]
    /// Chrome as rendered at page load, before any script runs.
    pub fn new(has_logo: bool, has_description: bool) -> Self {
        Self {
            with_shadow: false,
            top_rounded: true,
            logo: has_logo.then(Fade::hidden),
            description: has_description.then(Fade::hidden),
        }
    }

    fn fade(&mut self, visible: bool, duration: Duration) -> bool {
        let mut changed = false;
        for fade in [&mut self.logo, &mut self.description].into_iter().flatten() {
            changed |= fade.fade_to(visible, duration);
        }
        changed
    }
}

/// Applies the expanded/compact look to a [`HeaderChrome`].
pub struct HeaderController {
    mode: HeaderMode,
    threshold: f64,
    state: Option<HeaderState>,
}

impl HeaderController {
    #[must_use]
    /// Controller for a page whose "animate header" flag is `animate`.
    pub fn new(animate: bool, threshold: f64) -> Self {
        Self {
            mode: if animate {
                HeaderMode::Animated
            } else {
                HeaderMode::Static
            },
            threshold,
            state: None,
        }
    }

    #[must_use]
    /// Configured mode.
    pub fn mode(&self) -> HeaderMode {
        self.mode
    }

    #[must_use]
    /// Last applied state, `None` before the first evaluation.
    pub fn state(&self) -> Option<HeaderState> {
        self.state
    }

    /// Initial application at page load.
    ///
    /// Static headers receive the compact look with the logo and description shown
    /// immediately. Animated headers are evaluated against the current offset.
    pub fn install(&mut self, chrome: &mut HeaderChrome, offset: f64) -> Option<HeaderState> {
        match self.mode {
            HeaderMode::Static => {
                chrome.with_shadow = true;
                chrome.top_rounded = false;
                chrome.fade(true, Duration::ZERO);
                self.state = Some(HeaderState::Compact);
                self.state
            }
            HeaderMode::Animated => self.evaluate(chrome, offset),
        }
    }

    /// Scroll handler.
    pub fn on_scroll(&mut self, chrome: &mut HeaderChrome, offset: f64) -> Option<HeaderState> {
        self.evaluate(chrome, offset)
    }

    /// Resize handler.
    pub fn on_resize(&mut self, chrome: &mut HeaderChrome, offset: f64) -> Option<HeaderState> {
        self.evaluate(chrome, offset)
    }

    fn evaluate(&mut self, chrome: &mut HeaderChrome, offset: f64) -> Option<HeaderState> {
        if self.mode == HeaderMode::Static {
            return self.state;
        }

        let next = if offset > self.threshold {
            HeaderState::Compact
        } else {
            HeaderState::Expanded
        };

        match next {
            HeaderState::Compact => {
                chrome.with_shadow = true;
                chrome.top_rounded = false;
                chrome.fade(true, FADE_IN);
            }
            HeaderState::Expanded => {
                chrome.with_shadow = false;
                chrome.top_rounded = true;
                chrome.fade(false, FADE_OUT);
            }
        }

        if self.state != Some(next) {
            log::debug!("Header {:?} -> {next:?} at offset {offset}", self.state);
            self.state = Some(next);
        }
        self.state
    }
}

#[cfg(test)]
#[path = "tests/header.rs"]
mod tests;
