//! Scroll spy: keeps the sidebar entry of the section in view active.
//!
//! On refresh the spy asks an [`OffsetStrategy`] for the vertical offset of every sidebar
//! target and keeps the pairs sorted by offset. While scrolling, the entry with the greatest
//! offset at or above the current position (plus a fixed correction for the fixed header) is
//! active and every other entry is not.
//!
//! Two strategies exist. [`AnchorOffsets`] measures the element a fragment points at, which
//! for decorated headings is an empty anchor with no box, so nothing is ever tracked.
//! [`HeadingContainerOffsets`] measures the heading that contains the anchor instead and is
//! the default.

use crate::document::NodeRef;
use crate::sidebar::Sidebar;
use std::cmp::Ordering;

/// Pixels added to the scroll position before matching targets, the fixed header height.
pub const DEFAULT_OFFSET: f64 = 85.0;

/// Geometry of a rendered page, as seen by the scroll spy.
pub trait Layout {
    /// Element whose identifier is `id`, the first one in document order.
    fn find_by_id(&self, id: &str) -> Option<NodeRef>;
    /// Structural parent of `node`.
    fn parent(&self, node: NodeRef) -> Option<NodeRef>;
    /// Whether `node` currently occupies space on the page.
    fn is_visible(&self, node: NodeRef) -> bool;
    /// Top of `node` relative to the document.
    fn offset_top(&self, node: NodeRef) -> f64;
    /// Top of `node` relative to the visible top of the scroll container.
    fn position_top(&self, node: NodeRef) -> f64;
    /// Whether the scroll container is the whole viewport rather than an element.
    fn scrolls_viewport(&self) -> bool;
    /// Current scroll offset of the container.
    fn scroll_top(&self) -> f64;
    /// Total scrollable height of the container content.
    fn scroll_height(&self) -> f64;
    /// Visible height of the container.
    fn viewport_height(&self) -> f64;
}

#[derive(Clone, Debug, PartialEq)]
/// A tracked fragment and the offset at which its section starts.
pub struct ScrollTarget {
    /// Vertical offset in pixels.
    pub offset: f64,
    /// Fragment, `#` followed by the identifier.
    pub href: String,
}

/// Computes scroll targets for the sidebar links of a page.
pub trait OffsetStrategy {
    /// Offsets for every link whose target resolves to a visible element, sorted ascending.
    fn collect(&self, sidebar: &Sidebar, layout: &dyn Layout) -> Vec<ScrollTarget>;
}

fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn container_top(layout: &dyn Layout, node: NodeRef) -> f64 {
    if layout.scrolls_viewport() {
        layout.offset_top(node)
    } else {
        layout.position_top(node) + layout.scroll_top()
    }
}

fn collect_with<F>(sidebar: &Sidebar, layout: &dyn Layout, resolve: F) -> Vec<ScrollTarget>
where
    F: Fn(&dyn Layout, NodeRef) -> Option<NodeRef>,
{
    let mut targets: Vec<ScrollTarget> = sidebar
        .links()
        .filter_map(|entry| {
            let href = entry.spy_target();
            let id = fragment_id(href)?;
            let node = resolve(layout, layout.find_by_id(id)?)?;
            layout.is_visible(node).then(|| ScrollTarget {
                offset: container_top(layout, node),
                href: href.to_string(),
            })
        })
        .collect();

    targets.sort_by(|a, b| a.offset.partial_cmp(&b.offset).unwrap_or(Ordering::Equal));
    targets
}

/// Measures the element the fragment names.
pub struct AnchorOffsets;

impl OffsetStrategy for AnchorOffsets {
    fn collect(&self, sidebar: &Sidebar, layout: &dyn Layout) -> Vec<ScrollTarget> {
        collect_with(sidebar, layout, |_, node| Some(node))
    }
}

/// Measures the heading that contains the anchor the fragment names.
pub struct HeadingContainerOffsets;

impl OffsetStrategy for HeadingContainerOffsets {
    fn collect(&self, sidebar: &Sidebar, layout: &dyn Layout) -> Vec<ScrollTarget> {
        collect_with(sidebar, layout, |layout, anchor| layout.parent(anchor))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Change of the active entry produced by [`ScrollSpy::process`].
pub enum SpyEvent {
    /// The entry tracking this fragment became active.
    Activated(String),
    /// The position is above the first target; nothing is active.
    Cleared,
}

/// Tracks which sidebar target is current for a scroll position.
pub struct ScrollSpy<S: OffsetStrategy = HeadingContainerOffsets> {
    strategy: S,
    offset: f64,
    targets: Vec<ScrollTarget>,
    active: Option<String>,
    scroll_height: f64,
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new(HeadingContainerOffsets, DEFAULT_OFFSET)
    }
}

impl<S: OffsetStrategy> ScrollSpy<S> {
    #[must_use]
    /// Spy using `strategy`, matching positions shifted down by `offset` pixels.
    pub fn new(strategy: S, offset: f64) -> Self {
        Self {
            strategy,
            offset,
            targets: Vec::new(),
            active: None,
            scroll_height: 0.0,
        }
    }

    #[must_use]
    /// Targets from the last refresh, sorted by offset.
    pub fn targets(&self) -> &[ScrollTarget] {
        &self.targets
    }

    #[must_use]
    /// Fragment of the active entry.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute all targets from the current layout.
    pub fn refresh(&mut self, sidebar: &Sidebar, layout: &dyn Layout) {
        self.targets = self.strategy.collect(sidebar, layout);
        self.scroll_height = layout.scroll_height();
        log::debug!("Scroll spy tracking {} targets", self.targets.len());
    }

    #[must_use]
    /// Target that is current at scroll position `scroll_top`.
    ///
    /// This is the last target whose offset is at most `scroll_top` plus the header offset.
    pub fn target_at(&self, scroll_top: f64) -> Option<&ScrollTarget> {
        let position = scroll_top + self.offset;
        self.targets
            .iter()
            .take_while(|target| target.offset <= position)
            .last()
    }

    /// React to a scroll of the container described by `layout`.
    ///
    /// Refreshes first if the content height changed. At the very bottom the last target is
    /// active even if its offset has not been reached. Activation is applied to `sidebar`.
    pub fn process(&mut self, sidebar: &mut Sidebar, layout: &dyn Layout) -> Option<SpyEvent> {
        let scroll_top = layout.scroll_top() + self.offset;
        let scroll_height = layout.scroll_height();
        let max_scroll = self.offset + scroll_height - layout.viewport_height();

        if (self.scroll_height - scroll_height).abs() > f64::EPSILON {
            self.refresh(sidebar, layout);
        }

        if scroll_top >= max_scroll {
            let last = self.targets.last()?.href.clone();
            return self.activate(sidebar, last);
        }

        let first = self.targets.first()?.offset;
        if scroll_top < first {
            if self.active.take().is_some() {
                sidebar.clear_active();
                return Some(SpyEvent::Cleared);
            }
            return None;
        }

        let current = self.target_at(layout.scroll_top())?.href.clone();
        self.activate(sidebar, current)
    }

    fn activate(&mut self, sidebar: &mut Sidebar, href: String) -> Option<SpyEvent> {
        if self.active.as_deref() == Some(href.as_str()) {
            return None;
        }
        sidebar.activate(&href);
        self.active = Some(href.clone());
        Some(SpyEvent::Activated(href))
    }
}

#[cfg(test)]
#[path = "tests/scrollspy.rs"]
mod tests;
