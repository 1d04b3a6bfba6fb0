//! The core state machine bridging the decorated page and the interactive viewer.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the reader
//! scrolls, resizes and points at things. Every terminal event is translated into the page
//! event it stands for (scroll, resize, pointer enter/leave, link click) and handled to
//! completion before the next one is read, so the header, the scroll spy and the heading hover
//! state always agree with the current scroll position.

use crate::config::Config;
use crate::decorate::Decorator;
use crate::document::Document;
use crate::header::{HeaderChrome, HeaderController};
use crate::layout::PageLayout;
use crate::scrollspy::{HeadingContainerOffsets, ScrollSpy, SpyEvent};
use crate::sidebar::{Sidebar, SidebarBuilder, SidebarEntry};
use ratatui::layout::Rect;
use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Pane that receives navigation keys.
pub enum Focus {
    /// Sidebar entries: up/down select, Enter jumps, Space folds.
    Sidebar,
    /// Page body: up/down scroll.
    Page,
}

/// Bridges the decorated page and the viewer, maintaining session state.
pub struct AppState {
    /// Page being viewed, decorated in place.
    pub document: Document,
    /// Heading anchors and hover state.
    pub decorator: Decorator,
    /// Sidebar built from the decorated headings.
    pub sidebar: Sidebar,
    /// Header look controller.
    pub header: HeaderController,
    /// Current header look.
    pub chrome: HeaderChrome,
    /// Active sidebar entry tracking.
    pub spy: ScrollSpy,
    /// Primary headings whose sections are collapsed.
    pub folded: HashSet<usize>,
    /// Page scroll offset in pixels.
    pub scroll_top: f64,
    /// Rows visible in the page pane.
    pub viewport_rows: usize,
    /// Pixels per row.
    pub line_height: f64,
    /// Pane receiving navigation keys.
    pub focus: Focus,
    /// Selected entry, as an index into [`Sidebar::links`].
    pub selected: usize,
    /// Heading block under the pointer.
    pub hovered: Option<usize>,
    /// Screen area of the page pane from the last draw, inside its border.
    pub page_area: Option<Rect>,
    /// Last screen cell the pointer was seen at.
    pub pointer: Option<(u16, u16)>,
    /// Header logo text.
    pub logo: String,
    /// Header description text.
    pub description: String,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
}

fn page_layout<'a>(
    doc: &'a Document,
    folded: &HashSet<usize>,
    line_height: f64,
    scroll_top: f64,
    viewport_rows: usize,
) -> PageLayout<'a> {
    let mut layout = PageLayout::compute(doc, folded, line_height);
    layout.scroll_top = scroll_top;
    layout.viewport_rows = viewport_rows;
    layout
}

impl AppState {
    #[must_use]
    /// Decorate `document`, build its sidebar and install the header and scroll spy.
    pub fn new(mut document: Document, cfg: &Config, viewport_rows: usize) -> Self {
        let decorator = Decorator::decorate(&mut document, cfg.heading_levels());
        let sidebar = SidebarBuilder::build(decorator.headings());

        let mut chrome = HeaderChrome::new(!cfg.logo.is_empty(), !cfg.description.is_empty());
        let mut header = HeaderController::new(cfg.animate_header, cfg.header_threshold);
        header.install(&mut chrome, 0.0);

        let mut app = Self {
            document,
            decorator,
            sidebar,
            header,
            chrome,
            spy: ScrollSpy::new(HeadingContainerOffsets, cfg.spy_offset),
            folded: HashSet::new(),
            scroll_top: 0.0,
            viewport_rows,
            line_height: cfg.line_height,
            focus: Focus::Sidebar,
            selected: 0,
            hovered: None,
            page_area: None,
            pointer: None,
            logo: cfg.logo.clone(),
            description: cfg.description.clone(),
            message: None,
        };
        app.refresh_spy();
        app
    }

    #[must_use]
    /// Geometry of the page at the current scroll position.
    pub fn layout(&self) -> PageLayout<'_> {
        page_layout(
            &self.document,
            &self.folded,
            self.line_height,
            self.scroll_top,
            self.viewport_rows,
        )
    }

    #[must_use]
    /// First content row shown in the page pane.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn scroll_row(&self) -> usize {
        if self.line_height <= 0.0 {
            return 0;
        }
        (self.scroll_top / self.line_height).round().max(0.0) as usize
    }

    fn max_scroll(&self) -> f64 {
        let layout = self.layout();
        let hidden_rows = layout.total_rows().saturating_sub(self.viewport_rows);
        layout.rows_to_px(hidden_rows)
    }

    /// Scroll the page to `offset` pixels, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_top = offset.clamp(0.0, self.max_scroll());
        self.on_scroll();
        self.update_hover();
    }

    /// Scroll by whole rows; negative values scroll up.
    #[allow(clippy::cast_precision_loss)]
    pub fn scroll_by_rows(&mut self, rows: i64) {
        self.scroll_to(self.scroll_top + rows as f64 * self.line_height);
    }

    /// Scroll one page down.
    pub fn page_down(&mut self) {
        let rows = i64::try_from(self.viewport_rows.saturating_sub(1).max(1)).unwrap_or(1);
        self.scroll_by_rows(rows);
    }

    /// Scroll one page up.
    pub fn page_up(&mut self) {
        let rows = i64::try_from(self.viewport_rows.saturating_sub(1).max(1)).unwrap_or(1);
        self.scroll_by_rows(-rows);
    }

    fn on_scroll(&mut self) -> Option<SpyEvent> {
        let layout = page_layout(
            &self.document,
            &self.folded,
            self.line_height,
            self.scroll_top,
            self.viewport_rows,
        );
        self.header.on_scroll(&mut self.chrome, self.scroll_top);
        let event = self.spy.process(&mut self.sidebar, &layout);
        if let Some(SpyEvent::Activated(href)) = &event {
            log::debug!("Activated {href}");
        }
        event
    }

    fn refresh_spy(&mut self) {
        let layout = page_layout(
            &self.document,
            &self.folded,
            self.line_height,
            self.scroll_top,
            self.viewport_rows,
        );
        self.spy.refresh(&self.sidebar, &layout);
        self.spy.process(&mut self.sidebar, &layout);
    }

    /// The page pane now shows `viewport_rows` rows.
    pub fn resize(&mut self, viewport_rows: usize) {
        self.viewport_rows = viewport_rows;
        self.scroll_top = self.scroll_top.clamp(0.0, self.max_scroll());
        self.header.on_resize(&mut self.chrome, self.scroll_top);
        self.refresh_spy();
        self.update_hover();
    }

    /// Pointer moved to screen cell (`column`, `row`).
    ///
    /// Entering a heading shows its link icon; leaving it hides the icon again.
    pub fn pointer_at(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
        self.update_hover();
    }

    fn heading_under_pointer(&self) -> Option<usize> {
        let (column, row) = self.pointer?;
        let area = self.page_area?;
        let inside = column >= area.x
            && column < area.x + area.width
            && row >= area.y
            && row < area.y + area.height;
        if !inside {
            return None;
        }
        let content_row = self.scroll_row() + usize::from(row - area.y);
        self.layout()
            .block_at_row(content_row)
            .filter(|node| self.decorator.heading_at(*node).is_some())
    }

    /// Re-run hit-testing for the last pointer cell, as the page may have moved under it.
    fn update_hover(&mut self) {
        let target = self.heading_under_pointer();
        if target == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.decorator.pointer_leave(&mut self.document, previous);
        }
        if let Some(node) = target {
            self.decorator.pointer_enter(&mut self.document, node);
            self.hovered = Some(node);
        }
    }

    #[must_use]
    /// Currently selected sidebar entry.
    pub fn selected_entry(&self) -> Option<&SidebarEntry> {
        self.sidebar.links().nth(self.selected)
    }

    /// Select the next sidebar entry.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.sidebar.len() {
            self.selected += 1;
        }
    }

    /// Select the previous sidebar entry.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Follow the selected sidebar link: scroll its heading to the top of the page pane.
    pub fn follow_selected(&mut self) {
        let Some(node) = self.selected_entry().map(|entry| entry.node) else {
            return;
        };
        match self.layout().scroll_offset_of(node) {
            Some(offset) => {
                self.scroll_to(offset);
                self.message = None;
            }
            None => {
                self.message = Some("Section is folded".to_string());
            }
        }
    }

    /// Fold or unfold the section of the selected top-level entry.
    pub fn toggle_fold_selected(&mut self) {
        let Some(node) = self.selected_entry().map(|entry| entry.node) else {
            return;
        };
        if !self.sidebar.entries.iter().any(|entry| entry.node == node) {
            self.message = Some("Only top-level sections fold".to_string());
            return;
        }

        if !self.folded.remove(&node) {
            self.folded.insert(node);
        }
        self.scroll_top = self.scroll_top.clamp(0.0, self.max_scroll());
        self.refresh_spy();
        self.update_hover();
    }

    /// Switch keyboard focus between sidebar and page.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Page,
            Focus::Page => Focus::Sidebar,
        };
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
