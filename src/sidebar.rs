//! Two-level sidebar table of contents.
//!
//! The sidebar mirrors the heading hierarchy of a page: one entry per primary heading in
//! document order, each with the secondary headings of its section nested beneath it. Entries
//! link to heading anchors and are labelled with the original heading text. The sidebar is
//! built once per page; the scroll spy later marks entries active and inactive.

use crate::document::escape_html;
use crate::heading::{Heading, HeadingLevel};
use serde::Serialize;
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// A clickable navigation item.
pub struct SidebarEntry {
    /// Original heading text.
    pub label: String,
    /// Fragment link, `#` followed by the heading slug.
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Explicit scroll target overriding `href` for the scroll spy.
    pub target: Option<String>,
    /// Block index of the heading this entry points at.
    #[serde(skip)]
    pub node: usize,
    /// Set while the scroll spy considers this entry (or one of its children) current.
    #[serde(skip)]
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Nested entries; `None` when the section has no secondary headings.
    pub children: Option<Vec<SidebarEntry>>,
}

impl SidebarEntry {
    fn from_heading(heading: &Heading) -> Self {
        Self {
            label: heading.text.clone(),
            href: heading.href(),
            target: None,
            node: heading.node,
            active: false,
            children: None,
        }
    }

    #[must_use]
    /// Fragment the scroll spy tracks for this entry: the explicit target, else the href.
    pub fn spy_target(&self) -> &str {
        self.target.as_deref().unwrap_or(&self.href)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
/// Navigation tree for one page.
pub struct Sidebar {
    /// Top-level entries in document order.
    pub entries: Vec<SidebarEntry>,
}

/// Builds a [`Sidebar`] from decorated headings.
pub struct SidebarBuilder;

impl SidebarBuilder {
    #[must_use]
    /// Build the sidebar for `headings`, which must be in document order.
    ///
    /// Secondary headings without an enclosing primary heading are left out.
    pub fn build(headings: &[Heading]) -> Sidebar {
        let mut entries = Vec::new();

        for (index, heading) in headings.iter().enumerate() {
            if heading.level != HeadingLevel::Primary {
                continue;
            }

            let mut entry = SidebarEntry::from_heading(heading);
            let children: Vec<SidebarEntry> = headings[index + 1..]
                .iter()
                .take_while(|h| h.level == HeadingLevel::Secondary)
                .filter(|h| h.parent_index == Some(index))
                .map(SidebarEntry::from_heading)
                .collect();

            if !children.is_empty() {
                entry.children = Some(children);
            }
            entries.push(entry);
        }

        log::debug!("Built sidebar with {} top-level entries", entries.len());
        Sidebar { entries }
    }
}

impl Sidebar {
    /// All entries, parents before their children, in document order.
    pub fn links(&self) -> impl DoubleEndedIterator<Item = &SidebarEntry> {
        self.entries.iter().flat_map(|entry| {
            std::iter::once(entry).chain(entry.children.iter().flatten())
        })
    }

    #[must_use]
    /// Number of entries at both levels.
    pub fn len(&self) -> usize {
        self.links().count()
    }

    #[must_use]
    /// Whether the sidebar has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deactivate every entry.
    pub fn clear_active(&mut self) {
        for entry in &mut self.entries {
            entry.active = false;
            for child in entry.children.iter_mut().flatten() {
                child.active = false;
            }
        }
    }

    /// Make the entry tracking `target` active, together with its parent entry.
    ///
    /// All other entries are deactivated. Returns whether an entry matched.
    pub fn activate(&mut self, target: &str) -> bool {
        self.clear_active();

        for entry in &mut self.entries {
            if entry.spy_target() == target {
                entry.active = true;
                return true;
            }
            for child in entry.children.iter_mut().flatten() {
                if child.spy_target() == target {
                    child.active = true;
                    entry.active = true;
                    return true;
                }
            }
        }
        false
    }

    #[must_use]
    /// The innermost active entry.
    pub fn active(&self) -> Option<&SidebarEntry> {
        self.links().rev().find(|entry| entry.active)
    }

    #[must_use]
    /// Render as nested `ul.nav` markup.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        render_list(&mut html, &self.entries, "nav", 0);
        html
    }
}

fn render_list(html: &mut String, entries: &[SidebarEntry], class: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(html, r#"{indent}<ul class="{class}">"#);

    for entry in entries {
        let li_class = if entry.active { r#" class="active""# } else { "" };
        let target = entry
            .target
            .as_ref()
            .map(|t| format!(r#" data-target="{}""#, escape_html(t)))
            .unwrap_or_default();
        let _ = write!(
            html,
            r#"{indent}  <li{li_class}><a href="{}"{target}>{}</a>"#,
            escape_html(&entry.href),
            escape_html(&entry.label)
        );

        if let Some(children) = &entry.children {
            html.push('\n');
            render_list(html, children, "nav", depth + 2);
            let _ = writeln!(html, "{indent}  </li>");
        } else {
            html.push_str("</li>\n");
        }
    }

    let _ = writeln!(html, "{indent}</ul>");
}

#[cfg(test)]
#[path = "tests/sidebar.rs"]
mod tests;
