//! Offline output: decorated HTML pages and sidebar JSON.
//!
//! Exported pages carry the same decoration the viewer applies: heading anchors, the sidebar
//! markup and the header chrome in its initial state. Header classes follow the configured
//! mode, so a page exported without header animation is already compact.

use crate::document::{escape_html, Document};
use crate::error::Result;
use crate::header::{Fade, HeaderChrome};
use crate::sidebar::Sidebar;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

/// Header texts shown in an exported page.
pub struct PageHeader<'a> {
    /// Logo text, empty for none.
    pub logo: &'a str,
    /// Description text, empty for none.
    pub description: &'a str,
    /// Chrome state to render.
    pub chrome: &'a HeaderChrome,
}

fn display(fade: Option<&Fade>) -> &'static str {
    match fade {
        Some(fade) if fade.visible => "",
        _ => r#" style="display: none""#,
    }
}

#[must_use]
/// Render a complete page with header, sidebar and decorated body.
pub fn page_html(doc: &Document, sidebar: &Sidebar, header: &PageHeader<'_>) -> String {
    let chrome = header.chrome;
    let mut html = String::new();

    let _ = writeln!(html, "<!DOCTYPE html>\n<html>\n<head>");
    let _ = writeln!(html, "<meta charset=\"utf-8\">");
    let _ = writeln!(html, "<title>{}</title>", escape_html(&doc.title));
    let _ = writeln!(html, "</head>\n<body>");

    let shadow = if chrome.with_shadow { " with-shadow" } else { "" };
    let rounded = if chrome.top_rounded { " top-rounded" } else { "" };
    let _ = writeln!(html, r#"<nav class="navbar navbar-fixed-top{shadow}">"#);
    if !header.logo.is_empty() {
        let _ = writeln!(
            html,
            r#"<span class="header-logo"{}>{}</span>"#,
            display(chrome.logo.as_ref()),
            escape_html(header.logo)
        );
    }
    if !header.description.is_empty() {
        let _ = writeln!(
            html,
            r#"<span class="header-description"{}>{}</span>"#,
            display(chrome.description.as_ref()),
            escape_html(header.description)
        );
    }
    let _ = writeln!(
        html,
        r##"<ul class="nav navbar-nav"><li class="active{rounded}"><a href="#">{}</a></li></ul>"##,
        escape_html(&doc.title)
    );
    let _ = writeln!(html, "</nav>");

    let _ = writeln!(html, r#"<div class="sidebar" id="sidebar">"#);
    html.push_str(&sidebar.to_html());
    let _ = writeln!(html, "</div>");

    let _ = writeln!(html, r#"<div class="content">"#);
    html.push_str(&doc.to_html());
    let _ = writeln!(html, "</div>\n</body>\n</html>");

    html
}

/// Write a page to `dir/<name>.html`, creating `dir` if needed.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be written.
pub fn write_html(
    dir: &Path,
    name: &str,
    doc: &Document,
    sidebar: &Sidebar,
    header: &PageHeader<'_>,
) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{name}.html"));
    fs::write(&path, page_html(doc, sidebar, header))?;
    log::info!("Wrote {}", path.display());
    Ok(path)
}

/// Serialise a sidebar as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialisation fails.
pub fn sidebar_json(sidebar: &Sidebar) -> Result<String> {
    Ok(serde_json::to_string_pretty(sidebar)?)
}

#[cfg(test)]
#[path = "tests/export.rs"]
mod tests;
