//! Document tree consumed and mutated by the page enhancements.
//!
//! A document is a flat, ordered list of blocks. Headings carry inline content so that the
//! decorator can append anchors and link icons in place, exactly as they would appear in the
//! rendered page. Node identity is the block index; an anchor inside a heading is addressed
//! separately so that lookups by fragment can resolve to the anchor and then to its parent.

use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Inline content of a heading.
pub enum Inline {
    /// Plain heading text.
    Text(String),
    /// Fragment target appended by the decorator, rendered as an empty `a.a-link`.
    Anchor {
        /// Fragment identifier (the heading slug).
        id: String,
    },
    /// Deep link shown while the pointer hovers the heading.
    LinkIcon {
        /// Link target, `#` followed by the slug.
        href: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// One structural element of the page.
pub enum Block {
    /// Section heading with its nesting level (1-6).
    Heading {
        /// Heading rank, as in `<h1>`..`<h6>`.
        level: u8,
        /// Inline children, mutated by decoration and hover.
        content: Vec<Inline>,
    },
    /// Body text between headings.
    Text {
        /// Source lines, blank lines separate paragraphs.
        lines: Vec<String>,
    },
    /// Boundary between pages when several sources are shown together.
    Rule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Reference to an addressable node.
pub enum NodeRef {
    /// A block by index.
    Block(usize),
    /// The anchor nested inside the heading block at this index.
    Anchor(usize),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// An ordered page of blocks.
pub struct Document {
    /// Page title, taken from the first top-level heading or the file name.
    pub title: String,
    /// Blocks in document order.
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    /// Create an empty document with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
        }
    }

    /// Append a heading holding plain text and return its node index.
    pub fn push_heading(&mut self, level: u8, text: impl Into<String>) -> usize {
        self.blocks.push(Block::Heading {
            level,
            content: vec![Inline::Text(text.into())],
        });
        self.blocks.len() - 1
    }

    /// Append a body text block and return its node index.
    pub fn push_text<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.blocks.push(Block::Text {
            lines: lines.into_iter().map(Into::into).collect(),
        });
        self.blocks.len() - 1
    }

    /// Append another document after a page rule.
    pub fn append(&mut self, other: Document) {
        if !self.blocks.is_empty() {
            self.blocks.push(Block::Rule);
        }
        self.blocks.extend(other.blocks);
    }

    #[must_use]
    /// Heading rank of a block, if it is a heading.
    pub fn heading_level(&self, node: usize) -> Option<u8> {
        match self.blocks.get(node) {
            Some(Block::Heading { level, .. }) => Some(*level),
            _ => None,
        }
    }

    #[must_use]
    /// Inline content of a heading block.
    pub fn content(&self, node: usize) -> Option<&[Inline]> {
        match self.blocks.get(node) {
            Some(Block::Heading { content, .. }) => Some(content),
            _ => None,
        }
    }

    /// Mutable inline content of a heading block.
    pub fn content_mut(&mut self, node: usize) -> Option<&mut Vec<Inline>> {
        match self.blocks.get_mut(node) {
            Some(Block::Heading { content, .. }) => Some(content),
            _ => None,
        }
    }

    #[must_use]
    /// Concatenated text of a heading, ignoring anchors and icons.
    pub fn heading_text(&self, node: usize) -> Option<String> {
        self.content(node).map(|content| {
            content
                .iter()
                .filter_map(|inline| match inline {
                    Inline::Text(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        })
    }

    #[must_use]
    /// First anchor carrying `id`, in document order.
    ///
    /// Duplicate identifiers are legal; later ones are unreachable by fragment.
    pub fn find_by_id(&self, id: &str) -> Option<NodeRef> {
        self.blocks.iter().enumerate().find_map(|(i, block)| match block {
            Block::Heading { content, .. } => content
                .iter()
                .any(|inline| matches!(inline, Inline::Anchor { id: anchor } if anchor == id))
                .then_some(NodeRef::Anchor(i)),
            _ => None,
        })
    }

    #[must_use]
    /// Parent of a node. Anchors sit inside their heading; blocks are top-level.
    pub fn parent(&self, node: NodeRef) -> Option<NodeRef> {
        match node {
            NodeRef::Anchor(i) if i < self.blocks.len() => Some(NodeRef::Block(i)),
            _ => None,
        }
    }

    #[must_use]
    /// Render the page body as HTML.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for block in &self.blocks {
            match block {
                Block::Heading { level, content } => {
                    let _ = write!(html, "<h{level}>");
                    for inline in content {
                        inline_html(&mut html, inline);
                    }
                    let _ = writeln!(html, "</h{level}>");
                }
                Block::Text { lines } => {
                    for paragraph in lines.split(|line| line.trim().is_empty()) {
                        if paragraph.is_empty() {
                            continue;
                        }
                        let _ = writeln!(html, "<p>{}</p>", escape_html(&paragraph.join("\n")));
                    }
                }
                Block::Rule => html.push_str("<hr>\n"),
            }
        }
        html
    }
}

fn inline_html(html: &mut String, inline: &Inline) {
    match inline {
        Inline::Text(text) => html.push_str(&escape_html(text)),
        Inline::Anchor { id } => {
            let _ = write!(html, r##"<a id="{}" href="#" class="a-link"></a>"##, escape_html(id));
        }
        Inline::LinkIcon { href } => {
            let _ = write!(
                html,
                r#"<a class="link-link" href="{}"><span class="glyphicon glyphicon-link"></span></a>"#,
                escape_html(href)
            );
        }
    }
}

#[must_use]
/// Escape text for use in HTML content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "tests/document.rs"]
mod tests;
