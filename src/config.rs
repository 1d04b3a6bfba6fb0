//! Configuration to acknowledge site preferences as well as set defaults.
//!
//! Specifically, we try to find a tocspy.toml, and if present we load settings from there.
//! This provides heading levels, header chrome, scroll spy geometry and file extension
//! preferences.

use crate::heading::HeadingLevels;
use facet::Facet;
use std::fs;

/// File read from the working directory when present.
pub const CONFIG_FILE: &str = "tocspy.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Site preferences loaded from tocspy.toml or falling back to defaults.
pub struct Config {
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = 2)]
    /// Heading rank of top-level sidebar entries.
    pub primary_level: u8,
    #[facet(default = 3)]
    /// Heading rank of nested sidebar entries.
    pub secondary_level: u8,
    #[facet(default = true)]
    /// Compact the header on scroll; when false it is compact from the start.
    pub animate_header: bool,
    #[facet(default = 10.0)]
    /// Scroll distance in pixels beyond which the header compacts.
    pub header_threshold: f64,
    #[facet(default = 85.0)]
    /// Fixed header height added to the scroll position by the scroll spy.
    pub spy_offset: f64,
    #[facet(default = 20.0)]
    /// Pixels per rendered row in the viewer.
    pub line_height: f64,
    #[facet(default = "tocspy".to_string())]
    /// Header logo text; empty for no logo.
    pub logo: String,
    #[facet(default = String::new())]
    /// Header description text; empty for no description.
    pub description: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_extensions: vec!["md".to_string()],
            primary_level: 2,
            secondary_level: 3,
            animate_header: true,
            header_threshold: crate::header::DEFAULT_THRESHOLD,
            spy_offset: crate::scrollspy::DEFAULT_OFFSET,
            line_height: 20.0,
            logo: "tocspy".to_string(),
            description: String::new(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from tocspy.toml if present.
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => Self::from_toml(&contents).unwrap_or_else(|e| {
                log::warn!("Ignoring {CONFIG_FILE}: {e}");
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Parse configuration text, filling unspecified settings with defaults.
    ///
    /// # Errors
    ///
    /// Returns the parser message when the text is not valid configuration.
    pub fn from_toml(contents: &str) -> Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|e| e.to_string())
    }

    #[must_use]
    /// Primary and secondary heading ranks.
    pub fn heading_levels(&self) -> HeadingLevels {
        HeadingLevels {
            primary: self.primary_level,
            secondary: self.secondary_level,
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
