//! tocspy: heading anchors, sidebar tables of contents and scrollspy for documentation pages.
//!
//! A page is loaded into a [`document::Document`], its headings are decorated with slug
//! anchors, a two-level sidebar is built from them, and a [`scrollspy::ScrollSpy`] keeps the
//! sidebar entry of the section in view active while a [`header::HeaderController`] toggles the
//! page header between its expanded and compact chrome.
#![allow(clippy::multiple_crate_versions)]

pub mod app_state;
pub mod config;
pub mod decorate;
pub mod document;
pub mod error;
pub mod export;
pub mod formats;
pub mod header;
pub mod heading;
pub mod input;
pub mod layout;
pub mod scrollspy;
pub mod sidebar;
pub mod slug;
pub mod ui;

pub use error::{Error, Result};
