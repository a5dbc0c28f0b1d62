// src/config/options.rs
use std::path::PathBuf;

/// Where the listing markup comes from for one invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocSource {
    /// Page name under the products prefix on the co-op host.
    Page(String),
    /// Saved copy of the listing on disk.
    File(PathBuf),
}

impl DocSource {
    /// Parse the GUI source field. An existing path (or anything that looks
    /// like one) is a file; everything else is a page name.
    pub fn parse(text: &str) -> DocSource {
        let t = text.trim();
        let p = PathBuf::from(t);
        if p.exists() || t.contains('/') || t.contains('\\') || t.ends_with(".html") {
            DocSource::File(p)
        } else {
            DocSource::Page(s!(t))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: DocSource,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self { source: DocSource::Page(s!()) }
    }
}
