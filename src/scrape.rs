// src/scrape.rs
use std::error::Error;

use crate::{
    config::options::DocSource,
    core::net,
    progress::Progress,
    specs::textbooks::{self, TextbookRecord},
};

/// Resolve the document source and run one extraction pass over it.
/// Nothing is cached; every call re-reads the source.
pub fn run(
    source: &DocSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<TextbookRecord>, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log("Loading listing…");
    }

    let doc = load_document(source)?;
    let records = textbooks::extract(&doc)?;

    if let Some(p) = progress.as_deref_mut() {
        p.item_done(0);
        p.finish();
    }
    logf!("Scrape: {} record(s) from {:?}", records.len(), source);
    Ok(records)
}

pub fn load_document(source: &DocSource) -> Result<String, Box<dyn Error>> {
    match source {
        DocSource::File(path) => Ok(std::fs::read_to_string(path)?),
        DocSource::Page(page) => net::http_get(page),
    }
}
