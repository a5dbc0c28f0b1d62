// tests/pipeline_e2e.rs
//
// Whole-pipeline tests against inline listing markup: locate cells, extract
// and normalize fields, serialize, and deliver through a fake sink.

use std::io::Cursor;

use coop_clip::cli;
use coop_clip::clip::{self, ClipSink, MemSink};
use coop_clip::config::options::DocSource;
use coop_clip::progress::NullProgress;
use coop_clip::scrape;
use coop_clip::specs::textbooks;

fn cell(title: &str, class_item: &str, teacher_item: &str) -> String {
    format!(
        concat!(
            r#"<div class="listlefttbloc">"#,
            r#"<h3>{}</h3>"#,
            r#"<div class="detail"><ul>"#,
            r#"<li><span>【科目名】</span>{}</li>"#,
            r#"<li><span>【教員名】</span>{}</li>"#,
            r#"<li><span>【価格】</span>2,400円</li>"#,
            r#"</ul></div></div>"#
        ),
        title, class_item, teacher_item
    )
}

fn listing(cells: &[String]) -> String {
    format!(
        "<html><head><link rel=\"stylesheet\" href=\"x.css\"></head><body>{}</body></html>",
        cells.join("\n")
    )
}

#[test]
fn single_cell_end_to_end() {
    let doc = listing(&[cell(
        "  Intro to Systems, ",
        "Systems 101,",
        "　Ｔａｎａｋａ　",
    )]);
    let records = textbooks::extract(&doc).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Intro to Systems");
    assert_eq!(records[0].class_name, "Systems 101");
    assert_eq!(records[0].teacher_name, "tanaka");
    assert_eq!(
        clip::to_clip_string(&records),
        "Intro to Systems, Systems 101, tanaka\n"
    );
}

#[test]
fn record_order_follows_document_order() {
    let doc = listing(&[
        cell("Book A", "Class A", "aoki"),
        cell("Book B", "Class B", "baba"),
        cell("Book C", "Class C", "chiba"),
    ]);
    let records = textbooks::extract(&doc).unwrap();
    assert_eq!(records.len(), 3);
    let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["Book A", "Book B", "Book C"]);
    assert_eq!(
        clip::to_clip_string(&records),
        "Book A, Class A, aoki\nBook B, Class B, baba\nBook C, Class C, chiba\n"
    );
}

#[test]
fn empty_listing_yields_empty_clip_text() {
    let doc = listing(&[]);
    let records = textbooks::extract(&doc).unwrap();
    assert!(records.is_empty());
    assert_eq!(clip::to_clip_string(&records), "");
}

#[test]
fn one_broken_cell_fails_the_whole_batch() {
    let mut cells = vec![cell("Book A", "Class A", "aoki")];
    cells.push(String::from(
        r#"<div class="listlefttbloc"><p>heading went missing</p></div>"#,
    ));
    cells.push(cell("Book C", "Class C", "chiba"));
    assert!(textbooks::extract(&listing(&cells)).is_err());
}

#[test]
fn scrape_runs_from_a_saved_file() {
    let doc = listing(&[cell("Saved Book", "Saved Class", "saito")]);
    let mut path = std::env::temp_dir();
    path.push("coop_clip_e2e_listing.html");
    std::fs::write(&path, &doc).unwrap();

    let mut prog = NullProgress;
    let records = scrape::run(&DocSource::File(path.clone()), Some(&mut prog)).unwrap();
    let _ = std::fs::remove_file(&path);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].teacher_name, "saito");
}

#[test]
fn agree_delivers_exactly_the_serialized_text() {
    let doc = listing(&[cell("Book A", "Class A", "aoki")]);
    let records = textbooks::extract(&doc).unwrap();

    let mut sink = MemSink::default();
    if cli::confirmed(Cursor::new("y\n"), false) {
        sink.write(&clip::to_clip_string(&records)).unwrap();
    }
    assert_eq!(sink.delivered, vec![String::from("Book A, Class A, aoki\n")]);
}

#[test]
fn cancel_performs_no_delivery() {
    let doc = listing(&[cell("Book A", "Class A", "aoki")]);

    let mut sink = MemSink::default();
    if cli::confirmed(Cursor::new("n\n"), false) {
        // unreachable on cancel: no extraction, no write
        let records = textbooks::extract(&doc).unwrap();
        sink.write(&clip::to_clip_string(&records)).unwrap();
    }
    assert!(sink.delivered.is_empty());
}
