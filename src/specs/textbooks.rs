// src/specs/textbooks.rs
//
// The textbook listing page: one cell block per textbook, a heading with the
// title, and labeled list items carrying class and teacher names.

use std::error::Error;

use crate::config::consts::{CELL_CLASS, SUBJECT_MARKER, TEACHER_MARKER};
use crate::core::html::{inner_text, next_class_block_ci, next_tag_block_ci};
use crate::core::normalize::{normalize_class_name, normalize_teacher_name, normalize_title};

/// Versioned description of the markup shape this spec depends on. The cells
/// belong to one specific external page; when the site's markup drifts, the
/// mismatch shows up against this descriptor instead of as a silent wrong
/// extraction.
#[derive(Clone, Copy, Debug)]
pub struct PageShape {
    pub version: u32,
    pub cell_class: &'static str,
    pub title_tag: &'static str,
    pub list_tag: &'static str,
    pub item_tag: &'static str,
    pub label_tag: &'static str,
    pub subject_marker: &'static str,
    pub teacher_marker: &'static str,
}

/// Shape of the listing as of the 2024 site.
pub const SHAPE: PageShape = PageShape {
    version: 1,
    cell_class: CELL_CLASS,
    title_tag: "h3",
    list_tag: "ul",
    item_tag: "li",
    label_tag: "span",
    subject_marker: SUBJECT_MARKER,
    teacher_marker: TEACHER_MARKER,
};

/// One textbook cell, normalized and ready to serialize.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextbookRecord {
    pub title: String,
    pub class_name: String,
    pub teacher_name: String,
}

/// Extract every textbook cell from a listing document, in document order.
/// Zero cells is a valid empty result. A cell without a title heading fails
/// the whole extraction; the page always carries one and partial output would
/// be worse than a visible error.
pub fn extract(doc: &str) -> Result<Vec<TextbookRecord>, Box<dyn Error>> {
    extract_with(doc, &SHAPE)
}

pub fn extract_with(doc: &str, shape: &PageShape) -> Result<Vec<TextbookRecord>, Box<dyn Error>> {
    let mut records = Vec::new();
    let mut pos = 0usize;
    while let Some((cs, ce)) = next_class_block_ci(doc, shape.cell_class, pos) {
        records.push(extract_cell(&doc[cs..ce], shape)?);
        pos = ce;
    }
    Ok(records)
}

fn extract_cell(cell: &str, shape: &PageShape) -> Result<TextbookRecord, Box<dyn Error>> {
    // Title: first heading in the cell. Missing heading is fatal (see extract).
    let (h_s, h_e) = next_tag_block_ci(cell, shape.title_tag, 0)
        .ok_or_else(|| format!("textbook cell without <{}> heading", shape.title_tag))?;
    let title_raw = inner_text(&cell[h_s..h_e]);

    // Class/teacher: scan every list item in every list; a labeled span
    // claims the whole item text. Substring match, last hit wins, no hit
    // leaves the field empty.
    let mut class_raw = s!();
    let mut teacher_raw = s!();

    let mut ul_pos = 0usize;
    while let Some((ul_s, ul_e)) = next_tag_block_ci(cell, shape.list_tag, ul_pos) {
        let ul = &cell[ul_s..ul_e];
        ul_pos = ul_e;

        let mut li_pos = 0usize;
        while let Some((li_s, li_e)) = next_tag_block_ci(ul, shape.item_tag, li_pos) {
            let li = &ul[li_s..li_e];
            li_pos = li_e;
            let li_text = inner_text(li);

            let mut sp_pos = 0usize;
            while let Some((sp_s, sp_e)) = next_tag_block_ci(li, shape.label_tag, sp_pos) {
                let label = inner_text(&li[sp_s..sp_e]);
                sp_pos = sp_e;

                if label.contains(shape.subject_marker) {
                    class_raw = li_text.clone();
                } else if label.contains(shape.teacher_marker) {
                    teacher_raw = li_text.clone();
                }
            }
        }
    }

    Ok(TextbookRecord {
        title: normalize_title(&title_raw),
        class_name: normalize_class_name(&class_raw),
        teacher_name: normalize_teacher_name(&teacher_raw),
    })
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(title: &str, items: &str) -> String {
        format!(
            r#"<div class="listlefttbloc"><h3>{title}</h3><div class="meta"><ul>{items}</ul></div></div>"#
        )
    }

    #[test]
    fn extracts_labeled_fields() {
        let doc = cell(
            "  線形代数入門, ",
            "<li><span>【科目名】</span>線形代数ＩＩ,</li>\
             <li><span>【教員名】</span>　Ｔａｎａｋａ　</li>",
        );
        let recs = extract(&doc).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "線形代数入門");
        assert_eq!(recs[0].class_name, "線形代数II");
        assert_eq!(recs[0].teacher_name, "tanaka");
    }

    #[test]
    fn unlabeled_items_leave_fields_empty() {
        let doc = cell("Book", "<li><span>【価格】</span>1200円</li>");
        let recs = extract(&doc).unwrap();
        assert_eq!(recs[0].class_name, "");
        assert_eq!(recs[0].teacher_name, "");
    }

    #[test]
    fn last_labeled_item_wins() {
        let doc = cell(
            "Book",
            "<li><span>【科目名】</span>first</li>\
             <li><span>【科目名】</span>second</li>",
        );
        let recs = extract(&doc).unwrap();
        assert_eq!(recs[0].class_name, "second");
    }

    #[test]
    fn missing_heading_fails_the_whole_batch() {
        let ok = cell("Book A", "");
        let broken = r#"<div class="listlefttbloc"><p>no heading here</p></div>"#;
        let doc = join!(ok.as_str(), broken, &ok);
        assert!(extract(&doc).is_err());
    }

    #[test]
    fn marker_match_is_substring_containment() {
        // a span without the bracketed form still claims the item, and the
        // label strip removes nothing because 【科目名】 never appears
        let doc = cell(
            "Book",
            "<li><span>必修 科目名 欄</span>Systems 101</li>",
        );
        let recs = extract(&doc).unwrap();
        assert_eq!(recs[0].class_name, "必修 科目名 欄Systems 101");
    }
}
