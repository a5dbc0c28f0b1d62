// src/core/normalize.rs
// Field normalization for extracted textbook records.
//
// The comma handling is asymmetric on purpose: titles lose every comma,
// class and teacher names only the first one. Downstream spreadsheets paste
// the exact output, so the asymmetry stays.

use crate::config::consts::{SUBJECT_LABEL, TEACHER_LABEL};

/// Code-point distance between full-width Ａ-Ｚａ-ｚ０-９ and ASCII.
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// Drop every literal comma, then trim surrounding whitespace. Comma removal
/// runs first: a comma ahead of the end may expose new trailing whitespace.
pub fn normalize_title(raw: &str) -> String {
    raw.replace(',', "").trim().to_string()
}

/// Strip the first 【科目名】 label and the first comma, then map full-width
/// alphanumerics to half-width. Kanji/kana and interior whitespace stay.
pub fn normalize_class_name(raw: &str) -> String {
    let s = remove_first(raw, SUBJECT_LABEL);
    let s = remove_first(&s, ",");
    to_halfwidth(&s)
}

/// Strip the first 【教員名】 label and the first comma, drop all whitespace,
/// drop full-width spaces (kept as its own pass), map full-width
/// alphanumerics to half-width, lowercase everything.
pub fn normalize_teacher_name(raw: &str) -> String {
    let s = remove_first(raw, TEACHER_LABEL);
    let s = remove_first(&s, ",");
    let s = strip_whitespace(&s);
    let s = s.replace('\u{3000}', "");
    let s = to_halfwidth(&s);
    s.to_lowercase()
}

/// Map full-width Latin letters and digits onto their half-width forms by the
/// fixed code-point offset. Every other character passes through.
pub fn to_halfwidth(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'Ａ'..='Ｚ' | 'ａ'..='ｚ' | '０'..='９' => {
                char::from_u32(c as u32 - FULLWIDTH_OFFSET).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Remove the first occurrence of `pat`; the rest stays untouched.
fn remove_first(s: &str, pat: &str) -> String {
    match s.find(pat) {
        Some(i) => join!(&s[..i], &s[i + pat.len()..]),
        None => s.to_string(),
    }
}

/// Drop every whitespace character, ASCII and Unicode alike.
fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    /// Inverse of `to_halfwidth` for the round-trip check.
    fn to_fullwidth(s: &str) -> String {
        s.chars()
            .map(|c| match c {
                'A'..='Z' | 'a'..='z' | '0'..='9' => {
                    char::from_u32(c as u32 + FULLWIDTH_OFFSET).unwrap_or(c)
                }
                _ => c,
            })
            .collect()
    }

    #[test]
    fn title_loses_all_commas_and_outer_whitespace() {
        assert_eq!(normalize_title("  Intro to Systems, "), "Intro to Systems");
        assert_eq!(normalize_title("a,b,c"), "abc");
        assert_eq!(normalize_title(""), "");
        // comma removal may expose whitespace that the trim must still catch
        assert_eq!(normalize_title(" ,x, y , "), "x y");
        let out = normalize_title(" ,x, y , ");
        assert!(!out.contains(','));
        assert_eq!(out, out.trim());
    }

    #[test]
    fn class_name_strips_label_and_first_comma_only() {
        assert_eq!(normalize_class_name("【科目名】Systems 101,"), "Systems 101");
        // second comma and second label survive
        assert_eq!(normalize_class_name("【科目名】a,b,【科目名】c"), "ab,【科目名】c");
        assert_eq!(normalize_class_name(""), "");
    }

    #[test]
    fn class_name_maps_fullwidth_alnum() {
        assert_eq!(normalize_class_name("数学ＩＩＢ演習２"), "数学IIB演習2");
        // interior whitespace, including full-width space, is kept
        assert_eq!(normalize_class_name("線形代数　第２部"), "線形代数\u{3000}第2部");
    }

    #[test]
    fn teacher_name_is_lowercase_and_whitespace_free() {
        assert_eq!(normalize_teacher_name("【教員名】　Ｔａｎａｋａ　"), "tanaka");
        assert_eq!(normalize_teacher_name("【教員名】 Smith John "), "smithjohn");
        let out = normalize_teacher_name("【教員名】Ｙ．\tＳＡＴＯ\u{3000}");
        assert_eq!(out, "y．sato");
        assert!(out.chars().all(|c| !c.is_whitespace()));
    }

    #[test]
    fn teacher_name_removes_first_comma_only() {
        assert_eq!(normalize_teacher_name("【教員名】a,b,c"), "ab,c");
    }

    #[test]
    fn halfwidth_mapping_round_trips() {
        let ascii = "AZaz09 Mixed 42";
        assert_eq!(to_halfwidth(&to_fullwidth(ascii)), ascii);
        // non-Latin characters pass through both ways
        assert_eq!(to_halfwidth("田中かなカナ"), "田中かなカナ");
        assert_eq!(to_fullwidth("田中かなカナ"), "田中かなカナ");
    }
}
