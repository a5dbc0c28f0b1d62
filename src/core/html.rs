// src/core/html.rs
// Low-level HTML string scanning helpers.
// These are deliberately naive but tailored to the co-op listing structure.
// They operate case-insensitively on ASCII tag/attribute names.

/// Find the next complete tag block `<tag ...> ... </tag>` from `from`
/// onwards, case-insensitive. Requires a real name boundary after the tag
/// name, so `<li` does not match `<link`. The first matching close tag wins;
/// the tags this crate scans for (`h3`, `ul`, `li`, `span`) do not nest on
/// the listing page.
pub fn next_tag_block_ci(s: &str, tag: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lowercase_fast(s);
    let tag_lc = to_lowercase_fast(tag);

    let start = find_open_tag(&lc, &tag_lc, from)?;
    let open_end = lc[start..].find('>')? + start + 1;
    let close = find_close_tag(&lc, &tag_lc, open_end)?;
    let end = lc[close..].find('>')? + close + 1;
    Some((start, end))
}

/// Find the next element block whose `class` attribute carries `class` as a
/// whitespace-separated token, any tag name, from `from` onwards. The close
/// tag is matched with nesting depth for the same tag name, since the listing
/// cells are `<div>`s with nested `<div>`s inside.
pub fn next_class_block_ci(s: &str, class: &str, from: usize) -> Option<(usize, usize)> {
    let lc = to_lowercase_fast(s);
    let class_lc = to_lowercase_fast(class);

    let mut pos = from;
    loop {
        let start = lc.get(pos..)?.find('<')? + pos;
        let rest = &lc[start + 1..];
        if rest.starts_with('/') || rest.starts_with('!') {
            pos = start + 1;
            continue;
        }
        let open_end = lc[start..].find('>')? + start + 1;
        let open_tag = &lc[start..open_end];
        if has_class_token(open_tag, &class_lc) {
            // A stray `<` in text can merge into a nameless pseudo-tag;
            // skip it rather than end the scan early.
            if let Some(name) = tag_name(open_tag) {
                let end = matching_close(&lc, name, open_end)?;
                return Some((start, end));
            }
        }
        pos = open_end;
    }
}

/// Given a complete tag block like `<li ...>INNER</li>`,
/// return the INNER text without the wrapping tags (still may contain nested tags).
pub fn inner_after_open_tag(block: &str) -> String {
    if let Some(open_end) = block.find('>') {
        if let Some(close_start) = block.rfind('<') {
            if close_start > open_end {
                return block[open_end + 1..close_start].to_string();
            }
        }
    }
    String::new()
}

/// textContent-style view of a tag block: wrapping tags off, nested tags off,
/// entities decoded. Whitespace is left exactly as written; the normalizers
/// decide what whitespace means per field.
pub fn inner_text(block: &str) -> String {
    strip_tags(&normalize_entities(&inner_after_open_tag(block)))
}

/// Remove all HTML tags `<...>` from the string, keeping the text verbatim.
pub fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    for ch in s.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}

/// Minimal HTML entity decoding: handle `&nbsp;` and `&amp;` only.
pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ").replace("&amp;", "&")
}

/// Fast ASCII-only lowercasing for tag/attribute matching.
pub fn to_lowercase_fast(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/* ---------- scanning internals ---------- */

/// Locate `<tag` at or after `from` with a name boundary behind it.
fn find_open_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = join!("<", tag);
    let mut pos = from;
    loop {
        let i = lc.get(pos..)?.find(&pat)? + pos;
        if boundary_at(lc, i + pat.len()) {
            return Some(i);
        }
        pos = i + 1;
    }
}

/// Locate `</tag` at or after `from` with a name boundary behind it.
fn find_close_tag(lc: &str, tag: &str, from: usize) -> Option<usize> {
    let pat = join!("</", tag);
    let mut pos = from;
    loop {
        let i = lc.get(pos..)?.find(&pat)? + pos;
        if boundary_at(lc, i + pat.len()) {
            return Some(i);
        }
        pos = i + 1;
    }
}

/// Tag name out of a complete open tag like `<div class="x">`.
fn tag_name(open_tag: &str) -> Option<&str> {
    let rest = open_tag.strip_prefix('<')?;
    let end = rest
        .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
        .unwrap_or(rest.len());
    if end == 0 { None } else { Some(&rest[..end]) }
}

fn boundary_at(s: &str, idx: usize) -> bool {
    matches!(
        s.as_bytes().get(idx),
        None | Some(b' ' | b'\t' | b'\n' | b'\r' | b'>' | b'/')
    )
}

/// Close tag for an already-opened element, counting nested same-name opens.
/// Returns the index one past the closing `>`.
fn matching_close(lc: &str, name: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    let mut pos = from;
    loop {
        let close = find_close_tag(lc, name, pos)?;
        match find_open_tag(lc, name, pos) {
            Some(open) if open < close => {
                depth += 1;
                pos = lc[open..].find('>')? + open + 1;
            }
            _ => {
                depth -= 1;
                pos = lc[close..].find('>')? + close + 1;
                if depth == 0 {
                    return Some(pos);
                }
            }
        }
    }
}

/// `class="a b c"` token check. Tolerates single quotes, bare values and
/// spaces around `=`.
fn has_class_token(open_tag: &str, class: &str) -> bool {
    let Some(i) = open_tag.find("class") else {
        return false;
    };
    let after = open_tag[i + "class".len()..].trim_start();
    let Some(after) = after.strip_prefix('=') else {
        return false;
    };
    let after = after.trim_start();
    let value = match after.as_bytes().first() {
        Some(&q @ (b'"' | b'\'')) => {
            let rest = &after[1..];
            match rest.find(q as char) {
                Some(e) => &rest[..e],
                None => rest,
            }
        }
        _ => after
            .split(|c: char| c.is_whitespace() || c == '>')
            .next()
            .unwrap_or(""),
    };
    value.split_whitespace().any(|t| t == class)
}

// ── Tests ──
