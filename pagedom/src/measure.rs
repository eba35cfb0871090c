use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// How many rows a text control needs to show `text` without a
/// scrollbar, wrapping words at `max_width` columns and breaking words
/// longer than a row at character boundaries. Never less than one row.
pub fn line_count(text: &str, max_width: usize) -> u16 {
    if max_width == 0 {
        return 1;
    }

    let mut rows: u32 = 0;
    for line in text.split('\n') {
        rows += wrapped_rows(line, max_width);
    }
    rows.clamp(1, u32::from(u16::MAX)) as u16
}

fn wrapped_rows(line: &str, max_width: usize) -> u32 {
    let mut rows = 1u32;
    let mut used = 0usize;

    for word in line.split_whitespace() {
        let word_width = display_width(word);

        if word_width > max_width {
            // Word is longer than a row; break it at character boundaries.
            if used > 0 {
                rows += 1;
            }
            let mut char_used = 0usize;
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if ch_width == 0 {
                    continue;
                }
                if char_used + ch_width > max_width {
                    rows += 1;
                    char_used = 0;
                }
                char_used += ch_width;
            }
            used = char_used;
            continue;
        }

        let space = usize::from(used > 0);
        if used + space + word_width > max_width {
            rows += 1;
            used = word_width;
        } else {
            used += space + word_width;
        }
    }

    rows
}
