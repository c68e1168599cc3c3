//! Text measurement, padding and truncation.
//!
//! All widths are terminal display columns: CJK characters count as 2 and
//! ANSI escape sequences count as 0.

use unicode_width::UnicodeWidthChar;

use crate::types::Align;

/// Display width of `s`, ignoring ANSI escape codes.
///
/// ```rust
/// use tabview_render::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("设备"), 4);
/// assert_eq!(display_width("\x1b[1mbold\x1b[0m"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    console::measure_text_width(s)
}

/// Truncates plain text to `max_width`, ending with `…` when cut.
///
/// ```rust
/// use tabview_render::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let limit = max_width - 1;
    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push('…');
    result
}

/// Pads `s` on the right to `width`.
pub fn pad_right(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(gap))
}

/// Pads `s` on the left to `width`.
pub fn pad_left(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(gap), s)
}

/// Centers `s` in `width`; an odd gap puts the extra space on the right.
pub fn pad_center(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(s));
    let left = gap / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(gap - left))
}

/// Fits `s` into exactly `width` columns: truncate, then pad per `align`.
pub fn fit(s: &str, width: usize, align: Align) -> String {
    let text = truncate_to_width(s, width);
    match align {
        Align::Left => pad_right(&text, width),
        Align::Right => pad_left(&text, width),
        Align::Center => pad_center(&text, width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_wide_characters() {
        // Each CJK character is 2 columns; the ellipsis takes one.
        assert_eq!(truncate_to_width("暂无数据", 5), "暂无…");
        assert_eq!(truncate_to_width("暂无数据", 8), "暂无数据");
    }

    #[test]
    fn truncate_to_zero() {
        assert_eq!(truncate_to_width("abc", 0), "");
        assert_eq!(truncate_to_width("abc", 1), "…");
    }

    #[test]
    fn padding() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }

    #[test]
    fn fit_exact_width() {
        assert_eq!(fit("pump", 6, Align::Right), "  pump");
        assert_eq!(fit("compressor", 6, Align::Left), "compr…");
        assert_eq!(display_width(&fit("设备", 5, Align::Center)), 5);
    }
}
