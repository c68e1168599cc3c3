//! Layout types: alignment, width strategies, borders and column specs.

use serde::{Deserialize, Serialize};

/// Text alignment within a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Pad on the right.
    #[default]
    Left,
    /// Pad on the left.
    Right,
    /// Pad on both sides.
    Center,
}

/// How a column gets its width.
///
/// In configuration files a width is a number (`12`), a bounds object
/// (`{min: 4, max: 20}`), `"fill"` or a share such as `"2fr"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WidthRepr", into = "WidthRepr")]
pub enum Width {
    Fixed(usize),
    /// Sized to content, clamped to the bounds that are set.
    Bounded {
        min: Option<usize>,
        max: Option<usize>,
    },
    /// One equal share of the leftover width.
    Fill,
    /// `n` shares of the leftover width.
    Fraction(usize),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum WidthRepr {
    Columns(usize),
    Range {
        #[serde(default)]
        min: Option<usize>,
        #[serde(default)]
        max: Option<usize>,
    },
    Keyword(String),
}

impl From<Width> for WidthRepr {
    fn from(width: Width) -> Self {
        match width {
            Width::Fixed(n) => WidthRepr::Columns(n),
            Width::Bounded { min, max } => WidthRepr::Range { min, max },
            flex => WidthRepr::Keyword(flex.keyword().unwrap_or_default()),
        }
    }
}

impl TryFrom<WidthRepr> for Width {
    type Error = String;

    fn try_from(repr: WidthRepr) -> Result<Self, String> {
        match repr {
            WidthRepr::Columns(n) => Ok(Width::Fixed(n)),
            WidthRepr::Range { min, max } => Ok(Width::Bounded { min, max }),
            WidthRepr::Keyword(word) => Width::from_keyword(&word)
                .ok_or_else(|| format!("unknown width '{}': use \"fill\" or \"<n>fr\"", word)),
        }
    }
}

impl Default for Width {
    fn default() -> Self {
        Width::Bounded {
            min: None,
            max: None,
        }
    }
}

impl Width {
    fn keyword(&self) -> Option<String> {
        match self {
            Width::Fill => Some("fill".to_string()),
            Width::Fraction(n) => Some(format!("{}fr", n)),
            Width::Fixed(_) | Width::Bounded { .. } => None,
        }
    }

    fn from_keyword(word: &str) -> Option<Width> {
        if word == "fill" {
            return Some(Width::Fill);
        }
        word.strip_suffix("fr")?.parse().ok().map(Width::Fraction)
    }

    /// Fixed-width column.
    pub fn fixed(width: usize) -> Self {
        Width::Fixed(width)
    }

    /// Content-sized column within `min..=max`.
    pub fn bounded(min: usize, max: usize) -> Self {
        Width::Bounded {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Content-sized column with only a minimum.
    pub fn min(min: usize) -> Self {
        Width::Bounded {
            min: Some(min),
            max: None,
        }
    }

    /// Content-sized column with only a maximum.
    pub fn max(max: usize) -> Self {
        Width::Bounded {
            min: None,
            max: Some(max),
        }
    }

    pub fn fill() -> Self {
        Width::Fill
    }

    pub fn fraction(n: usize) -> Self {
        Width::Fraction(n)
    }
}

/// Table frame drawn around and between cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// Two spaces between columns and a dashed rule under the header.
    #[default]
    None,
    Ascii,
    Light,
    Heavy,
    Double,
    /// Light lines, rounded corners.
    Rounded,
}

impl BorderStyle {
    pub(crate) fn chars(&self) -> Option<BorderChars> {
        // Top row, middle row, bottom row (left, joint, right), then the
        // horizontal and vertical strokes.
        let set = match self {
            BorderStyle::None => return None,
            BorderStyle::Ascii => "+++++++++-|",
            BorderStyle::Light => "┌┬┐├┼┤└┴┘─│",
            BorderStyle::Rounded => "╭┬╮├┼┤╰┴╯─│",
            BorderStyle::Heavy => "┏┳┓┣╋┫┗┻┛━┃",
            BorderStyle::Double => "╔╦╗╠╬╣╚╩╝═║",
        };
        BorderChars::parse(set)
    }
}

/// Box-drawing characters of one border style.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BorderChars {
    pub top_left: char,
    pub top_t: char,
    pub top_right: char,
    pub left_t: char,
    pub cross: char,
    pub right_t: char,
    pub bottom_left: char,
    pub bottom_t: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BorderChars {
    fn parse(set: &str) -> Option<Self> {
        let mut it = set.chars();
        let mut next = || it.next();
        Some(BorderChars {
            top_left: next()?,
            top_t: next()?,
            top_right: next()?,
            left_t: next()?,
            cross: next()?,
            right_t: next()?,
            bottom_left: next()?,
            bottom_t: next()?,
            bottom_right: next()?,
            horizontal: next()?,
            vertical: next()?,
        })
    }
}

/// Layout of a single column.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    #[serde(default)]
    pub width: Width,
    #[serde(default)]
    pub align: Align,
}

impl Column {
    pub fn new(width: Width) -> Self {
        Column {
            width,
            align: Align::Left,
        }
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Shorthand for `.align(Align::Right)`.
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_serde_forms() {
        let w: Width = serde_json::from_str("12").unwrap();
        assert_eq!(w, Width::Fixed(12));
        let w: Width = serde_json::from_str(r#""fill""#).unwrap();
        assert_eq!(w, Width::Fill);
        let w: Width = serde_json::from_str(r#""3fr""#).unwrap();
        assert_eq!(w, Width::Fraction(3));
        let w: Width = serde_json::from_str(r#"{"max": 20}"#).unwrap();
        assert_eq!(w, Width::max(20));
    }

    #[test]
    fn width_serde_rejects_garbage() {
        assert!(serde_json::from_str::<Width>(r#""wide""#).is_err());
        assert!(serde_json::from_str::<Width>(r#""xfr""#).is_err());
    }

    #[test]
    fn width_serializes_back() {
        assert_eq!(serde_json::to_string(&Width::Fill).unwrap(), r#""fill""#);
        assert_eq!(serde_json::to_string(&Width::Fraction(2)).unwrap(), r#""2fr""#);
        assert_eq!(serde_json::to_string(&Width::Fixed(8)).unwrap(), "8");
    }

    #[test]
    fn border_style_names() {
        let b: BorderStyle = serde_json::from_str(r#""rounded""#).unwrap();
        assert_eq!(b, BorderStyle::Rounded);
        assert!(BorderStyle::None.chars().is_none());
        assert_eq!(BorderStyle::Heavy.chars().map(|c| c.cross), Some('╋'));
        for style in [
            BorderStyle::Ascii,
            BorderStyle::Light,
            BorderStyle::Rounded,
            BorderStyle::Heavy,
            BorderStyle::Double,
        ] {
            assert!(style.chars().is_some(), "{style:?}");
        }
        assert_eq!(BorderStyle::Rounded.chars().map(|c| c.bottom_right), Some('╯'));
    }
}
