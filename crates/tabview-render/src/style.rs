//! Named terminal styles.
//!
//! Cells refer to styles by name (`"muted"`, `"danger"`); a [`StyleSheet`]
//! maps those names to `console` styles. Definitions use console's dotted
//! syntax, e.g. `"red.bold"` or `"dim.italic"`.

use std::collections::BTreeMap;

use console::Style;

/// A set of named styles.
#[derive(Clone, Debug)]
pub struct StyleSheet {
    styles: BTreeMap<String, Style>,
}

impl Default for StyleSheet {
    /// Styles used by the default admin table theme.
    fn default() -> Self {
        StyleSheet::empty()
            .define("header", "bold")
            .define("muted", "dim")
            .define("accent", "cyan")
            .define("success", "green")
            .define("warning", "yellow")
            .define("danger", "red.bold")
            .define("link", "blue.underlined")
    }
}

impl StyleSheet {
    /// A sheet with no styles.
    pub fn empty() -> Self {
        StyleSheet {
            styles: BTreeMap::new(),
        }
    }

    /// Adds or replaces a style from a dotted definition.
    pub fn define(mut self, name: impl Into<String>, dotted: &str) -> Self {
        self.styles
            .insert(name.into(), Style::from_dotted_str(dotted));
        self
    }

    /// Adds or replaces a style.
    pub fn insert(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.styles.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Names of all defined styles, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sheet_has_theme_names() {
        let sheet = StyleSheet::default();
        for name in ["header", "muted", "danger", "success"] {
            assert!(sheet.contains(name), "{name}");
        }
        assert!(sheet.get("nope").is_none());
    }

    #[test]
    fn define_overrides() {
        let sheet = StyleSheet::empty().define("x", "red").define("x", "green");
        assert_eq!(sheet.names().collect::<Vec<_>>(), vec!["x"]);
    }
}
