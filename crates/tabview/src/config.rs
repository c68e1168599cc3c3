//! Table texts, indicators and output options.
//!
//! Every field has a default, so a configuration file only lists what it
//! changes:
//!
//! ```yaml
//! empty_text: Nothing here yet
//! range_template: "{{ start }}-{{ end }} / {{ total }}"
//! border: rounded
//! styles:
//!   danger: magenta.bold
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use minijinja::{context, Environment};
use serde::{Deserialize, Serialize};
use tabview_render::BorderStyle;

use crate::error::ConfigError;

/// Default label for the visible record range.
pub const DEFAULT_RANGE_TEMPLATE: &str = "{{ start }} to {{ end }} of {{ total }}";

/// Texts and display options shared by every table of an application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableConfig {
    /// Body text when there are no records.
    pub empty_text: String,
    /// Body text while loading.
    pub loading_text: String,
    /// Cell text for missing values.
    pub placeholder: String,
    pub search_placeholder: String,
    /// MiniJinja template with `start`, `end` and `total`.
    pub range_template: String,
    pub sort_asc_indicator: String,
    pub sort_desc_indicator: String,
    /// Page sizes offered by the pagination bar.
    pub page_size_options: Vec<usize>,
    /// Border of text output.
    pub border: BorderStyle,
    /// Extra or replacement styles, as console dotted definitions.
    pub styles: BTreeMap<String, String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            empty_text: "No data".to_string(),
            loading_text: "Loading...".to_string(),
            placeholder: "-".to_string(),
            search_placeholder: "Search...".to_string(),
            range_template: DEFAULT_RANGE_TEMPLATE.to_string(),
            sort_asc_indicator: "▲".to_string(),
            sort_desc_indicator: "▼".to_string(),
            page_size_options: vec![10, 20, 50, 100],
            border: BorderStyle::Light,
            styles: BTreeMap::new(),
        }
    }
}

impl TableConfig {
    /// Simplified Chinese texts.
    pub fn zh_cn() -> Self {
        TableConfig {
            empty_text: "暂无数据".to_string(),
            loading_text: "加载中...".to_string(),
            search_placeholder: "请输入关键字搜索".to_string(),
            range_template: "第 {{ start }}-{{ end }} 条/共 {{ total }} 条".to_string(),
            ..TableConfig::default()
        }
    }

    /// Parses and validates a YAML configuration.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TableConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file, choosing the format by extension
    /// (`.yaml`, `.yml` or `.json`).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, has another
    /// extension, fails to parse, or fails validation.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ConfigError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => TableConfig::from_yaml,
            Some("json") => TableConfig::from_json,
            _ => return Err(ConfigError::UnsupportedExtension(extension)),
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = parse(&content)?;
        log::debug!("loaded table config from {}", path.display());
        Ok(config)
    }

    /// Checks the range template compiles and page sizes are positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let env = Environment::new();
        env.template_from_str(&self.range_template)?;

        if self.page_size_options.contains(&0) {
            return Err(ConfigError::Invalid {
                field: "page_size_options",
                message: "page sizes must be at least 1".to_string(),
            });
        }
        for (name, dotted) in &self.styles {
            if dotted.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field: "styles",
                    message: format!("style '{}' has an empty definition", name),
                });
            }
        }
        Ok(())
    }

    /// Renders the range label.
    ///
    /// Falls back to the default English format if the template fails at
    /// render time.
    ///
    /// ```rust
    /// use tabview::TableConfig;
    ///
    /// assert_eq!(TableConfig::default().range_label(1, 2, 5), "1 to 2 of 5");
    /// assert_eq!(TableConfig::zh_cn().range_label(1, 2, 5), "第 1-2 条/共 5 条");
    /// ```
    pub fn range_label(&self, start: usize, end: usize, total: usize) -> String {
        let env = Environment::new();
        match env.render_str(&self.range_template, context! { start, end, total }) {
            Ok(label) => label,
            Err(err) => {
                log::warn!("range template failed, using default label: {}", err);
                format!("{} to {} of {}", start, end, total)
            }
        }
    }
}
