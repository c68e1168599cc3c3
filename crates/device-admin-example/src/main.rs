//! tabview-demo - a device list rendered through `TabularView`.
//!
//! The binary plays the role of the host application: it owns the device
//! collection, filters it when the table reports a search, slices it for the
//! requested page and prints the rendered table.
//!
//! ```text
//! tabview-demo --sort load --sort load --page 2 --page-size 8
//! tabview-demo --search pump --format json
//! tabview-demo --empty --locale zh-cn
//! ```

mod devices;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use tabview::{
    filter_records, paginate, Pagination, Search, TableConfig, TableProps, TabularView,
    TextRenderer,
};

use crate::devices::{device_actions, device_columns, mock_devices, Device};

const DEVICE_COUNT: usize = 37;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Locale {
    En,
    ZhCn,
}

#[derive(Debug, Parser)]
#[command(name = "tabview-demo", version, about = "Render a mock device list as a table")]
struct Cli {
    /// Click the header of KEY; repeat to toggle the direction.
    #[arg(long = "sort", value_name = "KEY")]
    sort: Vec<String>,

    /// Page to show (1-based, clamped).
    #[arg(long, default_value_t = 1)]
    page: usize,

    #[arg(long, default_value_t = 10)]
    page_size: usize,

    /// Type TEXT into the search box.
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Render the loading state.
    #[arg(long)]
    loading: bool,

    /// Render with no devices.
    #[arg(long)]
    empty: bool,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Text preset used when no --config is given.
    #[arg(long, value_enum, default_value_t = Locale::En)]
    locale: Locale,

    /// Table configuration file (.yaml, .yml or .json).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output width; defaults to the terminal width.
    #[arg(long)]
    width: Option<usize>,

    /// Disable colors in text output.
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let output = run(&cli)?;
    println!("{}", output);
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let config = ConfigBuilder::new()
        .add_filter_allow_str("tabview")
        .add_filter_allow_str("tabview_demo")
        .build();
    if TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto).is_err() {
        eprintln!("logger already initialized");
    }
}

fn load_config(cli: &Cli) -> Result<TableConfig> {
    match &cli.config {
        Some(path) => TableConfig::from_file(path)
            .with_context(|| format!("loading table config from {}", path.display())),
        None => Ok(match cli.locale {
            Locale::En => TableConfig::default(),
            Locale::ZhCn => TableConfig::zh_cn(),
        }),
    }
}

fn terminal_width() -> Option<usize> {
    terminal_size::terminal_size().map(|(w, _)| w.0 as usize)
}

fn run(cli: &Cli) -> Result<String> {
    let config = load_config(cli)?;
    let columns = device_columns();
    let inventory = if cli.empty {
        Vec::new()
    } else {
        mock_devices(DEVICE_COUNT)
    };
    let mut view: TabularView<Device> = TabularView::with_config(config.clone());

    // Header clicks against the full collection.
    for key in &cli.sort {
        let props = TableProps::new(&inventory, &columns);
        if view.click_header(&props, key).is_none() {
            log::warn!("'{}' is not a sortable column", key);
        }
    }

    // The table reports the search text; the host filters.
    let mut query = String::new();
    if let Some(text) = &cli.search {
        let mut props = TableProps::new(&inventory, &columns)
            .search(Search::new().on_search(|t| query = t.to_string()));
        view.input_search(&mut props, text);
    }
    let matching: Vec<Device> = filter_records(&inventory, &columns, &query)
        .into_iter()
        .cloned()
        .collect();
    log::info!("{} of {} devices match {:?}", matching.len(), inventory.len(), query);

    // Sort everything, then slice the requested page.
    let sorted: Vec<Device> = view
        .sorted_records(&TableProps::new(&matching, &columns))
        .into_iter()
        .cloned()
        .collect();
    let page = paginate(&sorted, cli.page, cli.page_size);

    let mut requested = None;
    let props = TableProps::new(page, &columns)
        .search(Search::new().on_search(|_| {}))
        .pagination(
            Pagination::new(cli.page, cli.page_size, sorted.len())
                .on_change(|p, s| requested = Some((p, s))),
        )
        .actions(device_actions())
        .loading(cli.loading);
    let table = view.render(&props);
    drop(props);
    if let Some((p, s)) = requested {
        log::debug!("page change requested: {} x {}", p, s);
    }

    let output = match cli.format {
        Format::Json => table.to_json()?,
        Format::Csv => table.to_csv()?,
        Format::Text => TextRenderer::new(&config)
            .width(cli.width.or_else(terminal_width))
            .color(!cli.no_color && console::colors_enabled())
            .render(&table),
    };
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as Json;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["tabview-demo", "--no-color", "--width", "120"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    fn json_output(args: &[&str]) -> Json {
        let mut all = vec!["--format", "json"];
        all.extend_from_slice(args);
        serde_json::from_str(&run(&cli(&all)).unwrap()).unwrap()
    }

    #[test]
    fn test_default_page() {
        let out = json_output(&[]);
        assert_eq!(out["pagination"]["label"], "1 to 10 of 37");
        assert_eq!(out["body"]["rows"].as_array().map(Vec::len), Some(10));
        assert_eq!(out["body"]["rows"][0]["key"], "dev-001");
    }

    #[test]
    fn test_sort_applies_before_paging() {
        let out = json_output(&["--sort", "load", "--sort", "load", "--page-size", "3"]);
        assert_eq!(out["headers"][4]["sort"], "desc");
        let loads: Vec<&str> = out["body"]["rows"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["cells"][4]["text"].as_str())
            .collect();
        assert_eq!(loads, ["99%", "96%", "95%"]);
    }

    #[test]
    fn test_search_filters_collection() {
        let out = json_output(&["--search", "VALVE"]);
        let rows = out["body"]["rows"].as_array().unwrap();
        assert!(!rows.is_empty());
        assert!(rows
            .iter()
            .all(|r| r["cells"][2]["text"].as_str() == Some("valve")));
        assert_eq!(out["search"]["text"], "VALVE");
    }

    #[test]
    fn test_empty_and_loading_states() {
        let out = json_output(&["--empty", "--locale", "zh-cn"]);
        assert_eq!(out["body"]["state"], "empty");
        assert_eq!(out["body"]["text"], "暂无数据");

        let out = json_output(&["--loading"]);
        assert_eq!(out["body"]["state"], "loading");
    }

    #[test]
    fn test_text_output_has_pagination_line() {
        let out = run(&cli(&["--page", "4"])).unwrap();
        let last = out.lines().last().unwrap_or_default();
        assert!(last.starts_with("‹ Prev"), "{last}");
        assert!(last.ends_with("31 to 37 of 37"), "{last}");
    }

    #[test]
    fn test_csv_output() {
        let out = run(&cli(&["--format", "csv", "--page-size", "2"])).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID,Name,Kind,Site,Load"));
    }

    #[test]
    fn test_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("table.yaml");
        fs::write(&path, "empty_text: No devices\n").unwrap();
        let path = path.to_string_lossy().to_string();

        let out = json_output(&["--empty", "--config", path.as_str()]);
        assert_eq!(out["body"]["text"], "No devices");

        let err = run(&cli(&["--config", "missing.toml"])).unwrap_err();
        assert!(err.to_string().contains("missing.toml"));
    }
}
