//! Mock device inventory and its column definitions.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tabview::{Action, ActionColumn, Cell, ColumnSpec, Record, Value, Width};

const KINDS: [&str; 4] = ["pump", "valve", "sensor", "compressor"];
const SITES: [&str; 3] = ["Harbor", "North Yard", "Depot"];
const OWNERS: [&str; 3] = ["ops", "field", "maintenance"];

#[derive(Clone, Debug, Record)]
pub struct Device {
    #[field(String)]
    pub id: String,

    #[field(String)]
    pub name: String,

    #[field(String)]
    pub kind: String,

    #[field(String)]
    pub site: String,

    #[field(Number)]
    pub load: u8,

    #[field(Bool)]
    pub online: bool,

    #[field(String, optional)]
    pub owner: Option<String>,

    #[field(Timestamp)]
    pub last_seen: DateTime<Utc>,
}

/// A deterministic inventory of `count` devices.
pub fn mock_devices(count: usize) -> Vec<Device> {
    let epoch = Utc
        .with_ymd_and_hms(2024, 3, 1, 8, 0, 0)
        .single()
        .unwrap_or_default();

    (0..count)
        .map(|i| {
            let kind = KINDS[i % KINDS.len()];
            Device {
                id: format!("dev-{:03}", i + 1),
                name: format!("{} {}", capitalize(kind), i / KINDS.len() + 1),
                kind: kind.to_string(),
                site: SITES[(i * 7) % SITES.len()].to_string(),
                load: ((i * 37 + 11) % 100) as u8,
                online: i % 5 != 3,
                owner: (i % 4 != 2).then(|| OWNERS[i % OWNERS.len()].to_string()),
                last_seen: epoch - Duration::minutes(((i * 53) % 600) as i64),
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn device_columns() -> Vec<ColumnSpec<Device>> {
    vec![
        ColumnSpec::new(Device::ID, "ID").width(Width::Fixed(7)),
        ColumnSpec::new(Device::NAME, "Name")
            .width(Width::Fill)
            .sortable(true)
            .filterable(true),
        ColumnSpec::new(Device::KIND, "Kind")
            .sortable(true)
            .filterable(true),
        ColumnSpec::new(Device::SITE, "Site").filterable(true),
        ColumnSpec::new(Device::LOAD, "Load")
            .right()
            .sortable(true)
            .render(|value: &Value<'_>, _: &Device, _| load_cell(value)),
        ColumnSpec::new(Device::ONLINE, "Status").render(|value: &Value<'_>, _: &Device, _| {
            match value.as_bool() {
                Some(true) => Cell::styled("online", "success"),
                Some(false) => Cell::styled("offline", "muted"),
                None => Cell::new("?"),
            }
        }),
        ColumnSpec::new(Device::OWNER, "Owner"),
        ColumnSpec::new(Device::LAST_SEEN, "Last seen")
            .sortable(true)
            .render(|value: &Value<'_>, _: &Device, _| {
                value
                    .as_timestamp()
                    .and_then(|ts| DateTime::from_timestamp_millis(ts.as_millis()))
                    .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default()
            }),
    ]
}

fn load_cell(value: &Value<'_>) -> Cell {
    let Some(load) = value.as_number().map(|n| n.to_f64()) else {
        return Cell::new("-");
    };
    let text = format!("{}%", load);
    match load {
        l if l >= 85.0 => Cell::styled(text, "danger"),
        l if l >= 60.0 => Cell::styled(text, "warning"),
        _ => Cell::new(text),
    }
}

/// Edit and delete buttons; online devices cannot be deleted.
pub fn device_actions() -> ActionColumn<Device> {
    ActionColumn::new("Actions", |device: &Device, _| {
        vec![
            Action::new("edit", "Edit"),
            Action::new("delete", "Delete")
                .style("danger")
                .disabled(device.online),
        ]
    })
}
