//! Presentation helpers for a scan record.
//!
//! Groups record fields into display categories, builds the embeddable map link
//! and renders a plain-text view for the terminal.

use colored::*;
use serde_json::Value;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::config::{MAP_BBOX_DELTA, MAP_EMBED_BASE_URL};
use crate::record::CanonicalRecord;

/// Display categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Category {
    /// IP, version, ISP, ASN, organization
    Network,
    /// City through postal code
    Location,
    /// Latitude and longitude
    Coordinates,
    /// Time zone, offset and country extras
    TimeRegional,
    /// Scan identifier, timestamp and flags
    Metadata,
}

impl Category {
    /// Heading shown above the category.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Network => "Network Information",
            Category::Location => "Location Data",
            Category::Coordinates => "Coordinates",
            Category::TimeRegional => "Time & Regional",
            Category::Metadata => "Metadata",
        }
    }

    /// Record fields shown under this category, in display order.
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Category::Network => &["ip", "version", "isp", "asn", "org"],
            Category::Location => &[
                "city",
                "region",
                "country",
                "country_code",
                "continent",
                "postal",
            ],
            Category::Coordinates => &["latitude", "longitude"],
            Category::TimeRegional => &[
                "timezone",
                "utc_offset",
                "currency",
                "languages",
                "calling_code",
            ],
            Category::Metadata => &["scan_id", "timestamp", "is_eu", "flag"],
        }
    }
}

/// One displayed field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    /// Upper-case label, e.g. `COUNTRY CODE`
    pub label: String,
    /// Display value
    pub value: String,
}

/// A category with at least one present field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryView {
    /// The category
    pub category: Category,
    /// Present fields, in display order
    pub fields: Vec<FieldView>,
}

/// Label for a record field name: underscores become spaces, upper-cased.
pub fn field_label(field: &str) -> String {
    field.replace('_', " ").to_uppercase()
}

/// Groups the present fields of `record` by category, skipping empty categories.
pub fn group_fields(record: &CanonicalRecord) -> Vec<CategoryView> {
    // Absent fields are never serialized, so a missing key means "not known"
    let object = match serde_json::to_value(record) {
        Ok(Value::Object(map)) => map,
        _ => return Vec::new(),
    };

    Category::iter()
        .filter_map(|category| {
            let fields: Vec<FieldView> = category
                .fields()
                .iter()
                .filter_map(|name| {
                    object.get(*name).map(|value| FieldView {
                        label: field_label(name),
                        value: display_value(value),
                    })
                })
                .collect();
            (!fields.is_empty()).then_some(CategoryView { category, fields })
        })
        .collect()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// OpenStreetMap embed link with a marker at (`lat`, `lon`).
pub fn map_url(lat: f64, lon: f64) -> String {
    format!(
        "{}?bbox={},{},{},{}&layer=mapnik&marker={},{}",
        MAP_EMBED_BASE_URL,
        lon - MAP_BBOX_DELTA,
        lat - MAP_BBOX_DELTA,
        lon + MAP_BBOX_DELTA,
        lat + MAP_BBOX_DELTA,
        lat,
        lon
    )
}

/// Renders grouped fields for the terminal.
pub fn render_text(views: &[CategoryView]) -> String {
    let width = views
        .iter()
        .flat_map(|v| v.fields.iter())
        .map(|f| f.label.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for view in views {
        out.push_str(&format!("{} {}\n", "◆".green(), view.category.title().bold()));
        for field in &view.fields {
            let label = format!("{:<width$}", field.label, width = width);
            out.push_str(&format!("  {}  {}\n", label.cyan(), field.value));
        }
    }
    out
}
