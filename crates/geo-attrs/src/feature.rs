//! # Feature Construction Boundary
//!
//! Builds attribute tables from parsed GeoJSON feature properties. Parsing
//! itself belongs to `geojson`/`serde_json`; this module only adapts an
//! already-parsed property map into an ordered field list, applying the
//! project's `attrs.toml` rules for hidden fields and date fields.
//!
//! ## Table of Contents
//! 1. Property map → fields
//! 2. Date reparsing
//! 3. Feature → table

use geojson::Feature;
use serde_json::{Map, Value};

use crate::config::AttrsConfig;
use crate::table::{AttributeField, AttributeTable};
use crate::value::AttributeValue;

// ============================================================================
// 1. Property map → fields
// ============================================================================

/// Build one field per property, in map iteration order.
///
/// Hidden flags come from the config; properties listed as date fields have
/// their text values parsed with the configured format, falling back to text
/// when parsing fails.
pub fn fields_from_properties(
    properties: &Map<String, Value>,
    config: &AttrsConfig,
) -> Vec<AttributeField> {
    let mut fields = Vec::with_capacity(properties.len());
    for (name, raw) in properties {
        let mut value = AttributeValue::from_json(raw);
        if config.is_date_field(name) {
            value = reparse_as_date(name, value, config);
        }
        fields.push(AttributeField {
            name: name.clone(),
            value,
            hidden: config.is_hidden(name),
        });
    }
    fields
}

// ============================================================================
// 2. Date reparsing
// ============================================================================

/// Reparse a text value as a calendar date per the config's format.
/// Non-text values and unparseable text pass through unchanged.
fn reparse_as_date(name: &str, value: AttributeValue, config: &AttrsConfig) -> AttributeValue {
    match value {
        AttributeValue::Text(s) => {
            match chrono::NaiveDate::parse_from_str(&s, &config.dates.format) {
                Ok(date) => AttributeValue::Date(date),
                Err(e) => {
                    tracing::debug!(
                        "Property '{}' value '{}' did not parse as a date: {}",
                        name,
                        s,
                        e
                    );
                    AttributeValue::Text(s)
                }
            }
        }
        other => other,
    }
}

// ============================================================================
// 3. Feature → table
// ============================================================================

/// Fields for a GeoJSON feature; empty when the feature has no properties
pub fn fields_from_feature(feature: &Feature, config: &AttrsConfig) -> Vec<AttributeField> {
    feature
        .properties
        .as_ref()
        .map(|props| fields_from_properties(props, config))
        .unwrap_or_default()
}

/// Attribute table for a GeoJSON feature
pub fn table_from_feature(feature: &Feature, config: &AttrsConfig) -> AttributeTable {
    let fields = fields_from_feature(feature, config);
    tracing::debug!("Built attribute table with {} fields", fields.len());
    AttributeTable::new(fields)
}

// =============================================================================
// Tests
// =============================================================================
