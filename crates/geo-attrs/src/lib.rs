//! # Geo Attrs — Attribute Inspection Tables for Geospatial Features
//!
//! Presents the named, typed, optionally-hidden attributes of a geospatial
//! feature to a generic property inspector. Attribute lists are built from
//! parsed GeoJSON feature properties; the inspector walks a fixed-cardinality,
//! index-addressed table whose accessors degrade to `None`/`false` on a bad
//! index instead of panicking.
//!
//! ## Architecture
//! - `attrs.toml` — Declarative config (hidden fields, date fields)
//! - Parsed `geojson::Feature` properties — the construction boundary
//! - `AttributeTable` — the contract the inspector walks by index
//!
//! ## Modules
//! - `value` — Tagged attribute values and display-type classification
//! - `table` — Fixed-cardinality attribute tables (the inspector contract)
//! - `feature` — GeoJSON feature properties → attribute tables
//! - `config` — Parse `attrs.toml` inspector configuration
//!
//! ## Table of Contents
//! 1. Module declarations
//! 2. Re-exports

pub mod config;
pub mod feature;
pub mod table;
pub mod value;

pub use config::AttrsConfig;
pub use feature::{fields_from_feature, fields_from_properties, table_from_feature};
pub use table::{AttributeField, AttributeTable};
pub use value::{AttributeValue, DisplayType};
