//! # Attribute Tables
//!
//! The fixed-cardinality, index-addressed view over a feature's attributes
//! that the property inspector walks. Out-of-range indices are not errors:
//! every accessor degrades to `None` (or `false` for `is_hidden`) so an
//! inspector holding a stale index sees "no attribute here" instead of a
//! panic.
//!
//! ## Table of Contents
//! 1. AttributeField — one named, typed, optionally hidden slot
//! 2. AttributeTable — bounds-checked accessors
//! 3. Iteration

use serde::{Deserialize, Serialize};

use crate::value::{AttributeValue, DisplayType};

// ============================================================================
// 1. AttributeField — one named, typed, optionally hidden slot
// ============================================================================

/// One named attribute slot on a feature
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeField {
    /// Attribute name, unique within its table by convention (not enforced)
    pub name: String,
    /// Current value; its variant drives the reported display type
    pub value: AttributeValue,
    /// Whether the inspector should omit this field
    pub hidden: bool,
}

impl AttributeField {
    /// Create a visible field
    pub fn new(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            hidden: false,
        }
    }

    /// Create a hidden field
    pub fn hidden(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            hidden: true,
        }
    }
}

// ============================================================================
// 2. AttributeTable — bounds-checked accessors
// ============================================================================

/// Ordered, fixed-cardinality attribute table over one feature.
///
/// The field list is set at construction and exclusively owned; fields are
/// never added or removed afterwards, and all mutation goes through
/// `set_value`. Index positions are therefore stable for the table's
/// lifetime and callers may cache `len`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttributeTable {
    /// Fields in display order
    fields: Vec<AttributeField>,
}

impl AttributeTable {
    /// Build a table over a pre-built field list.
    /// An empty list is a valid empty table, not an error.
    pub fn new(fields: Vec<AttributeField>) -> Self {
        Self { fields }
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the table has no attributes
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The count and order of attributes never change after construction
    pub fn is_fixed_cardinality(&self) -> bool {
        true
    }

    /// Every attribute is both inspectable and mutable, for any index
    pub fn is_read_write(&self, _index: usize) -> bool {
        true
    }

    /// Value at `index`, or `None` when out of range
    pub fn value(&self, index: usize) -> Option<&AttributeValue> {
        self.fields.get(index).map(|f| &f.value)
    }

    /// Name at `index`, or `None` when out of range
    pub fn name(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|f| f.name.as_str())
    }

    /// Display category of the value currently at `index`, or `None` when
    /// out of range. Classification follows the stored value, so rewriting
    /// a slot with a different variant changes what this reports.
    pub fn display_type(&self, index: usize) -> Option<DisplayType> {
        self.fields.get(index).map(|f| f.value.display_type())
    }

    /// Hidden flag at `index`; `false` (not absent) when out of range
    pub fn is_hidden(&self, index: usize) -> bool {
        self.fields.get(index).map(|f| f.hidden).unwrap_or(false)
    }

    /// Store `value` at `index` and return the now-current value, letting
    /// the caller confirm the write round-tripped. Out of range: no
    /// mutation, `None`.
    pub fn set_value(
        &mut self,
        index: usize,
        value: impl Into<AttributeValue>,
    ) -> Option<&AttributeValue> {
        let field = self.fields.get_mut(index)?;
        field.value = value.into();
        Some(&field.value)
    }

    /// Index of the first field with the given name
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    // ========================================================================
    // 3. Iteration
    // ========================================================================

    /// All fields in display order. Shared references only — mutation goes
    /// through `set_value`.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeField> {
        self.fields.iter()
    }

    /// Fields the inspector should show, in display order
    pub fn visible(&self) -> impl Iterator<Item = &AttributeField> {
        self.fields.iter().filter(|f| !f.hidden)
    }
}

impl FromIterator<AttributeField> for AttributeTable {
    fn from_iter<I: IntoIterator<Item = AttributeField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
