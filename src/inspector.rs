//! Property inspection for a selected prim
//!
//! Four independent reads: variant sets, payload state, attribute/primvar
//! rows, and time samples. Each is recomputed fresh on every call; nothing
//! here caches across edits.

use serde::{Deserialize, Serialize};

use crate::stage::value::{Attribute, AttributeValue, ValueType};
use crate::stage::Prim;

/// Prefix that marks transform-op attributes
pub const XFORM_OP_PREFIX: &str = "xformOp:";

/// Snapshot of one variant set for display and edit validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSetInfo {
    pub name: String,
    pub variants: Vec<String>,
    pub current_selection: String,
}

/// Display category of an attribute row; drives presentation only, never
/// edit semantics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeCategory {
    Custom,
    Transform,
    TimeCode,
    Token,
    Primvar,
    Default,
}

impl AttributeCategory {
    /// Fixed display color for this category
    pub fn color(&self) -> [u8; 3] {
        match self {
            AttributeCategory::Custom => [255, 255, 0],
            AttributeCategory::Transform => [200, 200, 255],
            AttributeCategory::TimeCode => [0, 255, 0],
            AttributeCategory::Token => [217, 157, 52],
            AttributeCategory::Primvar => [0, 255, 255],
            AttributeCategory::Default => [142, 211, 245],
        }
    }
}

/// One row of the attribute/primvar listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeRow {
    pub name: String,
    pub type_token: String,
    pub value_text: String,
    pub category: AttributeCategory,
    pub is_primvar: bool,
}

/// Time samples of one attribute, times ascending
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSampleRow {
    pub attribute: String,
    pub samples: Vec<(f64, String)>,
}

/// Ordered predicate chain deciding an attribute's display category; the
/// first matching entry wins, `Default` is the fallback
const CATEGORY_CHAIN: [(AttributeCategory, fn(&Attribute, bool) -> bool); 5] = [
    (AttributeCategory::Custom, |attr, _| attr.custom),
    (AttributeCategory::Transform, |attr, _| {
        attr.name.starts_with(XFORM_OP_PREFIX)
    }),
    (AttributeCategory::TimeCode, |attr, _| {
        matches!(attr.value, Some(AttributeValue::TimeCode(_)))
    }),
    (AttributeCategory::Token, |attr, _| {
        attr.value_type == ValueType::Token
    }),
    (AttributeCategory::Primvar, |_, is_primvar| is_primvar),
];

/// Classify an attribute for display
pub fn categorize(attribute: &Attribute, is_primvar: bool) -> AttributeCategory {
    CATEGORY_CHAIN
        .iter()
        .find(|(_, predicate)| predicate(attribute, is_primvar))
        .map(|(category, _)| *category)
        .unwrap_or(AttributeCategory::Default)
}

/// Variant sets of a prim, in document order
pub fn list_variant_sets(prim: &Prim) -> Vec<VariantSetInfo> {
    prim.variant_sets
        .iter()
        .map(|vs| VariantSetInfo {
            name: vs.name.clone(),
            variants: vs.variants.clone(),
            current_selection: vs.selection.clone(),
        })
        .collect()
}

/// Payload presence; load state is a write-only toggle, not exposed here
pub fn payload_state(prim: &Prim) -> bool {
    prim.has_payload()
}

/// Attribute rows first, then primvar rows, each in document order
pub fn list_attributes_and_primvars(prim: &Prim) -> Vec<AttributeRow> {
    let mut rows: Vec<AttributeRow> = prim
        .attributes
        .iter()
        .map(|attr| attribute_row(attr, false))
        .collect();
    rows.extend(
        prim.primvars
            .iter()
            .map(|pv| attribute_row(&pv.attribute, true)),
    );
    rows
}

fn attribute_row(attribute: &Attribute, is_primvar: bool) -> AttributeRow {
    AttributeRow {
        name: attribute.name.clone(),
        type_token: attribute.value_type.token().to_string(),
        value_text: attribute.value_text(),
        category: categorize(attribute, is_primvar),
        is_primvar,
    }
}

/// Time samples per attribute, ascending; attributes without samples are
/// omitted entirely
pub fn list_time_samples(prim: &Prim) -> Vec<TimeSampleRow> {
    prim.attributes
        .iter()
        .chain(prim.primvars.iter().map(|pv| &pv.attribute))
        .filter(|attr| attr.has_time_samples())
        .map(|attr| TimeSampleRow {
            attribute: attr.name.clone(),
            samples: attr
                .time_samples
                .iter()
                .map(|sample| (sample.time, sample.value.display_text()))
                .collect(),
        })
        .collect()
}
