//! Prim data model: the nodes of the stage graph
//!
//! A prim carries its classification facets (kind, purpose), its typed
//! properties, variant sets, and an optional payload reference. Children are
//! kept in document order.

use serde::{Deserialize, Serialize};

use super::value::{Attribute, Primvar};

/// Display-intent classification of an imageable prim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Purpose {
    Default,
    Render,
    Proxy,
    Guide,
}

impl Purpose {
    /// All defined purposes, in display order
    pub const ALL: [Purpose; 4] = [
        Purpose::Default,
        Purpose::Render,
        Purpose::Proxy,
        Purpose::Guide,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Purpose::Default => "default",
            Purpose::Render => "render",
            Purpose::Proxy => "proxy",
            Purpose::Guide => "guide",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "default" => Some(Purpose::Default),
            "render" => Some(Purpose::Render),
            "proxy" => Some(Purpose::Proxy),
            "guide" => Some(Purpose::Guide),
            _ => None,
        }
    }
}

impl std::fmt::Display for Purpose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A named, mutually-exclusive choice point on a prim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSet {
    pub name: String,
    pub variants: Vec<String>,
    /// One of `variants`, or empty when unresolved
    pub selection: String,
}

impl VariantSet {
    pub fn new(name: &str, variants: &[&str], selection: &str) -> Self {
        Self {
            name: name.to_string(),
            variants: variants.iter().map(|v| v.to_string()).collect(),
            selection: selection.to_string(),
        }
    }
}

/// An optional, independently loadable chunk of a prim's content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    pub asset_path: String,
    pub loaded: bool,
}

impl Payload {
    pub fn new(asset_path: &str) -> Self {
        Self {
            asset_path: asset_path.to_string(),
            loaded: false,
        }
    }
}

/// One element of the stage graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prim {
    pub name: String,
    /// Schema type name, may be empty
    pub type_name: String,
    pub active: bool,
    /// Abstract prims (classes) are excluded from tree projection
    pub is_abstract: bool,
    /// Whether the prim supports authored purpose
    pub imageable: bool,
    /// Free-form model classification, empty = unset
    pub kind: String,
    /// None = unset; readers degrade this to an empty string
    pub purpose: Option<Purpose>,
    pub attributes: Vec<Attribute>,
    pub primvars: Vec<Primvar>,
    pub variant_sets: Vec<VariantSet>,
    pub payload: Option<Payload>,
    pub children: Vec<Prim>,
}

impl Prim {
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            active: true,
            is_abstract: false,
            imageable: true,
            kind: String::new(),
            purpose: None,
            attributes: Vec::new(),
            primvars: Vec::new(),
            variant_sets: Vec::new(),
            payload: None,
            children: Vec::new(),
        }
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }

    pub fn with_purpose(mut self, purpose: Purpose) -> Self {
        self.purpose = Some(purpose);
        self
    }

    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    pub fn with_primvar(mut self, primvar: Primvar) -> Self {
        self.primvars.push(primvar);
        self
    }

    pub fn with_variant_set(mut self, variant_set: VariantSet) -> Self {
        self.variant_sets.push(variant_set);
        self
    }

    pub fn with_payload(mut self, payload: Payload) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_child(mut self, child: Prim) -> Self {
        self.children.push(child);
        self
    }

    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    pub fn not_imageable(mut self) -> Self {
        self.imageable = false;
        self
    }

    /// Children surviving the active-and-not-abstract filter, in document
    /// order; traversal never descends into an excluded child
    pub fn filtered_children(&self) -> impl Iterator<Item = &Prim> {
        self.children
            .iter()
            .filter(|child| child.active && !child.is_abstract)
    }

    pub fn child(&self, name: &str) -> Option<&Prim> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut Prim> {
        self.children.iter_mut().find(|child| child.name == name)
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name == name)
    }

    pub fn attribute_mut(&mut self, name: &str) -> Option<&mut Attribute> {
        self.attributes.iter_mut().find(|attr| attr.name == name)
    }

    pub fn primvar(&self, name: &str) -> Option<&Primvar> {
        self.primvars.iter().find(|pv| pv.name() == name)
    }

    pub fn primvar_mut(&mut self, name: &str) -> Option<&mut Primvar> {
        self.primvars.iter_mut().find(|pv| pv.name() == name)
    }

    /// Whether any property of this name exists, in either namespace
    pub fn has_property(&self, name: &str) -> bool {
        self.attribute(name).is_some() || self.primvar(name).is_some()
    }

    /// Remove an ordinary attribute; true when something was removed
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        let before = self.attributes.len();
        self.attributes.retain(|attr| attr.name != name);
        self.attributes.len() != before
    }

    /// Remove a primvar; true when something was removed
    pub fn remove_primvar(&mut self, name: &str) -> bool {
        let before = self.primvars.len();
        self.primvars.retain(|pv| pv.name() != name);
        self.primvars.len() != before
    }

    pub fn variant_set(&self, name: &str) -> Option<&VariantSet> {
        self.variant_sets.iter().find(|vs| vs.name == name)
    }

    pub fn variant_set_mut(&mut self, name: &str) -> Option<&mut VariantSet> {
        self.variant_sets.iter_mut().find(|vs| vs.name == name)
    }

    pub fn has_payload(&self) -> bool {
        self.payload.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::value::ValueType;

    #[test]
    fn test_purpose_tokens() {
        for purpose in Purpose::ALL {
            assert_eq!(Purpose::from_token(purpose.token()), Some(purpose));
        }
        assert_eq!(Purpose::from_token("banana"), None);
    }

    #[test]
    fn test_filtered_children_skips_inactive_and_abstract() {
        let prim = Prim::new("World", "Xform")
            .with_child(Prim::new("Visible", "Mesh"))
            .with_child(Prim::new("Disabled", "Mesh").inactive())
            .with_child(Prim::new("Proto", "Mesh").abstract_class());

        let names: Vec<&str> = prim.filtered_children().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Visible"]);
    }

    #[test]
    fn test_property_lookup_spans_both_namespaces() {
        use crate::stage::value::{Interpolation, Primvar};

        let prim = Prim::new("Cube", "Cube")
            .with_attribute(Attribute::new("size", ValueType::Double))
            .with_primvar(Primvar::new(
                Attribute::new("primvars:displayColor", ValueType::Color3f),
                Interpolation::Constant,
            ));

        assert!(prim.has_property("size"));
        assert!(prim.has_property("primvars:displayColor"));
        assert!(!prim.has_property("radius"));
    }

    #[test]
    fn test_remove_attribute_reports_removal() {
        let mut prim = Prim::new("Cube", "Cube")
            .with_attribute(Attribute::new("size", ValueType::Double));
        assert!(prim.remove_attribute("size"));
        assert!(!prim.remove_attribute("size"));
    }
}
