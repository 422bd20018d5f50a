//! Read-only display facets of a prim
//!
//! Pure projections of a prim's current state; no caching, so repeated
//! calls always reflect the stage as it is now.

use serde::{Deserialize, Serialize};

use crate::stage::{Prim, PrimPath};

/// Snapshot of the classification facets shown for one prim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimFacets {
    pub name: String,
    pub type_name: String,
    /// Empty when unset
    pub kind: String,
    /// Empty when unset or when the prim is not imageable
    pub purpose: String,
    pub path: PrimPath,
}

/// Read the display facets of a prim; unset facets degrade to empty strings
pub fn prim_facets(prim: &Prim, path: &PrimPath) -> PrimFacets {
    let purpose = if prim.imageable {
        prim.purpose.map(|p| p.token().to_string()).unwrap_or_default()
    } else {
        String::new()
    };

    PrimFacets {
        name: prim.name.clone(),
        type_name: prim.type_name.clone(),
        kind: prim.kind.clone(),
        purpose,
        path: path.clone(),
    }
}

/// "set: selection" summary of a prim's variant sets, in document order
pub fn variant_summary(prim: &Prim) -> String {
    prim.variant_sets
        .iter()
        .map(|vs| format!("{}: {}", vs.name, vs.selection))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::{Purpose, VariantSet};

    #[test]
    fn test_unset_facets_degrade_to_empty_strings() {
        let prim = Prim::new("Cube", "Cube");
        let facets = prim_facets(&prim, &PrimPath::new("/Cube"));
        assert_eq!(facets.kind, "");
        assert_eq!(facets.purpose, "");
        assert_eq!(facets.type_name, "Cube");
    }

    #[test]
    fn test_purpose_is_empty_for_non_imageable_prims() {
        let prim = Prim::new("Scope", "Scope")
            .with_purpose(Purpose::Render)
            .not_imageable();
        assert_eq!(prim_facets(&prim, &PrimPath::new("/Scope")).purpose, "");
    }

    #[test]
    fn test_facets_reflect_current_state() {
        let mut prim = Prim::new("Asset", "Xform").with_purpose(Purpose::Proxy);
        let path = PrimPath::new("/Asset");
        assert_eq!(prim_facets(&prim, &path).purpose, "proxy");

        prim.kind = "component".to_string();
        prim.purpose = Some(Purpose::Render);
        let facets = prim_facets(&prim, &path);
        assert_eq!(facets.kind, "component");
        assert_eq!(facets.purpose, "render");
    }

    #[test]
    fn test_variant_summary() {
        let prim = Prim::new("Asset", "Xform")
            .with_variant_set(VariantSet::new("geo", &["high", "low"], "low"))
            .with_variant_set(VariantSet::new("shading", &["full", "preview"], ""));
        assert_eq!(variant_summary(&prim), "geo: low, shading: ");
        assert_eq!(variant_summary(&Prim::new("Empty", "")), "");
    }
}
