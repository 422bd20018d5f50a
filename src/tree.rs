//! Tree projection: stage graph to ordered display rows
//!
//! Depth-first pre-order walk over the active, non-abstract prims. Rows are
//! snapshots keyed by prim path; any structural change to the stage
//! invalidates all rows and the caller re-projects from scratch.

use serde::{Deserialize, Serialize};

use crate::facets::{prim_facets, variant_summary, PrimFacets};
use crate::stage::{Prim, PrimPath, Stage};

/// One row of the projected display tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayRow {
    pub facets: PrimFacets,
    /// "set: selection" summary column, empty without variant sets
    pub variant_summary: String,
    pub has_payload: bool,
    pub children: Vec<DisplayRow>,
}

impl DisplayRow {
    /// Stable key back to the source prim
    pub fn path(&self) -> &PrimPath {
        &self.facets.path
    }
}

/// Project the stage into its display tree
///
/// The pseudo-root itself is excluded; its surviving children become the
/// top-level rows. Sibling order follows document order. Absent facets
/// degrade to empty strings, so a sparse prim never hides its siblings.
pub fn project(stage: &Stage) -> Vec<DisplayRow> {
    stage
        .pseudo_root()
        .filtered_children()
        .map(|child| project_prim(child, PrimPath::root().child(&child.name)))
        .collect()
}

fn project_prim(prim: &Prim, path: PrimPath) -> DisplayRow {
    let children = prim
        .filtered_children()
        .map(|child| project_prim(child, path.child(&child.name)))
        .collect();

    DisplayRow {
        facets: prim_facets(prim, &path),
        variant_summary: variant_summary(prim),
        has_payload: prim.has_payload(),
        children,
    }
}
