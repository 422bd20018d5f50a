//! In-memory stage store
//!
//! The stage is the document collaborator of the editor core: it owns the
//! composed prim tree under a pseudo-root and exposes path resolution,
//! payload load state, and whole-layer text export/import. All editor
//! modules borrow it per call; nothing in the core owns or caches it.

pub mod path;
pub mod prim;
pub mod value;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::EditError;
pub use path::PrimPath;
pub use prim::{Payload, Prim, Purpose, VariantSet};
pub use value::{
    is_primvar_name, Attribute, AttributeValue, Interpolation, Primvar, TimeSample, ValueType,
    PRIMVAR_PREFIX,
};

/// Layer text format version
const LAYER_VERSION: &str = "1.0";

/// Serialized form of the editable layer
#[derive(Debug, Clone, Serialize, Deserialize)]
struct LayerData {
    version: String,
    identifier: String,
    root: Prim,
}

/// The mutable composed scene-description graph under edit
#[derive(Debug, Clone, PartialEq)]
pub struct Stage {
    identifier: String,
    /// Pseudo-root; excluded from projection, its children are the
    /// top-level prims
    root: Prim,
}

impl Stage {
    /// Create an empty stage with the given layer identifier
    pub fn new(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            root: Prim::new("", ""),
        }
    }

    /// Create an anonymous in-memory stage
    pub fn in_memory() -> Self {
        Self::new("anon.layer")
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn pseudo_root(&self) -> &Prim {
        &self.root
    }

    /// Append a prim under the pseudo-root
    pub fn add_root_prim(&mut self, prim: Prim) {
        self.root.children.push(prim);
    }

    /// Define a prim at a path, creating missing ancestors as typeless prims
    pub fn define_prim(&mut self, path: &PrimPath, type_name: &str) -> &mut Prim {
        let components = path.components();
        let mut current = &mut self.root;
        for (idx, name) in components.iter().enumerate() {
            let pos = match current.children.iter().position(|c| c.name == *name) {
                Some(pos) => pos,
                None => {
                    let child_type = if idx + 1 == components.len() {
                        type_name
                    } else {
                        ""
                    };
                    current.children.push(Prim::new(name, child_type));
                    current.children.len() - 1
                }
            };
            current = &mut current.children[pos];
        }
        current
    }

    /// Resolve a prim by path; None when the path no longer resolves
    pub fn prim_at_path(&self, path: &PrimPath) -> Option<&Prim> {
        let mut current = &self.root;
        for name in path.components() {
            current = current.child(name)?;
        }
        Some(current)
    }

    pub fn prim_at_path_mut(&mut self, path: &PrimPath) -> Option<&mut Prim> {
        let mut current = &mut self.root;
        for name in path.components() {
            current = current.child_mut(name)?;
        }
        Some(current)
    }

    /// Load the payload of the prim at `path`; no-op when it has none
    pub fn load(&mut self, path: &PrimPath) {
        if let Some(prim) = self.prim_at_path_mut(path) {
            match prim.payload.as_mut() {
                Some(payload) => {
                    payload.loaded = true;
                    debug!("loaded payload on {}", path);
                }
                None => debug!("load requested on {} which has no payload", path),
            }
        }
    }

    /// Unload the payload of the prim at `path`; no-op when it has none
    pub fn unload(&mut self, path: &PrimPath) {
        if let Some(prim) = self.prim_at_path_mut(path) {
            match prim.payload.as_mut() {
                Some(payload) => {
                    payload.loaded = false;
                    debug!("unloaded payload on {}", path);
                }
                None => debug!("unload requested on {} which has no payload", path),
            }
        }
    }

    /// Serialize the editable layer to its text form
    pub fn export_to_string(&self) -> Result<String, EditError> {
        let layer = LayerData {
            version: LAYER_VERSION.to_string(),
            identifier: self.identifier.clone(),
            root: self.root.clone(),
        };

        serde_json::to_string_pretty(&layer)
            .map_err(|e| EditError::ExportFailed(e.to_string()))
    }

    /// Replace the layer's entire content by parsing `text`
    ///
    /// Parsing happens against a scratch value first; on failure the prior
    /// content is untouched.
    pub fn import_from_string(&mut self, text: &str) -> Result<(), EditError> {
        let layer: LayerData = serde_json::from_str(text).map_err(|e| {
            warn!("layer import rejected: {}", e);
            EditError::ParseError(e.to_string())
        })?;

        self.identifier = layer.identifier;
        self.root = layer.root;
        Ok(())
    }
}
