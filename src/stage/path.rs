//! Hierarchical prim paths
//!
//! A path is the stable identity of a prim within one stage snapshot. Paths
//! are slash-delimited; the pseudo-root is the empty path and renders as "/".

use serde::{Deserialize, Serialize};

/// Stable hierarchical identifier for a prim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimPath(String);

impl PrimPath {
    /// The pseudo-root path
    pub fn root() -> Self {
        PrimPath(String::new())
    }

    /// Parse a path string, accepting an optional leading slash
    pub fn new(path: &str) -> Self {
        let trimmed = path.trim_matches('/');
        let components: Vec<&str> = trimmed.split('/').filter(|c| !c.is_empty()).collect();
        PrimPath(components.join("/"))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path components from the root down, empty for the pseudo-root
    pub fn components(&self) -> Vec<&str> {
        if self.0.is_empty() {
            Vec::new()
        } else {
            self.0.split('/').collect()
        }
    }

    /// Last path component, empty for the pseudo-root
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Child path formed by appending one component
    pub fn child(&self, name: &str) -> Self {
        if self.0.is_empty() {
            PrimPath(name.to_string())
        } else {
            PrimPath(format!("{}/{}", self.0, name))
        }
    }

    /// Parent path, or None for the pseudo-root
    pub fn parent(&self) -> Option<Self> {
        if self.0.is_empty() {
            return None;
        }
        match self.0.rfind('/') {
            Some(idx) => Some(PrimPath(self.0[..idx].to_string())),
            None => Some(PrimPath::root()),
        }
    }
}

impl std::fmt::Display for PrimPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "/{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        let root = PrimPath::root();
        assert!(root.is_root());
        assert_eq!(root.components().len(), 0);
        assert_eq!(root.name(), "");
        assert_eq!(root.to_string(), "/");
        assert!(root.parent().is_none());
    }

    #[test]
    fn test_path_parsing_accepts_leading_slash() {
        assert_eq!(PrimPath::new("/World/Geo"), PrimPath::new("World/Geo"));
        assert_eq!(PrimPath::new("/"), PrimPath::root());
    }

    #[test]
    fn test_child_and_parent() {
        let world = PrimPath::root().child("World");
        let geo = world.child("Geo");
        assert_eq!(geo.to_string(), "/World/Geo");
        assert_eq!(geo.name(), "Geo");
        assert_eq!(geo.parent(), Some(world.clone()));
        assert_eq!(world.parent(), Some(PrimPath::root()));
    }

    #[test]
    fn test_display_round_trip() {
        let path = PrimPath::new("/World/Geo/Cube");
        assert_eq!(PrimPath::new(&path.to_string()), path);
    }
}
