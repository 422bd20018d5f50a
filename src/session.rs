//! Editor session wiring
//!
//! Composes the host selection collaborator with the projector, inspector,
//! and applier into one editing session. The session holds only per-session
//! snapshots (selected path, projected rows, layer text); there is no
//! process-wide editor state. Lifecycle: opened by the caller, used for one
//! editing session, discarded on close.

use log::warn;

use crate::applier;
use crate::bridge;
use crate::error::EditError;
use crate::stage::{Prim, PrimPath, Purpose, Stage};
use crate::tree::{self, DisplayRow};

/// Advisory kind vocabulary for the editor's kind field; any other string
/// is accepted by the applier
pub const KIND_SUGGESTIONS: [&str; 5] = ["", "component", "subcomponent", "assembly", "group"];

/// Host selection collaborator: supplies the currently selected prim path
pub trait SelectionSource {
    fn selected_path(&self) -> Option<PrimPath>;
}

/// One editing session over an externally-owned stage
///
/// Rows and layer text are snapshots; they are refreshed explicitly after
/// every successful edit rather than observed live.
#[derive(Debug, Default)]
pub struct EditorSession {
    selected: Option<PrimPath>,
    rows: Vec<DisplayRow>,
    layer_text: String,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last projected display tree
    pub fn rows(&self) -> &[DisplayRow] {
        &self.rows
    }

    /// Last exported layer text
    pub fn layer_text(&self) -> &str {
        &self.layer_text
    }

    pub fn selected_path(&self) -> Option<&PrimPath> {
        self.selected.as_ref()
    }

    /// Resolve the currently selected prim against the live stage
    pub fn selected_prim<'a>(&self, stage: &'a Stage) -> Option<&'a Prim> {
        self.selected
            .as_ref()
            .and_then(|path| stage.prim_at_path(path))
    }

    /// Pull the host selection and re-derive all snapshots
    ///
    /// An empty selection is a no-op with a warning; prior snapshots stay
    /// usable. Returns whether the snapshots were refreshed.
    pub fn refresh(&mut self, stage: &Stage, selection: &dyn SelectionSource) -> bool {
        let Some(path) = selection.selected_path() else {
            warn!("no prim selected");
            return false;
        };
        self.selected = Some(path);
        self.re_derive(stage);
        true
    }

    /// The combined kind/purpose apply flow: an empty kind is skipped
    /// rather than authored, a missing purpose leaves purpose untouched
    pub fn apply_changes(
        &mut self,
        stage: &mut Stage,
        kind: &str,
        purpose: Option<Purpose>,
    ) -> Result<(), EditError> {
        let Some(path) = self.selected.clone() else {
            warn!("no prim selected");
            return Ok(());
        };

        if !kind.is_empty() {
            applier::set_kind(stage, &path, kind)?;
        }
        if let Some(purpose) = purpose {
            applier::set_purpose(stage, &path, purpose)?;
        }
        self.re_derive(stage);
        Ok(())
    }

    pub fn set_variant_selection(
        &mut self,
        stage: &mut Stage,
        set_name: &str,
        variant: &str,
    ) -> Result<(), EditError> {
        self.with_selected(stage, |stage, path| {
            applier::set_variant_selection(stage, path, set_name, variant)
        })
    }

    pub fn load_payload(&mut self, stage: &mut Stage) -> Result<(), EditError> {
        self.with_selected(stage, applier::load_payload)
    }

    pub fn unload_payload(&mut self, stage: &mut Stage) -> Result<(), EditError> {
        self.with_selected(stage, applier::unload_payload)
    }

    pub fn set_attribute_value(
        &mut self,
        stage: &mut Stage,
        name: &str,
        text: &str,
    ) -> Result<(), EditError> {
        self.with_selected(stage, |stage, path| {
            applier::set_attribute_value(stage, path, name, text)
        })
    }

    pub fn set_primvar_value(
        &mut self,
        stage: &mut Stage,
        name: &str,
        text: &str,
    ) -> Result<(), EditError> {
        self.with_selected(stage, |stage, path| {
            applier::set_primvar_value(stage, path, name, text)
        })
    }

    pub fn set_time_sample_value(
        &mut self,
        stage: &mut Stage,
        name: &str,
        time: f64,
        text: &str,
    ) -> Result<(), EditError> {
        self.with_selected(stage, |stage, path| {
            applier::set_time_sample_value(stage, path, name, time, text)
        })
    }

    pub fn create_attribute(
        &mut self,
        stage: &mut Stage,
        name: &str,
        text: &str,
    ) -> Result<(), EditError> {
        self.with_selected(stage, |stage, path| {
            applier::create_attribute(stage, path, name, text)
        })
    }

    pub fn create_primvar(
        &mut self,
        stage: &mut Stage,
        name: &str,
        text: &str,
    ) -> Result<(), EditError> {
        self.with_selected(stage, |stage, path| {
            applier::create_primvar(stage, path, name, text)
        })
    }

    pub fn remove_property(&mut self, stage: &mut Stage, name: &str) -> Result<(), EditError> {
        self.with_selected(stage, |stage, path| {
            applier::remove_property(stage, path, name)
        })
    }

    /// Replace the layer from edited text, then re-derive on success
    pub fn import_layer_text(&mut self, stage: &mut Stage, text: &str) -> Result<(), EditError> {
        bridge::import_text(stage, text)?;
        self.re_derive(stage);
        Ok(())
    }

    /// Run one applier operation against the selected prim, then re-derive.
    /// Empty selection is a warned no-op, matching the refresh flow.
    fn with_selected(
        &mut self,
        stage: &mut Stage,
        op: impl FnOnce(&mut Stage, &PrimPath) -> Result<(), EditError>,
    ) -> Result<(), EditError> {
        let Some(path) = self.selected.clone() else {
            warn!("no prim selected");
            return Ok(());
        };
        op(stage, &path)?;
        self.re_derive(stage);
        Ok(())
    }

    /// Snapshots are caller-driven: every successful mutation funnels here
    fn re_derive(&mut self, stage: &Stage) {
        self.rows = tree::project(stage);
        match bridge::export_text(stage) {
            Ok(text) => self.layer_text = text,
            Err(e) => warn!("layer text refresh failed: {}", e),
        }
    }
}
