//! Document text bridge
//!
//! Whole-layer text in, whole-layer text out. Import is atomic: the text is
//! parsed in full before anything replaces the stage's content, so a parse
//! failure leaves the prior document intact.

use crate::error::EditError;
use crate::stage::Stage;

/// Serialize the stage's editable layer to text
pub fn export_text(stage: &Stage) -> Result<String, EditError> {
    stage.export_to_string()
}

/// Replace the editable layer's entire content by parsing `text`
pub fn import_text(stage: &mut Stage, text: &str) -> Result<(), EditError> {
    stage.import_from_string(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::value::{Attribute, AttributeValue, ValueType};
    use crate::stage::{Payload, Prim, PrimPath, VariantSet};

    fn sample_stage() -> Stage {
        let mut stage = Stage::new("scene.layer");
        stage.add_root_prim(
            Prim::new("Asset", "Xform")
                .with_kind("component")
                .with_variant_set(VariantSet::new("geo", &["high", "low"], "low"))
                .with_payload(Payload::new("asset.usd"))
                .with_child(
                    Prim::new("Cube", "Cube").with_attribute(
                        Attribute::new("size", ValueType::Double)
                            .with_value(AttributeValue::Double(2.0))
                            .with_time_sample(1.0, AttributeValue::Double(2.0))
                            .with_time_sample(10.0, AttributeValue::Double(4.0)),
                    ),
                ),
        );
        stage
    }

    #[test]
    fn test_export_import_round_trip_is_byte_identical() {
        let mut stage = sample_stage();
        let exported = export_text(&stage).unwrap();
        import_text(&mut stage, &exported).unwrap();
        assert_eq!(export_text(&stage).unwrap(), exported);
    }

    #[test]
    fn test_import_restores_full_structure() {
        let source = sample_stage();
        let text = export_text(&source).unwrap();

        let mut target = Stage::in_memory();
        import_text(&mut target, &text).unwrap();

        assert_eq!(target.identifier(), "scene.layer");
        let cube = target.prim_at_path(&PrimPath::new("/Asset/Cube")).unwrap();
        assert_eq!(cube.attribute("size").unwrap().time_samples.len(), 2);
        assert_eq!(target.pseudo_root(), source.pseudo_root());
    }

    #[test]
    fn test_failed_import_rejects_wholesale() {
        let mut stage = sample_stage();
        let before = export_text(&stage).unwrap();

        let result = import_text(&mut stage, "{\"version\": \"1.0\"");
        assert!(matches!(result, Err(EditError::ParseError(_))));
        assert_eq!(export_text(&stage).unwrap(), before);
    }
}
