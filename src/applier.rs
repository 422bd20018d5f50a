//! Edit application: validated facet edits committed back into the stage
//!
//! Every operation re-resolves its target path first and fails with
//! `StalePath` when the prim is gone. Mutations go through the stage's
//! native setters and leave nothing half-written on validation failure.
//! The applier never refreshes derived state; the caller re-projects after
//! every successful edit.

use log::{debug, warn};

use crate::coerce::coerce_or_fallback;
use crate::error::EditError;
use crate::inspector::list_variant_sets;
use crate::stage::value::{
    is_primvar_name, Attribute, AttributeValue, Interpolation, Primvar, ValueType, PRIMVAR_PREFIX,
};
use crate::stage::{Prim, PrimPath, Purpose, Stage};

fn resolve<'a>(stage: &'a mut Stage, path: &PrimPath) -> Result<&'a mut Prim, EditError> {
    stage
        .prim_at_path_mut(path)
        .ok_or_else(|| EditError::StalePath(path.to_string()))
}

/// Author a kind on the prim; any string is accepted, the suggestion list
/// in the session is advisory UI vocabulary only
pub fn set_kind(stage: &mut Stage, path: &PrimPath, kind: &str) -> Result<(), EditError> {
    let prim = resolve(stage, path)?;
    prim.kind = kind.to_string();
    debug!("set kind {:?} on {}", kind, path);
    Ok(())
}

/// Author a purpose; fails with `CapabilityMissing` on non-imageable prims
pub fn set_purpose(stage: &mut Stage, path: &PrimPath, purpose: Purpose) -> Result<(), EditError> {
    let prim = resolve(stage, path)?;
    if !prim.imageable {
        return Err(EditError::CapabilityMissing(path.to_string()));
    }
    prim.purpose = Some(purpose);
    debug!("set purpose {} on {}", purpose, path);
    Ok(())
}

/// Select a variant, validated against a just-read snapshot of the prim's
/// variant sets. An empty variant name clears the selection.
///
/// A concurrent external mutation between the snapshot and the write can
/// still race; accepted under the single-threaded, single-writer model.
pub fn set_variant_selection(
    stage: &mut Stage,
    path: &PrimPath,
    set_name: &str,
    variant: &str,
) -> Result<(), EditError> {
    let prim = resolve(stage, path)?;

    let snapshot = list_variant_sets(prim);
    let info = snapshot
        .iter()
        .find(|vs| vs.name == set_name)
        .ok_or_else(|| EditError::UnknownVariantSet(set_name.to_string()))?;
    if !variant.is_empty() && !info.variants.iter().any(|v| v == variant) {
        return Err(EditError::UnknownVariant {
            set: set_name.to_string(),
            variant: variant.to_string(),
        });
    }

    if let Some(vs) = prim.variant_set_mut(set_name) {
        vs.selection = variant.to_string();
        debug!("selected variant {:?} in set {} on {}", variant, set_name, path);
    }
    Ok(())
}

/// Load the prim's payload; a prim without a payload is a no-op, not an
/// error
pub fn load_payload(stage: &mut Stage, path: &PrimPath) -> Result<(), EditError> {
    resolve(stage, path)?;
    stage.load(path);
    Ok(())
}

/// Unload the prim's payload; no-op without one
pub fn unload_payload(stage: &mut Stage, path: &PrimPath) -> Result<(), EditError> {
    resolve(stage, path)?;
    stage.unload(path);
    Ok(())
}

/// Write a property's default value from editable text
pub fn set_attribute_value(
    stage: &mut Stage,
    path: &PrimPath,
    name: &str,
    text: &str,
) -> Result<(), EditError> {
    write_value(stage, path, name, None, text)
}

/// Write a primvar's value; same resolution as [`set_attribute_value`],
/// kept separate to mirror the edit surface
pub fn set_primvar_value(
    stage: &mut Stage,
    path: &PrimPath,
    name: &str,
    text: &str,
) -> Result<(), EditError> {
    write_value(stage, path, name, None, text)
}

/// Write a property's value at a specific time, replacing any existing
/// sample at that exact time
pub fn set_time_sample_value(
    stage: &mut Stage,
    path: &PrimPath,
    name: &str,
    time: f64,
    text: &str,
) -> Result<(), EditError> {
    write_value(stage, path, name, Some(time), text)
}

/// Shared write path: primvar-named properties resolve in the primvar
/// namespace, everything else in the ordinary attribute namespace
fn write_value(
    stage: &mut Stage,
    path: &PrimPath,
    name: &str,
    time: Option<f64>,
    text: &str,
) -> Result<(), EditError> {
    let prim = resolve(stage, path)?;

    let attribute = if is_primvar_name(name) {
        prim.primvar_mut(name).map(|pv| &mut pv.attribute)
    } else {
        prim.attribute_mut(name)
    }
    .ok_or_else(|| EditError::PropertyNotFound(name.to_string()))?;

    // Coerce against the declared type before touching the stored value
    let value = coerce_or_fallback(text, &attribute.value_type)?;
    match time {
        Some(time) => {
            attribute.set_time_sample(time, value);
            debug!("set {} = {:?} at time {} on {}", name, text, time, path);
        }
        None => {
            attribute.value = Some(value);
            debug!("set {} = {:?} on {}", name, text, path);
        }
    }
    Ok(())
}

/// Create a custom string-typed attribute holding `text`
pub fn create_attribute(
    stage: &mut Stage,
    path: &PrimPath,
    name: &str,
    text: &str,
) -> Result<(), EditError> {
    let prim = resolve(stage, path)?;
    if prim.has_property(name) {
        return Err(EditError::DuplicateName(name.to_string()));
    }

    prim.attributes.push(
        Attribute::new(name, ValueType::String)
            .with_value(AttributeValue::String(text.to_string()))
            .custom(),
    );
    debug!("created attribute {} on {}", name, path);
    Ok(())
}

/// Create a custom string-typed primvar holding `text`; the name is
/// normalized into the primvar namespace
pub fn create_primvar(
    stage: &mut Stage,
    path: &PrimPath,
    name: &str,
    text: &str,
) -> Result<(), EditError> {
    let full_name = if is_primvar_name(name) {
        name.to_string()
    } else {
        format!("{}{}", PRIMVAR_PREFIX, name)
    };

    let prim = resolve(stage, path)?;
    if prim.has_property(&full_name) {
        return Err(EditError::DuplicateName(full_name));
    }

    prim.primvars.push(Primvar::new(
        Attribute::new(&full_name, ValueType::String)
            .with_value(AttributeValue::String(text.to_string()))
            .custom(),
        Interpolation::Constant,
    ));
    debug!("created primvar {} on {}", full_name, path);
    Ok(())
}

/// Remove a property: primvar-named properties go through the primvar
/// removal path, others through generic attribute removal
pub fn remove_property(stage: &mut Stage, path: &PrimPath, name: &str) -> Result<(), EditError> {
    let prim = resolve(stage, path)?;

    let removed = if is_primvar_name(name) {
        prim.remove_primvar(name)
    } else {
        prim.remove_attribute(name)
    };
    if !removed {
        warn!("remove requested for missing property {} on {}", name, path);
        return Err(EditError::PropertyNotFound(name.to_string()));
    }
    debug!("removed property {} on {}", name, path);
    Ok(())
}
