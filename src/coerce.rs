//! Text-to-typed-value coercion
//!
//! Every edit boundary in the editor is untyped text; this module is the
//! single place that turns that text into a typed value per the declared
//! attribute type. Pure functions, never touch the stage.

use glam::{DVec3, Vec3};
use log::warn;

use crate::error::EditError;
use crate::stage::value::{AttributeValue, ValueType};

/// Coerce editable text into a typed value per the declared type
///
/// Bool coercion is total: `true`, `1`, `yes`, `on` (case-insensitive) are
/// true and everything else is false. Unsupported declared types signal
/// `UnsupportedType`; callers that want the best-effort policy use
/// [`coerce_or_fallback`].
pub fn coerce(text: &str, value_type: &ValueType) -> Result<AttributeValue, EditError> {
    match value_type {
        ValueType::Bool => Ok(AttributeValue::Bool(parse_bool(text))),
        ValueType::Int => text
            .trim()
            .parse::<i32>()
            .map(AttributeValue::Int)
            .map_err(|_| EditError::InvalidNumber(text.to_string())),
        ValueType::UInt => text
            .trim()
            .parse::<u32>()
            .map(AttributeValue::UInt)
            .map_err(|_| EditError::InvalidNumber(text.to_string())),
        ValueType::Float => text
            .trim()
            .parse::<f32>()
            .map(AttributeValue::Float)
            .map_err(|_| EditError::InvalidNumber(text.to_string())),
        ValueType::Double => text
            .trim()
            .parse::<f64>()
            .map(AttributeValue::Double)
            .map_err(|_| EditError::InvalidNumber(text.to_string())),
        ValueType::String => Ok(AttributeValue::String(text.to_string())),
        ValueType::Token => Ok(AttributeValue::Token(text.to_string())),
        ValueType::Vector3f => parse_vec3f(text).map(AttributeValue::Vector3f),
        ValueType::Vector3d => parse_vec3d(text).map(AttributeValue::Vector3d),
        ValueType::Color3f => parse_vec3f(text).map(AttributeValue::Color3f),
        ValueType::Other(name) => Err(EditError::UnsupportedType(name.clone())),
    }
}

/// Coerce with the editor's best-effort policy: an unsupported declared type
/// stores the raw text as a string value instead of aborting the edit.
/// Hard coercion failures still propagate.
pub fn coerce_or_fallback(text: &str, value_type: &ValueType) -> Result<AttributeValue, EditError> {
    match coerce(text, value_type) {
        Err(EditError::UnsupportedType(name)) => {
            warn!("unsupported type {}, storing value as string", name);
            Ok(AttributeValue::String(text.to_string()))
        }
        other => other,
    }
}

fn parse_bool(text: &str) -> bool {
    matches!(
        text.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// Split `(a, b, c)` text into exactly three float components; the
/// surrounding parens are optional
fn parse_components(text: &str) -> Result<[f64; 3], EditError> {
    let trimmed = text.trim().trim_start_matches('(').trim_end_matches(')');
    let parts: Vec<&str> = trimmed.split(',').collect();
    if parts.len() != 3 {
        return Err(EditError::InvalidVector(text.to_string()));
    }

    let mut components = [0.0f64; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<f64>()
            .map_err(|_| EditError::InvalidVector(text.to_string()))?;
    }
    Ok(components)
}

fn parse_vec3f(text: &str) -> Result<Vec3, EditError> {
    let [x, y, z] = parse_components(text)?;
    Ok(Vec3::new(x as f32, y as f32, z as f32))
}

fn parse_vec3d(text: &str) -> Result<DVec3, EditError> {
    let [x, y, z] = parse_components(text)?;
    Ok(DVec3::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_coercion_is_total() {
        for truthy in ["true", "TRUE", "1", "yes", "On"] {
            assert_eq!(
                coerce(truthy, &ValueType::Bool).unwrap(),
                AttributeValue::Bool(true)
            );
        }
        // Lenient by design: unrecognized text is false, not an error
        assert_eq!(
            coerce("banana", &ValueType::Bool).unwrap(),
            AttributeValue::Bool(false)
        );
        assert_eq!(
            coerce("false", &ValueType::Bool).unwrap(),
            AttributeValue::Bool(false)
        );
    }

    #[test]
    fn test_numeric_coercion() {
        assert_eq!(coerce("42", &ValueType::Int).unwrap(), AttributeValue::Int(42));
        assert_eq!(coerce("7", &ValueType::UInt).unwrap(), AttributeValue::UInt(7));
        assert_eq!(
            coerce("1.5", &ValueType::Float).unwrap(),
            AttributeValue::Float(1.5)
        );
        assert_eq!(
            coerce("-2.25", &ValueType::Double).unwrap(),
            AttributeValue::Double(-2.25)
        );
        assert!(matches!(
            coerce("banana", &ValueType::Int),
            Err(EditError::InvalidNumber(_))
        ));
        assert!(matches!(
            coerce("-1", &ValueType::UInt),
            Err(EditError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_vector_coercion() {
        assert_eq!(
            coerce("(1.5, 2.0, -3.25)", &ValueType::Vector3f).unwrap(),
            AttributeValue::Vector3f(Vec3::new(1.5, 2.0, -3.25))
        );
        // Parens are optional at the boundary
        assert_eq!(
            coerce("0.1, 0.2, 0.3", &ValueType::Color3f).unwrap(),
            AttributeValue::Color3f(Vec3::new(0.1, 0.2, 0.3))
        );
        assert_eq!(
            coerce("(1, 2, 3)", &ValueType::Vector3d).unwrap(),
            AttributeValue::Vector3d(DVec3::new(1.0, 2.0, 3.0))
        );
    }

    #[test]
    fn test_vector_coercion_rejects_wrong_arity() {
        assert!(matches!(
            coerce("3.0,4.0", &ValueType::Vector3f),
            Err(EditError::InvalidVector(_))
        ));
        assert!(matches!(
            coerce("(1, 2, 3, 4)", &ValueType::Vector3f),
            Err(EditError::InvalidVector(_))
        ));
        assert!(matches!(
            coerce("(1, banana, 3)", &ValueType::Color3f),
            Err(EditError::InvalidVector(_))
        ));
    }

    #[test]
    fn test_unsupported_type_falls_back_to_string() {
        let declared = ValueType::Other("matrix4d".to_string());
        assert!(matches!(
            coerce("whatever", &declared),
            Err(EditError::UnsupportedType(_))
        ));
        assert_eq!(
            coerce_or_fallback("whatever", &declared).unwrap(),
            AttributeValue::String("whatever".to_string())
        );
    }

    #[test]
    fn test_coercion_round_trip_through_display_text() {
        let cases = [
            (AttributeValue::Int(-7), ValueType::Int),
            (AttributeValue::UInt(19), ValueType::UInt),
            (AttributeValue::Float(1.5), ValueType::Float),
            (AttributeValue::Double(-3.25), ValueType::Double),
            (
                AttributeValue::Vector3f(Vec3::new(1.5, 2.0, -3.25)),
                ValueType::Vector3f,
            ),
            (
                AttributeValue::Vector3d(DVec3::new(0.5, -1.0, 2.75)),
                ValueType::Vector3d,
            ),
            (
                AttributeValue::Color3f(Vec3::new(0.25, 0.5, 1.0)),
                ValueType::Color3f,
            ),
        ];

        for (value, value_type) in cases {
            assert_eq!(coerce(&value.display_text(), &value_type).unwrap(), value);
        }
    }
}
