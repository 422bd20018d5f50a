//! Typed attribute values, declared value types, and time samples

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};

/// Namespace prefix that marks a property name as a primvar
pub const PRIMVAR_PREFIX: &str = "primvars:";

/// Check whether a property name is in the primvar namespace
pub fn is_primvar_name(name: &str) -> bool {
    name.starts_with(PRIMVAR_PREFIX)
}

/// Declared value type of an attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueType {
    Bool,
    Int,
    UInt,
    Float,
    Double,
    String,
    Token,
    Vector3f,
    Vector3d,
    Color3f,
    /// Any declared type the editor cannot coerce (matrix4d, timecode, ...)
    Other(String),
}

impl ValueType {
    /// The type token as it appears in layer text and property listings
    pub fn token(&self) -> &str {
        match self {
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::UInt => "uint",
            ValueType::Float => "float",
            ValueType::Double => "double",
            ValueType::String => "string",
            ValueType::Token => "token",
            ValueType::Vector3f => "vector3f",
            ValueType::Vector3d => "vector3d",
            ValueType::Color3f => "color3f",
            ValueType::Other(name) => name,
        }
    }

    /// Parse a type token; unknown tokens become `Other`
    pub fn from_token(token: &str) -> Self {
        match token {
            "bool" => ValueType::Bool,
            "int" => ValueType::Int,
            "uint" => ValueType::UInt,
            "float" => ValueType::Float,
            "double" => ValueType::Double,
            "string" => ValueType::String,
            "token" => ValueType::Token,
            "vector3f" => ValueType::Vector3f,
            "vector3d" => ValueType::Vector3d,
            "color3f" => ValueType::Color3f,
            other => ValueType::Other(other.to_string()),
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A typed attribute value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttributeValue {
    Bool(bool),
    Int(i32),
    UInt(u32),
    Float(f32),
    Double(f64),
    String(String),
    Token(String),
    Vector3f(Vec3),
    Vector3d(DVec3),
    Color3f(Vec3),
    /// A frame-time value; only ever read back, never coerced from text
    TimeCode(f64),
}

impl AttributeValue {
    /// Human-editable text form; vectors render as `(x, y, z)`
    pub fn display_text(&self) -> String {
        match self {
            AttributeValue::Bool(v) => v.to_string(),
            AttributeValue::Int(v) => v.to_string(),
            AttributeValue::UInt(v) => v.to_string(),
            AttributeValue::Float(v) => v.to_string(),
            AttributeValue::Double(v) => v.to_string(),
            AttributeValue::String(v) => v.clone(),
            AttributeValue::Token(v) => v.clone(),
            AttributeValue::Vector3f(v) => format!("({}, {}, {})", v.x, v.y, v.z),
            AttributeValue::Vector3d(v) => format!("({}, {}, {})", v.x, v.y, v.z),
            AttributeValue::Color3f(v) => format!("({}, {}, {})", v.x, v.y, v.z),
            AttributeValue::TimeCode(v) => v.to_string(),
        }
    }
}

/// One (time, value) pair on an attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSample {
    pub time: f64,
    pub value: AttributeValue,
}

/// A named, typed property on a prim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value_type: ValueType,
    /// Authored default value, None when nothing is authored
    pub value: Option<AttributeValue>,
    /// Kept sorted ascending by time; one value per time
    pub time_samples: Vec<TimeSample>,
    /// True for user-authored attributes, false for schema-defined ones
    pub custom: bool,
}

impl Attribute {
    pub fn new(name: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            value_type,
            value: None,
            time_samples: Vec::new(),
            custom: false,
        }
    }

    pub fn with_value(mut self, value: AttributeValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn custom(mut self) -> Self {
        self.custom = true;
        self
    }

    /// Display text of the default value, empty when unauthored
    pub fn value_text(&self) -> String {
        self.value
            .as_ref()
            .map(|v| v.display_text())
            .unwrap_or_default()
    }

    pub fn has_time_samples(&self) -> bool {
        !self.time_samples.is_empty()
    }

    /// Write a value at a specific time, replacing an existing sample at
    /// that exact time and keeping the sample list ascending
    pub fn set_time_sample(&mut self, time: f64, value: AttributeValue) {
        match self
            .time_samples
            .binary_search_by(|sample| sample.time.total_cmp(&time))
        {
            Ok(idx) => self.time_samples[idx].value = value,
            Err(idx) => self.time_samples.insert(idx, TimeSample { time, value }),
        }
    }

    /// Convenience for seeding samples in document construction
    pub fn with_time_sample(mut self, time: f64, value: AttributeValue) -> Self {
        self.set_time_sample(time, value);
        self
    }
}

/// Interpolation mode of a primvar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interpolation {
    Constant,
    Uniform,
    Varying,
    Vertex,
    FaceVarying,
}

impl std::fmt::Display for Interpolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Interpolation::Constant => write!(f, "constant"),
            Interpolation::Uniform => write!(f, "uniform"),
            Interpolation::Varying => write!(f, "varying"),
            Interpolation::Vertex => write!(f, "vertex"),
            Interpolation::FaceVarying => write!(f, "faceVarying"),
        }
    }
}

/// An attribute additionally marked for interpolated-value semantics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primvar {
    pub attribute: Attribute,
    pub interpolation: Interpolation,
}

impl Primvar {
    pub fn new(attribute: Attribute, interpolation: Interpolation) -> Self {
        Self {
            attribute,
            interpolation,
        }
    }

    pub fn name(&self) -> &str {
        &self.attribute.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primvar_name_check() {
        assert!(is_primvar_name("primvars:displayColor"));
        assert!(!is_primvar_name("xformOp:translate"));
        assert!(!is_primvar_name("radius"));
    }

    #[test]
    fn test_value_type_token_round_trip() {
        for token in [
            "bool", "int", "uint", "float", "double", "string", "token", "vector3f", "vector3d",
            "color3f",
        ] {
            assert_eq!(ValueType::from_token(token).token(), token);
        }
        assert_eq!(
            ValueType::from_token("matrix4d"),
            ValueType::Other("matrix4d".to_string())
        );
    }

    #[test]
    fn test_vector_display_text() {
        let value = AttributeValue::Vector3f(Vec3::new(1.5, 2.0, -3.25));
        assert_eq!(value.display_text(), "(1.5, 2, -3.25)");
    }

    #[test]
    fn test_time_samples_stay_sorted_and_unique() {
        let mut attr = Attribute::new("radius", ValueType::Float);
        attr.set_time_sample(10.0, AttributeValue::Float(2.0));
        attr.set_time_sample(1.0, AttributeValue::Float(1.0));
        attr.set_time_sample(5.0, AttributeValue::Float(1.5));
        // Replacing at an existing time must not grow the list
        attr.set_time_sample(5.0, AttributeValue::Float(9.0));

        let times: Vec<f64> = attr.time_samples.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![1.0, 5.0, 10.0]);
        assert_eq!(attr.time_samples[1].value, AttributeValue::Float(9.0));
    }
}
