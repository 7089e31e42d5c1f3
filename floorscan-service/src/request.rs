//! JSON request parsing
//!
//! Requests arrive as loosely typed JSON objects. Parsing checks them in a
//! fixed order so callers always see the same error for the same input:
//! paths, transforms, output path, counts, then each transform.

use floorscan_core::{Error, Result, ScanTransform};
use serde_json::{Map, Value};

/// Request to combine several scans into one scene
#[derive(Debug, Clone, PartialEq)]
pub struct CombineRequest {
    pub paths: Vec<String>,
    pub transforms: Vec<ScanTransform>,
    pub output_path: String,
}

/// Request to extract the floor outline of one scan
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineRequest {
    pub path: String,
    pub floor_epsilon: Option<f64>,
    pub simplify_tolerance: Option<f64>,
}

fn as_object(value: &Value) -> Result<&Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::validation("request must be a JSON object"))
}

fn non_empty_string(object: &Map<String, Value>, key: &str) -> Result<String> {
    match object.get(key).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(Error::validation(format!("{} must be a non-empty string", key))),
    }
}

fn non_empty_array<'a>(object: &'a Map<String, Value>, key: &str, what: &str) -> Result<&'a Vec<Value>> {
    match object.get(key).and_then(Value::as_array) {
        Some(items) if !items.is_empty() => Ok(items),
        _ => Err(Error::validation(format!("{} must be a non-empty array of {}", key, what))),
    }
}

fn optional_number(object: &Map<String, Value>, key: &str) -> Result<Option<f64>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_f64()
            .map(Some)
            .ok_or_else(|| Error::validation(format!("{} must be a number", key))),
    }
}

/// Parse one `{positionX, positionY, rotation, scale}` object
///
/// Every field must be present and numeric. Range checks (finite values,
/// positive scale) happen when the transform is resolved to a pose.
pub fn parse_transform(value: &Value) -> Result<ScanTransform> {
    let object = value
        .as_object()
        .ok_or_else(|| Error::validation("transform must be an object"))?;
    let field = |key: &str| {
        object
            .get(key)
            .and_then(Value::as_f64)
            .ok_or_else(|| Error::validation(format!("{} must be a number", key)))
    };
    Ok(ScanTransform::new(
        field("positionX")?,
        field("positionY")?,
        field("rotation")?,
        field("scale")?,
    ))
}

impl CombineRequest {
    /// Parse `{ "paths": [...], "transforms": [...], "outputPath": "..." }`
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = as_object(value)?;

        let paths = non_empty_array(object, "paths", "strings")?
            .iter()
            .enumerate()
            .map(|(i, p)| {
                p.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| Error::validation("paths must contain only strings").at_index(i))
            })
            .collect::<Result<Vec<_>>>()?;
        let raw_transforms = non_empty_array(object, "transforms", "objects")?;
        let output_path = non_empty_string(object, "outputPath")?;

        if paths.len() != raw_transforms.len() {
            return Err(Error::ArgumentMismatch {
                paths: paths.len(),
                transforms: raw_transforms.len(),
            });
        }

        let transforms = raw_transforms
            .iter()
            .enumerate()
            .map(|(i, t)| parse_transform(t).map_err(|e| e.at_index(i)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            paths,
            transforms,
            output_path,
        })
    }
}

impl OutlineRequest {
    /// Parse `{ "path": "...", "floorEpsilon"?: n, "simplifyTolerance"?: n }`
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = as_object(value)?;
        Ok(Self {
            path: non_empty_string(object, "path")?,
            floor_epsilon: optional_number(object, "floorEpsilon")?,
            simplify_tolerance: optional_number(object, "simplifyTolerance")?,
        })
    }
}
