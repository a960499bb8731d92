//! Recursive walk of a template and a candidate in lockstep.
//!
//! The core entry point is [`compare`]; [`find_missing_fields`] is the same
//! walk rendered to descriptor strings.

use crate::compare::model::{Container, MissingField, MissingFieldKind, MissingFieldReport};
use crate::compare::path::FieldPath;
use crate::json_kind::classify;
use serde_json::{Map, Value};

/// Compare `candidate` against `template` from the document root.
///
/// Neither value is mutated. A non-object `template` requires nothing and
/// yields an empty report; a non-object `candidate` is missing every key
/// the template requires.
pub fn compare(candidate: &Value, template: &Value) -> MissingFieldReport {
    compare_at(candidate, template, &FieldPath::root())
}

/// Compare with every reported path prefixed by `prefix`.
pub fn compare_at(candidate: &Value, template: &Value, prefix: &FieldPath) -> MissingFieldReport {
    let mut missing = Vec::new();
    if let Value::Object(required) = template {
        walk_object(candidate.as_object(), required, prefix, &mut missing);
    }
    MissingFieldReport::new(missing)
}

/// Descriptor strings for every missing field, in report order.
pub fn find_missing_fields(candidate: &Value, template: &Value) -> Vec<String> {
    compare(candidate, template).to_strings()
}

/// [`find_missing_fields`] with a path prefix (empty string for the root).
pub fn find_missing_fields_at(candidate: &Value, template: &Value, prefix: &str) -> Vec<String> {
    compare_at(candidate, template, &FieldPath::from_prefix(prefix)).to_strings()
}

fn walk_object(
    candidate: Option<&Map<String, Value>>,
    required: &Map<String, Value>,
    prefix: &FieldPath,
    missing: &mut Vec<MissingField>,
) {
    for (key, expected) in required {
        let path = prefix.child(key);

        let Some(actual) = candidate.and_then(|fields| fields.get(key)) else {
            missing.push(MissingField::absent(path));
            continue;
        };

        match expected {
            Value::Array(item_templates) => walk_array(actual, item_templates, path, missing),
            Value::Object(nested) => match actual {
                Value::Object(fields) => walk_object(Some(fields), nested, &path, missing),
                other => missing.push(MissingField::new(
                    path,
                    MissingFieldKind::ContainerTypeMismatch {
                        expected: Container::Object,
                        found: classify(other),
                    },
                )),
            },
            // presence is all a primitive requires
            _ => {}
        }
    }
}

fn walk_array(
    actual: &Value,
    item_templates: &[Value],
    path: FieldPath,
    missing: &mut Vec<MissingField>,
) {
    let Value::Array(items) = actual else {
        missing.push(MissingField::new(
            path,
            MissingFieldKind::ContainerTypeMismatch {
                expected: Container::Array,
                found: classify(actual),
            },
        ));
        return;
    };

    // Only an object first element describes per-item structure.
    let Some(Value::Object(item_shape)) = item_templates.first() else {
        return;
    };

    if items.is_empty() {
        if !item_shape.is_empty() {
            missing.push(MissingField::new(
                path.index(0),
                MissingFieldKind::EmptyRequiredArray,
            ));
        }
        return;
    }

    for (index, item) in items.iter().enumerate() {
        let item_path = path.index(index);
        match item {
            Value::Object(fields) => walk_object(Some(fields), item_shape, &item_path, missing),
            other => missing.push(MissingField::new(
                item_path,
                MissingFieldKind::NonObjectArrayItem {
                    found: classify(other),
                },
            )),
        }
    }
}
