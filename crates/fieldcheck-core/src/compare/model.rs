//! Typed missing-field descriptors and the ordered report.

use crate::compare::path::FieldPath;
use crate::json_kind::JsonKind;
use serde::Serialize;
use std::fmt;

/// Container shape a template demands at a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Container {
    Array,
    Object,
}

impl Container {
    fn article_name(&self) -> &'static str {
        match self {
            Container::Array => "an array",
            Container::Object => "an object",
        }
    }
}

/// What was wrong at a reported path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MissingFieldKind {
    /// Required key absent
    MissingField,
    /// Field present but not the array/object the template requires
    ContainerTypeMismatch { expected: Container, found: JsonKind },
    /// Array present but empty while the template expects structured items
    EmptyRequiredArray,
    /// Array item is not an object
    NonObjectArrayItem { found: JsonKind },
}

/// One missing-field descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingField {
    pub path: FieldPath,
    #[serde(flatten)]
    pub kind: MissingFieldKind,
}

impl MissingField {
    pub fn new(path: FieldPath, kind: MissingFieldKind) -> Self {
        Self { path, kind }
    }

    pub fn absent(path: FieldPath) -> Self {
        Self::new(path, MissingFieldKind::MissingField)
    }
}

impl fmt::Display for MissingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MissingFieldKind::MissingField => write!(f, "{}", self.path),
            MissingFieldKind::ContainerTypeMismatch { expected, found } => write!(
                f,
                "{} (expected {}, but found {})",
                self.path,
                expected.article_name(),
                found
            ),
            MissingFieldKind::EmptyRequiredArray => write!(
                f,
                "{} (array is empty, but expected items with structure)",
                self.path
            ),
            MissingFieldKind::NonObjectArrayItem { found } => write!(
                f,
                "{} (expected an object within array, but found {})",
                self.path, found
            ),
        }
    }
}

/// Ordered sequence of missing-field descriptors
///
/// Empty if and only if the candidate satisfies the template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MissingFieldReport {
    fields: Vec<MissingField>,
}

impl MissingFieldReport {
    pub fn new(fields: Vec<MissingField>) -> Self {
        Self { fields }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MissingField> {
        self.fields.iter()
    }

    /// Human-readable descriptors, in report order
    pub fn to_strings(&self) -> Vec<String> {
        self.fields.iter().map(ToString::to_string).collect()
    }

    pub fn into_fields(self) -> Vec<MissingField> {
        self.fields
    }
}

impl IntoIterator for MissingFieldReport {
    type Item = MissingField;
    type IntoIter = std::vec::IntoIter<MissingField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl<'a> IntoIterator for &'a MissingFieldReport {
    type Item = &'a MissingField;
    type IntoIter = std::slice::Iter<'a, MissingField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn path(s: &str) -> FieldPath {
        FieldPath::from_prefix(s)
    }

    #[test]
    fn test_display_strings() {
        let cases = [
            (MissingField::absent(path("a.b")), "a.b"),
            (
                MissingField::new(
                    path("companyAddresses"),
                    MissingFieldKind::ContainerTypeMismatch {
                        expected: Container::Array,
                        found: JsonKind::String,
                    },
                ),
                "companyAddresses (expected an array, but found string)",
            ),
            (
                MissingField::new(
                    path("x.data"),
                    MissingFieldKind::ContainerTypeMismatch {
                        expected: Container::Object,
                        found: JsonKind::Null,
                    },
                ),
                "x.data (expected an object, but found null)",
            ),
            (
                MissingField::new(path("shareholders[0]"), MissingFieldKind::EmptyRequiredArray),
                "shareholders[0] (array is empty, but expected items with structure)",
            ),
            (
                MissingField::new(
                    path("shareholders[2]"),
                    MissingFieldKind::NonObjectArrayItem {
                        found: JsonKind::Number,
                    },
                ),
                "shareholders[2] (expected an object within array, but found number)",
            ),
        ];
        for (field, expected) in cases {
            assert_eq!(field.to_string(), expected);
        }
    }

    #[test]
    fn test_serialized_shape() {
        let field = MissingField::new(
            path("a"),
            MissingFieldKind::ContainerTypeMismatch {
                expected: Container::Object,
                found: JsonKind::Array,
            },
        );
        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(
            value,
            json!({
                "path": "a",
                "kind": "container_type_mismatch",
                "expected": "object",
                "found": "array"
            })
        );
    }

    #[test]
    fn test_report_accessors() {
        let report = MissingFieldReport::new(vec![
            MissingField::absent(path("a")),
            MissingField::absent(path("b")),
        ]);
        assert_eq!(report.len(), 2);
        assert!(!report.is_empty());
        assert_eq!(report.to_strings(), vec!["a", "b"]);
        assert!(MissingFieldReport::default().is_empty());
    }
}
