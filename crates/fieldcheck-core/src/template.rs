//! Template provider
//!
//! A template is any JSON object; the comparator treats its keys as required
//! fields. [`Template::reference`] is the built-in company/shareholder
//! template, and any other template can be parsed or loaded from a file.

use crate::errors::{FieldCheckError, Result};
use crate::json_kind::{classify, JsonKind};
use serde_json::{json, Value};
use std::path::Path;

/// A validated template whose root is a JSON object
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    root: Value,
}

impl Template {
    /// Wrap a template value
    ///
    /// # Errors
    ///
    /// `TemplateNotObject` if the root is not a JSON object.
    pub fn from_value(root: Value) -> Result<Self> {
        match classify(&root) {
            JsonKind::Object => Ok(Self { root }),
            found => Err(FieldCheckError::TemplateNotObject { found }),
        }
    }

    /// Parse a template from JSON text
    ///
    /// # Errors
    ///
    /// `InvalidTemplate` on malformed JSON, `TemplateNotObject` on a
    /// non-object root.
    pub fn parse(text: &str) -> Result<Self> {
        let root: Value =
            serde_json::from_str(text).map_err(|e| FieldCheckError::InvalidTemplate {
                reason: e.to_string(),
            })?;
        Self::from_value(root)
    }

    /// Load a template from a JSON file
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as [`Template::parse`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| FieldCheckError::io(path, &e))?;
        let template = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), "loaded template");
        Ok(template)
    }

    /// The built-in reference template: company addresses and shareholders
    pub fn reference() -> Self {
        Self {
            root: json!({
                "companyAddresses": [
                    {
                        "action": "ADD",
                        "data": {
                            "addressLine1": "test",
                            "city": "pricent",
                            "country": "China",
                            "state": "test",
                            "type": "COMPANY_ADDRESS",
                            "zipCode": "1233333"
                        }
                    }
                ],
                "shareholders": [
                    {
                        "action": "ADD",
                        "data": {
                            "address": {
                                "addressLine1": "testAddress1",
                                "city": "privent",
                                "state": "Lagos State",
                                "country": "China",
                                "type": "HOME_ADDRESS",
                                "zipCode": "200000"
                            },
                            "dateOfBirth": "2007-05-01",
                            "firstName": "testname",
                            "lastName": "name",
                            "nationality": "China",
                            "ownerType": "INDIVIDUAL"
                        }
                    }
                ]
            }),
        }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}

impl Default for Template {
    fn default() -> Self {
        Self::reference()
    }
}
