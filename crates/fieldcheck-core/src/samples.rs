//! Pre-filled example documents for the reference template.
//!
//! `correct` satisfies the template; `incorrect` drops five required fields
//! and changes a few values (which the comparator ignores).

use crate::errors::FieldCheckError;
use serde_json::{json, Value};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Correct,
    Incorrect,
}

impl Sample {
    pub fn document(&self) -> Value {
        match self {
            Sample::Correct => correct(),
            Sample::Incorrect => incorrect(),
        }
    }
}

impl FromStr for Sample {
    type Err = FieldCheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "correct" => Ok(Sample::Correct),
            "incorrect" => Ok(Sample::Incorrect),
            _ => Err(FieldCheckError::UnknownSample {
                name: s.to_string(),
            }),
        }
    }
}

/// A document with every field the reference template requires
pub fn correct() -> Value {
    json!({
        "companyAddresses": [
            {
                "action": "ADD",
                "data": {
                    "addressLine1": "123 Main St",
                    "city": "Anytown",
                    "country": "USA",
                    "state": "CA",
                    "type": "COMPANY_ADDRESS",
                    "zipCode": "90210"
                }
            }
        ],
        "shareholders": [
            {
                "action": "ADD",
                "data": {
                    "address": {
                        "addressLine1": "456 Oak Ave",
                        "city": "Otherville",
                        "state": "NY",
                        "country": "USA",
                        "type": "HOME_ADDRESS",
                        "zipCode": "10001"
                    },
                    "dateOfBirth": "1990-01-15",
                    "firstName": "John",
                    "lastName": "Doe",
                    "nationality": "USA",
                    "ownerType": "INDIVIDUAL"
                }
            }
        ]
    })
}

/// A document missing addressLine1, address.city, dateOfBirth, lastName
/// and ownerType
pub fn incorrect() -> Value {
    json!({
        "companyAddresses": [
            {
                "action": "UPDATE",
                "data": {
                    "city": "Lostville",
                    "country": "Canada",
                    "state": "BC",
                    "type": "BRANCH_OFFICE",
                    "zipCode": "V6C1G5"
                }
            }
        ],
        "shareholders": [
            {
                "action": "ADD",
                "data": {
                    "address": {
                        "addressLine1": "789 Pine Rd",
                        "state": "FL",
                        "country": "USA",
                        "type": "SECONDARY_ADDRESS",
                        "zipCode": "33101"
                    },
                    "firstName": "Jane",
                    "nationality": "UK"
                }
            }
        ]
    })
}
