#![allow(clippy::unwrap_used, clippy::expect_used)]

use fieldcheck_core::compare::{compare, find_missing_fields, MissingFieldKind};
use fieldcheck_core::samples;
use fieldcheck_core::{JsonKind, Template};
use serde_json::{json, Value};

fn reference() -> Value {
    Template::reference().into_value()
}

#[test]
fn test_full_match_against_reference_template() {
    // Scenario: every required field present
    let candidate = json!({
        "companyAddresses": [{
            "action": "ADD",
            "data": {
                "addressLine1": "a", "city": "b", "country": "c",
                "state": "d", "type": "COMPANY_ADDRESS", "zipCode": "e"
            }
        }],
        "shareholders": [{
            "action": "ADD",
            "data": {
                "address": {
                    "addressLine1": "a", "city": "b", "state": "c",
                    "country": "d", "type": "HOME_ADDRESS", "zipCode": "e"
                },
                "dateOfBirth": "1990-01-01",
                "firstName": "J",
                "lastName": "D",
                "nationality": "US",
                "ownerType": "INDIVIDUAL"
            }
        }]
    });

    assert!(find_missing_fields(&candidate, &reference()).is_empty());
}

#[test]
fn test_missing_nested_and_absent_fields() {
    // Scenario: fields removed at several depths, reported in template key order
    let candidate = json!({
        "companyAddresses": [{
            "action": "ADD",
            "data": {
                "city": "b", "country": "c", "state": "d",
                "type": "COMPANY_ADDRESS", "zipCode": "e"
            }
        }],
        "shareholders": [{
            "action": "ADD",
            "data": {
                "address": {
                    "addressLine1": "a", "state": "c", "country": "d",
                    "type": "HOME_ADDRESS", "zipCode": "e"
                },
                "firstName": "J",
                "nationality": "US"
            }
        }]
    });

    assert_eq!(
        find_missing_fields(&candidate, &reference()),
        vec![
            "companyAddresses[0].data.addressLine1",
            "shareholders[0].data.address.city",
            "shareholders[0].data.dateOfBirth",
            "shareholders[0].data.lastName",
            "shareholders[0].data.ownerType",
        ]
    );
}

#[test]
fn test_wrong_container_type() {
    let mut candidate = samples::correct();
    candidate["companyAddresses"] = json!("none");

    let missing = find_missing_fields(&candidate, &reference());
    assert!(missing.contains(&"companyAddresses (expected an array, but found string)".to_string()));
    assert_eq!(missing.len(), 1);
}

#[test]
fn test_empty_array_needing_structure() {
    let mut candidate = samples::correct();
    candidate["shareholders"] = json!([]);

    assert_eq!(
        find_missing_fields(&candidate, &reference()),
        vec!["shareholders[0] (array is empty, but expected items with structure)"]
    );
}

#[test]
fn test_non_object_array_item() {
    let mut candidate = samples::correct();
    candidate["shareholders"] = json!(["x"]);

    let report = compare(&candidate, &reference());
    assert_eq!(report.len(), 1);
    let field = report.iter().next().unwrap();
    assert_eq!(field.path.as_str(), "shareholders[0]");
    assert_eq!(
        field.kind,
        MissingFieldKind::NonObjectArrayItem {
            found: JsonKind::String
        }
    );
    assert_eq!(
        field.to_string(),
        "shareholders[0] (expected an object within array, but found string)"
    );
}

#[test]
fn test_each_candidate_item_is_checked() {
    let mut candidate = samples::correct();
    let first = candidate["shareholders"][0].clone();
    let mut second = first.clone();
    second["data"]
        .as_object_mut()
        .unwrap()
        .remove("nationality");
    candidate["shareholders"] = json!([first, second, null]);

    assert_eq!(
        find_missing_fields(&candidate, &reference()),
        vec![
            "shareholders[1].data.nationality",
            "shareholders[2] (expected an object within array, but found null)",
        ]
    );
}

#[test]
fn test_data_of_wrong_type_inside_array_item() {
    let mut candidate = samples::correct();
    candidate["companyAddresses"][0]["data"] = json!(42);

    assert_eq!(
        find_missing_fields(&candidate, &reference()),
        vec!["companyAddresses[0].data (expected an object, but found number)"]
    );
}

#[test]
fn test_empty_document_misses_both_top_level_arrays() {
    assert_eq!(
        find_missing_fields(&json!({}), &reference()),
        vec!["companyAddresses", "shareholders"]
    );
}

#[test]
fn test_correct_sample_matches() {
    assert!(compare(&samples::correct(), &reference()).is_empty());
}

#[test]
fn test_incorrect_sample_reports_five_fields() {
    assert_eq!(
        find_missing_fields(&samples::incorrect(), &reference()),
        vec![
            "companyAddresses[0].data.addressLine1",
            "shareholders[0].data.address.city",
            "shareholders[0].data.dateOfBirth",
            "shareholders[0].data.lastName",
            "shareholders[0].data.ownerType",
        ]
    );
}

#[test]
fn test_primitive_values_are_not_type_checked() {
    let mut candidate = samples::correct();
    candidate["shareholders"][0]["data"]["dateOfBirth"] = json!(19900101);
    candidate["shareholders"][0]["action"] = json!(null);

    assert!(compare(&candidate, &reference()).is_empty());
}

#[test]
fn test_extra_fields_are_ignored() {
    let mut candidate = samples::correct();
    candidate["unexpected"] = json!({"anything": [1, 2, 3]});
    candidate["shareholders"][0]["data"]["middleName"] = json!("Q");

    assert!(compare(&candidate, &reference()).is_empty());
}

#[test]
fn test_concurrent_invocations_agree() {
    let template = reference();
    let candidate = samples::incorrect();
    let expected = find_missing_fields(&candidate, &template);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| find_missing_fields(&candidate, &template)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
