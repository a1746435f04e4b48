use crate::client::{extract_records, parse_validation_details};

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

#[test]
fn given_raw_array_when_extract_then_kept_as_is() {
    let body = json!([{ "id": 1 }, { "id": 2 }]);

    let records = extract_records(body, "avisos");

    assert_that!(records.len(), eq(2));
}

#[test]
fn given_entity_key_wrapper_when_extract_then_unwrapped() {
    let body = json!({ "avisos": [{ "id": 1 }] });

    let records = extract_records(body, "avisos");

    assert_that!(records.len(), eq(1));
}

#[test]
fn given_conventional_wrapper_keys_when_extract_then_first_array_wins() {
    for key in ["data", "items", "results"] {
        let body = json!({ key: [{ "id": 1 }, { "id": 2 }, { "id": 3 }] });

        let records = extract_records(body, "avisos");

        assert_that!(records.len(), eq(3));
    }
}

#[test]
fn given_entity_key_and_data_key_when_extract_then_entity_key_wins() {
    let body = json!({ "avisos": [{ "id": 1 }], "data": [] });

    let records = extract_records(body, "avisos");

    assert_that!(records.len(), eq(1));
}

#[test]
fn given_unrecognizable_body_when_extract_then_empty() {
    assert_that!(extract_records(json!({ "total": 3 }), "avisos").len(), eq(0));
    assert_that!(extract_records(json!("oops"), "avisos").len(), eq(0));
    assert_that!(extract_records(json!(null), "avisos").len(), eq(0));
}

// =========================================================================
// 422 detail parsing
// =========================================================================

#[test]
fn given_fastapi_detail_shape_when_parse_then_fields_extracted() {
    let body = json!({
        "detail": [
            { "loc": ["body", "titulo"], "msg": "field required" },
            { "loc": ["body", "mensagem"], "msg": "field required" }
        ]
    });

    let details = parse_validation_details(&body);

    assert_that!(details.len(), eq(2));
    assert_that!(details[0].field.as_str(), eq("titulo"));
    assert_that!(details[1].field.as_str(), eq("mensagem"));
}

#[test]
fn given_errors_map_shape_when_parse_then_fields_extracted() {
    let body = json!({
        "errors": { "email": ["formato inválido", "já cadastrado"] }
    });

    let details = parse_validation_details(&body);

    assert_that!(details.len(), eq(1));
    assert_that!(details[0].field.as_str(), eq("email"));
    assert_that!(
        details[0].message.as_str(),
        eq("formato inválido; já cadastrado")
    );
}

#[test]
fn given_unknown_shape_when_parse_then_empty_details() {
    let details = parse_validation_details(&json!({ "detail": "nope" }));

    assert_that!(details.len(), eq(0));
}
