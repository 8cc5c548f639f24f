use docsift::collection::ReadOperations;
use docsift::errors::ErrorKind;
use serde_json::json;

fn people() -> Vec<serde_json::Value> {
    vec![
        json!({ "name": "amy", "age": 31, "address": { "city": "Oslo" } }),
        json!({ "name": "bob", "age": 19, "address": { "city": "Rome" } }),
        json!({ "name": "cid", "age": 45, "address": { "city": "Oslo" }, "tags": ["x"] }),
    ]
}

#[test]
fn test_find_many_json() {
    let read = ReadOperations::default();
    let found = read
        .find_many_json(
            &json!({ "address.city": "Oslo", "age": { "$gt": 30 } }),
            &json!({ "sort": { "age": -1 } }),
            &people(),
        )
        .unwrap();
    assert_eq!(found, vec![people()[2].clone(), people()[0].clone()]);
}

#[test]
fn test_find_many_json_last_sort_key_dominates() {
    let docs = vec![
        json!({ "id": 0, "name": "bob", "age": 30 }),
        json!({ "id": 1, "name": "amy", "age": 25 }),
        json!({ "id": 2, "name": "bob", "age": 20 }),
        json!({ "id": 3, "name": "amy", "age": 35 }),
    ];
    let read = ReadOperations::default();

    // age decides, name breaks ties
    let options: serde_json::Value = serde_json::from_str(r#"{"sort": {"name": -1, "age": 1}}"#).unwrap();
    let found = read.find_many_json(&json!({}), &options, &docs).unwrap();
    let ids = found.iter().filter_map(|doc| doc["id"].as_i64()).collect::<Vec<_>>();
    assert_eq!(ids, vec![2, 1, 0, 3]);

    let options: serde_json::Value = serde_json::from_str(r#"{"sort": {"age": 1, "name": -1}}"#).unwrap();
    let found = read.find_many_json(&json!({}), &options, &docs).unwrap();
    let ids = found.iter().filter_map(|doc| doc["id"].as_i64()).collect::<Vec<_>>();
    assert_eq!(ids, vec![2, 0, 1, 3]);
}

#[test]
fn test_json_documents_keep_field_order() {
    let read = ReadOperations::default();
    let docs = vec![serde_json::from_str::<serde_json::Value>(r#"{"zeta": 1, "alpha": 2}"#).unwrap()];
    let found = read.find_one_json(&json!({}), &docs).unwrap().unwrap();
    assert_eq!(found.to_string(), r#"{"zeta":1,"alpha":2}"#);
}

#[test]
fn test_find_many_json_with_null_options() {
    let read = ReadOperations::default();
    let found = read
        .find_many_json(&json!({}), &serde_json::Value::Null, &people())
        .unwrap();
    assert_eq!(found, people());
}

#[test]
fn test_find_many_json_pagination() {
    let read = ReadOperations::default();
    let found = read
        .find_many_json(&json!({}), &json!({ "skip": 1, "limit": 1, "sort": null }), &people())
        .unwrap();
    assert_eq!(found, vec![people()[1].clone()]);
}

#[test]
fn test_find_one_json() {
    let read = ReadOperations::default();
    let found = read
        .find_one_json(&json!({ "$or": [{ "age": { "$lt": 20 } }, { "tags": ["x"] }] }), &people())
        .unwrap();
    assert_eq!(found, Some(people()[1].clone()));

    let found = read.find_one_json(&json!({ "name": "dan" }), &people()).unwrap();
    assert_eq!(found, None);
}

#[test]
fn test_json_input_errors() {
    let read = ReadOperations::default();

    let err = read.find_one_json(&json!(["name"]), &people()).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidQuery);

    let err = read
        .find_many_json(&json!({}), &json!({ "limit": -1 }), &people())
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::InvalidOptions);

    let err = read
        .find_many_json(&json!({}), &json!({}), &[json!({ "a": 1 }), json!(42)])
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::EncodingError);

    let err = read
        .find_one_json(&json!({ "$nin": [1] }), &people())
        .unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::NotImplemented("$nin".to_string()));
}
