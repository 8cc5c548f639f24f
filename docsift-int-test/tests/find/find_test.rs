use docsift::collection::{Document, FindOptions, ReadOperations};
use docsift::doc;
use docsift_int_test::test_util::{cleanup, create_test_context, ids, run_test};
use std::collections::BTreeMap;

#[test]
fn test_empty_filter_returns_everything_in_order() {
    run_test(
        create_test_context,
        |ctx| {
            let found = ctx.read().find_many(&doc! {}, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![1, 2, 3]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_results_borrow_from_collection() {
    run_test(
        create_test_context,
        |ctx| {
            let found = ctx.read().find_many(&doc! { age: 40 }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(found.len(), 1);
            assert!(std::ptr::eq(found[0], &ctx.documents()[1]));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_one() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            assert_eq!(read.find_one(&doc! {}, ctx.documents())?, Some(&ctx.documents()[0]));
            assert_eq!(read.find_one(&doc! { last_name: "ln2" }, ctx.documents())?, Some(&ctx.documents()[1]));
            assert_eq!(read.find_one(&doc! { last_name: "ln9" }, ctx.documents())?, None);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_on_empty_collection() {
    let read = ReadOperations::default();
    let empty: Vec<Document> = Vec::new();
    assert!(read.find_many(&doc! {}, &FindOptions::new(), &empty).unwrap().is_empty());
    assert_eq!(read.find_one(&doc! {}, &empty).unwrap(), None);
    assert_eq!(read.count(&doc! {}, &empty).unwrap(), 0);
}

#[test]
fn test_count() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            assert_eq!(read.count(&doc! {}, ctx.documents())?, 3);
            assert_eq!(read.count(&doc! { "address.city": "Paris" }, ctx.documents())?, 2);
            assert_eq!(read.count(&doc! { "$or": [] }, ctx.documents())?, 0);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_repeated_queries_return_same_result() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let expression = doc! { "$or": [{ age: { "$gte": 30 } }, { active: null }] };
            let options = FindOptions::from_document(&doc! { sort: { first_name: (-1) }, limit: 2 })?;

            let first = read.find_many(&expression, &options, ctx.documents())?;
            let second = read.find_many(&expression, &options, ctx.documents())?;
            assert_eq!(first, second);
            assert_eq!(ids(&first), vec![3, 2]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_find_over_other_collections() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();

            let reversed = ctx.documents().iter().rev().collect::<Vec<_>>();
            let found = read.find_many(&doc! { last_name: "ln2" }, &FindOptions::new(), &reversed)?;
            assert_eq!(ids(&found), vec![3, 2]);

            let keyed = ctx
                .documents()
                .iter()
                .map(|doc| (doc.get("first_name").and_then(|v| v.as_string()).unwrap_or_default().to_string(), doc.clone()))
                .collect::<BTreeMap<_, _>>();
            let first = read.find_one(&doc! { last_name: "ln2" }, &keyed)?;
            assert_eq!(first.and_then(|doc| doc.get("id")).and_then(|id| id.as_i64()), Some(2));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_custom_field_separator() {
    let config = docsift::QueryConfig::builder().field_separator("/").build().unwrap();
    let read = ReadOperations::new(config);
    let docs = vec![
        doc! { "a.b": 1, a: { b: 2 } },
        doc! { a: { b: 1 } },
    ];

    // keys containing the default separator are plain keys here
    let found = read.find_many(&doc! { "a/b": 1 }, &FindOptions::new(), &docs).unwrap();
    assert_eq!(found, vec![&docs[1]]);

    let found = read.find_many(&doc! { "a.b": 1 }, &FindOptions::new(), &docs).unwrap();
    assert_eq!(found, vec![&docs[0]]);
}
