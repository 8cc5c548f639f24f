use docsift::collection::{Document, FindOptions};
use docsift::doc;
use docsift::errors::ErrorKind;
use docsift_int_test::test_util::{cleanup, create_test_context, ids, run_test};

#[test]
fn test_empty_and_matches_everything() {
    run_test(
        create_test_context,
        |ctx| {
            let found = ctx.read().find_many(&doc! { "$and": [] }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![1, 2, 3]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_empty_or_matches_nothing() {
    run_test(
        create_test_context,
        |ctx| {
            let found = ctx.read().find_many(&doc! { "$or": [] }, &FindOptions::new(), ctx.documents())?;
            assert!(found.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_and_or_combinations() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(
                &doc! { "$or": [{ first_name: "fn1" }, { last_name: "ln2" }] },
                &FindOptions::new(),
                ctx.documents(),
            )?;
            assert_eq!(ids(&found), vec![1, 2, 3]);

            let found = read.find_many(
                &doc! { "$and": [{ last_name: "ln2" }, { age: 40 }] },
                &FindOptions::new(),
                ctx.documents(),
            )?;
            assert_eq!(ids(&found), vec![2]);

            let found = read.find_many(
                &doc! {
                    "$or": [
                        { "$and": [{ last_name: "ln2" }, { "arr.0": 5 }] },
                        { age: 25 }
                    ]
                },
                &FindOptions::new(),
                ctx.documents(),
            )?;
            assert_eq!(ids(&found), vec![1, 3]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_sibling_keys_are_and_combined() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(
                &doc! { last_name: "ln2", "address.city": "Paris" },
                &FindOptions::new(),
                ctx.documents(),
            )?;
            assert_eq!(ids(&found), vec![3]);

            let found = read.find_many(
                &doc! { "$or": [{ age: 25 }, { age: 40 }], active: true },
                &FindOptions::new(),
                ctx.documents(),
            )?;
            assert_eq!(ids(&found), vec![1]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_combinator_needs_array_of_expressions() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let err = read
                .find_many(&doc! { "$and": { a: 1 } }, &FindOptions::new(), ctx.documents())
                .unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::InvalidQuery);

            let err = read
                .find_many(&doc! { "$or": [1, 2] }, &FindOptions::new(), ctx.documents())
                .unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::InvalidQuery);
            Ok(())
        },
        cleanup,
    )
}

fn ab_docs() -> Vec<Document> {
    vec![doc! { a: 1, b: 2 }, doc! { a: 1, b: 1 }, doc! { a: 2, b: 1 }]
}

#[test]
fn test_find_by_field_value() {
    let docs = ab_docs();
    let found = docsift::find_many(&doc! { a: 1 }, &FindOptions::new(), &docs).unwrap();
    assert_eq!(found, vec![&docs[0], &docs[1]]);
}

#[test]
fn test_find_by_or_of_fields() {
    let docs = ab_docs();
    let found = docsift::find_many(&doc! { "$or": [{ a: 2 }, { b: 2 }] }, &FindOptions::new(), &docs).unwrap();
    assert_eq!(found, vec![&docs[0], &docs[2]]);

    let first = docsift::find_one(&doc! { "$or": [{ a: 2 }, { b: 2 }] }, &docs).unwrap();
    assert_eq!(first, Some(&docs[0]));
}

#[test]
fn test_find_by_and_of_fields() {
    let docs = ab_docs();
    let found = docsift::find_many(&doc! { "$and": [{ a: 1 }, { b: 1 }] }, &FindOptions::new(), &docs).unwrap();
    assert_eq!(found, vec![&docs[1]]);

    let first = docsift::find_one(&doc! { a: 2, b: 2 }, &docs).unwrap();
    assert_eq!(first, None);
}
