use docsift::collection::FindOptions;
use docsift::doc;
use docsift_int_test::test_util::{cleanup, create_test_context, ids, run_test};

#[test]
fn test_find_by_literal() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(&doc! { first_name: "fn1" }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![1]);

            let found = read.find_many(&doc! { last_name: "ln2" }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![2, 3]);

            let found = read.find_many(&doc! { first_name: "fn9" }, &FindOptions::new(), ctx.documents())?;
            assert!(found.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_number_never_equals_string() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(&doc! { age: 40 }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![2]);

            let found = read.find_many(&doc! { age: "40" }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![3]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_integer_equals_decimal_of_same_value() {
    run_test(
        create_test_context,
        |ctx| {
            let found = ctx.read().find_many(&doc! { score: 9.0 }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![2]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_array_equality_is_positional() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(&doc! { tags: ["red", "green"] }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![1]);

            let found = read.find_many(&doc! { tags: ["green", "red"] }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![2]);

            let found = read.find_many(&doc! { tags: [] }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![3]);

            // no element-wise membership
            let found = read.find_many(&doc! { tags: "red" }, &FindOptions::new(), ctx.documents())?;
            assert!(found.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_document_equality_ignores_key_order() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(
                &doc! { address: { city: "Paris", zip: "75001" } },
                &FindOptions::new(),
                ctx.documents(),
            )?;
            assert_eq!(ids(&found), vec![1]);

            let found = read.find_many(
                &doc! { address: { zip: "75001", city: "Paris" } },
                &FindOptions::new(),
                ctx.documents(),
            )?;
            assert_eq!(ids(&found), vec![1]);

            // a subset of the keys is not equal
            let found = read.find_many(&doc! { address: { city: "Paris" } }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![3]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_nested_field_paths() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(&doc! { "address.city": "Paris" }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![1, 3]);

            let found = read.find_many(&doc! { "arr.1": 4 }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![2, 3]);

            let found = read.find_many(&doc! { "arr.7": 4 }, &FindOptions::new(), ctx.documents())?;
            assert!(found.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_null_matches_only_present_null() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(&doc! { active: null }, &FindOptions::new(), ctx.documents())?;
            assert_eq!(ids(&found), vec![3]);

            let found = read.find_many(&doc! { nickname: null }, &FindOptions::new(), ctx.documents())?;
            assert!(found.is_empty());
            Ok(())
        },
        cleanup,
    )
}
