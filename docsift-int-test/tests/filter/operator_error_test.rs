use docsift::collection::{Document, FindOptions};
use docsift::doc;
use docsift::errors::ErrorKind;
use docsift::filter::RESERVED_OPERATORS;
use docsift_int_test::test_util::{cleanup, create_test_context, run_test};

#[test]
fn test_reserved_field_operators_are_not_implemented() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            for operator in RESERVED_OPERATORS {
                let mut condition = Document::new();
                condition.put(operator, 1)?;
                let mut expression = Document::new();
                expression.put("age", condition)?;

                let err = read
                    .find_many(&expression, &FindOptions::new(), ctx.documents())
                    .unwrap_err();
                assert_eq!(err.kind(), &ErrorKind::NotImplemented(operator.to_string()));
            }
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_reserved_top_level_operators_are_not_implemented() {
    run_test(
        create_test_context,
        |ctx| {
            let err = ctx
                .read()
                .find_one(&doc! { "$nor": [{ age: 25 }] }, ctx.documents())
                .unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::NotImplemented("$nor".to_string()));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_unknown_operators_are_unsupported() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let err = read
                .find_many(&doc! { "$xor": [{ age: 25 }] }, &FindOptions::new(), ctx.documents())
                .unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::UnsupportedOperator("$xor".to_string()));

            let err = read
                .find_many(&doc! { age: { "$between": [1, 2] } }, &FindOptions::new(), ctx.documents())
                .unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::UnsupportedOperator("$between".to_string()));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_nested_operator_errors_surface() {
    run_test(
        create_test_context,
        |ctx| {
            let err = ctx
                .read()
                .find_many(
                    &doc! { "$or": [{ age: 25 }, { "$and": [{ tags: { "$in": ["red"] } }] }] },
                    &FindOptions::new(),
                    ctx.documents(),
                )
                .unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::NotImplemented("$in".to_string()));
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_mixed_operator_map_is_rejected() {
    run_test(
        create_test_context,
        |ctx| {
            let read = ctx.read();
            let err = read
                .find_many(&doc! { age: { "$gt": 1, limit: 2 } }, &FindOptions::new(), ctx.documents())
                .unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::UnsupportedOperator("limit".to_string()));

            let err = read
                .find_many(&doc! { age: { limit: 2, "$gt": 1 } }, &FindOptions::new(), ctx.documents())
                .unwrap_err();
            assert_eq!(err.kind(), &ErrorKind::InvalidQuery);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_errors_raise_on_empty_collection() {
    let empty: Vec<Document> = Vec::new();
    let err = docsift::find_many(&doc! { age: { "$exists": true } }, &FindOptions::new(), &empty).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::NotImplemented("$exists".to_string()));

    let err = docsift::find_one(&doc! { "$xor": [] }, &empty).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::UnsupportedOperator("$xor".to_string()));
}
