use docsift::collection::{limit_to, skip_by, FindOptions};
use docsift::doc;
use docsift::errors::ErrorKind;
use docsift_int_test::test_util::{cleanup, create_numbered_context, ids, run_test};

#[test]
fn test_skip_and_limit() {
    run_test(
        create_numbered_context,
        |ctx| {
            let options = FindOptions::from_document(&doc! { skip: 3, limit: 4 })?;
            let found = ctx.read().find_many(&doc! {}, &options, ctx.documents())?;
            assert_eq!(ids(&found), vec![3, 4, 5, 6]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_skip_and_limit_near_the_end() {
    run_test(
        create_numbered_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(&doc! {}, &FindOptions::new().skip(8).limit(4), ctx.documents())?;
            assert_eq!(ids(&found), vec![8, 9]);

            let found = read.find_many(&doc! {}, &skip_by(20), ctx.documents())?;
            assert!(found.is_empty());
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_limit_only() {
    run_test(
        create_numbered_context,
        |ctx| {
            let read = ctx.read();
            let found = read.find_many(&doc! {}, &limit_to(3), ctx.documents())?;
            assert_eq!(ids(&found), vec![0, 1, 2]);

            let found = read.find_many(&doc! {}, &limit_to(50), ctx.documents())?;
            assert_eq!(found.len(), 10);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_zero_limit_option_means_unlimited() {
    run_test(
        create_numbered_context,
        |ctx| {
            let options = FindOptions::from_document(&doc! { limit: 0, skip: 7 })?;
            let found = ctx.read().find_many(&doc! {}, &options, ctx.documents())?;
            assert_eq!(ids(&found), vec![7, 8, 9]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_skip_counts_matches_not_documents() {
    run_test(
        create_numbered_context,
        |ctx| {
            let found = ctx.read().find_many(&doc! { even: true }, &FindOptions::new().skip(1).limit(2), ctx.documents())?;
            assert_eq!(ids(&found), vec![2, 4]);
            Ok(())
        },
        cleanup,
    )
}

#[test]
fn test_invalid_pagination_options() {
    for options in [doc! { skip: (-3) }, doc! { limit: 2.5 }, doc! { limit: "4" }] {
        let err = FindOptions::from_document(&options).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::InvalidOptions);
    }
}
