use docsift::collection::{Document, ReadOperations};
use docsift::common::Value;
use docsift::config::QueryConfig;
use docsift::doc;
use docsift::errors::DocSiftResult;
use std::backtrace::Backtrace;
use std::time::Instant;

/// Runs a test between a setup and a teardown step.
///
/// Panics with the error and a backtrace when any of the steps fails.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> DocSiftResult<()>,
    B: Fn() -> DocSiftResult<TestContext>,
    A: Fn(TestContext) -> DocSiftResult<()>,
{
    let start_time = Instant::now();
    let backtrace = Backtrace::capture();

    let result = match before() {
        Ok(ctx) => match test(ctx.clone()) {
            Ok(_) => after(ctx).map_err(|e| format!("After run failed: {:?}", e)),
            Err(e) => {
                let _ = after(ctx);
                Err(format!("Test failed: {:?}", e))
            }
        },
        Err(e) => Err(format!("Before run failed: {:?}", e)),
    };

    if let Err(e) = result {
        eprintln!("\n==================== TEST FAILED ====================");
        eprintln!("Failed after {:?}", start_time.elapsed());
        eprintln!("Error: {}", e);
        let bt = backtrace.to_string();
        if !bt.is_empty() && !bt.contains("disabled") {
            eprintln!("\nBacktrace:\n{}", bt);
        }
        eprintln!("=====================================================\n");
        panic!("{}", e);
    }
}

#[derive(Clone)]
pub struct TestContext {
    documents: Vec<Document>,
    read: ReadOperations,
}

impl TestContext {
    pub fn new(documents: Vec<Document>, config: QueryConfig) -> Self {
        Self {
            documents,
            read: ReadOperations::new(config),
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn read(&self) -> ReadOperations {
        self.read.clone()
    }
}

pub fn create_test_context() -> DocSiftResult<TestContext> {
    Ok(TestContext::new(create_test_docs(), QueryConfig::default()))
}

pub fn create_strict_test_context() -> DocSiftResult<TestContext> {
    let config = QueryConfig::builder().strict_comparison(true).build()?;
    Ok(TestContext::new(create_test_docs(), config))
}

pub fn create_numbered_context() -> DocSiftResult<TestContext> {
    Ok(TestContext::new(numbered_docs(10), QueryConfig::default()))
}

pub fn cleanup(_ctx: TestContext) -> DocSiftResult<()> {
    Ok(())
}

pub fn create_test_docs() -> Vec<Document> {
    let doc1 = doc! {
        id: 1,
        first_name: "fn1",
        last_name: "ln1",
        age: 25,
        score: 7.5,
        active: true,
        tags: ["red", "green"],
        address: { city: "Paris", zip: "75001" },
        arr: [1, 2, 3],
    };

    let doc2 = doc! {
        id: 2,
        first_name: "fn2",
        last_name: "ln2",
        age: 40,
        score: 9,
        active: false,
        tags: ["green", "red"],
        address: { zip: "10001", city: "New York" },
        arr: [3, 4, 3],
    };

    let doc3 = doc! {
        id: 3,
        first_name: "fn3",
        last_name: "ln2",
        age: "40",
        active: null,
        tags: [],
        address: { city: "Paris" },
        arr: [5, 4, 3],
    };

    vec![doc1, doc2, doc3]
}

/// Documents `{ id: 0 }` to `{ id: n - 1 }`, in id order.
pub fn numbered_docs(n: i64) -> Vec<Document> {
    (0..n).map(|i| doc! { id: i, even: (i % 2 == 0) }).collect()
}

pub fn ids(documents: &[&Document]) -> Vec<i64> {
    documents
        .iter()
        .filter_map(|doc| doc.get("id").and_then(Value::as_i64))
        .collect()
}

pub fn is_sorted<T: Ord>(iterable: impl IntoIterator<Item = T>, ascending: bool) -> bool {
    let items = iterable.into_iter().collect::<Vec<_>>();
    items.windows(2).all(|pair| {
        if ascending {
            pair[0] <= pair[1]
        } else {
            pair[0] >= pair[1]
        }
    })
}
