use docsift::collection::{Document, FindOptions, ReadOperations};
use docsift::common::SortOrder;
use docsift::doc;
use docsift::errors::DocSiftResult;

fn main() -> DocSiftResult<()> {
    println!("Starting scan benchmark...");
    let read = ReadOperations::default();

    let count = 1000000;
    let start = std::time::Instant::now();
    let documents = (0..count)
        .map(|i| {
            doc! {
                seq: i,
                first_name: (format!("fn{}", i % 1000)),
                processed: (i % 3 == 0),
                address: { zip: (i % 100) },
            }
        })
        .collect::<Vec<Document>>();
    println!("Generated {} documents in {:?}", count, start.elapsed());

    let start = std::time::Instant::now();
    let found = read.count(&doc! { processed: true }, &documents)?;
    println!("Counted {} processed documents in {:?}", found, start.elapsed());

    let start = std::time::Instant::now();
    let found = read.find_many(
        &doc! { "$and": [{ "address.zip": { "$gte": 10 } }, { "address.zip": { "$lt": 20 } }] },
        &FindOptions::new(),
        &documents,
    )?;
    println!("Found {} documents by range in {:?}", found.len(), start.elapsed());

    let start = std::time::Instant::now();
    let options = FindOptions::new()
        .sort_by("seq".to_string(), SortOrder::Descending)
        .sort_by("first_name".to_string(), SortOrder::Ascending)
        .limit(10);
    let found = read.find_many(&doc! {}, &options, &documents)?;
    println!("Sorted and took {} documents in {:?}", found.len(), start.elapsed());

    let start = std::time::Instant::now();
    let first = read.find_one(&doc! { seq: (count - 1) }, &documents)?;
    println!("Found last document ({}) in {:?}", first.is_some(), start.elapsed());

    Ok(())
}
