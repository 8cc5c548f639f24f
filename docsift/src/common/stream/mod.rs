pub(crate) mod filtered_stream;
pub(crate) mod sorted_stream;

pub(crate) use filtered_stream::FilteredStream;
pub(crate) use sorted_stream::SortedStream;
