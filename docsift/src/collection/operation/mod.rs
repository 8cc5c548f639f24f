mod read_operations;

pub use read_operations::*;
