mod find_test;
mod json_test;
mod pagination_test;
