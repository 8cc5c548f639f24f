mod equality_test;
mod logical_test;
mod operator_error_test;
