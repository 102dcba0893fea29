//! ProcessLogger tests.

mod concurrency_tests;
mod log_tests;
