//! tests/mod.rs

mod store_tests;
