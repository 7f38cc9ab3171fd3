#[path = "../common/mod.rs"]
mod common;

mod design_tests;
