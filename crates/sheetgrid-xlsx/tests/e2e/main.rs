//! End-to-end tests: render a grid and inspect the produced XLSX package.

mod common;
mod writing;
