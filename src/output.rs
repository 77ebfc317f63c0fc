//! Terminal output for the launcher

pub mod help;

pub use help::{Style, print_help, write_help, write_line};
