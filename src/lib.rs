#![forbid(unsafe_code)]

//! control-args: argument index for the Better Control launcher
//!
//! The launcher scans its argument vector once into an [`ArgIndex`] and then
//! asks it two questions per option: was the flag given, and what value
//! follows it. Parsing is permissive. Unknown flags are kept, stray values are
//! dropped, and nothing is ever rejected at the index level.

pub mod args;
pub mod flags;
pub mod options;
pub mod output;
pub mod terminal;

pub use args::{ArgIndex, Bucket, FlagSpec, FlagSpecError, Token};
pub use options::{LaunchOptions, LogLevel, LogTarget, OptionsError, Tab, WindowSize};
pub use terminal::Stream;
