//! Argument tokenizing and flag lookup

pub mod flag_spec;
pub mod index;
pub mod token;

pub use flag_spec::{FlagSpec, FlagSpecError};
pub use index::ArgIndex;
pub use token::{Bucket, Token};
