#![forbid(unsafe_code)]

//! Token and bucket types stored by the argument index

/// A single classified entry in a bucket
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Text after the `-` or `--` prefix, possibly carrying an `=value` suffix
    Flag(String),
    /// A bare word that followed a flag of the same bucket
    Value(String),
}

impl Token {
    /// Returns the flag text, or `None` for values
    pub fn as_flag(&self) -> Option<&str> {
        match self {
            Token::Flag(text) => Some(text),
            Token::Value(_) => None,
        }
    }

    /// Returns the value text, or `None` for flags
    pub fn as_value(&self) -> Option<&str> {
        match self {
            Token::Flag(_) => None,
            Token::Value(text) => Some(text),
        }
    }
}

/// Which prefix a token's position originated from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bucket {
    /// Single `-` prefix
    Short,
    /// Double `--` prefix
    Long,
}
