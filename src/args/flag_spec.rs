#![forbid(unsafe_code)]

//! Short/long flag pairs used for lookups

use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Errors that can occur when building a [`FlagSpec`] from caller spellings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagSpecError {
    /// Short form is not a single dash followed by exactly one character
    #[error("invalid short flag '{0}': expected '-' followed by one character")]
    InvalidShort(String),

    /// Long form is not `--` followed by a non-empty name without '='
    #[error("invalid long flag '{0}': expected '--' followed by a name")]
    InvalidLong(String),
}

/// One logical option, spelled both ways
///
/// Lookups on [`ArgIndex`](crate::ArgIndex) always take the pair, so the short
/// and long spellings of an option are checked together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlagSpec {
    short: char,
    long: Cow<'static, str>,
}

impl FlagSpec {
    /// Creates a spec from a short character and a long name without dashes
    pub const fn new(short: char, long: &'static str) -> Self {
        FlagSpec {
            short,
            long: Cow::Borrowed(long),
        }
    }

    /// Parses caller spellings such as `("-o", "--output")`
    ///
    /// # Errors
    ///
    /// Returns an error if the short form is not `-` plus one character, or
    /// if the long form is not `--` plus a name. A name may not contain `=`
    /// since that would never match a flag token.
    pub fn parse(short_form: &str, long_form: &str) -> Result<Self, FlagSpecError> {
        let short = short_form
            .strip_prefix('-')
            .and_then(single_char)
            .filter(|c| *c != '-')
            .ok_or_else(|| FlagSpecError::InvalidShort(short_form.to_string()))?;

        let long = long_form
            .strip_prefix("--")
            .filter(|name| !name.is_empty() && !name.contains('='))
            .ok_or_else(|| FlagSpecError::InvalidLong(long_form.to_string()))?;

        Ok(FlagSpec {
            short,
            long: Cow::Owned(long.to_string()),
        })
    }

    /// The short flag character (`o` for `-o`)
    pub fn short(&self) -> char {
        self.short
    }

    /// The long flag name without its `--` prefix
    pub fn long(&self) -> &str {
        &self.long
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

impl TryFrom<(&str, &str)> for FlagSpec {
    type Error = FlagSpecError;

    fn try_from((short_form, long_form): (&str, &str)) -> Result<Self, Self::Error> {
        FlagSpec::parse(short_form, long_form)
    }
}

impl fmt::Display for FlagSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "-{}, --{}", self.short, self.long)
    }
}
