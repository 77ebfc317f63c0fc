#![forbid(unsafe_code)]

//! The argument index
//!
//! Built in one left-to-right pass over the argument vector. Every
//! `--`-prefixed argument becomes a flag in the long bucket, every other
//! `-`-prefixed argument becomes a flag in the short bucket, and bare words
//! land as values in whichever bucket the most recent flag went to. A bare
//! word seen before any flag has no bucket and is dropped.
//!
//! Lookups never fail. A missing flag is `false`, a missing value is `None`.

use super::flag_spec::FlagSpec;
use super::token::{Bucket, Token};
use std::ffi::OsString;
use tracing::{debug, trace};

/// Bucket targeted by bare words, set by the most recent flag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Mode {
    #[default]
    None,
    Short,
    Long,
}

/// Accumulator threaded through construction
#[derive(Debug, Default)]
struct Buckets {
    short: Vec<Token>,
    long: Vec<Token>,
    mode: Mode,
}

impl Buckets {
    fn push(mut self, arg: String) -> Self {
        if let Some(text) = arg.strip_prefix("--") {
            self.long.push(Token::Flag(text.to_string()));
            self.mode = Mode::Long;
        } else if let Some(text) = arg.strip_prefix('-') {
            self.short.push(Token::Flag(text.to_string()));
            self.mode = Mode::Short;
        } else {
            match self.mode {
                Mode::Short => self.short.push(Token::Value(arg)),
                Mode::Long => self.long.push(Token::Value(arg)),
                Mode::None => debug!(value = %arg, "dropping value with no preceding flag"),
            }
        }
        self
    }
}

/// Immutable index over a process argument vector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgIndex {
    program: String,
    short: Vec<Token>,
    long: Vec<Token>,
}

impl ArgIndex {
    /// Builds the index from a full argument vector
    ///
    /// The first element is the program name and is never tokenized. An
    /// empty vector yields an empty index with an empty program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_default();
        let buckets = args.fold(Buckets::default(), Buckets::push);

        trace!(
            program = %program,
            short = ?buckets.short,
            long = ?buckets.long,
            "built argument index"
        );

        ArgIndex {
            program,
            short: buckets.short,
            long: buckets.long,
        }
    }

    /// Builds the index from platform strings
    ///
    /// Arguments that are not valid UTF-8 are converted lossily, so a stray
    /// byte becomes U+FFFD instead of aborting construction.
    pub fn from_args_os<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        Self::from_args(args.into_iter().map(|arg| arg.to_string_lossy().into_owned()))
    }

    /// Builds the index from `std::env::args_os()`
    pub fn from_env() -> Self {
        Self::from_args_os(std::env::args_os())
    }

    /// The program invocation name (argument 0)
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Tokens of one bucket, in argument order
    pub fn tokens(&self, bucket: Bucket) -> &[Token] {
        match bucket {
            Bucket::Short => &self.short,
            Bucket::Long => &self.long,
        }
    }

    /// Returns true if either spelling of `spec` was given
    ///
    /// A short flag matches anywhere inside a cluster, so `-ai` satisfies both
    /// `-a` and `-i`. A long flag must match its whole token; `--force=1` does
    /// not count as `--force`. Value tokens are never considered.
    pub fn find_arg(&self, spec: &FlagSpec) -> bool {
        let short = spec.short();

        flags(&self.short).any(|(_, text)| text.contains(short))
            || flags(&self.long).any(|(_, text)| text == spec.long())
    }

    /// Returns the value attached to `spec`, if any
    ///
    /// The short bucket is scanned before the long bucket, each in argument
    /// order, and the first token that yields a value wins. For each short
    /// flag token, in turn:
    ///
    /// 1. `-o=val` or `-lo=val`: the character right before the first `=`
    /// 2. `-oval`: the token starts with the character and has more after it
    /// 3. `-o val` or `-lo val`: the token contains the character and the next
    ///    entry in the bucket is a value
    ///
    /// Then for each long flag token:
    ///
    /// 4. `--output=val`: the name before the first `=` matches exactly
    /// 5. `--output val`: the token matches exactly and the next entry is a value
    pub fn option_arg(&self, spec: &FlagSpec) -> Option<&str> {
        self.short_option(spec.short())
            .or_else(|| self.long_option(spec.long()))
    }

    fn short_option(&self, short: char) -> Option<&str> {
        for (i, text) in flags(&self.short) {
            if let Some((name, value)) = text.split_once('=')
                && name.ends_with(short)
            {
                return Some(value);
            }

            let mut chars = text.chars();
            if chars.next() == Some(short) && !chars.as_str().is_empty() {
                return Some(chars.as_str());
            }

            // Every character of a cluster shares the trailing value
            if text.contains(short)
                && let Some(value) = value_after(&self.short, i)
            {
                return Some(value);
            }
        }

        None
    }

    fn long_option(&self, long: &str) -> Option<&str> {
        for (i, text) in flags(&self.long) {
            if let Some((name, value)) = text.split_once('=')
                && name == long
            {
                return Some(value);
            }

            if text == long
                && let Some(value) = value_after(&self.long, i)
            {
                return Some(value);
            }
        }

        None
    }
}

/// Flag tokens of a bucket with their positions
fn flags(tokens: &[Token]) -> impl Iterator<Item = (usize, &str)> {
    tokens
        .iter()
        .enumerate()
        .filter_map(|(i, token)| token.as_flag().map(|text| (i, text)))
}

fn value_after(tokens: &[Token], index: usize) -> Option<&str> {
    tokens.get(index + 1).and_then(Token::as_value)
}
