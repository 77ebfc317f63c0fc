#![forbid(unsafe_code)]

//! Typed launch options resolved from an [`ArgIndex`]
//!
//! The index itself never rejects anything. This layer is where values are
//! given meaning, so it is also the only place a malformed value (a window
//! size that is not `WIDTHxHEIGHT`, a log level above 3) is reported.

use crate::args::{ArgIndex, FlagSpec};
use crate::flags;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Errors from parsing a `WIDTHxHEIGHT` window size
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizeParseError {
    #[error("window size '{0}' is missing the 'x' separator")]
    MissingSeparator(String),

    #[error("window dimension '{0}' is not a number")]
    InvalidDimension(String),

    #[error("window dimensions must be greater than zero")]
    ZeroDimension,
}

/// Errors from resolving launch options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("invalid --size value: {0}")]
    InvalidSize(#[from] SizeParseError),

    #[error("invalid --log level {0}: expected a value between 0 and 3")]
    InvalidLogLevel(u64),

    #[error("--log needs a level or a file path")]
    EmptyLogTarget,
}

/// Initial window size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl FromStr for WindowSize {
    type Err = SizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| SizeParseError::MissingSeparator(s.to_string()))?;

        Ok(WindowSize {
            width: parse_dimension(width)?,
            height: parse_dimension(height)?,
        })
    }
}

fn parse_dimension(s: &str) -> Result<u32, SizeParseError> {
    let value: u32 = s
        .trim()
        .parse()
        .map_err(|_| SizeParseError::InvalidDimension(s.to_string()))?;

    if value == 0 {
        return Err(SizeParseError::ZeroDimension);
    }
    Ok(value)
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Verbosity selected with `--log <0..=3>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    /// Maps the numeric level used on the command line
    pub fn from_number(n: u64) -> Option<Self> {
        match n {
            0 => Some(LogLevel::Error),
            1 => Some(LogLevel::Warn),
            2 => Some(LogLevel::Info),
            3 => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

/// Where `--log` sends output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogTarget {
    /// A numeric value: log to stdout at this level
    Level(LogLevel),
    /// Anything else: log to this file
    File(PathBuf),
}

impl LogTarget {
    /// Interprets a `--log` value
    ///
    /// Integers are levels, everything else is a path.
    pub fn parse(value: &str) -> Result<Self, OptionsError> {
        if value.is_empty() {
            return Err(OptionsError::EmptyLogTarget);
        }

        match value.parse::<u64>() {
            Ok(n) => LogLevel::from_number(n)
                .map(LogTarget::Level)
                .ok_or(OptionsError::InvalidLogLevel(n)),
            Err(_) => Ok(LogTarget::File(PathBuf::from(value))),
        }
    }
}

/// Tab shown on startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Autostart,
    Battery,
    Bluetooth,
    Display,
    Power,
    Usbguard,
    Volume,
    Wifi,
}

/// Tab flags in priority order; the first one given wins
static TAB_FLAGS: [(FlagSpec, Tab); 9] = [
    (flags::AUTOSTART, Tab::Autostart),
    (flags::BATTERY, Tab::Battery),
    (flags::BLUETOOTH, Tab::Bluetooth),
    (flags::DISPLAY, Tab::Display),
    (flags::POWER, Tab::Power),
    (flags::USBGUARD, Tab::Usbguard),
    (flags::VOLUME, Tab::Volume),
    (flags::VOLUME_ALT, Tab::Volume),
    (flags::WIFI, Tab::Wifi),
];

/// Everything the launcher reads from its command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LaunchOptions {
    pub help: bool,
    pub force: bool,
    pub minimal: bool,
    pub redact: bool,
    pub size: Option<WindowSize>,
    pub lang: Option<String>,
    pub log: Option<LogTarget>,
    pub tab: Option<Tab>,
}

impl LaunchOptions {
    /// Resolves the launcher's flags against `index`
    ///
    /// # Errors
    ///
    /// Returns an error if `--size` or `--log` carries a value that cannot be
    /// interpreted. A flag given without a value is not an error; the option
    /// is simply left unset.
    pub fn from_index(index: &ArgIndex) -> Result<Self, OptionsError> {
        Self::resolve(index).inspect_err(|e| warn!(error = %e, "rejected launch option"))
    }

    fn resolve(index: &ArgIndex) -> Result<Self, OptionsError> {
        let size = index
            .option_arg(&flags::SIZE)
            .map(str::parse::<WindowSize>)
            .transpose()?;

        let log = index
            .option_arg(&flags::LOG)
            .map(LogTarget::parse)
            .transpose()?;

        let tab = TAB_FLAGS
            .iter()
            .find(|(spec, _)| index.find_arg(spec))
            .map(|(_, tab)| *tab);

        Ok(LaunchOptions {
            help: index.find_arg(&flags::HELP),
            force: index.find_arg(&flags::FORCE),
            minimal: index.find_arg(&flags::MINIMAL),
            redact: index.find_arg(&flags::REDACT),
            size,
            lang: index.option_arg(&flags::LANG).map(str::to_string),
            log,
            tab,
        })
    }
}
