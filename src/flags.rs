//! Flags understood by the Better Control launcher

use crate::args::FlagSpec;

pub const HELP: FlagSpec = FlagSpec::new('h', "help");
pub const FORCE: FlagSpec = FlagSpec::new('f', "force");
pub const SIZE: FlagSpec = FlagSpec::new('s', "size");
pub const LANG: FlagSpec = FlagSpec::new('L', "lang");
pub const MINIMAL: FlagSpec = FlagSpec::new('m', "minimal");

pub const AUTOSTART: FlagSpec = FlagSpec::new('a', "autostart");
pub const BATTERY: FlagSpec = FlagSpec::new('B', "battery");
pub const BLUETOOTH: FlagSpec = FlagSpec::new('b', "bluetooth");
pub const DISPLAY: FlagSpec = FlagSpec::new('d', "display");
pub const POWER: FlagSpec = FlagSpec::new('p', "power");
pub const USBGUARD: FlagSpec = FlagSpec::new('u', "usbguard");
pub const VOLUME: FlagSpec = FlagSpec::new('V', "volume");
/// Lowercase alias of [`VOLUME`]
pub const VOLUME_ALT: FlagSpec = FlagSpec::new('v', "volume");
pub const WIFI: FlagSpec = FlagSpec::new('w', "wifi");

pub const LOG: FlagSpec = FlagSpec::new('l', "log");
pub const REDACT: FlagSpec = FlagSpec::new('r', "redact");
