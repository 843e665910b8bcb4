//! CLI exit code registry.
//!
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! | 0    | Documents equivalent / command succeeded  |
//! | 1    | Documents differ beyond tolerance         |
//! | 2    | CLI usage error (clap)                    |
//! | 3    | Document parse error / non-object input   |
//! | 4    | IO error                                  |
//! | 5    | Invalid config file                       |

/// Success — documents equivalent, or command completed.
pub const EXIT_SUCCESS: u8 = 0;

/// Documents differ beyond tolerance. Like `diff(1)`, exit 1 means
/// "inputs differ."
pub const EXIT_NOT_EQUIVALENT: u8 = 1;

/// A document failed to parse as JSON, or its top level is not an object.
pub const EXIT_PARSE: u8 = 3;

/// IO error reading a document or writing a report.
pub const EXIT_IO: u8 = 4;

/// Config file failed to parse.
pub const EXIT_INVALID_CONFIG: u8 = 5;
