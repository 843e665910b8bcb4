use std::fmt;

#[derive(Debug)]
pub enum EquivError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Top-level value of a document is not a JSON object.
    NotAnObject { found: &'static str },
    /// Document is not valid JSON.
    DocumentParse { source_name: String, message: String },
    /// IO error (file read, etc.).
    Io { path: String, message: String },
}

impl fmt::Display for EquivError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::NotAnObject { found } => {
                write!(f, "top-level JSON value must be an object, found {found}")
            }
            Self::DocumentParse { source_name, message } => {
                write!(f, "{source_name}: cannot parse JSON: {message}")
            }
            Self::Io { path, message } => write!(f, "{path}: IO error: {message}"),
        }
    }
}

impl std::error::Error for EquivError {}
