use std::error::Error;
use std::fmt;
use std::io;

/// Errors surfaced by the subtitle decoder
#[derive(Debug)]
pub enum DecodeError {
    /// No known format recognized the content
    UnsupportedFormat {
        filename: String,
        /// Format names in the order they were tried
        attempted: Vec<String>,
    },
    /// A format claimed the content during probing but failed while reading it
    CorruptContent {
        format: String,
        source: SubtitleError,
    },
    Io(io::Error),
}

/// Parse error raised by a single format reader
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleError {
    pub message: String,
    /// 1-based line number where the problem was detected, if known
    pub line: Option<usize>,
}

impl SubtitleError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
        }
    }

    /// Create a new error tied to a line of the input.
    pub fn at_line(line: usize, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: Some(line),
        }
    }
}

impl DecodeError {
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, DecodeError::UnsupportedFormat { .. })
    }

    pub fn is_corrupt_content(&self) -> bool {
        matches!(self, DecodeError::CorruptContent { .. })
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnsupportedFormat {
                filename,
                attempted,
            } => write!(
                f,
                "Cannot read subtitle format of '{}' (tried {})",
                filename,
                attempted.join(", ")
            ),
            DecodeError::CorruptContent { format, source } => {
                write!(f, "Corrupt {} content: {}", format, source)
            }
            DecodeError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl fmt::Display for SubtitleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {}: {}", line, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl Error for DecodeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DecodeError::CorruptContent { source, .. } => Some(source),
            DecodeError::Io(err) => Some(err),
            DecodeError::UnsupportedFormat { .. } => None,
        }
    }
}

impl Error for SubtitleError {}

// Conversion implementations
impl From<io::Error> for DecodeError {
    fn from(err: io::Error) -> Self {
        DecodeError::Io(err)
    }
}

// Conversion to io::Error for callers working with plain I/O results
impl From<DecodeError> for io::Error {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Io(err) => err,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

impl From<SubtitleError> for io::Error {
    fn from(err: SubtitleError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

// Type alias for Result with DecodeError
pub type DecodeResult<T> = Result<T, DecodeError>;

// Type alias for Result with SubtitleError
pub type SubtitleResult<T> = Result<T, SubtitleError>;
