/// Error type for olc-rs operations.
#[derive(Debug, PartialEq)]
pub enum OlcError {
    /// The string is not a plus code of the kind the operation needs.
    InvalidCode(String),
    /// The requested number of digits cannot form a code.
    InvalidCodeLength(usize),
    /// The code has too few digits to be shortened.
    CodeTooShort(usize),
    /// Padded codes cannot be shortened.
    CannotShortenPadded(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// File I/O error.
    IoError(String),
}

impl std::fmt::Display for OlcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OlcError::InvalidCode(code) => write!(f, "Invalid code: {}", code),
            OlcError::InvalidCodeLength(length) => write!(f, "Invalid code length: {}", length),
            OlcError::CodeTooShort(length) => {
                write!(f, "Code has only {} digits and cannot be shortened", length)
            }
            OlcError::CannotShortenPadded(code) => {
                write!(f, "Cannot shorten padded code: {}", code)
            }
            OlcError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            OlcError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            OlcError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for OlcError {}
