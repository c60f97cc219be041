//! Emulator errors

/// Errors raised while setting up or exporting a display.
///
/// Drawing itself never fails: out-of-range pixels and unknown characters are
/// absorbed so one bad call cannot abort a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The geometry key does not name a supported preset
    InvalidGeometry(String),
    /// Writing an exported frame failed
    Export(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidGeometry(key) => write!(f, "Invalid display geometry: {:?}", key),
            Error::Export(msg) => write!(f, "Frame export failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
