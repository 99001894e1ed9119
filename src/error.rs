use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RomInfoError {
    IoError(std::io::Error),
    FileNotFound(String),
    NoValidHeader,
    WithPath(String, Box<RomInfoError>),
}

impl fmt::Display for RomInfoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RomInfoError::IoError(err) => write!(f, "IO Error: {}", err),
            RomInfoError::FileNotFound(path) => write!(f, "File not found: {}", path),
            RomInfoError::NoValidHeader => write!(
                f,
                "No valid SNES header found at the LoROM or HiROM location"
            ),
            RomInfoError::WithPath(path, err) => write!(f, "{}: {}", path, err),
        }
    }
}

impl Error for RomInfoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RomInfoError::IoError(err) => Some(err),
            RomInfoError::WithPath(_, err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RomInfoError {
    fn from(err: std::io::Error) -> RomInfoError {
        RomInfoError::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_display() {
        let err = RomInfoError::FileNotFound("game.sfc".to_string());
        assert_eq!(err.to_string(), "File not found: game.sfc");
    }

    #[test]
    fn test_with_path_wraps_inner_error() {
        let err = RomInfoError::WithPath("game.sfc".to_string(), Box::new(RomInfoError::NoValidHeader));
        assert!(err.to_string().starts_with("game.sfc: "));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = RomInfoError::from(io_err);
        assert!(matches!(err, RomInfoError::IoError(_)));
    }
}
