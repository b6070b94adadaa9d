use thiserror::Error;

pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("video source not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("backend error: {0}")]
    Backend(String),
    #[error("invalid frame: {actual} bytes, expected {expected}")]
    InvalidFrame { expected: usize, actual: usize },
    #[error("end of stream")]
    EndOfStream,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NotFound("camera 3".into()).to_string(),
            "video source not found: camera 3"
        );
        assert_eq!(
            Error::Io("device unplugged".into()).to_string(),
            "I/O error: device unplugged"
        );
        assert_eq!(
            Error::InvalidFrame {
                expected: 12,
                actual: 10
            }
            .to_string(),
            "invalid frame: 10 bytes, expected 12"
        );
        assert_eq!(Error::EndOfStream.to_string(), "end of stream");
    }
}
