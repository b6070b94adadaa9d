use std::fmt;
use std::path::PathBuf;
use time::OffsetDateTime;

use crate::{Error, Result};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PixelFormat {
    Bgr8,
    Rgb8,
    Gray8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Bgr8 | PixelFormat::Rgb8 => 3,
            PixelFormat::Gray8 => 1,
        }
    }
}

/// One decoded image. Rows are densely packed, no stride padding.
#[derive(Clone, Debug)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixel_format: PixelFormat,
    pub data: Vec<u8>,
    pub ts: Option<OffsetDateTime>,
}

impl Frame {
    /// Byte length a frame of this size and format must have.
    pub fn expected_len(&self) -> usize {
        self.width as usize * self.height as usize * self.pixel_format.bytes_per_pixel()
    }

    /// Check that `data` holds exactly `width * height` pixels.
    pub fn check_len(&self) -> Result<()> {
        let expected = self.expected_len();
        if self.data.len() != expected {
            return Err(Error::InvalidFrame {
                expected,
                actual: self.data.len(),
            });
        }
        Ok(())
    }
}

/// Where frames come from: a camera device index or a video file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SourceSpec {
    Camera(i32),
    File(PathBuf),
}

impl SourceSpec {
    /// A file path takes precedence over the camera index.
    pub fn resolve(file: Option<PathBuf>, camera: i32) -> Self {
        match file {
            Some(path) => SourceSpec::File(path),
            None => SourceSpec::Camera(camera),
        }
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceSpec::Camera(idx) => write!(f, "camera {idx}"),
            SourceSpec::File(path) => write!(f, "file {}", path.display()),
        }
    }
}
