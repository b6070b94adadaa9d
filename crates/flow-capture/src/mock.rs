use crate::{Error, Frame, PixelFormat, Result, SourceSpec, VideoSource};
use time::OffsetDateTime;

/// Synthetic source producing a moving gray ramp.
pub struct MockSource {
    width: u32,
    height: u32,
    limit: Option<u64>,
    reads: u64,
    produced: u64,
}

impl MockSource {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            limit: None,
            reads: 0,
            produced: 0,
        }
    }

    /// End the stream after `frames` successful reads.
    pub fn with_limit(mut self, frames: u64) -> Self {
        self.limit = Some(frames);
        self
    }

    /// Number of times `read` has been called.
    pub fn reads(&self) -> u64 {
        self.reads
    }
}

impl VideoSource for MockSource {
    fn open(_spec: &SourceSpec) -> Result<Self> {
        Ok(Self::new(320, 240))
    }

    fn frame_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn read(&mut self) -> Result<Frame> {
        self.reads += 1;
        if self.limit.is_some_and(|limit| self.produced >= limit) {
            return Err(Error::EndOfStream);
        }
        // Shift the ramp one pixel per frame so consecutive frames differ
        let shift = self.produced;
        self.produced += 1;
        let (width, height) = (self.width, self.height);
        let mut data = vec![0u8; width as usize * height as usize];
        for y in 0..height {
            for x in 0..width {
                let idx = (y * width + x) as usize;
                data[idx] = ((u64::from(x) + u64::from(y) + shift) % 256) as u8;
            }
        }
        Ok(Frame {
            width,
            height,
            pixel_format: PixelFormat::Gray8,
            data,
            ts: Some(OffsetDateTime::now_utc()),
        })
    }
}
