use crate::{Frame, Result, SourceSpec};

/// A blocking, single-reader video source.
pub trait VideoSource {
    /// Open a source by camera index or file path.
    fn open(spec: &SourceSpec) -> Result<Self>
    where
        Self: Sized;

    /// Native frame size as `(width, height)`, fixed for the session.
    fn frame_size(&self) -> (u32, u32);

    /// Read a single frame. Any error means no further frames are available.
    fn read(&mut self) -> Result<Frame>;
}

/// Consumes frames from the capture loop.
///
/// The frame is lent for the duration of the call only; implementations may
/// modify it in place but must copy anything they want to keep.
pub trait FrameProcessor {
    /// Handle one frame. Returns `false` to stop the capture loop.
    fn process(&mut self, frame: &mut Frame) -> bool;
}

impl<P: FrameProcessor + ?Sized> FrameProcessor for Box<P> {
    fn process(&mut self, frame: &mut Frame) -> bool {
        (**self).process(frame)
    }
}
