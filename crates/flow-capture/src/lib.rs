//! flow-capture: frame acquisition, processor abstraction and throughput measurement
//!
//! A [`VideoSource`] yields frames, a [`FrameProcessor`] consumes them, and
//! [`run_capture`] drives the two until the source runs dry or the processor
//! asks to stop. The default build enables a `mock` source so that binaries
//! compile and run on any host without a camera or native OpenCV.

mod types;
pub use types::{Frame, PixelFormat, SourceSpec};

mod error;
pub use error::{Error, Result};

mod traits;
pub use traits::{FrameProcessor, VideoSource};

mod config;
pub use config::ProcessorConfig;

mod stats;
pub use stats::RunStats;

mod capture;
pub use capture::run_capture;

mod headless;
pub use headless::HeadlessProcessor;

#[cfg(feature = "mock")]
mod mock;
#[cfg(feature = "mock")]
pub use mock::MockSource;

#[cfg(feature = "opencv")]
mod opencv_backend;
#[cfg(feature = "opencv")]
pub use opencv_backend::OpenCvSource;

/// OpenCV window that renders dense flow vectors
#[cfg(feature = "opencv")]
pub mod flow_window;
