use tracing::trace;

use crate::{Frame, FrameProcessor, ProcessorConfig};

/// A processor that renders nothing. Useful for measuring raw capture
/// throughput and for running on machines without a display.
#[derive(Debug)]
pub struct HeadlessProcessor {
    config: ProcessorConfig,
    processed: u64,
    stop_after: Option<u64>,
}

impl HeadlessProcessor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self {
            config,
            processed: 0,
            stop_after: None,
        }
    }

    /// Ask the loop to stop once `n` frames have been processed.
    pub fn stop_after(mut self, n: u64) -> Self {
        self.stop_after = Some(n);
        self
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }
}

impl FrameProcessor for HeadlessProcessor {
    fn process(&mut self, frame: &mut Frame) -> bool {
        self.processed += 1;
        let (w, h) = self.config.scaled_size(frame.width, frame.height);
        trace!(
            n = self.processed,
            width = frame.width,
            height = frame.height,
            scaled_width = w,
            scaled_height = h,
            "frame"
        );
        match self.stop_after {
            Some(limit) => self.processed < limit,
            None => true,
        }
    }
}
