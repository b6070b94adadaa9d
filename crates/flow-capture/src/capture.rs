use std::time::Instant;
use tracing::{debug, info, info_span, warn};

use crate::{FrameProcessor, RunStats, VideoSource};

/// Pull frames from `source` into `processor` until the source fails or the
/// processor returns `false`, then report throughput.
///
/// The frame counter is bumped once per read attempt before the result is
/// inspected, so a run that ends on a failed read counts that read too.
/// End of file and device errors are treated alike.
pub fn run_capture<S, P>(source: &mut S, processor: &mut P, scaledown: u32) -> RunStats
where
    S: VideoSource + ?Sized,
    P: FrameProcessor + ?Sized,
{
    let (width, height) = source.frame_size();
    let _span = info_span!("capture", width, height, scaledown).entered();

    let start = Instant::now();
    let mut frame_count: u64 = 0;
    loop {
        let read = source.read();
        frame_count += 1;

        let mut frame = match read {
            Ok(frame) => frame,
            Err(e) => {
                debug!(frame_count, error = %e, "source exhausted");
                break;
            }
        };

        if !processor.process(&mut frame) {
            debug!(frame_count, "processor requested stop");
            break;
        }
    }
    let elapsed = start.elapsed();

    let stats = RunStats {
        frame_count,
        elapsed,
        width,
        height,
        scaledown,
    };
    if elapsed.is_zero() {
        warn!(frame_count, "no measurable time elapsed; fps is infinite");
    }
    info!(
        frame_count,
        elapsed_secs = stats.elapsed_secs(),
        fps = stats.fps(),
        "capture finished"
    );
    stats
}
