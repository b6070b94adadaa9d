use flow_capture::{
    run_capture, Error, Frame, FrameProcessor, HeadlessProcessor, MockSource, PixelFormat,
    ProcessorConfig, Result, SourceSpec, VideoSource,
};
use std::time::Duration;

/// Yields `frames` frames, then fails; counts every read.
struct ScriptedSource {
    frames: Option<u64>,
    reads: u64,
}

impl ScriptedSource {
    fn finite(frames: u64) -> Self {
        Self {
            frames: Some(frames),
            reads: 0,
        }
    }

    fn unlimited() -> Self {
        Self {
            frames: None,
            reads: 0,
        }
    }
}

impl VideoSource for ScriptedSource {
    fn open(_spec: &SourceSpec) -> Result<Self> {
        Ok(Self::unlimited())
    }

    fn frame_size(&self) -> (u32, u32) {
        (640, 480)
    }

    fn read(&mut self) -> Result<Frame> {
        self.reads += 1;
        if let Some(limit) = self.frames {
            if self.reads > limit {
                return Err(Error::Io("device unplugged".into()));
            }
        }
        Ok(Frame {
            width: 4,
            height: 4,
            pixel_format: PixelFormat::Gray8,
            data: vec![self.reads as u8; 16],
            ts: None,
        })
    }
}

/// Returns `true` for the first `continue_for - 1` calls, then `false`.
struct StopOnCall {
    continue_for: u64,
    calls: u64,
}

impl FrameProcessor for StopOnCall {
    fn process(&mut self, frame: &mut Frame) -> bool {
        self.calls += 1;
        frame.data.fill(0);
        self.calls < self.continue_for
    }
}

#[test]
fn test_counts_terminal_failed_read() {
    for n in [0u64, 1, 2, 10, 57] {
        let mut src = ScriptedSource::finite(n);
        let mut proc = HeadlessProcessor::new(ProcessorConfig::new(640, 480));
        let stats = run_capture(&mut src, &mut proc, 1);
        assert_eq!(stats.frame_count, n + 1);
        assert_eq!(proc.processed(), n);
        assert_eq!(src.reads, n + 1);
    }
}

#[test]
fn test_processor_stop_ends_loop_without_extra_read() {
    for k in [1u64, 2, 5, 20] {
        let mut src = ScriptedSource::unlimited();
        let mut proc = StopOnCall {
            continue_for: k,
            calls: 0,
        };
        let stats = run_capture(&mut src, &mut proc, 1);
        assert_eq!(stats.frame_count, k);
        assert_eq!(proc.calls, k);
        assert_eq!(src.reads, k);
    }
}

#[test]
fn test_ten_frames_then_failure() {
    let mut src = ScriptedSource::finite(10);
    let mut proc = HeadlessProcessor::new(ProcessorConfig::new(640, 480));
    let stats = run_capture(&mut src, &mut proc, 2);

    assert_eq!(stats.frame_count, 11);
    assert_eq!(stats.display_size(), (320, 240));

    let line = stats.to_string();
    assert!(line.starts_with("320x240 image: 11 frames in "), "{line}");
    assert!(line.ends_with(" frames / sec"), "{line}");
    let secs = line
        .split(" frames in ")
        .nth(1)
        .and_then(|rest| rest.split(" sec").next())
        .unwrap();
    assert_eq!(secs.split('.').nth(1).map(str::len), Some(3));
}

#[test]
fn test_early_stop_with_unlimited_source() {
    let mut src = MockSource::new(32, 24);
    let cfg = ProcessorConfig::new(32, 24).with_move_step(8);
    let mut proc = HeadlessProcessor::new(cfg).stop_after(5);
    let stats = run_capture(&mut src, &mut proc, 1);

    assert_eq!(stats.frame_count, 5);
    assert_eq!(src.reads(), 5);
    assert_eq!(proc.processed(), 5);
}

#[test]
fn test_immediate_failure_counts_one() {
    let mut src = MockSource::new(16, 16).with_limit(0);
    let mut proc = HeadlessProcessor::new(ProcessorConfig::new(16, 16));
    let stats = run_capture(&mut src, &mut proc, 1);
    assert_eq!(stats.frame_count, 1);
    assert_eq!(proc.processed(), 0);
    assert!(stats.fps() > 0.0);
}

#[test]
fn test_boxed_processor() {
    let mut src = MockSource::new(8, 8).with_limit(3);
    let mut proc: Box<dyn FrameProcessor> =
        Box::new(HeadlessProcessor::new(ProcessorConfig::new(8, 8)));
    let stats = run_capture(&mut src, &mut proc, 1);
    assert_eq!(stats.frame_count, 4);
}

#[test]
fn test_elapsed_is_measured() {
    struct Slow(u64);
    impl FrameProcessor for Slow {
        fn process(&mut self, _frame: &mut Frame) -> bool {
            std::thread::sleep(Duration::from_millis(5));
            self.0 += 1;
            self.0 < 4
        }
    }
    let mut src = MockSource::new(8, 8);
    let stats = run_capture(&mut src, &mut Slow(0), 1);
    assert_eq!(stats.frame_count, 4);
    assert!(stats.elapsed >= Duration::from_millis(20));
    let expected = 4.0 / stats.elapsed_secs();
    assert!((stats.fps() - expected).abs() < 1e-9);
}

#[test]
fn test_stats_serialize() {
    let mut src = MockSource::new(64, 48).with_limit(2);
    let mut proc = HeadlessProcessor::new(ProcessorConfig::new(64, 48));
    let stats = run_capture(&mut src, &mut proc, 4);
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["frame_count"], 3);
    assert_eq!(json["display_width"], 16);
    assert_eq!(json["display_height"], 12);
    assert_eq!(json["scaledown"], 4);
}
