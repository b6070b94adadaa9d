/// Construction arguments handed to a frame processor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessorConfig {
    pub frame_width: u32,
    pub frame_height: u32,
    pub window_label: String,
    /// Integer divisor applied to both dimensions, at least 1.
    pub scaledown: u32,
    /// Grid spacing in pixels, interpreted by the processor.
    pub move_step: u32,
}

impl ProcessorConfig {
    pub fn new(frame_width: u32, frame_height: u32) -> Self {
        Self {
            frame_width,
            frame_height,
            window_label: "Optical Flow".to_string(),
            scaledown: 1,
            move_step: 16,
        }
    }

    pub fn with_window_label(mut self, label: impl Into<String>) -> Self {
        self.window_label = label.into();
        self
    }

    pub fn with_scaledown(mut self, scaledown: u32) -> Self {
        self.scaledown = scaledown.max(1);
        self
    }

    pub fn with_move_step(mut self, move_step: u32) -> Self {
        self.move_step = move_step.max(1);
        self
    }

    /// Processing resolution of a `width` x `height` frame after integer
    /// scale-down. Callers pass the actual frame size; the advertised
    /// `frame_width`/`frame_height` may be 0 for some backends.
    pub fn scaled_size(&self, width: u32, height: u32) -> (u32, u32) {
        let s = self.scaledown.max(1);
        (width / s, height / s)
    }
}
