use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::fmt;
use std::time::Duration;

/// Aggregate throughput of one capture run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunStats {
    /// Read attempts, including the terminal failed read if there was one.
    pub frame_count: u64,
    pub elapsed: Duration,
    /// Native source width.
    pub width: u32,
    /// Native source height.
    pub height: u32,
    pub scaledown: u32,
}

impl RunStats {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Frames per second. Infinite when no measurable time elapsed.
    pub fn fps(&self) -> f64 {
        self.frame_count as f64 / self.elapsed_secs()
    }

    /// Reported resolution: native size divided by scaledown, truncated.
    pub fn display_size(&self) -> (u32, u32) {
        let s = self.scaledown.max(1);
        (self.width / s, self.height / s)
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = self.display_size();
        write!(
            f,
            "{}x{} image: {} frames in {:.3} sec = {:.3} frames / sec",
            w,
            h,
            self.frame_count,
            self.elapsed_secs(),
            self.fps()
        )
    }
}

impl Serialize for RunStats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (w, h) = self.display_size();
        let mut st = serializer.serialize_struct("RunStats", 8)?;
        st.serialize_field("width", &self.width)?;
        st.serialize_field("height", &self.height)?;
        st.serialize_field("scaledown", &self.scaledown)?;
        st.serialize_field("display_width", &w)?;
        st.serialize_field("display_height", &h)?;
        st.serialize_field("frame_count", &self.frame_count)?;
        st.serialize_field("elapsed_secs", &self.elapsed_secs())?;
        st.serialize_field("fps", &self.fps())?;
        st.end()
    }
}
