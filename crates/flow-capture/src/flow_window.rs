use crate::{Frame, FrameProcessor, PixelFormat, ProcessorConfig};
use opencv::prelude::*;
use opencv::{core, highgui, imgproc, video};
use tracing::{debug, warn};

const KEY_ESC: i32 = 27;

/// Display processor: draws a grid of dense-flow vectors over the
/// downscaled grayscale frame and stops on ESC or `q`.
pub struct FlowWindow {
    config: ProcessorConfig,
    prev: Option<core::Mat>,
}

impl FlowWindow {
    pub fn new(config: ProcessorConfig) -> crate::Result<Self> {
        highgui::named_window(&config.window_label, highgui::WINDOW_AUTOSIZE)
            .map_err(|e| crate::Error::Backend(e.to_string()))?;
        Ok(Self { config, prev: None })
    }

    fn to_gray(&self, frame: &Frame) -> opencv::Result<core::Mat> {
        let channels = frame.pixel_format.bytes_per_pixel() as i32;
        let flat = core::Mat::from_slice(&frame.data)?;
        let src = flat.reshape(channels, frame.height as i32)?;

        let mut gray = core::Mat::default();
        match frame.pixel_format {
            PixelFormat::Bgr8 => imgproc::cvt_color(&src, &mut gray, imgproc::COLOR_BGR2GRAY, 0)?,
            PixelFormat::Rgb8 => imgproc::cvt_color(&src, &mut gray, imgproc::COLOR_RGB2GRAY, 0)?,
            PixelFormat::Gray8 => gray = src.try_clone()?,
        }

        let (w, h) = self.config.scaled_size(frame.width, frame.height);
        if self.config.scaledown <= 1 {
            return Ok(gray);
        }
        let mut small = core::Mat::default();
        imgproc::resize(
            &gray,
            &mut small,
            core::Size::new(w as i32, h as i32),
            0.0,
            0.0,
            imgproc::INTER_LINEAR,
        )?;
        Ok(small)
    }

    fn draw_vectors(&self, gray: &core::Mat, flow: &core::Mat) -> opencv::Result<core::Mat> {
        let mut vis = core::Mat::default();
        imgproc::cvt_color(gray, &mut vis, imgproc::COLOR_GRAY2BGR, 0)?;
        let step = self.config.move_step.max(1) as usize;
        let color = core::Scalar::new(0.0, 255.0, 0.0, 0.0);
        for y in (step / 2..gray.rows() as usize).step_by(step) {
            for x in (step / 2..gray.cols() as usize).step_by(step) {
                let v = flow.at_2d::<core::Vec2f>(y as i32, x as i32)?;
                let from = core::Point::new(x as i32, y as i32);
                let to = core::Point::new(
                    (x as f32 + v[0]).round() as i32,
                    (y as f32 + v[1]).round() as i32,
                );
                imgproc::line(&mut vis, from, to, color, 1, imgproc::LINE_8, 0)?;
                imgproc::circle(&mut vis, to, 1, color, -1, imgproc::LINE_8, 0)?;
            }
        }
        Ok(vis)
    }

    fn step(&mut self, frame: &Frame) -> opencv::Result<bool> {
        let gray = self.to_gray(frame)?;
        let shown = match self.prev.take() {
            Some(prev) if prev.size()? == gray.size()? => {
                let mut flow = core::Mat::default();
                video::calc_optical_flow_farneback(
                    &prev, &gray, &mut flow, 0.5, 3, 15, 3, 5, 1.2, 0,
                )?;
                self.draw_vectors(&gray, &flow)?
            }
            _ => gray.try_clone()?,
        };
        highgui::imshow(&self.config.window_label, &shown)?;
        self.prev = Some(gray);

        let key = highgui::wait_key(1)? & 0xFF;
        if key == KEY_ESC || key == i32::from(b'q') {
            debug!(key, "quit key pressed");
            return Ok(false);
        }
        Ok(true)
    }
}

impl FrameProcessor for FlowWindow {
    fn process(&mut self, frame: &mut Frame) -> bool {
        if let Err(e) = frame.check_len() {
            warn!(error = %e, "malformed frame; stopping");
            return false;
        }
        match self.step(frame) {
            Ok(keep_going) => keep_going,
            Err(e) => {
                warn!(error = %e, "flow window failed; stopping");
                false
            }
        }
    }
}

impl Drop for FlowWindow {
    fn drop(&mut self) {
        let _ = highgui::destroy_window(&self.config.window_label);
    }
}
