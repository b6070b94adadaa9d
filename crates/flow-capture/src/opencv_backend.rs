use crate::{Error, Frame, PixelFormat, Result, SourceSpec, VideoSource};
use opencv::prelude::*;
use opencv::{core, videoio};
use time::OffsetDateTime;
use tracing::debug;

pub struct OpenCvSource {
    cap: videoio::VideoCapture,
    width: u32,
    height: u32,
}

impl VideoSource for OpenCvSource {
    fn open(spec: &SourceSpec) -> Result<Self> {
        let cap = match spec {
            SourceSpec::Camera(idx) => videoio::VideoCapture::new(*idx, videoio::CAP_ANY)
                .map_err(|e| Error::Backend(e.to_string()))?,
            SourceSpec::File(path) => {
                let path = path.to_string_lossy();
                videoio::VideoCapture::from_file(&path, videoio::CAP_ANY)
                    .map_err(|e| Error::Backend(e.to_string()))?
            }
        };
        let opened =
            videoio::VideoCapture::is_opened(&cap).map_err(|e| Error::Backend(e.to_string()))?;
        if !opened {
            return Err(Error::NotFound(spec.to_string()));
        }

        // Size is sampled once; backends report 0 when unknown
        let width = cap
            .get(videoio::CAP_PROP_FRAME_WIDTH)
            .map_err(|e| Error::Backend(e.to_string()))? as u32;
        let height = cap
            .get(videoio::CAP_PROP_FRAME_HEIGHT)
            .map_err(|e| Error::Backend(e.to_string()))? as u32;
        debug!(%spec, width, height, "opened video source");
        Ok(Self { cap, width, height })
    }

    fn frame_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn read(&mut self) -> Result<Frame> {
        let mut mat = core::Mat::default();
        // A failed grab is a device error; an empty mat is end of stream
        let ok = self
            .cap
            .read(&mut mat)
            .map_err(|e| Error::Io(e.to_string()))?;
        if !ok || mat.empty() {
            return Err(Error::EndOfStream);
        }

        let width = mat.cols() as u32;
        let height = mat.rows() as u32;
        let data = mat
            .data_bytes()
            .map_err(|e| Error::Backend(e.to_string()))?
            .to_vec();
        Ok(Frame {
            width,
            height,
            pixel_format: PixelFormat::Bgr8,
            data,
            ts: Some(OffsetDateTime::now_utc()),
        })
    }
}
