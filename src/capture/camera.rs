//! Live-camera background capture: `Idle -> Streaming -> Idle`.

use crate::assets::image_ref::ImageRef;
use crate::foundation::core::Canvas;
use crate::foundation::error::{MyomError, MyomResult};

/// Source of live video streams (a webcam, a test pattern, ...).
pub trait CameraDevice {
    /// Acquire a stream. Permission denial or a missing device is an
    /// [`MyomError::Acquisition`].
    fn open(&mut self) -> MyomResult<Box<dyn VideoStream>>;
}

/// An acquired stream. Holds the device until [`VideoStream::release`] is called.
pub trait VideoStream {
    /// Native frame size; `0x0` when the stream has not negotiated a resolution yet.
    fn native_size(&self) -> Canvas;

    /// Draw the current frame into `target`, scaling as needed. Fails if no frame is ready.
    fn draw_frame(&mut self, target: &mut image::RgbaImage) -> MyomResult<()>;

    /// Stop every track and release the device. Must be idempotent.
    fn release(&mut self);
}

/// Releases the stream when dropped, whatever happened in between.
struct StreamGuard(Option<Box<dyn VideoStream>>);

impl StreamGuard {
    fn stream(&mut self) -> &mut dyn VideoStream {
        match self.0.as_mut() {
            Some(s) => s.as_mut(),
            None => unreachable!("stream guard is only emptied on drop"),
        }
    }
}

impl Drop for StreamGuard {
    fn drop(&mut self) {
        if let Some(mut stream) = self.0.take() {
            stream.release();
            tracing::debug!("camera stream released");
        }
    }
}

#[derive(Default)]
enum CaptureState {
    #[default]
    Idle,
    Streaming(StreamGuard),
}

/// Two-state camera capture flow.
pub struct CameraCapture {
    state: CaptureState,
    fallback: Canvas,
}

impl CameraCapture {
    /// `fallback` sizes the frame bitmap when the stream reports no native resolution.
    pub fn new(fallback: Canvas) -> Self {
        Self {
            state: CaptureState::Idle,
            fallback,
        }
    }

    pub fn is_streaming(&self) -> bool {
        matches!(self.state, CaptureState::Streaming(_))
    }

    /// Open a stream on `device`. Already streaming is a no-op.
    ///
    /// On failure the flow stays idle; there is no automatic retry.
    #[tracing::instrument(skip_all)]
    pub fn start(&mut self, device: &mut dyn CameraDevice) -> MyomResult<()> {
        if self.is_streaming() {
            return Ok(());
        }
        match device.open() {
            Ok(stream) => {
                self.state = CaptureState::Streaming(StreamGuard(Some(stream)));
                tracing::debug!("camera streaming");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "camera acquisition failed");
                Err(match e {
                    MyomError::Acquisition(_) => e,
                    other => MyomError::acquisition(other.to_string()),
                })
            }
        }
    }

    /// Grab the current frame as a PNG image reference and return to idle.
    ///
    /// The stream is released before this returns, including when drawing or encoding fails.
    #[tracing::instrument(skip_all)]
    pub fn capture(&mut self) -> MyomResult<ImageRef> {
        let CaptureState::Streaming(mut guard) = std::mem::take(&mut self.state) else {
            return Err(MyomError::not_ready("camera is not streaming"));
        };

        let native = guard.stream().native_size();
        let canvas = if native.is_empty() {
            self.fallback
        } else {
            native
        };
        let mut frame = image::RgbaImage::new(canvas.width, canvas.height);
        let result = guard
            .stream()
            .draw_frame(&mut frame)
            .and_then(|()| ImageRef::from_rgba8(canvas, frame.into_raw()));
        drop(guard);

        match &result {
            Ok(image) => tracing::debug!(
                width = canvas.width,
                height = canvas.height,
                bytes = image.bytes().len(),
                "camera frame captured"
            ),
            Err(e) => tracing::warn!(error = %e, "camera capture failed"),
        }
        result
    }

    /// Leave streaming without capturing.
    pub fn stop(&mut self) {
        self.state = CaptureState::Idle;
    }
}

impl Default for CameraCapture {
    fn default() -> Self {
        Self::new(Canvas::new(1080, 1080))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/capture/camera.rs"]
mod tests;
