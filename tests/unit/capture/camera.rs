use super::*;
use std::cell::Cell;
use std::rc::Rc;

struct FakeStream {
    native: Canvas,
    frame_ready: bool,
    released: Rc<Cell<u32>>,
}

impl VideoStream for FakeStream {
    fn native_size(&self) -> Canvas {
        self.native
    }

    fn draw_frame(&mut self, target: &mut image::RgbaImage) -> MyomResult<()> {
        if !self.frame_ready {
            return Err(MyomError::not_ready("no frame yet"));
        }
        for px in target.pixels_mut() {
            *px = image::Rgba([10, 20, 30, 255]);
        }
        Ok(())
    }

    fn release(&mut self) {
        self.released.set(self.released.get() + 1);
    }
}

struct FakeCamera {
    native: Canvas,
    frame_ready: bool,
    deny: bool,
    released: Rc<Cell<u32>>,
}

impl FakeCamera {
    fn new(native: Canvas) -> Self {
        Self {
            native,
            frame_ready: true,
            deny: false,
            released: Rc::new(Cell::new(0)),
        }
    }
}

impl CameraDevice for FakeCamera {
    fn open(&mut self) -> MyomResult<Box<dyn VideoStream>> {
        if self.deny {
            return Err(MyomError::acquisition("permission denied"));
        }
        Ok(Box::new(FakeStream {
            native: self.native,
            frame_ready: self.frame_ready,
            released: Rc::clone(&self.released),
        }))
    }
}

#[test]
fn zero_native_size_falls_back_to_default_canvas() {
    let mut cam = FakeCamera::new(Canvas::new(0, 0));
    let mut capture = CameraCapture::default();
    capture.start(&mut cam).unwrap();
    assert!(capture.is_streaming());

    let image = capture.capture().unwrap();
    assert_eq!(image.canvas(), Canvas::new(1080, 1080));
    assert!(!image.is_empty());
    assert!(!capture.is_streaming());
    assert_eq!(cam.released.get(), 1);
}

#[test]
fn native_size_is_used_when_known() {
    let mut cam = FakeCamera::new(Canvas::new(64, 48));
    let mut capture = CameraCapture::new(Canvas::new(8, 8));
    capture.start(&mut cam).unwrap();
    let image = capture.capture().unwrap();
    assert_eq!(image.canvas(), Canvas::new(64, 48));
}

#[test]
fn failed_draw_still_releases_stream() {
    let mut cam = FakeCamera::new(Canvas::new(16, 16));
    cam.frame_ready = false;
    let mut capture = CameraCapture::default();
    capture.start(&mut cam).unwrap();

    assert!(capture.capture().is_err());
    assert!(!capture.is_streaming());
    assert_eq!(cam.released.get(), 1);
}

#[test]
fn denied_acquisition_stays_idle() {
    let mut cam = FakeCamera::new(Canvas::new(16, 16));
    cam.deny = true;
    let mut capture = CameraCapture::default();
    let err = capture.start(&mut cam).unwrap_err();
    assert!(matches!(err, MyomError::Acquisition(_)));
    assert!(!capture.is_streaming());
}

#[test]
fn capture_while_idle_is_not_ready() {
    let mut capture = CameraCapture::default();
    assert!(matches!(capture.capture(), Err(MyomError::NotReady(_))));
}

#[test]
fn stop_and_drop_release_the_device() {
    let mut cam = FakeCamera::new(Canvas::new(16, 16));
    let mut capture = CameraCapture::default();
    capture.start(&mut cam).unwrap();
    // Starting twice keeps the first stream.
    capture.start(&mut cam).unwrap();
    capture.stop();
    assert_eq!(cam.released.get(), 1);

    capture.start(&mut cam).unwrap();
    drop(capture);
    assert_eq!(cam.released.get(), 2);
}
