use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn fit_scale_never_overflows_viewport_or_multiplier() {
    let nominals = [
        (405.0, 585.0),
        (396.0, 612.0),
        (360.0, 504.0),
        (1080.0, 1080.0),
        (1080.0, 1920.0),
        (1080.0, 566.0),
        (10.0, 10.0),
    ];
    let bounds = [(400.0, 560.0), (1920.0, 1080.0), (50.0, 3000.0), (1.0, 1.0)];
    for &(w, h) in &nominals {
        for &(mw, mh) in &bounds {
            let s = fit_scale(w, h, mw, mh, 1.2);
            assert!(s * w <= mw + 1e-9, "{w}x{h} in {mw}x{mh}");
            assert!(s * h <= mh + 1e-9, "{w}x{h} in {mw}x{mh}");
            assert!(s <= 1.2);
        }
    }
}

#[test]
fn fit_scale_caps_small_templates_at_multiplier() {
    assert!(approx(fit_scale(100.0, 100.0, 400.0, 560.0, 1.2), 1.2));
    assert!(approx(fit_scale(1080.0, 1080.0, 400.0, 560.0, 1.2), 400.0 / 1080.0));
    // Height is the limiting axis for the book cover.
    assert!(approx(fit_scale(405.0, 585.0, 400.0, 560.0, 1.2), 560.0 / 585.0));
}

#[test]
fn try_fit_scale_rejects_zero() {
    assert!(try_fit_scale(0.0, 10.0, 400.0, 560.0, 1.2).is_err());
    assert!(try_fit_scale(10.0, 10.0, 400.0, 0.0, 1.2).is_err());
    assert!(try_fit_scale(10.0, 10.0, f64::NAN, 560.0, 1.2).is_err());
    assert!(try_fit_scale(10.0, 10.0, 400.0, 560.0, 1.2).is_ok());
}

#[test]
fn viewport_fit_uses_defaults() {
    let vp = ViewportBounds::default();
    vp.validate().unwrap();
    let s = vp.fit(Canvas::new(360, 504)).unwrap();
    assert!(approx(s, (400.0f64 / 360.0).min(560.0 / 504.0)));
}

#[test]
fn display_scale_multiplies_any_positive_zoom() {
    assert!(approx(display_scale(0.25, 0.8), 0.2));
    assert!(approx(display_scale(3.0, 0.5), 1.5));
}

#[test]
fn export_scale_upscales_small_views() {
    let s = export_scale(1080.0, 1080.0, 300.0, 300.0).unwrap();
    assert!(approx(s, 3.6));
}

#[test]
fn export_scale_never_downscales() {
    assert_eq!(export_scale(1080.0, 1080.0, 2000.0, 2000.0), Some(1.0));
}

#[test]
fn export_scale_takes_larger_axis_ratio() {
    let s = export_scale(1080.0, 1920.0, 200.0, 300.0).unwrap();
    assert!(approx(s, 6.4));
}

#[test]
fn export_scale_refuses_unlaid_out_views() {
    assert_eq!(export_scale(1080.0, 1080.0, 0.0, 300.0), None);
    assert_eq!(export_scale(1080.0, 1080.0, 300.0, 0.0), None);
    assert_eq!(export_scale(1080.0, 1080.0, f64::NAN, 300.0), None);
    assert_eq!(
        export_scale_for(Canvas::new(405, 585), Size::new(0.0, 0.0)),
        None
    );
}
