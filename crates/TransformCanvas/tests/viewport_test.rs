use glam::DVec2;
use transform_canvas::view::compute_transform;
use transform_canvas::{CanvasError, SurfaceSize, ViewportWindow};

const EPS: f64 = 1e-9;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPS,
        "expected {expected}, got {actual}"
    );
}

fn assert_point_close(actual: DVec2, expected: DVec2) {
    assert!(
        actual.abs_diff_eq(expected, EPS),
        "expected {expected}, got {actual}"
    );
}

fn classroom_window() -> ViewportWindow {
    ViewportWindow::new(-75.0, 75.0, -75.0, 75.0)
}

#[test]
fn test_wide_surface_expands_horizontally() {
    let mapping = compute_transform(SurfaceSize::new(800, 600), classroom_window(), true);

    assert_close(mapping.window.left, -100.0);
    assert_close(mapping.window.right, 100.0);
    assert_close(mapping.window.bottom, -75.0);
    assert_close(mapping.window.top, 75.0);
    assert_close(mapping.pixel_size, 0.25);
}

#[test]
fn test_square_surface_leaves_window_alone() {
    let mapping = compute_transform(SurfaceSize::new(600, 600), classroom_window(), true);

    assert_eq!(mapping.window, classroom_window());
    assert_close(mapping.pixel_size, 0.25);
}

#[test]
fn test_tall_surface_expands_vertically() {
    let window = classroom_window();
    let mapping = compute_transform(SurfaceSize::new(300, 600), window, true);

    assert_close(mapping.window.left, -75.0);
    assert_close(mapping.window.right, 75.0);
    assert_close(mapping.window.bottom, -150.0);
    assert_close(mapping.window.top, 150.0);
    assert_close(mapping.pixel_size, 0.5);
}

#[test]
fn test_aspect_matches_surface_when_preserving() {
    let surfaces = [
        SurfaceSize::new(800, 600),
        SurfaceSize::new(600, 800),
        SurfaceSize::new(1920, 1080),
        SurfaceSize::new(333, 777),
    ];
    let windows = [
        classroom_window(),
        ViewportWindow::new(0.0, 10.0, 3.0, 0.0),
        ViewportWindow::new(-2.0, 5.0, 40.0, -1.0),
    ];

    for surface in surfaces {
        for window in windows {
            let mapping = compute_transform(surface, window, true);
            assert!(
                (mapping.window.aspect_ratio() - surface.aspect_ratio()).abs() < 1e-9,
                "{window:?} on {surface:?} gave {:?}",
                mapping.window
            );
        }
    }
}

#[test]
fn test_adjustment_is_symmetric_about_center() {
    let windows = [
        classroom_window(),
        ViewportWindow::new(10.0, 30.0, 0.0, 5.0),
        ViewportWindow::new(-4.0, 1.0, 20.0, 2.0),
    ];

    for surface in [SurfaceSize::new(800, 600), SurfaceSize::new(200, 900)] {
        for window in windows {
            let mapping = compute_transform(surface, window, true);
            assert_point_close(mapping.window.center(), window.center());
        }
    }
}

#[test]
fn test_corners_map_to_surface_corners_without_aspect() {
    let surface = SurfaceSize::new(800, 600);
    let window = classroom_window();
    let mapping = compute_transform(surface, window, false);

    assert_eq!(mapping.window, window);
    assert_point_close(mapping.to_surface(window.top_left()), DVec2::ZERO);
    assert_point_close(mapping.to_surface(window.bottom_right()), DVec2::new(800.0, 600.0));
}

#[test]
fn test_no_aspect_never_touches_window() {
    let window = ViewportWindow::new(-3.0, 9.0, 4.0, -4.0);
    for surface in [
        SurfaceSize::new(10, 1000),
        SurfaceSize::new(1000, 10),
        SurfaceSize::new(64, 64),
    ] {
        assert_eq!(compute_transform(surface, window, false).window, window);
    }
}

#[test]
fn test_y_up_window_flips_vertical_axis() {
    let mapping = compute_transform(SurfaceSize::new(600, 600), classroom_window(), true);

    // Logical origin sits in the middle, logical +Y goes up the screen.
    assert_point_close(mapping.to_surface(DVec2::ZERO), DVec2::new(300.0, 300.0));
    assert_point_close(mapping.to_surface(DVec2::new(0.0, 75.0)), DVec2::new(300.0, 0.0));
    assert!(mapping.transform.matrix2.y_axis.y < 0.0);
}

#[test]
fn test_points_inside_window_land_on_surface() {
    let surface = SurfaceSize::new(800, 600);
    let mapping = compute_transform(surface, classroom_window(), true);
    let window = mapping.window;

    for fx in [0.0, 0.25, 0.5, 0.9, 1.0] {
        for fy in [0.0, 0.1, 0.5, 1.0] {
            let logical = DVec2::new(
                window.left + fx * window.width(),
                window.top + fy * window.height(),
            );
            let p = mapping.to_surface(logical);
            assert!(p.x >= -EPS && p.x <= 800.0 + EPS, "x out of bounds: {p}");
            assert!(p.y >= -EPS && p.y <= 600.0 + EPS, "y out of bounds: {p}");
        }
    }
}

#[test]
fn test_surface_to_logical_inverts_mapping() {
    let mapping = compute_transform(SurfaceSize::new(800, 600), classroom_window(), true);
    let logical = DVec2::new(12.5, -40.0);

    assert_point_close(mapping.to_logical(mapping.to_surface(logical)), logical);
}

#[test]
fn test_mapping_is_pure() {
    let surface = SurfaceSize::new(1024, 768);
    let first = compute_transform(surface, classroom_window(), true);
    let second = compute_transform(surface, classroom_window(), true);

    assert_eq!(first, second);
    assert!(first.pixel_size >= 0.0);
}

#[test]
fn test_degenerate_inputs_produce_non_finite_transform() {
    let flat = ViewportWindow::new(5.0, 5.0, -1.0, 1.0);
    let mapping = compute_transform(SurfaceSize::new(800, 600), flat, false);

    assert!(!mapping.transform.matrix2.x_axis.x.is_finite());
}

#[test]
fn test_checked_constructors_reject_zero_extent() {
    assert!(matches!(
        ViewportWindow::try_new(1.0, 1.0, 0.0, 2.0),
        Err(CanvasError::DegenerateWindow { .. })
    ));
    assert!(matches!(
        ViewportWindow::try_new(0.0, 2.0, 3.0, 3.0),
        Err(CanvasError::DegenerateWindow { .. })
    ));
    assert_eq!(
        SurfaceSize::try_new(0, 600),
        Err(CanvasError::DegenerateSurface {
            width: 0,
            height: 600
        })
    );

    assert_eq!(
        ViewportWindow::try_new(-75.0, 75.0, -75.0, 75.0),
        Ok(classroom_window())
    );
    assert_eq!(SurfaceSize::try_new(800, 600), Ok(SurfaceSize::new(800, 600)));
}
