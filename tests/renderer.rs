//! Heat renderer orchestration.

use heatlens::data::SampleSeries;
use heatlens::heat::renderer::HeatRenderer;
use heatlens::heat::sizer::Geometry;
use heatlens::heat::HeatParams;

fn series() -> SampleSeries {
    SampleSeries::new(vec![100.0, 150.0, 200.0])
}

#[test]
fn paint_sizes_the_surface_to_the_measured_geometry() {
    let mut renderer = HeatRenderer::new();
    renderer.paint(&series(), &HeatParams::default(), Geometry::new(8, 20));

    assert_eq!(renderer.surface().geometry(), Geometry::new(8, 20));
    assert!(!renderer.surface().is_blank());
}

#[test]
fn repaint_after_resize_never_keeps_stale_dimensions() {
    let mut renderer = HeatRenderer::new();
    let params = HeatParams::default();

    renderer.paint(&series(), &params, Geometry::new(8, 20));
    renderer.paint(&series(), &params, Geometry::new(31, 7));

    assert_eq!(renderer.surface().geometry(), Geometry::new(31, 7));
}

#[test]
fn hidden_overlay_leaves_a_blank_surface() {
    let mut renderer = HeatRenderer::new();
    let params = HeatParams {
        visible: false,
        ..HeatParams::default()
    };
    renderer.paint(&series(), &params, Geometry::new(8, 20));

    // The resize still happened; the fill did not.
    assert_eq!(renderer.surface().geometry(), Geometry::new(8, 20));
    assert!(renderer.surface().is_blank());
}

#[test]
fn toggling_visible_off_blanks_an_already_painted_surface() {
    let mut renderer = HeatRenderer::new();
    let mut params = HeatParams::default();
    let geometry = Geometry::new(8, 20);

    renderer.paint(&series(), &params, geometry);
    assert!(!renderer.surface().is_blank());

    params.visible = false;
    renderer.paint(&series(), &params, geometry);
    assert!(renderer.surface().is_blank());
}

#[test]
fn zero_geometry_defers_without_touching_the_surface() {
    let mut renderer = HeatRenderer::new();
    let params = HeatParams::default();

    renderer.paint(&series(), &params, Geometry::new(8, 20));
    renderer.paint(&series(), &params, Geometry::ZERO);

    // The earlier paint survives untouched.
    assert_eq!(renderer.surface().geometry(), Geometry::new(8, 20));
    assert!(!renderer.surface().is_blank());
}

#[test]
fn paint_covers_the_full_surface() {
    let mut renderer = HeatRenderer::new();
    let mut params = HeatParams::default();
    params.set_opacity(1.0);
    renderer.paint(&series(), &params, Geometry::new(4, 10));

    let surface = renderer.surface();
    // Every row below the top carries visible color; the top row is the
    // intensity-0 end of the ramp and legitimately transparent.
    for y in 1..10 {
        let pixel = surface.row_color(y).unwrap();
        assert!(pixel.a > 0.0, "row {} unpainted", y);
    }
}

#[test]
fn degenerate_flat_series_paints_fully_transparent() {
    let mut renderer = HeatRenderer::new();
    renderer.paint(
        &SampleSeries::new(vec![5.0; 40]),
        &HeatParams::default(),
        Geometry::new(6, 12),
    );
    assert!(renderer.surface().is_blank());
}

#[test]
fn empty_series_paints_fully_transparent() {
    let mut renderer = HeatRenderer::new();
    renderer.paint(
        &SampleSeries::new(Vec::new()),
        &HeatParams::default(),
        Geometry::new(6, 12),
    );
    assert_eq!(renderer.surface().geometry(), Geometry::new(6, 12));
    assert!(renderer.surface().is_blank());
}
