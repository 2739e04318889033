//! Reactive controller lifecycle and triggers.

use std::cell::Cell;

use heatlens::data::SampleSeries;
use heatlens::heat::controller::{HeatController, Phase};
use heatlens::heat::renderer::HeatRenderer;
use heatlens::heat::sizer::{Geometry, Measure};

/// A region whose reported size can change between triggers.
struct TestRegion {
    size: Cell<Geometry>,
    measures: Cell<usize>,
}

impl TestRegion {
    fn new(width: u32, height: u32) -> Self {
        Self {
            size: Cell::new(Geometry::new(width, height)),
            measures: Cell::new(0),
        }
    }

    fn set_size(&self, width: u32, height: u32) {
        self.size.set(Geometry::new(width, height));
    }
}

impl Measure for TestRegion {
    fn measure(&self) -> Geometry {
        self.measures.set(self.measures.get() + 1);
        self.size.get()
    }
}

fn series() -> SampleSeries {
    SampleSeries::new(vec![100.0, 150.0, 200.0])
}

#[test]
fn no_paint_happens_before_content_ready() {
    let mut controller = HeatController::new();
    let mut renderer = HeatRenderer::new();
    let region = TestRegion::new(10, 10);
    let series = series();

    controller.set_opacity(0.9, &mut renderer, &series, &region);
    controller.resized(&mut renderer, &series, &region);

    assert_eq!(controller.phase(), Phase::Uninitialized);
    assert_eq!(renderer.surface().geometry(), Geometry::ZERO);
    assert_eq!(region.measures.get(), 0);
}

#[test]
fn content_ready_transitions_once_and_paints() {
    let mut controller = HeatController::new();
    let mut renderer = HeatRenderer::new();
    let region = TestRegion::new(10, 10);
    let series = series();

    controller.content_ready(&mut renderer, &series, &region);
    assert_eq!(controller.phase(), Phase::Ready);
    assert_eq!(renderer.surface().geometry(), Geometry::new(10, 10));
    assert!(!renderer.surface().is_blank());

    // A repeat signal does not paint again.
    let painted = region.measures.get();
    controller.content_ready(&mut renderer, &series, &region);
    assert_eq!(region.measures.get(), painted);
}

#[test]
fn parameter_changes_repaint_immediately() {
    let mut controller = HeatController::new();
    let mut renderer = HeatRenderer::new();
    let region = TestRegion::new(10, 10);
    let series = series();

    controller.content_ready(&mut renderer, &series, &region);
    assert!(!renderer.surface().is_blank());

    controller.set_visible(false, &mut renderer, &series, &region);
    assert!(renderer.surface().is_blank());

    controller.set_visible(true, &mut renderer, &series, &region);
    assert!(!renderer.surface().is_blank());

    controller.set_opacity(0.0, &mut renderer, &series, &region);
    assert!(renderer.surface().is_blank());
}

#[test]
fn scheme_selection_falls_back_and_repaints() {
    let mut controller = HeatController::new();
    let mut renderer = HeatRenderer::new();
    let region = TestRegion::new(10, 10);
    let series = series();

    controller.content_ready(&mut renderer, &series, &region);
    controller.set_scheme("definitely-not-a-scheme", &mut renderer, &series, &region);

    assert_eq!(controller.params().scheme.name(), "Standard");
    assert!(!renderer.surface().is_blank());
}

#[test]
fn resize_repaints_with_freshly_measured_geometry() {
    let mut controller = HeatController::new();
    let mut renderer = HeatRenderer::new();
    let region = TestRegion::new(10, 10);
    let series = series();

    controller.content_ready(&mut renderer, &series, &region);
    assert_eq!(renderer.surface().geometry(), Geometry::new(10, 10));

    region.set_size(25, 40);
    controller.resized(&mut renderer, &series, &region);
    assert_eq!(renderer.surface().geometry(), Geometry::new(25, 40));
}

#[test]
fn zero_size_region_defers_but_keeps_the_last_paint() {
    let mut controller = HeatController::new();
    let mut renderer = HeatRenderer::new();
    let region = TestRegion::new(10, 10);
    let series = series();

    controller.content_ready(&mut renderer, &series, &region);

    region.set_size(0, 0);
    controller.resized(&mut renderer, &series, &region);

    assert_eq!(renderer.surface().geometry(), Geometry::new(10, 10));
    assert!(!renderer.surface().is_blank());
}

#[test]
fn teardown_stops_every_trigger() {
    let mut controller = HeatController::new();
    let mut renderer = HeatRenderer::new();
    let region = TestRegion::new(10, 10);
    let series = series();

    controller.content_ready(&mut renderer, &series, &region);
    let painted = region.measures.get();

    controller.teardown();
    assert!(controller.is_torn_down());

    region.set_size(50, 50);
    controller.resized(&mut renderer, &series, &region);
    controller.set_opacity(1.0, &mut renderer, &series, &region);
    controller.set_visible(false, &mut renderer, &series, &region);

    assert_eq!(region.measures.get(), painted);
    assert_eq!(renderer.surface().geometry(), Geometry::new(10, 10));
}

#[test]
fn readiness_arriving_after_teardown_is_cancelled() {
    let mut controller = HeatController::new();
    let mut renderer = HeatRenderer::new();
    let region = TestRegion::new(10, 10);
    let series = series();

    controller.teardown();
    controller.content_ready(&mut renderer, &series, &region);

    assert_eq!(controller.phase(), Phase::Uninitialized);
    assert_eq!(region.measures.get(), 0);
    assert_eq!(renderer.surface().geometry(), Geometry::ZERO);
}

#[test]
fn phase_never_regresses() {
    let mut controller = HeatController::new();
    let mut renderer = HeatRenderer::new();
    let region = TestRegion::new(10, 10);
    let series = series();

    controller.content_ready(&mut renderer, &series, &region);
    region.set_size(0, 0);
    controller.resized(&mut renderer, &series, &region);
    controller.set_visible(false, &mut renderer, &series, &region);

    assert_eq!(controller.phase(), Phase::Ready);
}

#[test]
fn default_parameters_match_the_mount_contract() {
    let controller = HeatController::new();
    let params = controller.params();
    assert!(params.visible);
    assert!((params.opacity - 0.6).abs() < 1e-9);
    assert_eq!(params.scheme.name(), "Standard");
}
