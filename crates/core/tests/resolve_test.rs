//! Tests for the overlap resolver.

use traceform_core::{
    CanvasSize, ComponentIdAssigner, ComponentType, DetectParams, DetectedComponent,
    DetectedComponentType, Rect, resolve_overlaps,
};

const CANVAS: CanvasSize = CanvasSize {
    width: 400.0,
    height: 400.0,
};

fn components(rects: &[Rect]) -> Vec<DetectedComponent> {
    let mut ids = ComponentIdAssigner::new();
    rects
        .iter()
        .map(|r| {
            DetectedComponent::new(
                ids.assign(),
                *r,
                DetectedComponentType::Single(ComponentType::Button),
                None,
                None,
            )
        })
        .collect()
}

fn resolve(rects: &[Rect]) -> Vec<DetectedComponent> {
    resolve_overlaps(components(rects), &CANVAS, &DetectParams::default())
}

#[test]
fn test_single_component_is_untouched() {
    let rect = Rect::new(10.0, 10.0, 50.0, 50.0);
    let resolved = resolve(&[rect]);
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].rect, rect);
}

#[test]
fn test_disjoint_components_are_untouched() {
    let rects = [
        Rect::new(10.0, 10.0, 50.0, 50.0),
        Rect::new(200.0, 200.0, 50.0, 50.0),
    ];
    let resolved = resolve(&rects);
    assert_eq!(resolved[0].rect, rects[0]);
    assert_eq!(resolved[1].rect, rects[1]);
}

#[test]
fn test_concentric_components_are_scattered() {
    // 100% mutual overlap with identical centers: the zero center delta
    // defaults to a positive 20-unit step on both axes.
    let rect = Rect::new(100.0, 100.0, 60.0, 60.0);
    let resolved = resolve(&[rect, rect]);

    assert_eq!(resolved[0].rect, rect);
    let moved = &resolved[1].rect;
    assert!(moved.x > rect.x || moved.y > rect.y);
    // One 20-unit diagonal step already drops the overlap ratio to
    // (60-20)^2 / 60^2 which is below 0.7, so a single attempt suffices.
    assert_eq!((moved.x, moved.y), (120.0, 120.0));
    assert!(moved.overlap_ratio(&rect) <= 0.7);
}

#[test]
fn test_nudge_direction_points_away_from_blocker() {
    // The moving component sits up and to the left of the blocker's center,
    // so it is pushed further up-left.
    let blocker = Rect::new(100.0, 100.0, 100.0, 100.0);
    let mover = Rect::new(110.0, 110.0, 60.0, 60.0);
    let resolved = resolve(&[blocker, mover]);

    let moved = &resolved[1].rect;
    assert_eq!((moved.x, moved.y), (90.0, 90.0));
    assert!(moved.overlap_ratio(&blocker) <= 0.7);
}

#[test]
fn test_sizes_and_metadata_never_change() {
    let rect = Rect::new(100.0, 100.0, 60.0, 60.0);
    let mut input = components(&[rect, rect]);
    input[1].label = Some("overlapping".to_string());
    let resolved = resolve_overlaps(input, &CANVAS, &DetectParams::default());

    for c in &resolved {
        assert_eq!((c.rect.width, c.rect.height), (60.0, 60.0));
    }
    assert_eq!(resolved[1].label.as_deref(), Some("overlapping"));
    assert_eq!(
        resolved[1].kind,
        DetectedComponentType::Single(ComponentType::Button)
    );
}

#[test]
fn test_results_stay_inside_canvas() {
    // A component pinned at the bottom-right corner cannot be pushed out of
    // bounds; the clamp shifts it back inside.
    let blocker = Rect::new(340.0, 340.0, 60.0, 60.0);
    let mover = Rect::new(345.0, 345.0, 55.0, 55.0);
    let resolved = resolve(&[blocker, mover]);

    for c in &resolved {
        assert!(c.rect.min_x() >= 0.0);
        assert!(c.rect.min_y() >= 0.0);
        assert!(c.rect.max_x() <= CANVAS.width);
        assert!(c.rect.max_y() <= CANVAS.height);
    }
}

#[test]
fn test_attempt_cap_accepts_residual_overlap() {
    // Two full-canvas components can never be separated; after 5 attempts
    // the second is accepted overlapping and clamped inside the canvas.
    let rect = Rect::new(0.0, 0.0, 400.0, 400.0);
    let resolved = resolve(&[rect, rect]);

    assert_eq!(resolved.len(), 2);
    let moved = &resolved[1].rect;
    assert!(moved.overlap_ratio(&resolved[0].rect) > 0.7);
    assert!(moved.min_x() >= 0.0 && moved.max_x() <= CANVAS.width);
}

#[test]
fn test_overlap_bound_holds_after_resolution() {
    let rects = [
        Rect::new(50.0, 50.0, 80.0, 80.0),
        Rect::new(60.0, 60.0, 80.0, 80.0),
    ];
    let resolved = resolve(&rects);

    assert_eq!(resolved[0].rect, rects[0]);
    // One step away from the blocker is enough here.
    assert_eq!((resolved[1].rect.x, resolved[1].rect.y), (80.0, 80.0));
    for (i, a) in resolved.iter().enumerate() {
        for b in &resolved[..i] {
            assert!(a.rect.overlap_ratio(&b.rect) <= 0.7);
        }
    }
}
