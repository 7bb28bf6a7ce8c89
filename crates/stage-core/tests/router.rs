// Host-side tests for pointer ownership resolution.

use glam::{Vec2, Vec3};
use stage_core::*;

const VIEWPORT: Vec2 = Vec2::new(1280.0, 720.0);
const CENTER: Vec2 = Vec2::new(640.0, 360.0);

fn rig() -> OrbitRig {
    OrbitRig {
        viewport: VIEWPORT,
        aspect: VIEWPORT.x / VIEWPORT.y,
        ..OrbitRig::looking_at(Vec3::new(0.0, 0.0, 6.0), Vec3::ZERO)
    }
}

fn annotations_at(points: &[Vec3]) -> AnnotationSet {
    AnnotationSet::new(points.iter().map(|p| Annotation::new(*p, "a")).collect())
}

#[test]
fn marker_beats_annotation() {
    let router = PointerRouter::new(VIEWPORT);
    let mut marker = DraggableMarker::new(Vec3::ZERO);
    marker.set_visible(true);
    let set = annotations_at(&[Vec3::ZERO]);
    assert_eq!(
        router.resolve_down(CENTER, &rig(), &marker, &set),
        PointerTarget::Marker
    );
    // with the marker hidden the annotation wins
    marker.set_visible(false);
    assert_eq!(
        router.resolve_down(CENTER, &rig(), &marker, &set),
        PointerTarget::Annotation(0)
    );
}

#[test]
fn top_right_zone_is_never_claimed() {
    let router = PointerRouter::new(VIEWPORT);
    let r = rig();
    let corner = Vec2::new(VIEWPORT.x - 20.0, 20.0);
    // place geometry right under the pointer
    let under = r.pixel_ray(corner).unwrap().at(5.0);
    let mut marker = DraggableMarker::new(under);
    marker.set_visible(true);
    let set = annotations_at(&[under]);
    let target = router.resolve_down(corner, &r, &marker, &set);
    assert_eq!(target, PointerTarget::UiZone);
    assert!(!target.claims());
}

#[test]
fn open_menu_regions_are_reserved() {
    let mut router = PointerRouter::new(VIEWPORT);
    let set = annotations_at(&[Vec3::ZERO]);
    let marker = DraggableMarker::default();
    router.set_transient_regions(&[Rect::new(600.0, 300.0, 100.0, 100.0)]);
    assert_eq!(
        router.resolve_down(CENTER, &rig(), &marker, &set),
        PointerTarget::UiZone
    );
    router.set_transient_regions(&[]);
    assert_eq!(
        router.resolve_down(CENTER, &rig(), &marker, &set),
        PointerTarget::Annotation(0)
    );
}

#[test]
fn empty_space_is_not_claimed() {
    let router = PointerRouter::new(VIEWPORT);
    let set = annotations_at(&[Vec3::new(3.0, 3.0, 0.0)]);
    let target = router.resolve_down(CENTER, &rig(), &DraggableMarker::default(), &set);
    assert_eq!(target, PointerTarget::Nothing);
    assert!(!target.claims());
}

#[test]
fn nearest_annotation_wins() {
    let set = annotations_at(&[Vec3::new(0.0, 0.0, -2.0), Vec3::new(0.0, 0.0, 1.0)]);
    let ray = rig().pixel_ray(CENTER).unwrap();
    assert_eq!(pick_annotation(&ray, &set), Some(1));
}

#[test]
fn hover_is_rate_limited() {
    let mut router = PointerRouter::new(VIEWPORT);
    assert!(router.hover_due(0.0));
    assert!(!router.hover_due(5.0));
    assert!(!router.hover_due(16.0));
    assert!(router.hover_due(17.0));
}

#[test]
fn viewport_bounds() {
    let router = PointerRouter::new(VIEWPORT);
    assert!(router.in_viewport(CENTER));
    assert!(!router.in_viewport(Vec2::new(-1.0, 10.0)));
    assert!(!router.in_viewport(Vec2::new(10.0, 721.0)));
}
