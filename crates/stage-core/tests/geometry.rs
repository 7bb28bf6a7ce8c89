// Host-side tests for the vector helpers used by picking, dragging and tweens.

use glam::{Mat4, Vec2, Vec3};
use proptest::prelude::*;
use stage_core::geometry::{pixel_to_ndc, unproject_ray};
use stage_core::{lerp, ray_plane, ray_sphere, smoothstep, Plane, Ray};

#[test]
fn smoothstep_hits_endpoints_exactly() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert_eq!(smoothstep(0.5), 0.5);
    // clamped outside the unit interval
    assert_eq!(smoothstep(-3.0), 0.0);
    assert_eq!(smoothstep(7.0), 1.0);
}

#[test]
fn lerp_endpoints() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
}

#[test]
fn ray_plane_hits_plane_in_front() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0)).unwrap();
    let plane = Plane::from_normal_and_point(Vec3::Z, Vec3::new(0.0, 0.0, 1.0)).unwrap();
    let hit = ray_plane(&ray, &plane).unwrap();
    assert!((hit - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-6);
}

#[test]
fn ray_plane_parallel_is_none() {
    let ray = Ray::new(Vec3::ZERO, Vec3::X).unwrap();
    let plane = Plane::from_normal_and_point(Vec3::Y, Vec3::new(0.0, 1.0, 0.0)).unwrap();
    assert!(ray_plane(&ray, &plane).is_none());
}

#[test]
fn ray_plane_behind_origin_is_none() {
    let ray = Ray::new(Vec3::ZERO, Vec3::Z).unwrap();
    let plane = Plane::from_normal_and_point(Vec3::Z, Vec3::new(0.0, 0.0, -2.0)).unwrap();
    assert!(ray_plane(&ray, &plane).is_none());
}

#[test]
fn degenerate_ray_and_plane_are_rejected() {
    assert!(Ray::new(Vec3::ONE, Vec3::ZERO).is_none());
    assert!(Plane::from_normal_and_point(Vec3::ZERO, Vec3::ONE).is_none());
}

#[test]
fn ray_sphere_front_hit_and_miss() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
    // sphere fully behind the origin
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
}

#[test]
fn ray_sphere_from_inside_reports_exit() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn pixel_to_ndc_corners_and_center() {
    let vp = Vec2::new(200.0, 100.0);
    assert_eq!(pixel_to_ndc(Vec2::new(100.0, 50.0), vp), Vec2::ZERO);
    assert_eq!(pixel_to_ndc(Vec2::new(0.0, 0.0), vp), Vec2::new(-1.0, 1.0));
    assert_eq!(pixel_to_ndc(Vec2::new(200.0, 100.0), vp), Vec2::new(1.0, -1.0));
}

#[test]
fn unproject_center_looks_down_view_axis() {
    let eye = Vec3::new(0.0, 0.0, 6.0);
    let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 1.5, 0.1, 100.0);
    let view = Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y);
    let ray = unproject_ray((proj * view).inverse(), Vec2::ZERO, eye).unwrap();
    assert_eq!(ray.origin, eye);
    assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-4);
}

proptest! {
    #[test]
    fn smoothstep_stays_in_unit_interval(t in -2.0f32..3.0) {
        let e = smoothstep(t);
        prop_assert!((0.0..=1.0).contains(&e));
    }

    #[test]
    fn smoothstep_is_monotonic(a in 0.0f32..1.0, b in 0.0f32..1.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(smoothstep(lo) <= smoothstep(hi) + 1e-6);
    }
}
