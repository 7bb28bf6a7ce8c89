//! Small vector helpers shared by picking, dragging and camera tweens.

use glam::{Mat4, Vec2, Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `dir`. Returns `None` for a zero direction.
    pub fn new(origin: Vec3, dir: Vec3) -> Option<Self> {
        let dir = dir.try_normalize()?;
        Some(Self { origin, dir })
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Infinite plane given by a unit normal and any point on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    pub fn from_normal_and_point(normal: Vec3, point: Vec3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self { normal, point })
    }
}

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic Hermite ease on `t` clamped to \[0, 1\]; 0 and 1 map exactly to themselves.
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Intersection of `ray` with `plane` in front of the ray origin.
///
/// Returns `None` when the ray is parallel to the plane or the plane lies
/// behind the origin.
#[inline]
pub fn ray_plane(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    let denom = plane.normal.dot(ray.dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = (plane.point - ray.origin).dot(plane.normal) / denom;
    (t >= 0.0).then(|| ray.at(t))
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // origin inside the sphere: report the exit point
    let t_far = -b + sq;
    (t_far >= 0.0).then_some(t_far)
}

/// Map a point in viewport pixels (origin top-left) to normalized device coordinates.
#[inline]
pub fn pixel_to_ndc(p: Vec2, viewport: Vec2) -> Vec2 {
    let w = viewport.x.max(1.0);
    let h = viewport.y.max(1.0);
    Vec2::new((2.0 * p.x / w) - 1.0, 1.0 - (2.0 * p.y / h))
}

/// Unproject an NDC point through an inverse view-projection into a world-space ray
/// starting at `eye`.
pub fn unproject_ray(inv_view_proj: Mat4, ndc: Vec2, eye: Vec3) -> Option<Ray> {
    let p_far = inv_view_proj * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
    if p_far.w.abs() < f32::EPSILON {
        return None;
    }
    let p1: Vec3 = p_far.truncate() / p_far.w;
    Ray::new(eye, p1 - eye)
}
