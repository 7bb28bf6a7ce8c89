use glam::{Quat, Vec2, Vec3};

// ---------------- Pointer helpers ----------------

/// Pointer position relative to the canvas' top-left corner, in CSS pixels.
#[inline]
pub fn client_to_viewport(client: Vec2, canvas_origin: Vec2) -> Vec2 {
    client - canvas_origin
}

/// Canvas CSS size, never zero so NDC mapping stays finite.
#[inline]
pub fn viewport_size(width: f64, height: f64) -> Vec2 {
    Vec2::new((width as f32).max(1.0), (height as f32).max(1.0))
}

// ---------------- Renderer value decoding ----------------

#[inline]
pub fn vec3_from_slice(v: &[f32]) -> Option<Vec3> {
    match v {
        [x, y, z, ..] if x.is_finite() && y.is_finite() && z.is_finite() => {
            Some(Vec3::new(*x, *y, *z))
        }
        _ => None,
    }
}

#[inline]
pub fn quat_from_slice(v: &[f32]) -> Option<Quat> {
    match v {
        [x, y, z, w, ..] => Some(Quat::from_xyzw(*x, *y, *z, *w).normalize()),
        _ => None,
    }
}

/// Split a packed `[ox, oy, oz, dx, dy, dz]` ray.
#[inline]
pub fn ray_parts(v: &[f32]) -> Option<(Vec3, Vec3)> {
    if v.len() < 6 {
        return None;
    }
    Some((vec3_from_slice(&v[0..3])?, vec3_from_slice(&v[3..6])?))
}

/// Parse a coordinate typed into a marker field; blank or garbage keeps the old value.
#[inline]
pub fn parse_coordinate(text: &str, fallback: f32) -> f32 {
    text.trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(fallback)
}
