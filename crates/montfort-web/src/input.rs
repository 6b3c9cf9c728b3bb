// Pure pointer math, kept free of web-sys so it can be tested host-side.

/// Client pixel position to viewport UV, clamped to [0, 1]. A degenerate
/// viewport reports center so downstream effects hold their idle pose.
#[inline]
pub fn client_to_uv(client_x: f32, client_y: f32, viewport_w: f32, viewport_h: f32) -> [f32; 2] {
    if viewport_w > 0.0 && viewport_h > 0.0 {
        [
            (client_x / viewport_w).clamp(0.0, 1.0),
            (client_y / viewport_h).clamp(0.0, 1.0),
        ]
    } else {
        [0.5, 0.5]
    }
}

/// Random jitter parameters for one trail shape, from a pair of uniform
/// [0, 1) draws: scale in [0.5, 1.0), rotation in [0, 360) degrees.
#[inline]
pub fn trail_jitter(r_scale: f32, r_rotation: f32) -> (f32, f32) {
    (0.5 + r_scale.clamp(0.0, 1.0) * 0.5, r_rotation.clamp(0.0, 1.0) * 360.0)
}

/// Pointer speed in viewport units per second, clamped to keep one jumpy
/// sample from spiking the effect strength.
#[inline]
pub fn pointer_speed(prev_uv: [f32; 2], uv: [f32; 2], dt_sec: f32) -> f32 {
    let du = uv[0] - prev_uv[0];
    let dv = uv[1] - prev_uv[1];
    ((du * du + dv * dv).sqrt() / (dt_sec + 1e-5)).min(10.0)
}
