pub const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
pub const GREEN: [f32; 3] = [0.0, 1.0, 0.0];

/// Quantize an RGB color in [0, 1] to opaque RGBA8
pub fn to_rgba8(color: [f32; 3]) -> [u8; 4] {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    [channel(color[0]), channel(color[1]), channel(color[2]), 255]
}
