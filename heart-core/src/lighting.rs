use crate::types::Rgb;

/// Linear brightness falloff, `1` at the center and `0` at `max_distance`.
pub fn brightness(distance: f32, max_distance: f32) -> f32 {
    (1.0 - distance / max_distance).clamp(0.0, 1.0)
}

/// Color of a lit point `distance` away from the canvas center.
///
/// Scales each channel of the base heart color by [`brightness`] and
/// floors it, so the center is `(255, 33, 33)` and anything at or beyond
/// `max_distance` is black.
pub fn lighting_color(distance: f32, max_distance: f32) -> Rgb {
    let b = brightness(distance, max_distance);
    let scale = |c: u8| (c as f32 * b).floor() as u8;
    Rgb::new(
        scale(Rgb::HEART.r),
        scale(Rgb::HEART.g),
        scale(Rgb::HEART.b),
    )
}
