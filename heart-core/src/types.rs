use glam::Vec2;

/// A planar coordinate in canvas space.
pub type Point2D = Vec2;

/// Index of a precomputed animation frame.
///
/// Playback indices may exceed the cycle length; they are wrapped
/// modulo the number of generated frames.
pub type FrameIndex = usize;

/// Hashable identity of a [`Point2D`].
///
/// Two points share a key exactly when both coordinates have the same
/// IEEE-754 bit pattern, with `-0.0` folded onto `0.0`. This is exact
/// equality, not a tolerance: values that differ in the last bit are
/// distinct points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointKey {
    x: u32,
    y: u32,
}

impl PointKey {
    pub fn exact(p: Point2D) -> Self {
        Self {
            x: canonical_bits(p.x),
            y: canonical_bits(p.y),
        }
    }
}

fn canonical_bits(v: f32) -> u32 {
    if v == 0.0 { 0 } else { v.to_bits() }
}

/// Integer pixel a point falls on after rounding each coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelKey {
    pub x: i32,
    pub y: i32,
}

impl PixelKey {
    pub fn rounded(p: Point2D) -> Self {
        Self {
            x: p.x.round() as i32,
            y: p.y.round() as i32,
        }
    }
}

/// An 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    /// Base heart color, used for points that carry no lighting.
    pub const HEART: Rgb = Rgb::new(255, 33, 33);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A drawable point of one frame.
///
/// The drawing side renders a filled `size`×`size` square with its top-left
/// corner at `pos`. Halo points have no `color` and are drawn in the base
/// color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderPoint {
    pub pos: Point2D,
    pub size: u8,
    pub color: Option<Rgb>,
}

impl RenderPoint {
    /// Color this point should be filled with.
    ///
    /// With `lit == false` every point is drawn flat in `base`, ignoring
    /// any precomputed lighting.
    pub fn fill(&self, base: Rgb, lit: bool) -> Rgb {
        match self.color {
            Some(c) if lit => c,
            _ => base,
        }
    }
}
