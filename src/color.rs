//! Color constants and interpolation over RGBA pixels.
//!
//! Colors are `image::Rgba<u8>` values throughout the crate; equality is
//! component equality, which is what region matching in the fill engine
//! relies on.

use image::Rgba;

/// Opaque black.
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Opaque white.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Fully transparent black.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Linearly interpolate between two colors, per channel.
///
/// The ratio is clamped to `[0, 1]`, so `lerp(a, b, 0.0) == a` and
/// `lerp(a, b, 1.0) == b` for any inputs. The alpha channel interpolates
/// like the color channels.
///
/// # Examples
///
/// ```
/// use paintkit::color::{lerp, BLACK, WHITE};
///
/// assert_eq!(lerp(BLACK, WHITE, 0.0), BLACK);
/// assert_eq!(lerp(BLACK, WHITE, 1.0), WHITE);
/// assert_eq!(lerp(BLACK, WHITE, 0.5), image::Rgba([128, 128, 128, 255]));
/// ```
pub fn lerp(a: Rgba<u8>, b: Rgba<u8>, ratio: f32) -> Rgba<u8> {
    let t = ratio.clamp(0.0, 1.0);
    let mut out = [0u8; 4];
    for channel in 0..4 {
        let from = a.0[channel] as f32;
        let to = b.0[channel] as f32;
        out[channel] = (from + (to - from) * t).round() as u8;
    }
    Rgba(out)
}
