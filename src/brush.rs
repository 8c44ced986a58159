//! Brush tips: a square binary mask plus stroke parameters.
//!
//! A brush is built from a tip image by thresholding it into painting and
//! empty cells, the way hosts turn a grayscale tip texture into a stamp
//! shape. The tip can be resampled to a new size and rotated; spacing is
//! derived from the tip size so bigger brushes stamp farther apart.

use crate::canvas::Canvas;
use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Tip cells whose summed RGB is at or below this threshold paint; lighter
/// cells are empty.
const TIP_THRESHOLD: u32 = 150;

/// Spray stamps keep roughly one painting cell in this many.
pub(crate) const SPRAY_ONE_IN: u32 = 10;

/// A square binary brush tip with stamp spacing and direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Brush {
    /// Flat tip mask indexed `y * size + x`; 1 paints, 0 is empty.
    data: Vec<u8>,
    size: u32,
    spacing: f32,
    spacing_ratio: f32,
    direction: Vec2,
}

impl Brush {
    /// Threshold a tip image into a brush.
    ///
    /// Dark pixels (summed RGB at or below 150) paint; light pixels are
    /// empty. A non-square tip uses its top-left `min(width, height)`
    /// square. `spacing_ratio` scales the tip size into the stamp spacing.
    pub fn from_tip(tip: &Canvas, spacing_ratio: f32) -> Self {
        let size = tip.width().min(tip.height());
        let mut data = vec![0u8; size as usize * size as usize];
        for y in 0..size {
            for x in 0..size {
                let pixel = tip.get(x, y);
                let sum = pixel.0[0] as u32 + pixel.0[1] as u32 + pixel.0[2] as u32;
                if sum <= TIP_THRESHOLD {
                    data[(y * size + x) as usize] = 1;
                }
            }
        }

        let mut brush =
            Brush { data, size, spacing: 1.0, spacing_ratio, direction: Vec2::ZERO };
        brush.recalc_spacing();
        brush
    }

    /// Tip side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance between consecutive stamps along the stroke direction.
    /// Always at least 1, so a stroke advances even for tiny brushes.
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn spacing_ratio(&self) -> f32 {
        self.spacing_ratio
    }

    /// Current stamp direction (unit length, or zero before the first
    /// [`set_direction`](Self::set_direction) call).
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    /// Point the brush along `delta`, normalizing it. Hosts call this with
    /// the cursor movement before each stroke segment.
    pub fn set_direction(&mut self, delta: Vec2) {
        self.direction = delta.normalize_or_zero();
    }

    /// Whether tip cell `(x, y)` paints. Out-of-bounds cells do not.
    pub fn paints(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.size || y as u32 >= self.size {
            return false;
        }
        self.data[(y as u32 * self.size + x as u32) as usize] == 1
    }

    /// Number of painting cells.
    pub fn coverage(&self) -> usize {
        self.data.iter().filter(|&&cell| cell == 1).count()
    }

    /// Resample the tip to `new_size` with nearest-neighbor sampling and
    /// recompute the spacing. Resizing to zero or to the current size is a
    /// no-op.
    pub fn resize(&mut self, new_size: u32) {
        if new_size == 0 || new_size == self.size {
            return;
        }

        let ratio = self.size as f32 / new_size as f32;
        let mut data = vec![0u8; new_size as usize * new_size as usize];
        for y in 0..new_size {
            let src_y = (ratio * y as f32) as u32;
            for x in 0..new_size {
                let src_x = (ratio * x as f32) as u32;
                data[(y * new_size + x) as usize] =
                    self.data[(src_y * self.size + src_x) as usize];
            }
        }

        self.data = data;
        self.size = new_size;
        self.recalc_spacing();
    }

    /// Rotate the tip about its center by `degrees`, sampling each output
    /// cell from the inverse-rotated source cell. Sampling happens at cell
    /// centers so axis-aligned rotations land exactly; cells that map
    /// outside the tip come out empty.
    pub fn rotate(&mut self, degrees: f32) {
        let size = self.size;
        if size == 0 {
            return;
        }

        let (sin, cos) = degrees.to_radians().sin_cos();
        let half = size as f32 / 2.0;
        let mut data = vec![0u8; self.data.len()];
        for y in 0..size {
            for x in 0..size {
                let dx = x as f32 + 0.5 - half;
                let dy = y as f32 + 0.5 - half;
                let src_x = (dx * cos + dy * sin + half).floor() as i32;
                let src_y = (-dx * sin + dy * cos + half).floor() as i32;
                if self.paints(src_x, src_y) {
                    data[(y * size + x) as usize] = 1;
                }
            }
        }
        self.data = data;
    }

    fn recalc_spacing(&mut self) {
        let spacing = (self.spacing_ratio * self.size as f32).floor();
        self.spacing = if spacing > 0.0 { spacing } else { 1.0 };
    }
}

/// A brush preset a host keeps on disk: everything needed to rebuild a
/// brush from a tip image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushPreset {
    /// Tip size in pixels; 0 keeps the tip image's own size.
    pub size: u32,
    /// Stamp spacing as a fraction of the tip size.
    pub spacing_ratio: f32,
    /// Tip rotation in degrees.
    #[serde(default)]
    pub angle: f32,
}

impl BrushPreset {
    /// Build a brush from a tip image per this preset.
    pub fn build(&self, tip: &Canvas) -> Brush {
        let mut brush = Brush::from_tip(tip, self.spacing_ratio);
        if self.size != 0 {
            brush.resize(self.size);
        }
        if self.angle != 0.0 {
            brush.rotate(self.angle);
        }
        brush
    }
}
