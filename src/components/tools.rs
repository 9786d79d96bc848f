//! Tool selection state and the flood-fill routine.

use std::ops::RangeInclusive;

use egui::{Color32, Pos2};
use image::{Rgb, RgbImage};

/// Brush diameter limits exposed by the toolbar slider.
pub const BRUSH_SIZE_RANGE: RangeInclusive<u32> = 1..=50;

// ============================================================================
// TOOLS
// ============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tool {
    #[default]
    Brush,
    FloodFill,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::FloodFill => "Flood Fill",
        }
    }

    pub fn all() -> &'static [Tool] {
        &[Tool::Brush, Tool::FloodFill]
    }
}

/// Live tool state driven by the toolbar and the pointer.
pub struct ToolState {
    pub active_tool: Tool,
    pub color: Color32,
    pub brush_size: u32,
    /// Previous pointer position while a brush drag is in progress.
    pub last_pos: Option<Pos2>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            active_tool: Tool::Brush,
            // Red by default, for visibility on most photos
            color: Color32::from_rgb(0xFF, 0x00, 0x00),
            brush_size: 5,
            last_pos: None,
        }
    }
}

impl ToolState {
    /// The current color as an RGB pixel for the image buffer.
    pub fn color_rgb(&self) -> Rgb<u8> {
        Rgb([self.color.r(), self.color.g(), self.color.b()])
    }
}

// ============================================================================
// FLOOD FILL
// ============================================================================

/// Replace the 4-connected region of the seed pixel's color with
/// `replacement`, starting at `(seed_x, seed_y)`. Returns the number of
/// pixels changed; zero when the seed is out of bounds or already has the
/// replacement color.
///
/// Iterative DFS. The stack stores packed flat indices (`y * width + x`;
/// the view scale caps working buffers at 800×600, far below `u32::MAX`)
/// instead of coordinate tuples. A pixel is recolored when pushed, so the
/// buffer itself doubles as the visited set (target and replacement are
/// guaranteed distinct at that point).
pub fn flood_fill(image: &mut RgbImage, seed_x: u32, seed_y: u32, replacement: Rgb<u8>) -> usize {
    let (width, height) = image.dimensions();
    if seed_x >= width || seed_y >= height {
        return 0;
    }

    let target = *image.get_pixel(seed_x, seed_y);
    if target == replacement {
        return 0;
    }

    let mut stack: Vec<u32> = Vec::with_capacity(4096);
    let mut filled = 1usize;
    image.put_pixel(seed_x, seed_y, replacement);
    stack.push(seed_y * width + seed_x);

    while let Some(idx) = stack.pop() {
        let x = idx % width;
        let y = idx / width;

        // Check the 4 neighbors, recolor-and-push the matching ones
        if x > 0 && *image.get_pixel(x - 1, y) == target {
            image.put_pixel(x - 1, y, replacement);
            stack.push(idx - 1);
            filled += 1;
        }
        if x + 1 < width && *image.get_pixel(x + 1, y) == target {
            image.put_pixel(x + 1, y, replacement);
            stack.push(idx + 1);
            filled += 1;
        }
        if y > 0 && *image.get_pixel(x, y - 1) == target {
            image.put_pixel(x, y - 1, replacement);
            stack.push(idx - width);
            filled += 1;
        }
        if y + 1 < height && *image.get_pixel(x, y + 1) == target {
            image.put_pixel(x, y + 1, replacement);
            stack.push(idx + width);
            filled += 1;
        }
    }

    filled
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    #[test]
    fn fills_an_enclosed_region() {
        // 5×5 white image with a black border around a 3×3 interior
        let mut img = RgbImage::from_pixel(5, 5, WHITE);
        for i in 0..5 {
            img.put_pixel(i, 0, BLACK);
            img.put_pixel(i, 4, BLACK);
            img.put_pixel(0, i, BLACK);
            img.put_pixel(4, i, BLACK);
        }

        let filled = flood_fill(&mut img, 2, 2, RED);
        assert_eq!(filled, 9);
        assert_eq!(*img.get_pixel(1, 1), RED);
        assert_eq!(*img.get_pixel(3, 3), RED);
        // The border keeps its color
        assert_eq!(*img.get_pixel(0, 0), BLACK);
        assert_eq!(*img.get_pixel(4, 2), BLACK);
    }

    #[test]
    fn diagonal_neighbors_are_not_connected() {
        // Two white regions touching only at a corner:
        //   W B
        //   B W
        let mut img = RgbImage::from_pixel(2, 2, WHITE);
        img.put_pixel(1, 0, BLACK);
        img.put_pixel(0, 1, BLACK);

        let filled = flood_fill(&mut img, 0, 0, RED);
        assert_eq!(filled, 1);
        assert_eq!(*img.get_pixel(0, 0), RED);
        assert_eq!(*img.get_pixel(1, 1), WHITE);
    }

    #[test]
    fn same_color_seed_is_a_no_op() {
        let mut img = RgbImage::from_pixel(4, 4, RED);
        assert_eq!(flood_fill(&mut img, 1, 1, RED), 0);
        assert!(img.pixels().all(|p| *p == RED));
    }

    #[test]
    fn out_of_bounds_seed_is_a_no_op() {
        let mut img = RgbImage::from_pixel(4, 4, WHITE);
        assert_eq!(flood_fill(&mut img, 4, 0, RED), 0);
        assert_eq!(flood_fill(&mut img, 0, 17, RED), 0);
        assert!(img.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn fill_respects_a_one_pixel_channel() {
        // A 1-pixel-wide white channel through a black wall
        let mut img = RgbImage::from_pixel(5, 3, WHITE);
        img.put_pixel(2, 0, BLACK);
        img.put_pixel(2, 2, BLACK);
        // Row 1 stays white at x=2: the two halves are connected through it

        let filled = flood_fill(&mut img, 0, 0, RED);
        assert_eq!(filled, 13);
        assert_eq!(*img.get_pixel(4, 2), RED);
        assert_eq!(*img.get_pixel(2, 1), RED);
    }

    #[test]
    fn fills_the_whole_image_from_any_seed() {
        let mut img = RgbImage::from_pixel(7, 7, WHITE);
        let filled = flood_fill(&mut img, 6, 6, RED);
        assert_eq!(filled, 49);
        assert!(img.pixels().all(|p| *p == RED));
    }
}
