//! The mutable raster buffer and its on-screen view.
//!
//! `PaintCanvas` owns the single RGB working buffer. All mutation goes
//! through methods that set the dirty flag, so the egui texture is only
//! re-uploaded on frames where the pixels actually changed.

use eframe::egui;
use egui::{
    Color32, ColorImage, CursorIcon, Pos2, Rect, Sense, TextureFilter, TextureHandle,
    TextureOptions, Vec2,
};
use image::{Rgb, RgbImage};

pub struct PaintCanvas {
    image: RgbImage,
    texture: Option<TextureHandle>,
    dirty: bool,
}

impl PaintCanvas {
    pub fn new(image: RgbImage) -> Self {
        Self {
            image,
            texture: None,
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Mutable access for in-place operations (flood fill). Marks the
    /// texture dirty unconditionally.
    pub fn image_mut(&mut self) -> &mut RgbImage {
        self.dirty = true;
        &mut self.image
    }

    /// Full copy of the current buffer, for the undo history.
    pub fn snapshot(&self) -> RgbImage {
        self.image.clone()
    }

    /// Replace the buffer with a restored snapshot.
    pub fn restore(&mut self, image: RgbImage) {
        self.image = image;
        self.dirty = true;
    }

    /// Pixel read with coordinates already validated by the caller.
    pub fn pixel(&self, x: u32, y: u32) -> Rgb<u8> {
        *self.image.get_pixel(x, y)
    }

    // ------------------------------------------------------------------
    // Brush strokes
    // ------------------------------------------------------------------

    /// Stamp filled circles along the segment `from` → `to` in buffer
    /// coordinates. One stamp per pixel of distance keeps fast drags from
    /// leaving gaps; segments shorter than a tenth of a pixel collapse to a
    /// single stamp.
    pub fn stroke_segment(&mut self, from: (f32, f32), to: (f32, f32), color: Rgb<u8>, size: u32) {
        let radius = size.max(1) as f32 / 2.0;

        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < 0.1 {
            self.stamp_circle(from.0, from.1, radius, color);
            return;
        }

        let steps = distance.ceil() as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_circle(from.0 + dx * t, from.1 + dy * t, radius, color);
        }
    }

    /// Fill every pixel whose center lies within `radius` of `(cx, cy)`.
    /// Pixels outside the buffer are skipped, so strokes may run off-edge.
    fn stamp_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb<u8>) {
        let (width, height) = self.image.dimensions();

        let min_x = (cx - radius).floor().max(0.0) as u32;
        let min_y = (cy - radius).floor().max(0.0) as u32;
        let max_x = ((cx + radius).ceil() as i64).clamp(0, i64::from(width) - 1) as u32;
        let max_y = ((cy + radius).ceil() as i64).clamp(0, i64::from(height) - 1) as u32;

        let r2 = radius * radius;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= r2 {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
        self.dirty = true;
    }

    // ------------------------------------------------------------------
    // Display
    // ------------------------------------------------------------------

    /// Draw the buffer centered in the remaining panel space and return the
    /// interaction response together with the rect the image occupies.
    pub fn show(&mut self, ui: &mut egui::Ui) -> (egui::Response, Rect) {
        let ctx = ui.ctx().clone();

        // Re-upload only when the pixels changed since the last frame
        if self.dirty || self.texture.is_none() {
            let size = [self.image.width() as usize, self.image.height() as usize];
            let color_image = ColorImage::from_rgb(size, self.image.as_raw());
            let options = TextureOptions {
                magnification: TextureFilter::Nearest,
                minification: TextureFilter::Nearest,
                ..Default::default()
            };
            match &mut self.texture {
                Some(texture) => texture.set(color_image, options),
                None => self.texture = Some(ctx.load_texture("canvas", color_image, options)),
            }
            self.dirty = false;
        }

        let image_size = Vec2::new(self.image.width() as f32, self.image.height() as f32);
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let image_rect = Rect::from_center_size(response.rect.center(), image_size);

        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                image_rect,
                Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }

        let response = response.on_hover_cursor(CursorIcon::Crosshair);
        (response, image_rect)
    }

    /// Map a screen position to buffer coordinates in floating point.
    /// Unclamped: brush strokes are allowed to run past the edges.
    pub fn buffer_pos(image_rect: Rect, pos: Pos2) -> (f32, f32) {
        (pos.x - image_rect.min.x, pos.y - image_rect.min.y)
    }

    /// Map a screen position to a pixel coordinate, clamped into bounds the
    /// same way the seed point of a fill is clamped.
    pub fn pixel_at(&self, image_rect: Rect, pos: Pos2) -> (u32, u32) {
        let (fx, fy) = Self::buffer_pos(image_rect, pos);
        let x = (fx.round() as i64).clamp(0, i64::from(self.image.width()) - 1) as u32;
        let y = (fy.round() as i64).clamp(0, i64::from(self.image.height()) - 1) as u32;
        (x, y)
    }
}
