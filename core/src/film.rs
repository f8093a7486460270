//! Film

#![allow(dead_code)]
use crate::color::{Color, BLACK};
use crate::common::*;
use std::fs;

/// Maximum channel value in PPM output.
const PPM_MAX_VALUE: u32 = 255;

/// Maximum line width in plain-text PPM output.
const PPM_LINE_WIDTH: usize = 70;

/// A 2-D buffer of colors the renderer writes into, one cell per pixel.
#[derive(Clone, Debug)]
pub struct Film {
    /// Image width in pixels.
    pub width: usize,

    /// Image height in pixels.
    pub height: usize,

    /// Pixels in row-major order.
    pixels: Vec<Color>,
}

impl Film {
    /// Creates a new film with every pixel set to black.
    ///
    /// * `width`  - Image width in pixels.
    /// * `height` - Image height in pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK; width * height],
        }
    }

    /// Writes one pixel. Out-of-bounds writes are ignored.
    ///
    /// * `x` - Column index.
    /// * `y` - Row index.
    /// * `c` - The color.
    pub fn write_pixel(&mut self, x: usize, y: usize, c: Color) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = c;
        }
    }

    /// Returns the pixel at the given coordinates.
    ///
    /// * `x` - Column index.
    /// * `y` - Row index.
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Serializes the film as a plain-text PPM ("P3") image. Channels are
    /// clamped to [0, 255] here; the render path itself never clamps.
    pub fn to_ppm(&self) -> String {
        let mut out = format!("P3\n{} {}\n{}\n", self.width, self.height, PPM_MAX_VALUE);

        for y in 0..self.height {
            let mut line = String::new();
            for x in 0..self.width {
                let c = self.pixel_at(x, y);
                for channel in [c.r, c.g, c.b] {
                    let value = scale_channel(channel).to_string();
                    if line.is_empty() {
                        line.push_str(&value);
                    } else if line.len() + 1 + value.len() <= PPM_LINE_WIDTH {
                        line.push(' ');
                        line.push_str(&value);
                    } else {
                        out.push_str(&line);
                        out.push('\n');
                        line = value;
                    }
                }
            }
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Writes the film to a file. A `.ppm` extension selects the plain-text
    /// PPM format; any other extension goes through the `image` crate.
    ///
    /// * `path` - The output path.
    pub fn write(&self, path: &str) -> Result<(), String> {
        if path.ends_with(".ppm") {
            fs::write(path, self.to_ppm()).map_err(|e| format!("Error writing '{path}': {e}"))?;
        } else {
            let mut img = image::RgbImage::new(self.width as u32, self.height as u32);
            for (x, y, pixel) in img.enumerate_pixels_mut() {
                let c = self.pixel_at(x as usize, y as usize);
                *pixel = image::Rgb([
                    scale_channel(c.r) as u8,
                    scale_channel(c.g) as u8,
                    scale_channel(c.b) as u8,
                ]);
            }
            img.save(path)
                .map_err(|e| format!("Error writing '{path}': {e}"))?;
        }
        info!("Wrote {}x{} image to '{}'", self.width, self.height, path);
        Ok(())
    }
}

/// Clamps a channel to [0, 1] and scales it to [0, 255].
///
/// * `value` - The channel value.
fn scale_channel(value: Float) -> u32 {
    (clamp(value, 0.0, 1.0) * PPM_MAX_VALUE as Float).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_film_is_black() {
        let film = Film::new(10, 20);
        assert_eq!(film.width, 10);
        assert_eq!(film.height, 20);
        for y in 0..20 {
            for x in 0..10 {
                assert_eq!(film.pixel_at(x, y), BLACK);
            }
        }
    }

    #[test]
    fn writing_pixels() {
        let mut film = Film::new(10, 20);
        let red = Color::new(1.0, 0.0, 0.0);
        film.write_pixel(2, 3, red);
        assert_eq!(film.pixel_at(2, 3), red);
    }

    #[test]
    fn ppm_header_and_pixel_data() {
        let mut film = Film::new(5, 3);
        film.write_pixel(0, 0, Color::new(1.5, 0.0, 0.0));
        film.write_pixel(2, 1, Color::new(0.0, 0.5, 0.0));
        film.write_pixel(4, 2, Color::new(-0.5, 0.0, 1.0));

        let ppm = film.to_ppm();
        let lines: Vec<&str> = ppm.lines().collect();
        assert_eq!(lines[0], "P3");
        assert_eq!(lines[1], "5 3");
        assert_eq!(lines[2], "255");
        assert_eq!(lines[3], "255 0 0 0 0 0 0 0 0 0 0 0 0 0 0");
        assert_eq!(lines[4], "0 0 0 0 0 0 0 128 0 0 0 0 0 0 0");
        assert_eq!(lines[5], "0 0 0 0 0 0 0 0 0 0 0 0 0 0 255");
    }

    #[test]
    fn ppm_lines_never_exceed_70_characters() {
        let mut film = Film::new(10, 2);
        for y in 0..2 {
            for x in 0..10 {
                film.write_pixel(x, y, Color::new(1.0, 0.8, 0.6));
            }
        }
        let ppm = film.to_ppm();
        for line in ppm.lines() {
            assert!(line.len() <= PPM_LINE_WIDTH);
        }
    }

    #[test]
    fn ppm_ends_with_newline() {
        let film = Film::new(5, 3);
        assert!(film.to_ppm().ends_with('\n'));
    }
}
