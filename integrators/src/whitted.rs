//! Whitted Integrator

use crate::Scene;
use cameras::PerspectiveCamera;
use core::film::Film;
use indicatif::{ProgressBar, ProgressStyle};
use itertools::iproduct;
use std::time::Instant;

/// Default recursion depth for reflection and refraction rays.
pub const DEFAULT_MAX_DEPTH: usize = 5;

/// Whitted-style recursive ray tracer: one primary ray per pixel, with
/// shadow, reflection and refraction rays spawned at each hit.
#[derive(Copy, Clone, Debug)]
pub struct WhittedIntegrator {
    /// Recursion depth budget for secondary rays.
    pub max_depth: usize,
}

impl WhittedIntegrator {
    /// Creates a new integrator.
    ///
    /// * `max_depth` - Recursion depth budget for secondary rays.
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Renders the scene onto a new film, one camera ray per pixel.
    ///
    /// * `scene`  - The scene to render. Group bounds are refreshed first.
    /// * `camera` - The camera viewing the scene.
    pub fn render(&self, scene: &mut Scene, camera: &PerspectiveCamera) -> Film {
        scene.finalize();

        let mut film = Film::new(camera.hsize, camera.vsize);

        let progress = ProgressBar::new((camera.hsize * camera.vsize) as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{bar:40} {pos}/{len} ETA: {eta}")
                .unwrap(),
        );

        let start = Instant::now();
        for (y, x) in iproduct!(0..camera.vsize, 0..camera.hsize) {
            let ray = camera.ray_for_pixel(x, y);
            let color = scene.color_at(&ray, self.max_depth);
            film.write_pixel(x, y, color);
            progress.inc(1);
        }
        progress.finish_and_clear();

        info!(
            "Rendered {}x{} pixels in {:.2}s.",
            camera.hsize,
            camera.vsize,
            start.elapsed().as_secs_f64()
        );

        film
    }
}

impl Default for WhittedIntegrator {
    /// Returns an integrator with the default recursion depth.
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}
