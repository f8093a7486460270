//! Application related stuff

use crate::common::Float;
use clap::Parser;

/// Parses the command line and returns the application options.
pub fn options() -> Options {
    Options::parse()
}

/// System wide options.
#[derive(Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Options {
    /// Canvas width in pixels.
    #[clap(
        long,
        short = 'W',
        value_name = "NUM",
        default_value_t = 800,
        help = "Canvas width in pixels."
    )]
    pub width: usize,

    /// Canvas height in pixels.
    #[clap(
        long,
        short = 'H',
        value_name = "NUM",
        default_value_t = 400,
        help = "Canvas height in pixels."
    )]
    pub height: usize,

    /// Vertical field of view in degrees.
    #[clap(
        long,
        value_name = "DEG",
        default_value_t = 60.0,
        help = "Vertical field of view in degrees."
    )]
    pub fov: Float,

    /// Recursion depth for reflection and refraction rays.
    #[clap(
        long,
        short = 'd',
        value_name = "NUM",
        default_value_t = 5,
        help = "Recursion depth for reflection and refraction rays."
    )]
    pub depth: usize,

    /// Scene to render.
    #[clap(
        long,
        short = 's',
        value_name = "NAME",
        default_value = "spheres",
        help = "Scene to render: spheres, shapes or obj."
    )]
    pub scene: String,

    /// Path to the output image.
    #[clap(
        long = "outfile",
        short = 'o',
        value_name = "FILE",
        default_value = "render.ppm",
        help = "Write the image to the given filename (.ppm or anything the image crate encodes)."
    )]
    pub outfile: String,

    /// Mesh file for the obj scene.
    #[clap(value_name = "FILE", help = "Wavefront OBJ file for the 'obj' scene.")]
    pub obj: Option<String>,
}
