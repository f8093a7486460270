#[macro_use]
extern crate log;

mod scenes;

use cameras::PerspectiveCamera;
use core::app::{options, Options};
use core::common::PI;
use integrators::WhittedIntegrator;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    let options = options();
    if let Err(e) = render(&options) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn render(options: &Options) -> Result<(), String> {
    let (mut scene, view) = scenes::build(&options.scene, options.obj.as_deref())?;

    let mut camera = PerspectiveCamera::new(
        options.width,
        options.height,
        options.fov * PI / 180.0,
    );
    camera.set_transform(view);

    let integrator = WhittedIntegrator::new(options.depth);
    let film = integrator.render(&mut scene, &camera);
    film.write(&options.outfile)
}
