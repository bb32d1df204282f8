use clap::Parser;
use log::error;

use quatray::{RenderSettings, Renderer, Scene};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

fn main() {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    let settings = RenderSettings {
        threads: args.threads,
        show_progress: !args.no_progress,
        ..RenderSettings::default()
    };
    let mut renderer = Renderer::new(Scene::demo(args.width, args.height), settings);

    if let Err(e) = renderer.render(&args.output, args.frames, args.depth) {
        error!("{e}");
        std::process::exit(1);
    }
}
