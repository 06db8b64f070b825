//! screencut-icons - writes icons/icon16.png, icons/icon48.png and
//! icons/icon128.png for the ScreenCut extension
//!
//! Takes no arguments. Failures are reported on stdout and mapped to a
//! non-zero exit code.

mod logging;

use screencut_icons::driver::{self, exit_codes, GeneratorConfig};
use screencut_icons::PngIconRenderer;

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

fn run() -> i32 {
    if let Err(e) = logging::init() {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    let config = GeneratorConfig::default();
    let renderer = PngIconRenderer::new(config.style);

    let mut stdout = std::io::stdout().lock();
    driver::run(&config, &renderer, &mut stdout)
}
