use extract_colors::{extract_dominant_colors, DEFAULT_NUM_COLORS};
use std::env;

// Canonical usage text, kept byte-identical for compatibility with anything
// that matches on it.
const USAGE: &str = "Usage: python extract_colors.py <image_path>";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    // One positional argument, no flags. Failures print where the result
    // would, and the exit code stays 0 either way.
    match env::args().nth(1) {
        Some(path) => match extract_dominant_colors(&path, DEFAULT_NUM_COLORS) {
            Ok(colors) => println!("{colors:?}"),
            Err(err) => println!("{err}"),
        },
        None => println!("{USAGE}"),
    }
}
