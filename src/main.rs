mod app;
mod artwork;
mod audio;
mod catalog;
mod command;
mod config;
mod reporter;
mod runtime;
mod youtube;

fn main() {
    env_logger::init();

    if let Err(e) = runtime::run() {
        eprintln!("vivace: {e:#}");
        std::process::exit(1);
    }
}
