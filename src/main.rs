use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::io::{config_io, logging};
use tasklist::tui::app::RunOptions;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging(cli.log_file.as_deref()) {
        eprintln!("error: cannot open log file: {}", e);
        std::process::exit(1);
    }

    let config = match config_io::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mouse = config.ui.mouse && !cli.no_mouse;
    if let Err(e) = tasklist::tui::run(RunOptions { config, mouse }) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
