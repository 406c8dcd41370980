use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "todo",
    about = concat!("todo v", env!("CARGO_PKG_VERSION"), " - a to-do list for the terminal"),
    version
)]
pub struct Cli {
    /// Read settings from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Append diagnostic logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Don't capture the mouse, even if the config enables it
    #[arg(long)]
    pub no_mouse: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.no_mouse);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "todo",
            "--config",
            "/tmp/todo.toml",
            "--log-file",
            "/tmp/todo.log",
            "--no-mouse",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/todo.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/todo.log")));
        assert!(cli.no_mouse);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["todo", "extra"]).is_err());
    }
}
