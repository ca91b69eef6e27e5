//! zzlogview - a terminal log file viewer
//!
//! Shows a log file as a scrollable list with optional line numbers,
//! colors timestamps, separators, arrows and keyword labels, and
//! highlights search matches.

mod config;
mod display;
mod document;
mod error;
mod highlight;
mod input;
mod logging;
mod terminal;
mod viewer;
mod window;

use std::env;
use std::path::PathBuf;
use std::process;

use config::Config;
use display::DisplayOptions;
use error::Result;
use terminal::Terminal;
use viewer::Viewer;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Args {
    file: Option<PathBuf>,
    hide_line_numbers: bool,
}

enum Command {
    View(Args),
    Help,
    Version,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut parsed = Args::default();

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Command::Help),
            "--version" | "-V" => return Ok(Command::Version),
            "--no-line-numbers" | "-n" => parsed.hide_line_numbers = true,
            s if s.starts_with('-') && s.len() > 1 => {
                return Err(error::ViewerError::Message(format!(
                    "unknown option '{}' (try --help)",
                    s
                )));
            }
            path => {
                if parsed.file.is_some() {
                    return Err(error::ViewerError::Message(
                        "only one file can be viewed at a time".to_string(),
                    ));
                }
                parsed.file = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::View(parsed))
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let args = match parse_args(&args)? {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Version => {
            println!("zzlogview {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Command::View(args) => args,
    };

    if let Some(log_path) = Config::log_path() {
        if let Err(e) = logging::init(&log_path) {
            eprintln!("Warning: {}", e);
        }
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "zzlogview starting");

    let config = Config::load();
    let options = DisplayOptions {
        show_line_numbers: config.show_line_numbers && !args.hide_line_numbers,
        text_size: config.text_size,
    };

    // Initialize terminal
    let mut terminal = Terminal::new()?;
    let mut viewer = Viewer::new(config, options, Config::config_path(), terminal.rows());

    if let Some(path) = args.file {
        viewer.open_file(&path);
    }

    viewer.run(&mut terminal)
}

fn print_usage() {
    println!("zzlogview {} - terminal log file viewer", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: zzlogview [OPTIONS] [FILE]");
    println!();
    println!("Options:");
    println!("  -n, --no-line-numbers  Hide line numbers for this session");
    println!("  -h, --help             Show this help message");
    println!("  -V, --version          Show version information");
    println!();
    println!("Keys:");
    println!("  j/k, Up/Down       Scroll one line");
    println!("  Space/b, PgDn/PgUp Scroll one page");
    println!("  g/G, Home/End      First / last page");
    println!("  /                  Search (case-insensitive)");
    println!("  n/N                Next / previous matching line");
    println!("  Esc                Clear search");
    println!("  l                  Toggle line numbers");
    println!("  +/-                Text size up / down");
    println!("  o                  Open a file");
    println!("  C-l                Redraw screen");
    println!("  q, C-c             Quit");
    println!();
    println!("Preferences: ~/.zzlogview.toml   Log: ~/.zzlogview.log (RUST_LOG, ZZLOGVIEW_LOG)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_file_and_flags() {
        match parse_args(&args(&["-n", "app.log"])).unwrap() {
            Command::View(parsed) => {
                assert!(parsed.hide_line_numbers);
                assert_eq!(parsed.file, Some(PathBuf::from("app.log")));
            }
            _ => panic!("expected view command"),
        }
    }

    #[test]
    fn test_parse_help_and_errors() {
        assert!(matches!(parse_args(&args(&["--help"])), Ok(Command::Help)));
        assert!(matches!(parse_args(&args(&["-V"])), Ok(Command::Version)));
        assert!(parse_args(&args(&["--bogus"])).is_err());
        assert!(parse_args(&args(&["a.log", "b.log"])).is_err());
        assert!(matches!(parse_args(&[]), Ok(Command::View(a)) if a == Args::default()));
    }
}
