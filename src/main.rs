mod app;
mod command;
mod config;
mod consts;
mod eventlog;
mod game;
mod highscore;
mod session;
mod ticker;
mod util;
use crate::app::App;
use crate::command::SwipeTracker;
use crate::config::Config;
use crate::highscore::HighScore;
use crate::session::Session;
use anyhow::Context;
use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use lexopt::{Arg, Parser};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

const USAGE: &str = "Usage: gridsnake [--config <path>] [--log-file <path>]

Play Snake in the terminal

Options:
  -c, --config <path>    Read configuration from the given file
      --log-file <path>  Write diagnostic logs to the given file
  -h, --help             Show this help message and exit
  -V, --version          Show the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run {
        config: Option<PathBuf>,
        log_file: Option<PathBuf>,
    },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        let mut log_file = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("log-file") => log_file = Some(PathBuf::from(parser.value()?)),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config, log_file })
    }
}

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(Arguments::Run { config, log_file }) => match run(config, log_file) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("gridsnake: {e:?}");
                ExitCode::from(2)
            }
        },
        Ok(Arguments::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("gridsnake: {e}\n\n{USAGE}");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>, log_file: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => Config::load(&path, false)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => {
            let path = Config::default_path()?;
            Config::load(&path, true)
                .with_context(|| format!("failed to load configuration from {}", path.display()))?
        }
    };
    if let Some(path) = log_file.as_ref().or(config.files.log_file.as_ref()) {
        init_logging(path)?;
    }
    log::info!("Starting gridsnake {}", env!("CARGO_PKG_VERSION"));

    let mut session = Session::new(config.game.bounds, rand::rng(), Instant::now())
        .with_theme(config.theme());
    match config.high_score_file() {
        Ok(Some(file)) => match file.load() {
            Ok(high_score) => {
                log::debug!(
                    "Loaded high score {} from {}",
                    high_score.get(),
                    file.path().display()
                );
                session = session.with_high_score(high_score, Some(file));
            }
            Err(e) => {
                let e = anyhow::Error::new(e);
                log::warn!("{e:#}");
                session.warn(format!("{e:#}"));
                session = session.with_high_score(HighScore::default(), Some(file));
            }
        },
        Ok(None) => (),
        Err(e) => {
            let e = anyhow::Error::new(e);
            log::warn!("{e:#}");
            session.warn(format!("{e:#}; high score will not be saved"));
        }
    }

    let app = App::new(session, SwipeTracker::new(config.controls.swipe_threshold));
    let terminal = ratatui::init();
    let r = crossterm::execute!(io::stdout(), EnableMouseCapture, EnableFocusChange)
        .and_then(|()| app.run(terminal));
    let _ = crossterm::execute!(io::stdout(), DisableMouseCapture, DisableFocusChange);
    ratatui::restore();
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r.context("terminal I/O failed"),
    }
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = fs_err::File::create(path).context("failed to open log file")?;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();
    WriteLogger::init(LevelFilter::Debug, config, file).context("failed to initialize logging")
}
