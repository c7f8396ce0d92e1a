// src/bin/cli.rs
use color_eyre::eyre::Result;
use log::LevelFilter;

use leaderboard_scrape::cli::{self, Command, ConsoleProgress};
use leaderboard_scrape::config::options::{RunOptions, Verbosity};
use leaderboard_scrape::progress::Progress;

fn main() -> Result<()> {
    color_eyre::install()?;

    let opts = RunOptions::from_env()?;
    let opts = match cli::parse_args(std::env::args().skip(1), opts)? {
        Command::Help => {
            eprintln!("{}", cli::HELP);
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    let mut clog = colog::default_builder();
    clog.filter(None, match opts.verbosity {
        Verbosity::Quiet => LevelFilter::Warn,
        Verbosity::Normal => LevelFilter::Info,
        Verbosity::Verbose => LevelFilter::Debug,
    });
    clog.init();

    let mut console = ConsoleProgress::default();
    let progress: Option<&mut dyn Progress> = match opts.verbosity {
        Verbosity::Quiet => None,
        _ => Some(&mut console),
    };

    let report = cli::run(&opts, progress)?;
    if opts.verbosity != Verbosity::Quiet {
        println!("{}", cli::summary_line(&report));
    }
    Ok(())
}
