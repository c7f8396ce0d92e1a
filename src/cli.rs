// src/cli.rs
use std::path::PathBuf;

use log::info;

use crate::aggregate::{Aggregator, summarize};
use crate::config::options::{RunOptions, Verbosity, parse_timeout};
use crate::core::net::{Fetch, HttpFetcher, OfflineFetcher};
use crate::error::{Error, Result};
use crate::fallback::{FALLBACK_REVISION, FallbackTable};
use crate::model::{Snapshot, SourceId};
use crate::progress::{Progress, SourceSummary};
use crate::render::render_html;
use crate::sources::{self, SourceAdapter};
use crate::store::{Written, write_outputs};

pub const HELP: &str = include_str!("cli_help.txt");

pub enum Command {
    Run(RunOptions),
    Help,
}

/// Apply command-line flags on top of `opts` (defaults + environment).
pub fn parse_args<I>(args: I, mut opts: RunOptions) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                let v = args.next().ok_or_else(|| missing("--out"))?;
                opts.out_dir = PathBuf::from(v);
            }
            "--offline" => opts.offline = true,
            "--timeout" => {
                let v = args.next().ok_or_else(|| missing("--timeout"))?;
                opts.timeout = parse_timeout(&v)?;
            }
            "-q" | "--quiet" => opts.verbosity = Verbosity::Quiet,
            "-v" | "--verbose" => opts.verbosity = Verbosity::Verbose,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(Error::Options(format!("Unknown arg: {a}"))),
        }
    }
    Ok(Command::Run(opts))
}

fn missing(flag: &str) -> Error {
    Error::Options(format!("Missing value for {flag}"))
}

/// What a finished run produced.
pub struct Report {
    pub snapshot: Snapshot,
    pub written: Written,
    /// Cell tally over the whole snapshot.
    pub totals: SourceSummary,
}

/// Full pipeline with the built-in sources and fallback table.
pub fn run(opts: &RunOptions, progress: Option<&mut dyn Progress>) -> Result<Report> {
    let adapters = sources::builtin();
    let fallback = FallbackTable::builtin();
    info!("fallback table revision {FALLBACK_REVISION}, {} entries", fallback.len());

    if opts.offline {
        info!("offline: network disabled");
        run_with(opts, &adapters, &fallback, &OfflineFetcher, progress)
    } else {
        let fetcher = HttpFetcher::new(opts.timeout);
        run_with(opts, &adapters, &fallback, &fetcher, progress)
    }
}

/// Aggregate, render, write. Source failures never surface here; only
/// output errors do.
pub fn run_with(
    opts: &RunOptions,
    adapters: &[Box<dyn SourceAdapter>],
    fallback: &FallbackTable,
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<Report> {
    let snapshot = Aggregator::new(fallback, fetcher).run(adapters, progress);
    let html = render_html(&snapshot)?;
    let written = write_outputs(&snapshot, &html, opts)?;
    let totals = tally(&snapshot, adapters);
    Ok(Report { snapshot, written, totals })
}

fn tally(snapshot: &Snapshot, adapters: &[Box<dyn SourceAdapter>]) -> SourceSummary {
    snapshot
        .sources()
        .filter_map(|(source, cells)| {
            let adapter = adapters.iter().find(|a| a.source() == source)?;
            Some(summarize(adapter.as_ref(), cells))
        })
        .fold(SourceSummary::default(), |acc, s| SourceSummary {
            extracted: acc.extracted + s.extracted,
            fixed: acc.fixed + s.fixed,
            fallback: acc.fallback + s.fallback,
            unavailable: acc.unavailable + s.unavailable,
        })
}

/// Prints one line per source to stdout.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn source_done(&mut self, source: SourceId, summary: &SourceSummary) {
        self.done += 1;
        println!(
            "[{}/{}] {source}: {}/{} live, {} fixed, {} fallback, {} n/a",
            self.done,
            self.total,
            summary.live(),
            summary.total(),
            summary.fixed,
            summary.fallback,
            summary.unavailable
        );
    }
}

/// Closing summary line for the console.
pub fn summary_line(report: &Report) -> String {
    let totals = &report.totals;
    format!(
        "{}/{} cells live. Wrote {} and {}",
        totals.live(),
        totals.total(),
        report.written.json.display(),
        report.written.html.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn flags_override_options() {
        let Command::Run(opts) =
            parse_args(args(&["-o", "site", "--offline", "--timeout", "7", "-v"]), RunOptions::default()).unwrap()
        else {
            panic!("expected run");
        };
        assert_eq!(opts.out_dir, PathBuf::from("site"));
        assert!(opts.offline);
        assert_eq!(opts.timeout, Duration::from_secs(7));
        assert_eq!(opts.verbosity, Verbosity::Verbose);
    }

    #[test]
    fn help_and_bad_args() {
        assert!(matches!(parse_args(args(&["--help"]), RunOptions::default()), Ok(Command::Help)));
        assert!(parse_args(args(&["--bogus"]), RunOptions::default()).is_err());
        assert!(parse_args(args(&["--out"]), RunOptions::default()).is_err());
        assert!(parse_args(args(&["--timeout", "0"]), RunOptions::default()).is_err());
    }
}
