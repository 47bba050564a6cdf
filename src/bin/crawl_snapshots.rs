//! Replay a crawl against recorded page snapshots.
//!
//! Usage:
//!   crawl_snapshots <manifest.json> <username> [--limit N] [--output json|yaml|console] [--silent]
//!
//! The manifest holds the template and, per URL, a status and the HTML
//! snapshot files served for it (one per scroll position). Output goes to
//! `dist/<username>.json` or `dist/<username>.yml`, or to stdout as compact
//! JSON with `--output console`.

use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use profile_scrape::browser::fixture::FixtureBrowser;
use profile_scrape::{Crawler, Options, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Args {
    manifest: PathBuf,
    target: String,
    limit: Option<usize>,
    output: OutputFormat,
    silent: bool,
}

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut positional = Vec::new();
    let mut limit = None;
    let mut output = OutputFormat::Json;
    let mut silent = false;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--limit" | "-l" => {
                let value = args.next().ok_or("--limit needs a value")?;
                // Negative limits mean "no limit".
                let n: i64 = value.parse()?;
                limit = usize::try_from(n).ok().filter(|n| *n > 0);
            }
            "--output" | "-o" => {
                let value = args.next().ok_or("--output needs a value")?;
                output = OutputFormat::parse(&value).ok_or_else(|| format!("unsupported output {value:?}"))?;
            }
            "--silent" => silent = true,
            _ => positional.push(arg),
        }
    }

    let [manifest, target]: [String; 2] = positional
        .try_into()
        .map_err(|_| "usage: crawl_snapshots <manifest.json> <username> [--limit N] [--output json|yaml|console] [--silent]")?;

    Ok(Args {
        manifest: PathBuf::from(manifest),
        target,
        limit,
        silent: silent || output == OutputFormat::Console,
        output,
    })
}

fn write_output(args: &Args, text: &str) -> Result<(), Box<dyn Error>> {
    let Some(file_name) = args.output.file_name(&args.target) else {
        println!("{text}");
        return Ok(());
    };
    let dir = Path::new("dist");
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, text)?;
    eprintln!("Wrote: {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args()?;

    let default_filter = if args.silent {
        "profile_scrape=warn"
    } else {
        "profile_scrape=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (template, browser) = FixtureBrowser::from_manifest(&args.manifest)?;
    let options = Options {
        limit: args.limit,
        silent: args.silent,
        // Snapshots are already fully rendered.
        scroll_delay: Duration::ZERO,
        ..Options::default()
    };

    let output = Crawler::new(&browser, template, options)?.crawl(&args.target)?;

    let text = args.output.render(&output)?;
    write_output(&args, &text)
}
