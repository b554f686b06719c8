mod report;

use clap::{Arg, ArgMatches, Command};
use praized_checker::Checker;
use std::io::{BufRead, Write};
use tracing_subscriber::EnvFilter;

fn cli() -> Command<'static> {
    Command::new("praized")
        .about("Checks the shape of Praized API URLs without calling the API")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only report URLs that fail the check"),
        )
        .arg(
            Arg::new("url")
                .takes_value(true)
                .multiple_values(true)
                .help("URLs to check, read line by line from stdin if omitted"),
        )
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let checker = Checker::new()?;
    let urls = urls(&matches)?;
    let quiet = matches.is_present("quiet");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut failed = 0usize;
    for url in &urls {
        let result = checker.check(url);
        if !result.is_valid() {
            failed += 1;
        }
        report::write(&mut out, url, &result, quiet)?;
    }
    out.flush()?;

    tracing::debug!(total = urls.len(), failed, "done");
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn urls(matches: &ArgMatches) -> eyre::Result<Vec<String>> {
    if let Some(values) = matches.values_of("url") {
        return Ok(values.map(str::to_string).collect());
    }

    let stdin = std::io::stdin();
    let mut urls = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            urls.push(line.to_string());
        }
    }
    Ok(urls)
}
