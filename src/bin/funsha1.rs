// funsha1 -- find a byte string whose SHA-1 digest is the given hash
//
// Usage: funsha1 [OPTIONS] HASH
//
// Enumerates every byte string, shortest first, until one hashes to HASH
// or to HASH with its bytes reversed.

use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use funsha1::MatchKind;
use funsha1::cli::{Cli, EXIT_CONFIG_ERROR, TOOL_NAME, exit_status};
use funsha1::common::output::{escape_bytes, write_bytes_line};
use funsha1::common::reset_sigpipe;
use funsha1::search::search;

fn main() {
    reset_sigpipe();
    let cli = Cli::parse();
    init_logging(&cli);

    let (target, config) = match cli.configure() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, e);
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    let quiet = cli.quiet;
    let found = search(&target, &config, move |ceiling| {
        if quiet {
            return;
        }
        let mut out = io::stdout().lock();
        if write_bytes_line(&mut out, ceiling)
            .and_then(|_| out.flush())
            .is_err()
        {
            // Broken pipe or write error; exit cleanly
            process::exit(0);
        }
    });

    let found = match found {
        Ok(found) => found,
        Err(e) => {
            eprintln!("{}: {}", TOOL_NAME, e);
            process::exit(EXIT_CONFIG_ERROR);
        }
    };

    match (&found, config.max_len) {
        (Some(m), _) => {
            println!("{}", m);
            tracing::info!(
                text = %escape_bytes(&m.candidate),
                reversed = m.kind == MatchKind::Reversed,
                "preimage found"
            );
        }
        (None, Some(max)) => {
            eprintln!(
                "{}: no preimage of {} with at most {} bytes",
                TOOL_NAME, target, max
            );
        }
        (None, None) => {
            eprintln!("{}: search ended without a preimage of {}", TOOL_NAME, target);
        }
    }
    process::exit(exit_status(&found));
}

fn init_logging(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(true)
        .init();
}
