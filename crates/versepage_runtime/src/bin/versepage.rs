//! Versepage CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use versepage_index::PageIndex;
use versepage_runtime::config::parse_fallback;
use versepage_runtime::{Repl, RuntimeConfig, load_entries, logging, render};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    reference: Vec<String>,
    map_path: Option<PathBuf>,
    fallback_verses: Option<u32>,
    json_output: bool,
    quiet: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    logging::init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--json" => config.json_output = true,
            "-q" | "--quiet" => config.quiet = true,
            "-m" | "--map" => {
                let path = args.next().ok_or("--map requires a path")?;
                config.map_path = Some(PathBuf::from(path));
            }
            "--fallback-verses" => {
                let value = args.next().ok_or("--fallback-verses requires a value")?;
                config.fallback_verses = Some(parse_fallback(&value)?);
            }
            "--" => {
                config.reference.extend(args.by_ref());
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}").into());
            }
            word => config.reference.push(word.to_string()),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(ExitCode::SUCCESS);
    }

    if cli.show_version {
        println!("versepage {}", env!("CARGO_PKG_VERSION"));
        return Ok(ExitCode::SUCCESS);
    }

    let mut config = RuntimeConfig::from_env()?
        .with_json_output(cli.json_output)
        .with_banner(!cli.quiet);
    if let Some(path) = cli.map_path {
        config = config.with_map_path(path);
    }
    if let Some(verses) = cli.fallback_verses {
        config = config.with_fallback_verses(verses);
    }

    let entries = load_entries(&config.map_path)?;
    let index = PageIndex::builder()
        .with_config(config.index_config())
        .build(&entries);

    // A reference on the command line means one lookup, no REPL.
    if !cli.reference.is_empty() {
        let reference = cli.reference.join(" ");
        let result = index.lookup(&reference);
        let success = result.is_success();
        if config.json_output {
            println!("{}", render::to_json(&result));
        } else {
            versepage_runtime::repl::print(&render::human(&reference, &result));
        }
        return Ok(if success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let mut repl = Repl::new(Arc::new(index))?.with_json_output(config.json_output);
    if !config.show_banner {
        repl = repl.without_banner();
    }
    repl.run()?;
    Ok(ExitCode::SUCCESS)
}

fn print_help() {
    println!(
        "\x1b[1mVersepage\x1b[0m - Bible reference to page lookup

\x1b[1mUSAGE:\x1b[0m
    versepage [OPTIONS] [REFERENCE]

\x1b[1mARGUMENTS:\x1b[0m
    [REFERENCE]    Citation to look up; starts the REPL when omitted

\x1b[1mOPTIONS:\x1b[0m
    -m, --map PATH           Page dataset, CSV or JSON (default: page_map.csv)
        --fallback-verses N  Verses assumed per chapter (default: 50)
        --json               Print results as JSON
    -q, --quiet              Skip the REPL banner
    -h, --help               Print help information
    -V, --version            Print version information

\x1b[1mENVIRONMENT:\x1b[0m
    VERSEPAGE_MAP              Default for --map
    VERSEPAGE_FALLBACK_VERSES  Default for --fallback-verses
    RUST_LOG                   Log filter (default: warn)

\x1b[1mEXAMPLES:\x1b[0m
    versepage \"John 3:16\"              Look up one verse
    versepage Gen 1-2                  Look up two chapters
    versepage -m pages.json --json Ps 23
    versepage                          Start interactive REPL"
    );
}
