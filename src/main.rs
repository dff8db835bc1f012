use clap::{App, Arg};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use sol_interface::{generate_interface_from_fs, Options};

fn main() -> Result<()> {
    let matches = App::new("sol-interface")
        .version(env!("CARGO_PKG_VERSION"))
        .about(
            "Generates an interface contract in Solidity from a given contract.\n\
             Pass contract source on stdin or as a file argument.\n\n\
             Example:\n  $ sol-interface < MyContract.sol",
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Input Solidity file, read from stdin when omitted")
                .index(1),
        )
        .arg(
            Arg::with_name("importRoot")
                .long("importRoot")
                .alias("import-root")
                .value_name("DIR")
                .help("Specify the root import directory (defaults to the current directory)")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("stubs-only")
                .long("stubs-only")
                .help("Print only the stub lines, without pragma or contract wrapper"),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level filter when RUST_LOG is unset (e.g. debug, info, warn)")
                .default_value("warn")
                .takes_value(true),
        )
        .get_matches();

    init_logging(matches.value_of("log-level").unwrap_or("warn"));

    let import_root = match matches.value_of("importRoot") {
        Some(root) => PathBuf::from(root),
        None => env::current_dir().with_context(|| "Failed to determine current directory")?,
    };
    let options = Options::default()
        .with_import_root(import_root)
        .with_stubs_only(matches.is_present("stubs-only"));

    let source = match matches.value_of("INPUT") {
        Some(input_file) => fs::read_to_string(input_file)
            .with_context(|| format!("Failed to read input file: {}", input_file))?,
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .with_context(|| "Failed to read contract source from stdin")?;
            source
        }
    };

    let interface = generate_interface_from_fs(&source, &options)
        .with_context(|| "Failed to generate interface")?;

    println!("{}", interface);
    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}
