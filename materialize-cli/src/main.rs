mod cli;

use std::fs::{self, File};
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use hostdom::serialize::inner_html;
use hostdom::{Document, DomError};
use log::SetLoggerError;
use materialize_lib::{ElementDescriptor, MaterializeError, render_into};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode, WriteLogger};

use cli::Cli;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] SetLoggerError),

    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(html) => {
            println!("{html}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    init_logger(cli)?;

    let source = read_descriptor(cli)?;
    render_document(&source, cli)
}

/// Load `source`, render it into a fresh document `cli.repeat` times and
/// return the document's inner HTML.
fn render_document(source: &str, cli: &Cli) -> Result<String, CliError> {
    let descriptor = ElementDescriptor::from_json(source)?;

    let mut document = if cli.no_root {
        Document::new()
    } else {
        Document::with_root_container(&cli.root_id)
    };

    let config = cli.render_config();
    for _ in 0..cli.repeat {
        render_into(&descriptor, &mut document, &config)?;
    }
    log::info!(
        "[cli] rendered <{}> {} time(s), document has {} nodes",
        descriptor.kind(),
        cli.repeat,
        document.node_count()
    );

    Ok(inner_html(&document, document.root())?)
}

fn init_logger(cli: &Cli) -> Result<(), CliError> {
    let level = cli.log_level();
    match &cli.log_file {
        Some(path) => WriteLogger::init(level, Config::default(), File::create(path)?)?,
        None => TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )?,
    }
    Ok(())
}

fn read_descriptor(cli: &Cli) -> io::Result<String> {
    match cli.descriptor_path() {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
