use std::path::PathBuf;

use clap::{ArgAction, Parser};
use materialize_lib::RenderConfig;
use materialize_lib::config::DEFAULT_CONTAINER_SELECTOR;
use simplelog::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "materialize")]
#[command(about = "Render an element descriptor into a document and print the HTML")]
pub struct Cli {
    /// Descriptor JSON file (stdin when omitted or "-")
    pub descriptor: Option<PathBuf>,

    /// Selector for the container that receives the element
    #[arg(long, default_value = DEFAULT_CONTAINER_SELECTOR)]
    pub selector: String,

    /// Id of the root container created in the document
    #[arg(long, default_value = "root")]
    pub root_id: String,

    /// Start from an empty body instead of creating the root container
    #[arg(long)]
    pub no_root: bool,

    /// Number of times to materialize the descriptor
    #[arg(long, default_value_t = 1)]
    pub repeat: usize,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Descriptor path, `None` meaning stdin.
    pub fn descriptor_path(&self) -> Option<&PathBuf> {
        self.descriptor
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig::new().with_container_selector(&self.selector)
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
