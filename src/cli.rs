use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "cisbench",
    version,
    about = "Extract CIS benchmark rules into structured YAML, JSON or CSV"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Extract(ExtractArgs),
    Toc(TocArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ExtractArgs {
    /// Benchmark to parse; PDFs go through pdftotext, anything else is read as text.
    #[arg(long = "in", short = 'i')]
    pub input: PathBuf,

    /// Defaults to ./<input stem>_extracted.<yaml|json|csv>.
    #[arg(long = "out", short = 'o')]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    #[arg(long, short = 'c', default_value_t = false)]
    pub csv: bool,

    /// Collapse every line break inside section content.
    #[arg(long = "trim-sections", short = 't', default_value_t = false)]
    pub trim_sections: bool,

    #[arg(long, short = 'd', default_value_t = false)]
    pub details: bool,

    #[arg(long)]
    pub report_path: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl ExtractArgs {
    pub fn effective_format(&self) -> OutputFormat {
        if self.csv {
            OutputFormat::Csv
        } else {
            self.format
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct TocArgs {
    #[arg(long = "in", short = 'i')]
    pub input: PathBuf,

    /// Print to stdout when omitted.
    #[arg(long = "out", short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yaml => "yaml",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    pub fn extension(self) -> &'static str {
        self.as_str()
    }
}
