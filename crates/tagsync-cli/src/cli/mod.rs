//! CLI for tagsync.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tagsync_core::config::{self, TagsyncConfig};

use commands::{run_columns, run_extract_impression, run_process, run_rewrite_url};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tagsync")]
#[command(
    about = "Match ad exports with tracker tags and rewrite click URLs",
    long_about = None
)]
pub struct Cli {
    /// Debug-level logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file to use instead of ~/.config/tagsync/config.toml.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Which exports `process` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Xlsx,
    Both,
}

impl OutputFormat {
    pub fn csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }

    pub fn xlsx(self) -> bool {
        matches!(self, OutputFormat::Xlsx | OutputFormat::Both)
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Join an ad export with a tag file and write the updated ads.
    Process {
        /// Ad export (.csv, or spreadsheet with an "Ads" sheet).
        #[arg(long, value_name = "FILE")]
        ads: PathBuf,

        /// Tag file (.csv, or spreadsheet with a "Tracking Ads" sheet).
        #[arg(long, value_name = "FILE")]
        tags: PathBuf,

        /// Directory for the output files.
        #[arg(long, default_value = ".", value_name = "DIR")]
        out_dir: PathBuf,

        /// Output file name without extension.
        #[arg(long, default_value = "Updated_TikTok_Ads")]
        name: String,

        #[arg(long, value_enum, default_value_t = OutputFormat::Both)]
        format: OutputFormat,
    },

    /// Rewrite a single click URL.
    RewriteUrl {
        url: String,

        /// Campaign name for utm_campaign / tf_campaign.
        #[arg(long)]
        campaign: String,

        /// Tracker prefix glued in front of the URL.
        #[arg(long)]
        tracker: Option<String>,
    },

    /// Print the URL inside an impression tag snippet.
    ExtractImpression {
        /// Tag snippet, e.g. '<img src="https://...">'.
        tag: String,
    },

    /// List a tag file's columns and the tracker columns that would be used.
    Columns {
        #[arg(long, value_name = "FILE")]
        tags: PathBuf,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = self.load_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match self.command {
            CliCommand::Process {
                ads,
                tags,
                out_dir,
                name,
                format,
            } => run_process(&cfg, &ads, &tags, &out_dir, &name, format)?,
            CliCommand::RewriteUrl {
                url,
                campaign,
                tracker,
            } => run_rewrite_url(&cfg, &url, &campaign, tracker.as_deref()),
            CliCommand::ExtractImpression { tag } => run_extract_impression(&tag)?,
            CliCommand::Columns { tags } => run_columns(&cfg, &tags)?,
        }

        Ok(())
    }

    fn load_config(&self) -> Result<TagsyncConfig> {
        match &self.config {
            Some(path) => config::load_from(path),
            None => config::load_or_init(),
        }
    }
}

#[cfg(test)]
mod tests;
