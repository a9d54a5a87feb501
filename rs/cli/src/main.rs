use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::analysis::AnalysisConfig;

mod commands;

use commands::{pca_report, render_json, resolve_config, word_cloud_report, Overrides};

/// Analysis tools for survey responses
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project multi-select answers onto their first two principal components
    Pca {
        /// JSON array of survey responses
        #[arg(short, long)]
        input: PathBuf,

        /// YAML analysis config, defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overrides the random seed for the power iteration
        #[arg(long)]
        seed: Option<u64>,

        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Word frequencies over the free text answers
    WordCloud {
        /// JSON array of survey responses
        #[arg(short, long)]
        input: PathBuf,

        /// YAML analysis config, defaults are used when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Overrides the number of words returned
        #[arg(long)]
        max_words: Option<usize>,

        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Print the default config as YAML
    DumpConfig,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Pca {
            input,
            config,
            seed,
            pretty,
        } => {
            let overrides = Overrides {
                seed,
                ..Default::default()
            };
            let config = resolve_config(config.as_deref(), &overrides)?;
            println!("{}", render_json(&pca_report(&input, config)?, pretty)?);
        }
        Command::WordCloud {
            input,
            config,
            max_words,
            pretty,
        } => {
            let overrides = Overrides {
                max_words,
                ..Default::default()
            };
            let config = resolve_config(config.as_deref(), &overrides)?;
            println!("{}", render_json(&word_cloud_report(&input, config), pretty)?);
        }
        Command::DumpConfig => {
            print!("{}", AnalysisConfig::default().to_yaml_string()?);
        }
    }
    Ok(())
}
