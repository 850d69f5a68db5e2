use std::path::PathBuf;

use clap::{Parser, Subcommand};
use craft_core::models::{TEMPERATURE_RANGE, TOP_P_RANGE};
use craft_core::{find_supply, GenerationConfig, AVAILABLE_SUPPLIES};

#[derive(Parser)]
#[command(name = "junk-art")]
#[command(about = "Turn a photo of household junk into a kid-friendly craft project")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short, global = true, default_value = "false")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate an illustrated craft idea from a photo
    Generate(GenerateArgs),
    /// Manage saved ideas
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },
    /// Browse the built-in project gallery
    Inspiration {
        #[command(subcommand)]
        command: InspirationCommand,
    },
    /// List the supply tags accepted by `generate --supply`
    Supplies,
    /// Show the guide to common craft materials
    Materials,
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Photo of the junk to craft with (PNG, JPEG, GIF or WebP)
    pub image: PathBuf,

    /// Supply you have on hand (repeatable)
    #[arg(long = "supply", value_parser = parse_supply)]
    pub supplies: Vec<String>,

    /// What you would like to make, e.g. "a robot"
    #[arg(long, default_value = "")]
    pub idea: String,

    #[arg(long, default_value_t = GenerationConfig::default().temperature, value_parser = parse_temperature)]
    pub temperature: f32,

    #[arg(long, default_value_t = GenerationConfig::default().top_k, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub top_k: u32,

    #[arg(long, default_value_t = GenerationConfig::default().top_p, value_parser = parse_top_p)]
    pub top_p: f32,

    /// Save the idea once it is ready
    #[arg(long)]
    pub save: bool,

    /// Also export the idea as a PDF into this directory
    #[arg(long, value_name = "DIR")]
    pub pdf: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            top_k: self.top_k,
            top_p: self.top_p,
        }
    }
}

#[derive(Subcommand)]
pub enum SavedCommand {
    /// List saved ideas, newest first
    List,
    /// Show a saved idea with freshly generated illustrations
    Show { number: usize },
    /// Delete one saved idea
    Delete { number: usize },
    /// Delete every saved idea
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Export a saved idea as a PDF
    Export {
        number: usize,
        #[arg(long, value_name = "DIR", default_value = ".")]
        out: PathBuf,
    },
    /// Copy a saved idea to the clipboard as text
    Share { number: usize },
}

#[derive(Subcommand)]
pub enum InspirationCommand {
    /// List the gallery projects
    List,
    /// Show a gallery project with generated illustrations
    Show {
        number: usize,
        /// Save the project to your ideas
        #[arg(long)]
        save: bool,
    },
}

fn parse_supply(value: &str) -> Result<String, String> {
    find_supply(value).map(str::to_string).ok_or_else(|| {
        format!(
            "unknown supply '{value}', expected one of: {}",
            AVAILABLE_SUPPLIES.join(", ")
        )
    })
}

fn parse_unit(value: &str, range: std::ops::RangeInclusive<f32>) -> Result<f32, String> {
    let parsed: f32 = value
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if range.contains(&parsed) {
        Ok(parsed)
    } else {
        Err(format!(
            "{parsed} is outside {}..={}",
            range.start(),
            range.end()
        ))
    }
}

fn parse_temperature(value: &str) -> Result<f32, String> {
    parse_unit(value, TEMPERATURE_RANGE)
}

fn parse_top_p(value: &str) -> Result<f32, String> {
    parse_unit(value, TOP_P_RANGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_args_parse_with_defaults() {
        let cli = Cli::try_parse_from(["junk-art", "generate", "junk.png"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.generation_config(), GenerationConfig::default());
        assert!(args.supplies.is_empty());
        assert!(args.idea.is_empty());
    }

    #[test]
    fn supplies_and_sampling_are_validated() {
        let cli = Cli::try_parse_from([
            "junk-art",
            "generate",
            "junk.png",
            "--supply",
            "Glue",
            "--supply",
            "googly eyes",
            "--top-k",
            "12",
            "--temperature",
            "0.2",
        ])
        .unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.supplies, vec!["glue", "googly eyes"]);
        assert_eq!(args.generation_config().top_k, 12);

        assert!(Cli::try_parse_from(["junk-art", "generate", "a.png", "--supply", "lasers"]).is_err());
        assert!(Cli::try_parse_from(["junk-art", "generate", "a.png", "--top-k", "0"]).is_err());
        assert!(Cli::try_parse_from(["junk-art", "generate", "a.png", "--top-p", "1.5"]).is_err());
    }

    #[test]
    fn saved_subcommands_parse() {
        let cli = Cli::try_parse_from(["junk-art", "saved", "export", "2", "--out", "/tmp"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Saved {
                command: SavedCommand::Export { number: 2, .. }
            }
        ));
    }
}
