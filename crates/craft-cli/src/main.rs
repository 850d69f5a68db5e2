mod cli;
mod commands;
mod logging;
mod render;
mod share;
mod view;

use clap::Parser;
use craft_core::Config;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.debug);

    let config = Config::new();
    log::debug!(
        "Using text model {} and image model {}",
        config.text_model(),
        config.image_model()
    );

    let result = match cli.command {
        Commands::Generate(args) => commands::generate(&config, args).await,
        Commands::Saved { command } => commands::saved(&config, command).await,
        Commands::Inspiration { command } => commands::inspiration(&config, command).await,
        Commands::Supplies => {
            commands::supplies();
            Ok(())
        }
        Commands::Materials => {
            commands::materials();
            Ok(())
        }
    };

    if let Err(e) = result {
        log::debug!("{e:?}");
        render::failure(&e.to_string());
        std::process::exit(1);
    }
}
