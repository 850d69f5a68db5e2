use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context};
use craft_core::paths::ensure_app_dir;
use craft_core::{common_materials, inspiration_ideas, Config, CraftIdea, ImagePayload, AVAILABLE_SUPPLIES};
use craft_export::export_pdf;
use craft_llm::GeminiProvider;
use craft_pipeline::{IdeaPipeline, IdeaRequest, ProgressEvent, ThrottlePolicy};
use storage_manager::{FileStorage, SaveOutcome, SavedIdeasStore};

use crate::cli::{GenerateArgs, InspirationCommand, SavedCommand};
use crate::render::{self, print_progress};
use crate::share::share_idea;
use crate::view::SavedIdeasBrowser;

fn build_pipeline(config: &Config) -> anyhow::Result<IdeaPipeline> {
    let provider = GeminiProvider::from_config(config).context("Failed to build HTTP client")?;
    Ok(IdeaPipeline::new(Arc::new(provider)).with_throttle(ThrottlePolicy::from_config(config)))
}

fn open_store(config: &Config) -> SavedIdeasStore<FileStorage> {
    if config.storage_path.is_none() {
        if let Err(e) = ensure_app_dir() {
            log::warn!("Could not create the application directory: {}", e);
        }
    }
    SavedIdeasStore::load(FileStorage::from_config(config))
}

/// Convert a 1-based number from the command line into an index.
fn to_index(number: usize, len: usize) -> anyhow::Result<usize> {
    if number == 0 || number > len {
        bail!("No idea number {number}; choose between 1 and {len}");
    }
    Ok(number - 1)
}

fn save_and_report(store: &mut SavedIdeasStore<FileStorage>, idea: &CraftIdea) -> anyhow::Result<()> {
    match store.save_idea(idea)? {
        SaveOutcome::Saved => render::success(&format!("Saved '{}'", idea.title)),
        SaveOutcome::AlreadySaved => render::success(&format!("'{}' is already saved", idea.title)),
    }
    Ok(())
}

fn export_and_report(idea: &CraftIdea, out_dir: &Path) -> anyhow::Result<()> {
    let path = export_pdf(idea, &idea.title, out_dir)?;
    render::success(&format!("Exported {}", path.display()));
    Ok(())
}

pub async fn generate(config: &Config, args: GenerateArgs) -> anyhow::Result<()> {
    let pipeline = build_pipeline(config)?;
    let image = ImagePayload::from_path(&args.image)
        .with_context(|| format!("Could not use {}", args.image.display()))?;

    let request = IdeaRequest {
        image,
        available_supplies: args.supplies.clone(),
        custom_idea: args.idea.clone(),
        generation_config: args.generation_config(),
    };

    let idea = pipeline
        .generate_idea(request, &mut |event: ProgressEvent| print_progress(event))
        .await?;
    render::print_idea(&idea);

    if args.save {
        let mut store = open_store(config);
        save_and_report(&mut store, &idea)?;
    }
    if let Some(dir) = &args.pdf {
        export_and_report(&idea, dir)?;
    }
    Ok(())
}

pub async fn saved(config: &Config, command: SavedCommand) -> anyhow::Result<()> {
    let mut browser = SavedIdeasBrowser::new(open_store(config));

    match command {
        SavedCommand::List => {
            if browser.store().is_empty() {
                println!("You haven't saved any ideas yet.");
            } else {
                render::print_idea_list(browser.store().ideas());
            }
        }
        SavedCommand::Show { number } => {
            let index = to_index(number, browser.store().len())?;
            let lean = browser.open(index)?;
            let pipeline = build_pipeline(config)?;

            match pipeline
                .hydrate_images(lean, &mut |event: ProgressEvent| print_progress(event))
                .await
            {
                Ok(hydrated) => {
                    render::print_idea(&hydrated);
                    browser.show_hydrated(hydrated);
                }
                Err(e) => {
                    browser.back();
                    return Err(e.into());
                }
            }
        }
        SavedCommand::Delete { number } => {
            let index = to_index(number, browser.store().len())?;
            let removed = browser.delete(index)?;
            render::success(&format!("Deleted '{}'", removed.title));
        }
        SavedCommand::Clear { yes } => {
            if browser.store().is_empty() {
                println!("There are no saved ideas to delete.");
                return Ok(());
            }
            if !yes && !confirm("Are you sure you want to delete all saved ideas? This cannot be undone.")? {
                println!("Nothing was deleted.");
                return Ok(());
            }
            browser.clear()?;
            render::success("Deleted all saved ideas");
        }
        SavedCommand::Export { number, out } => {
            let index = to_index(number, browser.store().len())?;
            let idea = browser.open(index)?;
            export_and_report(&idea, &out)?;
        }
        SavedCommand::Share { number } => {
            let index = to_index(number, browser.store().len())?;
            let idea = browser.open(index)?;
            share_idea(&idea);
        }
    }
    Ok(())
}

pub async fn inspiration(config: &Config, command: InspirationCommand) -> anyhow::Result<()> {
    let ideas = inspiration_ideas();

    match command {
        InspirationCommand::List => render::print_idea_list(&ideas),
        InspirationCommand::Show { number, save } => {
            let index = to_index(number, ideas.len())?;
            let lean = ideas[index].clone();
            let pipeline = build_pipeline(config)?;

            let hydrated = pipeline
                .hydrate_images(lean.clone(), &mut |event: ProgressEvent| print_progress(event))
                .await?;
            render::print_idea(&hydrated);

            if save {
                let mut store = open_store(config);
                save_and_report(&mut store, &lean)?;
            }
        }
    }
    Ok(())
}

pub fn supplies() {
    for supply in AVAILABLE_SUPPLIES {
        println!("  {supply}");
    }
}

pub fn materials() {
    render::print_materials(&common_materials());
}

fn confirm(question: &str) -> anyhow::Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
