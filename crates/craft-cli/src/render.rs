use colored::Colorize;
use craft_core::{CraftIdea, MaterialCategory};
use craft_pipeline::ProgressEvent;

/// Print pipeline progress as it arrives.
pub fn print_progress(event: ProgressEvent) {
    match event {
        ProgressEvent::Status(message) => println!("{}", format!("⏳ {message}").cyan()),
        ProgressEvent::StepHydrated { index, step } => {
            if step.has_image() {
                println!("{}", format!("   🎨 Step {} illustrated", index + 1).dimmed());
            } else {
                println!(
                    "{}",
                    format!("   ⚠️  Step {} has no illustration", index + 1).yellow()
                );
            }
        }
    }
}

pub fn print_idea(idea: &CraftIdea) {
    println!();
    println!("{}", idea.title.bold().green());
    println!();
    println!("{}", "Materials Needed".bold());
    for material in &idea.materials {
        println!("  - {material}");
    }
    println!();
    println!("{}", "Instructions".bold());
    for (i, step) in idea.steps.iter().enumerate() {
        let marker = if step.has_image() { "🖼 " } else { "  " };
        println!("  {marker}{}. {}", i + 1, step.text);
    }
    println!();
}

/// One line per idea, numbered from 1.
pub fn print_idea_list(ideas: &[CraftIdea]) {
    for (i, idea) in ideas.iter().enumerate() {
        println!(
            "{:>3}. {} {}",
            i + 1,
            idea.title.bold(),
            format!("({} steps)", idea.steps.len()).dimmed()
        );
    }
}

pub fn print_materials(categories: &[MaterialCategory]) {
    for category in categories {
        println!("{}", category.category.bold().cyan());
        for item in &category.items {
            println!("  {} - {}", item.name.bold(), item.description);
        }
        println!();
    }
}

pub fn success(message: &str) {
    println!("{}", format!("✅ {message}").green());
}

pub fn failure(message: &str) {
    eprintln!("{}", format!("❌ {message}").red());
}
