//! `DeckFlow` command line interface.
//!
//! Usage:
//!   `deckflow structure <outline.json> [template]`
//!   `deckflow export <outline.json> [template] [format]`
//!   `deckflow outline <topic> <source.txt>`
//!   `deckflow templates`
//!
//! The binary is a thin driver over the library: it reads outline JSON,
//! runs the structuring pipeline, and optionally assembles and exports the
//! deck through the JSON renderer.

// CLI binary - allow expect/unwrap for simpler error handling
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::env;
use std::process;

use anyhow::{Context, Result};
use fs_err as fs;

use deckflow::config::Config;
use deckflow::outline::{OutlineBuilder, RawOutline};
use deckflow::render::JsonDeckRenderer;
use deckflow::services::{Assembler, MemoryStore};
use deckflow::structure::structure_content;
use deckflow::template::{TemplateCustomizations, TemplateRegistry};
use deckflow::types::ExportFormat;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage(&args[0]);
        process::exit(1);
    }

    let config = Config::load()?;

    match args[1].as_str() {
        "structure" => cmd_structure(&args[2..], &config),
        "export" => cmd_export(&args[2..], &config),
        "outline" => cmd_outline(&args[2..], &config),
        "templates" => cmd_templates(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage(&args[0]);
            process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} <command> [args]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  structure <outline.json> [template]        Structure an outline and print the deck");
    eprintln!("  export <outline.json> [template] [format]  Structure, store, and render the deck");
    eprintln!("  outline <topic> <source.txt>               Build an outline from plain text");
    eprintln!("  templates                                  List built-in templates");
}

fn read_outline(path: &str) -> Result<RawOutline> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading outline file {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing outline JSON in {path}"))
}

fn cmd_structure(args: &[String], config: &Config) -> Result<()> {
    let Some(path) = args.first() else {
        eprintln!("structure: missing outline file");
        process::exit(1);
    };
    let requested = args.get(1).map_or(config.default_template.as_str(), String::as_str);

    let outline = read_outline(path)?;
    let registry = TemplateRegistry::with_builtins();
    let resolved = registry.resolve(requested);
    if resolved.fell_back {
        eprintln!("warning: unknown template '{requested}', using {}", resolved.template.name);
    }

    let content = structure_content(&outline, &resolved.template.name)?;
    println!("{}", serde_json::to_string_pretty(&content)?);
    Ok(())
}

fn cmd_export(args: &[String], config: &Config) -> Result<()> {
    let Some(path) = args.first() else {
        eprintln!("export: missing outline file");
        process::exit(1);
    };
    let requested = args.get(1).map_or(config.default_template.as_str(), String::as_str);
    let format = match args.get(2) {
        Some(raw) => raw.parse::<ExportFormat>()?,
        None => ExportFormat::Pptx,
    };

    let outline = read_outline(path)?;
    let assembler = Assembler::new(MemoryStore::new(), JsonDeckRenderer)
        .with_export_dir(&config.export_dir);

    let created = assembler.create(&outline, requested, TemplateCustomizations::default())?;
    let record = &created.record;
    println!(
        "Created presentation {} ({} slides, {})",
        record.id,
        record.slide_count(),
        record.content.metadata.estimated_duration.formatted
    );

    let exported = assembler.request_export(&record.id, format)?;
    println!(
        "Exported as {} to {}",
        exported.format,
        exported.path.display()
    );
    Ok(())
}

fn cmd_outline(args: &[String], config: &Config) -> Result<()> {
    let (Some(topic), Some(source_path)) = (args.first(), args.get(1)) else {
        eprintln!("outline: expected <topic> <source.txt>");
        process::exit(1);
    };

    let source = fs::read_to_string(source_path)
        .with_context(|| format!("reading source text {source_path}"))?;
    let outline = OutlineBuilder::new()
        .with_max_sections(config.max_outline_sections)
        .build(topic, &source);

    println!("{}", serde_json::to_string_pretty(&outline)?);
    Ok(())
}

fn cmd_templates() -> Result<()> {
    let registry = TemplateRegistry::with_builtins();
    println!("Built-in templates:");
    for info in registry.catalog() {
        println!("  {:<14} {}", info.id, info.description);
        println!(
            "      colors {} / {} / {}  font {}",
            info.preview.primary_color,
            info.preview.secondary_color,
            info.preview.accent_color,
            info.preview.font_family
        );
    }
    Ok(())
}
