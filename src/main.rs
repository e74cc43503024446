//! tiergrid - a deterministic canvas layout editor core
//!
//! Headless session driver over the workspace crates: creates and edits
//! layouts, persists the collection, queries the user directory and dumps
//! render scenes.

mod cli;
mod config;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use tracing::info;

use cli::{Cli, Command};
use config::EditorConfig;
use session::EditorSession;
use tiergrid_core::{Layout, TemplateKind};
use tiergrid_directory::UserDirectory;
use tiergrid_layout::SlotPatch;
use tiergrid_render::Scene;
use tiergrid_store::FileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing with WARN level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = EditorConfig::load_from_path(&cli.config);
    info!("Starting tiergrid v{}", env!("CARGO_PKG_VERSION"));

    let store = FileStore::open(&config.storage_dir).with_context(|| {
        format!(
            "failed to open layout storage at {}",
            config.storage_dir.display()
        )
    })?;
    let mut session = EditorSession::new(store, config.canvas());

    match cli.command {
        Command::New { tier_list, name } => {
            let layout = session.create(name.as_deref(), kind_for(tier_list));
            println!("Created {} ({})", layout.id, layout.name);
            print_summary(layout);
        }
        Command::List => {
            if session.layouts().is_empty() {
                println!("No saved layouts");
            }
            for layout in session.layouts() {
                println!(
                    "{}  {:<10} {:>3} slots  {}",
                    layout.id,
                    kind_tag(layout),
                    layout.size,
                    layout.name
                );
            }
        }
        Command::Show { id } => match session.get(&id) {
            Some(layout) => print_summary(layout),
            None => println!("Layout {id} not found"),
        },
        Command::Open { id, tier_list } => {
            let layout = session.open(&id, kind_for(tier_list));
            print_summary(layout);
        }
        Command::Duplicate { id } => match session.duplicate(&id) {
            Some(copy) => println!("Created {} ({})", copy.id, copy.name),
            None => println!("Layout {id} not found"),
        },
        Command::Delete { id } => {
            session.delete(&id);
            println!("Deleted {id}");
        }
        Command::Clear { id } => {
            session.open(&id, TemplateKind::Default);
            session.clear_all_slots();
            session.save_current();
            println!("Cleared all slots of {id}");
        }
        Command::Assign {
            id,
            slot,
            screen_name,
        } => {
            let mut directory = UserDirectory::new();
            if directory.refresh(&config.directory_url).await.is_err() {
                println!(
                    "Directory unavailable: {}",
                    directory.last_error().unwrap_or("unknown error")
                );
                return Ok(());
            }
            let user = directory
                .users()
                .iter()
                .find(|u| u.screen_name.eq_ignore_ascii_case(&screen_name))
                .cloned();
            match user {
                Some(user) => {
                    session.open(&id, TemplateKind::Default);
                    session.assign_user(&slot, user);
                    session.save_current();
                    println!("Assigned @{screen_name} to slot {slot}");
                }
                None => println!("No directory user named @{screen_name}"),
            }
        }
        Command::ClearSlot { id, slot } => {
            session.open(&id, TemplateKind::Default);
            session.clear_slot(&slot);
            session.save_current();
            println!("Cleared slot {slot} of {id}");
        }
        Command::EditSlot {
            id,
            slot,
            x,
            y,
            width,
            height,
            rotation,
            scale,
            opacity,
            background_color,
            text_color,
        } => {
            let patch = SlotPatch {
                x,
                y,
                width,
                height,
                rotation,
                scale,
                opacity,
                background_color,
                text_color,
                ..SlotPatch::default()
            };
            session.open(&id, TemplateKind::Default);
            session.update_slot(&slot, &patch);
            session.save_current();
            println!("Patched slot {slot} of {id}");
        }
        Command::SetBackground { id, color } => {
            session.open(&id, TemplateKind::Default);
            session.set_background(&color);
            session.save_current();
            println!("Set background of {id}");
        }
        Command::Users { term } => {
            let mut directory = UserDirectory::new();
            if directory.refresh(&config.directory_url).await.is_err() {
                // Recoverable: report and continue with the empty list.
                println!(
                    "Directory unavailable: {}",
                    directory.last_error().unwrap_or("unknown error")
                );
            }
            let matches = directory.search(term.as_deref().unwrap_or(""));
            println!("{} users", matches.len());
            for user in matches {
                println!("@{} ({} followers)", user.screen_name, user.followers_count);
            }
        }
        Command::ExportScene { id, out } => match session.get(&id) {
            Some(layout) => {
                let scene = Scene::from_layout(layout);
                let path = out.unwrap_or_else(|| {
                    format!(
                        "{}-{}x{}.json",
                        layout.name,
                        layout.width as u64,
                        layout.height as u64
                    )
                    .into()
                });
                let json = serde_json::to_string_pretty(&scene)
                    .context("failed to serialize scene")?;
                fs::write(&path, json)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                println!("Wrote {} ops to {}", scene.ops.len(), path.display());
            }
            None => println!("Layout {id} not found"),
        },
    }

    Ok(())
}

fn kind_for(tier_list: bool) -> TemplateKind {
    if tier_list {
        TemplateKind::TierList
    } else {
        TemplateKind::Default
    }
}

fn kind_tag(layout: &Layout) -> &'static str {
    match layout.template_kind {
        TemplateKind::Default => "grid",
        TemplateKind::TierList => "tier list",
    }
}

fn print_summary(layout: &Layout) {
    println!("{} ({})", layout.name, layout.id);
    println!(
        "  {} template, {}x{}, {} slots ({} occupied)",
        kind_tag(layout),
        layout.width,
        layout.height,
        layout.size,
        layout.occupied_count()
    );
    for category in layout.categories() {
        let members = layout
            .slots
            .iter()
            .filter(|s| s.category_id.as_deref() == Some(category.id.as_str()))
            .count();
        println!(
            "  band {:<14} y={:<7.1} h={:<7.1} {} slots",
            category.title, category.y_position, category.height, members
        );
    }
    println!("  updated {}", layout.updated_at.to_rfc3339());
}
