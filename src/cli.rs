//! Command-line interface definition.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Headless editor for profile-card canvas layouts.
#[derive(Parser, Debug)]
#[command(author, version, about = "Profile-card canvas layout editor", long_about = None)]
pub struct Cli {
    /// Path to the editor configuration file
    #[arg(long, default_value = "config/editor.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create, save and open a new layout
    New {
        /// Generate a tier list instead of the uniform grid
        #[arg(long)]
        tier_list: bool,
        /// Display name for the layout
        #[arg(long)]
        name: Option<String>,
    },
    /// List saved layouts
    List,
    /// Print one saved layout in detail
    Show {
        /// Layout id
        id: String,
    },
    /// Open a layout for editing, creating it under the id if absent
    Open {
        /// Layout id
        id: String,
        /// Template used when the id has to be created fresh
        #[arg(long)]
        tier_list: bool,
    },
    /// Copy a saved layout under a fresh identity
    Duplicate {
        /// Source layout id
        id: String,
    },
    /// Delete a saved layout
    Delete {
        /// Layout id
        id: String,
    },
    /// Empty every slot of a saved layout
    Clear {
        /// Layout id
        id: String,
    },
    /// Assign a directory user to a slot
    Assign {
        /// Layout id
        id: String,
        /// Slot id
        slot: String,
        /// Screen name looked up in the user directory
        screen_name: String,
    },
    /// Empty a single slot
    ClearSlot {
        /// Layout id
        id: String,
        /// Slot id
        slot: String,
    },
    /// Patch a slot's placement or style
    EditSlot {
        /// Layout id
        id: String,
        /// Slot id
        slot: String,
        /// New left edge
        #[arg(long)]
        x: Option<f64>,
        /// New top edge
        #[arg(long)]
        y: Option<f64>,
        /// New width
        #[arg(long)]
        width: Option<f64>,
        /// New height
        #[arg(long)]
        height: Option<f64>,
        /// New rotation in degrees
        #[arg(long)]
        rotation: Option<f64>,
        /// New uniform scale
        #[arg(long)]
        scale: Option<f64>,
        /// New opacity
        #[arg(long)]
        opacity: Option<f64>,
        /// New fill color
        #[arg(long)]
        background_color: Option<String>,
        /// New label color
        #[arg(long)]
        text_color: Option<String>,
    },
    /// Replace a layout's background color or gradient spec
    SetBackground {
        /// Layout id
        id: String,
        /// Color or gradient string, passed to the renderer untouched
        color: String,
    },
    /// Fetch the user directory and print matches
    Users {
        /// Search term; omit to print the whole list
        #[arg(long)]
        term: Option<String>,
    },
    /// Write a layout's draw operations as JSON
    ExportScene {
        /// Layout id
        id: String,
        /// Output path; defaults to "<name>-<width>x<height>.json"
        #[arg(long)]
        out: Option<PathBuf>,
    },
}
