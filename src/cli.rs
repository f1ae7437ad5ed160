/// CLI argument parsing and command handling.
use anyhow::Result;
use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::session::PaletteSession;
use crate::store::PaletteStore;
use crate::types::PaletteId;

#[derive(Parser)]
#[command(
    name = "swatchr",
    version,
    about = "Swatchr - A terminal-based color palette tool"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a fresh random palette
    Generate {
        /// Save the generated palette as well
        #[arg(short = 's', long = "save")]
        save: bool,
    },
    /// List saved palettes
    List,
    /// Print the colors of one saved palette
    Show { id: PaletteId },
    /// Delete a saved palette by id
    Delete { id: PaletteId },
}

/// Execute a CLI command against the palette store.
pub fn run(command: Command, conn: Connection) -> Result<()> {
    let store = PaletteStore::open(conn);
    match command {
        Command::Generate { save } => handle_generate(save, &store)?,
        Command::List => handle_list(&store),
        Command::Show { id } => handle_show(id, &store),
        Command::Delete { id } => handle_delete(id, &store)?,
    }
    Ok(())
}

fn handle_generate(save: bool, store: &PaletteStore) -> Result<()> {
    let mut session = PaletteSession::new();
    session.regenerate();
    for color in session.colors() {
        println!("{color}");
    }
    if save {
        let palette = session.snapshot()?;
        let id = palette.id;
        store.add(palette)?;
        println!("Saved palette {id}.");
    }
    Ok(())
}

fn handle_list(store: &PaletteStore) {
    let palettes = store.list();
    if palettes.is_empty() {
        println!("No saved palettes yet.");
        return;
    }
    for palette in palettes {
        let colors = palette
            .colors
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        println!("{:>14}  {:<10}  {colors}", palette.id, palette.created_on);
    }
}

fn handle_show(id: PaletteId, store: &PaletteStore) {
    match store.list().into_iter().find(|palette| palette.id == id) {
        Some(palette) => {
            for color in &palette.colors {
                println!("{color}");
            }
        }
        None => println!("No saved palette with id {id}."),
    }
}

fn handle_delete(id: PaletteId, store: &PaletteStore) -> Result<()> {
    let existed = store.list().iter().any(|palette| palette.id == id);
    store.delete_by_id(id)?;
    if existed {
        println!("Deleted palette {id}.");
    } else {
        println!("No saved palette with id {id}.");
    }
    Ok(())
}
