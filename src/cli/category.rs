//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::{CoinbookError, CoinbookResult};
use crate::models::{CategoryId, EntryKind};
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Create a new category
    Add {
        /// Category name
        name: String,

        /// Entry kind: income or expense
        #[arg(short, long, default_value = "expense")]
        kind: String,

        /// Optional icon tag
        #[arg(long)]
        icon: Option<String>,
    },

    /// Delete a category (seed categories and referenced names are refused)
    Delete {
        /// Category ID
        id: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> CoinbookResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            let categories = service.list()?;
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name, kind, icon } => {
            let kind: EntryKind = kind.parse().map_err(CoinbookError::Validation)?;
            let category = service.add(&name, kind, icon.as_deref())?;
            println!("Created {} category '{}' ({})", kind, category.name, category.id);
        }

        CategoryCommands::Delete { id } => {
            let id: CategoryId = id
                .parse()
                .map_err(|_| CoinbookError::Validation(format!("Invalid category ID: {}", id)))?;

            if service.delete(id)? {
                println!("Category deleted.");
            } else {
                println!("No matching category; nothing deleted.");
            }
        }
    }

    Ok(())
}
