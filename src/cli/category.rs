//! Category and selection management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use crate::cli::open_session;
use crate::config::Config;

/// Manage tag categories and their selections
#[derive(Debug, Clone, Args)]
pub struct CategoryArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoryCommand,
}

/// Category management subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum CategoryCommand {
    /// List all categories with their options and selections
    List(ListCategoriesArgs),
    /// Add a new custom category
    Add(AddCategoryArgs),
    /// Rename a category
    Rename(RenameCategoryArgs),
    /// Delete a custom category
    Delete(DeleteCategoryArgs),
    /// Switch a category between single- and multi-select
    SetMulti(SetMultiArgs),
    /// Add an option to a category
    AddOption(AddOptionArgs),
    /// Remove an option from a category
    RemoveOption(RemoveOptionArgs),
    /// Rename the option at an index
    RenameOption(RenameOptionArgs),
    /// Toggle an option in a category's selection
    Toggle(ToggleOptionArgs),
}

/// List all categories with their options and selections
#[derive(Debug, Clone, Args)]
pub struct ListCategoriesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Add a new custom category
#[derive(Debug, Clone, Args)]
pub struct AddCategoryArgs {
    /// Category name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Allow only one selected option at a time
    #[arg(long)]
    pub single: bool,
}

/// Rename a category
#[derive(Debug, Clone, Args)]
pub struct RenameCategoryArgs {
    /// Category id
    #[arg(value_name = "ID")]
    pub id: String,

    /// New category name
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// Delete a custom category
#[derive(Debug, Clone, Args)]
pub struct DeleteCategoryArgs {
    /// Category id to delete
    #[arg(value_name = "ID")]
    pub id: String,
}

/// Switch a category between single- and multi-select
#[derive(Debug, Clone, Args)]
pub struct SetMultiArgs {
    /// Category id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Allow multiple selected options ("true" or "false")
    #[arg(value_name = "MULTI")]
    pub multi: bool,
}

/// Add an option to a category
#[derive(Debug, Clone, Args)]
pub struct AddOptionArgs {
    /// Category id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Option label
    #[arg(value_name = "LABEL")]
    pub label: String,
}

/// Remove an option from a category
#[derive(Debug, Clone, Args)]
pub struct RemoveOptionArgs {
    /// Category id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Option label to remove
    #[arg(value_name = "LABEL")]
    pub label: String,
}

/// Rename the option at an index
#[derive(Debug, Clone, Args)]
pub struct RenameOptionArgs {
    /// Category id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Zero-based option index
    #[arg(value_name = "INDEX")]
    pub index: usize,

    /// New option label
    #[arg(value_name = "LABEL")]
    pub label: String,
}

/// Toggle an option in a category's selection
#[derive(Debug, Clone, Args)]
pub struct ToggleOptionArgs {
    /// Category id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Option label to toggle
    #[arg(value_name = "OPTION")]
    pub option: String,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategoryItem {
    id: String,
    name: String,
    multi: bool,
    options: Vec<String>,
    selected: Vec<String>,
    custom: bool,
}

#[derive(Debug, Serialize)]
struct ListCategoriesResponse {
    categories: Vec<CategoryItem>,
    count: usize,
}

impl CategoryArgs {
    /// Execute the category command
    pub fn execute(&self, config: &Config) -> Result<()> {
        match &self.command {
            CategoryCommand::List(args) => args.execute(config),
            CategoryCommand::Add(args) => args.execute(config),
            CategoryCommand::Rename(args) => args.execute(config),
            CategoryCommand::Delete(args) => args.execute(config),
            CategoryCommand::SetMulti(args) => args.execute(config),
            CategoryCommand::AddOption(args) => args.execute(config),
            CategoryCommand::RemoveOption(args) => args.execute(config),
            CategoryCommand::RenameOption(args) => args.execute(config),
            CategoryCommand::Toggle(args) => args.execute(config),
        }
    }
}

impl ListCategoriesArgs {
    /// Execute the list command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let session = open_session(config)?;
        let state = session.state();

        let categories: Vec<CategoryItem> = state
            .categories
            .iter()
            .map(|category| CategoryItem {
                id: category.id.clone(),
                name: category.name.clone(),
                multi: category.multi,
                options: category.options.clone(),
                selected: state
                    .selections
                    .get(&category.id)
                    .cloned()
                    .unwrap_or_default(),
                custom: category.is_custom,
            })
            .collect();
        let response = ListCategoriesResponse {
            count: categories.len(),
            categories,
        };

        if self.json {
            println!("{}", serde_json::to_string(&response)?);
        } else {
            println!("Categories ({}):", response.count);
            for category in response.categories {
                let arity = if category.multi { "multi" } else { "single" };
                let kind = if category.custom { ", custom" } else { "" };
                println!();
                println!("  {} [{arity}{kind}] {}", category.name, category.id);
                for option in &category.options {
                    let marker = if category.selected.contains(option) {
                        "[x]"
                    } else {
                        "[ ]"
                    };
                    println!("    {marker} {option}");
                }
            }
        }

        Ok(())
    }
}

impl AddCategoryArgs {
    /// Execute the add command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        let id = session.add_category(&self.name, !self.single)?;
        println!("Category '{}' added as {id}.", self.name.trim());
        Ok(())
    }
}

impl RenameCategoryArgs {
    /// Execute the rename command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.rename_category(&self.id, &self.name)?;
        println!("Category '{}' renamed to '{}'.", self.id, self.name.trim());
        Ok(())
    }
}

impl DeleteCategoryArgs {
    /// Execute the delete command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.delete_category(&self.id)?;
        println!("Category '{}' deleted.", self.id);
        Ok(())
    }
}

impl SetMultiArgs {
    /// Execute the set-multi command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.set_category_multi(&self.id, self.multi)?;
        let arity = if self.multi { "multi" } else { "single" };
        println!("Category '{}' is now {arity}-select.", self.id);
        Ok(())
    }
}

impl AddOptionArgs {
    /// Execute the add-option command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.add_option(&self.id, &self.label)?;
        println!("Option '{}' added to '{}'.", self.label.trim(), self.id);
        Ok(())
    }
}

impl RemoveOptionArgs {
    /// Execute the remove-option command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.remove_option(&self.id, &self.label)?;
        println!("Option '{}' removed from '{}'.", self.label, self.id);
        Ok(())
    }
}

impl RenameOptionArgs {
    /// Execute the rename-option command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.rename_option(&self.id, self.index, &self.label)?;
        println!(
            "Option {} of '{}' renamed to '{}'.",
            self.index,
            self.id,
            self.label.trim()
        );
        Ok(())
    }
}

impl ToggleOptionArgs {
    /// Execute the toggle command
    pub fn execute(&self, config: &Config) -> Result<()> {
        let mut session = open_session(config)?;
        session.toggle_option(&self.id, &self.option)?;
        let picked = session
            .state()
            .selections
            .get(&self.id)
            .cloned()
            .unwrap_or_default();
        if picked.is_empty() {
            println!("'{}' now has no selection.", self.id);
        } else {
            println!("'{}' selection: {}.", self.id, picked.join(", "));
        }
        Ok(())
    }
}
