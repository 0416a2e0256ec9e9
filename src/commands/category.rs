use super::input;
use crate::{
    libs::{context::AppContext, messages::Message, view::View},
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::collections::HashMap;

#[derive(Debug, Args)]
pub struct CategoryArgs {
    #[command(subcommand)]
    command: Option<CategoryCommand>,
}

#[derive(Debug, Subcommand)]
enum CategoryCommand {
    /// List all categories
    List,
    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Display color (hex code)
        #[arg(short, long)]
        color: Option<String>,
    },
    /// Create a subcategory under an existing category
    Sub {
        /// Category name or ID
        category: String,
        /// Subcategory name
        name: String,
        /// Display color, defaults to the category's color
        #[arg(short, long)]
        color: Option<String>,
    },
    /// List the subcategories of a category
    Subs {
        /// Category name or ID
        category: String,
    },
}

pub fn cmd(ctx: &AppContext, args: CategoryArgs) -> Result<()> {
    match args.command {
        Some(CategoryCommand::Add { name, color }) => handle_add(ctx, name, color),
        Some(CategoryCommand::Sub { category, name, color }) => handle_add_sub(ctx, category, name, color),
        Some(CategoryCommand::Subs { category }) => handle_list_subs(ctx, category),
        Some(CategoryCommand::List) | None => handle_list(ctx),
    }
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let categories = ctx.categories().list_categories()?;
    if categories.is_empty() {
        msg_info!(Message::NoCategoriesFound);
        return Ok(());
    }

    let mut counts = HashMap::new();
    for subcategory in ctx.categories().list_all_subcategories()? {
        *counts.entry(subcategory.category_id).or_insert(0) += 1;
    }

    msg_print!(Message::CategoriesHeader, true);
    View::categories(&categories, &counts)
}

fn handle_add(ctx: &AppContext, name: String, color: Option<String>) -> Result<()> {
    let name = name.trim().to_string();
    let categories = ctx.categories();

    if categories.find_category(&name)?.is_some() {
        msg_error!(Message::CategoryAlreadyExists(name));
        return Ok(());
    }

    let color = color.unwrap_or_else(|| ctx.config.default_color.clone());
    categories.create_category(&name, &color)?;
    msg_success!(Message::CategoryCreated(name));
    Ok(())
}

fn handle_add_sub(ctx: &AppContext, category: String, name: String, color: Option<String>) -> Result<()> {
    let category = input::category(ctx, &category)?;
    let name = name.trim().to_string();
    let color = color.unwrap_or_else(|| category.color.clone());

    ctx.categories().create_subcategory(&name, category.id, &color)?;
    msg_success!(Message::SubcategoryCreated(name, category.name));
    Ok(())
}

fn handle_list_subs(ctx: &AppContext, category: String) -> Result<()> {
    let category = input::category(ctx, &category)?;
    let subcategories = ctx.categories().list_subcategories(category.id)?;

    if subcategories.is_empty() {
        msg_info!(Message::NoSubcategoriesFound(category.name));
        return Ok(());
    }

    msg_print!(Message::SubcategoriesHeader(category.name), true);
    View::subcategories(&subcategories)
}
