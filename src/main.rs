use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use forkify::{AppState, Config, HttpCatalog, IngredientEntry, LikedRecipes, SqliteStore};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "forkify", about = "Search recipes, scale servings and keep liked recipes")]
struct Cli {
    /// Catalog API base URL (overrides FORKIFY_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Database file for liked recipes (overrides FORKIFY_DB_PATH)
    #[arg(long)]
    db: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search the catalog
    Search {
        query: String,
        /// 1-based results page
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Show a recipe's ingredients
    Recipe {
        id: String,
        /// Rescale ingredients to this many servings
        #[arg(long)]
        servings: Option<u32>,
        /// Toggle the like on this recipe
        #[arg(long)]
        like: bool,
        /// Add the ingredients to a shopping list and print it
        #[arg(long)]
        list: bool,
    },
    /// List liked recipes
    Likes,
    /// Remove a liked recipe
    Unlike { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = Config::load();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(db) = cli.db {
        config.db_path = db;
    }

    let store = SqliteStore::open(&config.db_path)?;
    let mut state = AppState::new(LikedRecipes::load(store));
    info!(likes = state.likes.num_likes(), db = %config.db_path, "state restored");

    let catalog = HttpCatalog::with_timeout(&config.api_url, Duration::from_secs(config.timeout_secs))
        .context("Failed to build catalog client")?;

    match cli.command {
        Command::Search { query, page } => {
            state
                .run_search(&catalog, &query)
                .await
                .context(format!("Search for '{}' failed", query))?;

            let Some(search) = state.search() else {
                bail!("No results stored for '{}'", query);
            };
            let pages = search.page_count(config.page_size);
            println!("Results for '{}' (page {} of {}):", query, page, pages);
            for hit in search.page(page, config.page_size) {
                println!("  {}  {} [{}]", hit.recipe_id, hit.title, hit.publisher);
            }
        }
        Command::Recipe {
            id,
            servings,
            like,
            list,
        } => {
            state
                .load_recipe(&catalog, &id)
                .await
                .context(format!("Loading recipe {} failed", id))?;

            if let (Some(servings), Some(recipe)) = (servings, state.recipe_mut()) {
                recipe.set_servings(servings)?;
            }
            if like {
                state.toggle_like_current();
            }

            if let Some(recipe) = state.recipe() {
                println!("{} by {}", recipe.title, recipe.author);
                println!(
                    "{} servings, ~{} min{}",
                    recipe.servings(),
                    recipe.time(),
                    if state.is_current_liked() { ", liked" } else { "" }
                );
                for entry in recipe.ingredients() {
                    println!("  {}", describe(entry));
                }
                println!("Source: {}", recipe.url);
            }

            if list {
                state.add_recipe_to_list();
                println!("\nShopping list:");
                for item in state.list.items() {
                    println!("  [{}] {} {} {}", item.id, item.count, item.unit, item.ingredient);
                }
            }
        }
        Command::Likes => {
            println!("{} liked recipe(s)", state.likes.num_likes());
            for like in state.likes.likes() {
                println!("  {}  {} [{}]", like.id, like.title, like.author);
            }
        }
        Command::Unlike { id } => {
            if state.likes.delete_like(&id) {
                println!("✓ Removed {}", id);
            } else {
                println!("{} was not liked", id);
            }
        }
    }

    Ok(())
}

fn describe(entry: &IngredientEntry) -> String {
    let mut parts = Vec::new();
    if let Some(count) = entry.count {
        parts.push(count.to_string());
    }
    if entry.has_unit() {
        parts.push(entry.unit.clone());
    }
    parts.push(entry.ingredient.clone());
    parts.join(" ")
}
