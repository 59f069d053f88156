use crate::catalog::{Catalog, FetchError};
use crate::likes::LikedRecipes;
use crate::list::{ShoppingList, ShoppingListItem};
use crate::recipe::Recipe;
use crate::search::Search;
use tracing::debug;

/// Which state slot a fetch writes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSlot {
    Search,
    Recipe,
}

/// Issued when a fetch starts. Only the newest ticket for a slot may
/// store its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub slot: FetchSlot,
    pub generation: u64,
}

/// Application state owned by the orchestrator
pub struct AppState {
    search: Option<Search>,
    recipe: Option<Recipe>,
    pub list: ShoppingList,
    pub likes: LikedRecipes,
    search_generation: u64,
    recipe_generation: u64,
}

impl AppState {
    pub fn new(likes: LikedRecipes) -> Self {
        Self {
            search: None,
            recipe: None,
            list: ShoppingList::new(),
            likes,
            search_generation: 0,
            recipe_generation: 0,
        }
    }

    pub fn search(&self) -> Option<&Search> {
        self.search.as_ref()
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn recipe_mut(&mut self) -> Option<&mut Recipe> {
        self.recipe.as_mut()
    }

    /// Start a search fetch, superseding any in flight
    pub fn begin_search(&mut self) -> FetchTicket {
        self.search_generation += 1;
        FetchTicket {
            slot: FetchSlot::Search,
            generation: self.search_generation,
        }
    }

    /// Store a finished search. Returns false if a newer search started.
    pub fn complete_search(&mut self, ticket: FetchTicket, search: Search) -> bool {
        if !self.is_current(ticket) {
            debug!(generation = ticket.generation, query = %search.query, "discarding stale search");
            return false;
        }
        self.search = Some(search);
        true
    }

    /// Start a recipe fetch, superseding any in flight
    pub fn begin_recipe(&mut self) -> FetchTicket {
        self.recipe_generation += 1;
        FetchTicket {
            slot: FetchSlot::Recipe,
            generation: self.recipe_generation,
        }
    }

    /// Store a finished recipe. Returns false if a newer selection started.
    pub fn complete_recipe(&mut self, ticket: FetchTicket, recipe: Recipe) -> bool {
        if !self.is_current(ticket) {
            debug!(generation = ticket.generation, id = %recipe.id, "discarding stale recipe");
            return false;
        }
        self.recipe = Some(recipe);
        true
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        let latest = match ticket.slot {
            FetchSlot::Search => self.search_generation,
            FetchSlot::Recipe => self.recipe_generation,
        };
        ticket.generation == latest
    }

    /// Search the catalog and store the results
    pub async fn run_search<C: Catalog + ?Sized>(
        &mut self,
        catalog: &C,
        query: &str,
    ) -> Result<bool, FetchError> {
        let ticket = self.begin_search();
        let mut search = Search::new(query);
        search.get_results(catalog).await?;
        Ok(self.complete_search(ticket, search))
    }

    /// Fetch a recipe, parse its ingredients and derive time and servings
    pub async fn load_recipe<C: Catalog + ?Sized>(
        &mut self,
        catalog: &C,
        id: &str,
    ) -> Result<bool, FetchError> {
        let ticket = self.begin_recipe();
        let recipe = prepare_recipe(catalog, id).await?;
        Ok(self.complete_recipe(ticket, recipe))
    }

    /// Copy the current recipe's ingredients into the shopping list
    pub fn add_recipe_to_list(&mut self) -> Option<Vec<ShoppingListItem>> {
        let recipe = self.recipe.as_ref()?;
        Some(self.list.add_ingredients(recipe.ingredients()))
    }

    /// Like or unlike the current recipe. Returns the new liked state.
    pub fn toggle_like_current(&mut self) -> Option<bool> {
        let record = self.recipe.as_ref()?.summary();
        Some(self.likes.toggle(record))
    }

    pub fn is_current_liked(&self) -> bool {
        self.recipe
            .as_ref()
            .is_some_and(|recipe| self.likes.is_liked(&recipe.id))
    }
}

/// Load a recipe and run the derivation steps in order
pub async fn prepare_recipe<C: Catalog + ?Sized>(catalog: &C, id: &str) -> Result<Recipe, FetchError> {
    let mut recipe = Recipe::new(id);
    recipe.get_recipe(catalog).await?;
    recipe.parse_ingredients();
    recipe.calc_time();
    recipe.calc_servings();
    Ok(recipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fake::{detail, summary, FakeCatalog};
    use crate::likes::MemoryStore;
    use crate::recipe::ServingsDirection;

    fn state() -> AppState {
        AppState::new(LikedRecipes::new(MemoryStore::new()))
    }

    fn catalog() -> FakeCatalog {
        FakeCatalog::new()
            .with_results("pizza", vec![summary("1", "Pizza"), summary("2", "Calzone")])
            .with_recipe(detail("1", &["1 1/2 cups flour", "2 tomatoes", "salt"]))
            .with_recipe(detail("2", &["1 lb dough"]))
    }

    #[tokio::test]
    async fn test_run_search_stores_results() {
        let mut state = state();
        assert!(state.run_search(&catalog(), "pizza").await.unwrap());

        let search = state.search().unwrap();
        assert_eq!(search.query, "pizza");
        assert_eq!(search.results().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_search_propagates_and_keeps_previous() {
        let mut state = state();
        state.run_search(&catalog(), "pizza").await.unwrap();

        let result = state.run_search(&FakeCatalog::failing(500), "pasta").await;
        assert!(result.is_err());
        assert_eq!(state.search().unwrap().query, "pizza");
    }

    #[tokio::test]
    async fn test_load_recipe_derives_fields() {
        let mut state = state();
        assert!(state.load_recipe(&catalog(), "1").await.unwrap());

        let recipe = state.recipe().unwrap();
        assert_eq!(recipe.ingredients().len(), 3);
        assert_eq!(recipe.servings(), 4);
        assert_eq!(recipe.time(), 15);
    }

    #[tokio::test]
    async fn test_stale_completion_is_discarded() {
        let mut state = state();
        let catalog = catalog();

        let first = state.begin_recipe();
        let second = state.begin_recipe();
        let slow = prepare_recipe(&catalog, "1").await.unwrap();
        let fast = prepare_recipe(&catalog, "2").await.unwrap();

        assert!(state.complete_recipe(second, fast));
        assert!(!state.complete_recipe(first, slow));
        assert_eq!(state.recipe().unwrap().id, "2");
    }

    #[test]
    fn test_tickets_are_per_slot() {
        let mut state = state();
        let search = state.begin_search();
        let recipe = state.begin_recipe();

        assert!(state.is_current(search));
        assert!(state.is_current(recipe));

        state.begin_search();
        assert!(!state.is_current(search));
        assert!(state.is_current(recipe));
        assert!(!state.complete_search(search, Search::new("old")));
        assert!(state.search().is_none());
    }

    #[tokio::test]
    async fn test_add_recipe_to_list_uses_scaled_counts() {
        let mut state = state();
        assert!(state.add_recipe_to_list().is_none());

        state.load_recipe(&catalog(), "1").await.unwrap();
        state
            .recipe_mut()
            .unwrap()
            .update_servings(ServingsDirection::Dec)
            .unwrap();

        let added = state.add_recipe_to_list().unwrap();
        assert_eq!(added.len(), 3);
        assert_eq!(added[0].count, 1.125);
        assert_eq!(added[0].unit, "cup");
        assert_eq!(added[1].count, 1.5);
        assert_eq!(added[2].count, 1.0);
        assert_eq!(state.list.len(), 3);
    }

    #[tokio::test]
    async fn test_toggle_like_current() {
        let mut state = state();
        assert_eq!(state.toggle_like_current(), None);

        state.load_recipe(&catalog(), "1").await.unwrap();
        assert!(!state.is_current_liked());

        assert_eq!(state.toggle_like_current(), Some(true));
        assert!(state.is_current_liked());
        assert_eq!(state.likes.likes()[0].title, "Basil Pesto Pasta");

        assert_eq!(state.toggle_like_current(), Some(false));
        assert_eq!(state.likes.num_likes(), 0);
    }
}
