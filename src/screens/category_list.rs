use crate::catalog::{Category, CategoryStats};
use crate::screens::step;
use crate::sync::Command;
use crate::ui::mvi::{Intent, Reducer, UiState};

/// One row of the category list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub category: Category,
    pub count: u64,
}

impl CategoryCard {
    pub fn label(&self) -> &'static str {
        self.category.label()
    }

    pub fn count_label(&self) -> String {
        format!("{} figuras", self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryListState {
    pub stats: CategoryStats,
    pub selected: usize,
    pub loading: bool,
}

impl UiState for CategoryListState {}

impl CategoryListState {
    /// One card per known category, in display order. Categories missing
    /// from the stats show 0.
    pub fn cards(&self) -> Vec<CategoryCard> {
        Category::ALL
            .into_iter()
            .map(|category| CategoryCard {
                category,
                count: self.stats.count(category),
            })
            .collect()
    }

    pub fn selected_category(&self) -> Category {
        Category::ALL[self.selected.min(Category::ALL.len() - 1)]
    }

    pub fn refresh_command(&self) -> Command {
        Command::LoadStats
    }
}

#[derive(Debug, Clone)]
pub enum CategoryListIntent {
    Refresh,
    Loaded(CategoryStats),
    LoadFailed,
    MoveUp,
    MoveDown,
}

impl Intent for CategoryListIntent {}

pub struct CategoryListReducer;

impl Reducer for CategoryListReducer {
    type State = CategoryListState;
    type Intent = CategoryListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = Category::ALL.len();
        match intent {
            CategoryListIntent::Refresh => CategoryListState {
                loading: true,
                ..state
            },
            CategoryListIntent::Loaded(stats) => CategoryListState {
                stats,
                loading: false,
                ..state
            },
            // Keep the last counts we had.
            CategoryListIntent::LoadFailed => CategoryListState {
                loading: false,
                ..state
            },
            CategoryListIntent::MoveUp => CategoryListState {
                selected: step(state.selected, len, -1),
                ..state
            },
            CategoryListIntent::MoveDown => CategoryListState {
                selected: step(state.selected, len, 1),
                ..state
            },
        }
    }
}
