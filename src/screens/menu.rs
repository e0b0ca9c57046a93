use crate::nav::Route;
use crate::screens::step;
use crate::ui::mvi::{Intent, Reducer, UiState};

/// Entries of the start menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Categories,
    AddFigure,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 2] = [MenuEntry::Categories, MenuEntry::AddFigure];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Categories => "Ver Categorías",
            MenuEntry::AddFigure => "Agregar Figura",
        }
    }

    pub fn route(self) -> Route {
        match self {
            MenuEntry::Categories => Route::CategoryList,
            MenuEntry::AddFigure => Route::new_figure(None),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuState {
    pub selected: usize,
}

impl UiState for MenuState {}

impl MenuState {
    pub fn selected_entry(&self) -> MenuEntry {
        MenuEntry::ALL[self.selected.min(MenuEntry::ALL.len() - 1)]
    }
}

#[derive(Debug, Clone)]
pub enum MenuIntent {
    MoveUp,
    MoveDown,
}

impl Intent for MenuIntent {}

pub struct MenuReducer;

impl Reducer for MenuReducer {
    type State = MenuState;
    type Intent = MenuIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = MenuEntry::ALL.len();
        match intent {
            MenuIntent::MoveUp => MenuState {
                selected: step(state.selected, len, -1),
            },
            MenuIntent::MoveDown => MenuState {
                selected: step(state.selected, len, 1),
            },
        }
    }
}
