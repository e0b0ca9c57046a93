//! Screen controllers.
//!
//! Each screen owns its local state and a pure reducer. Screens that show
//! server data answer a focus event with a refresh [`Command`].

mod catalogo;
mod category_list;
mod figura_detail;
mod figura_form;
mod menu;

pub use catalogo::{CatalogoIntent, CatalogoReducer, CatalogoState};
pub use category_list::{CategoryCard, CategoryListIntent, CategoryListReducer, CategoryListState};
pub use figura_detail::{FiguraDetailIntent, FiguraDetailReducer, FiguraDetailState};
pub use figura_form::{FiguraFormIntent, FiguraFormReducer, FiguraFormState, FormField};
pub use menu::{MenuEntry, MenuIntent, MenuReducer, MenuState};

use crate::catalog::Category;
use crate::nav::Route;
use crate::sync::Command;
use crate::ui::mvi::Reducer;

/// State of the screen shown for one navigation frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Menu(MenuState),
    CategoryList(CategoryListState),
    Catalogo(CatalogoState),
    FiguraForm(FiguraFormState),
    FiguraDetail(FiguraDetailState),
}

impl Screen {
    /// Fresh screen state for a route's parameters.
    pub fn open(route: &Route) -> Self {
        match route {
            Route::Menu => Screen::Menu(MenuState::default()),
            Route::CategoryList => Screen::CategoryList(CategoryListState::default()),
            Route::Catalogo { category } => Screen::Catalogo(CatalogoState::new(*category)),
            Route::FiguraForm {
                figure: Some(figure),
                ..
            } => Screen::FiguraForm(FiguraFormState::editing(figure)),
            Route::FiguraForm {
                figure: None,
                category,
            } => Screen::FiguraForm(FiguraFormState::blank(
                category.unwrap_or(Category::ALL[0]),
            )),
            Route::FiguraDetail { figure } => {
                Screen::FiguraDetail(FiguraDetailState::new(figure.clone()))
            }
        }
    }

    /// Mark the screen as loading and return the fetch that refreshes it.
    ///
    /// Screens without server-backed lists return `None`.
    pub fn refresh(&mut self) -> Option<Command> {
        match self {
            Screen::CategoryList(state) => {
                apply::<CategoryListReducer>(state, CategoryListIntent::Refresh);
                Some(state.refresh_command())
            }
            Screen::Catalogo(state) => {
                apply::<CatalogoReducer>(state, CatalogoIntent::Refresh);
                Some(state.refresh_command())
            }
            Screen::Menu(_) | Screen::FiguraForm(_) | Screen::FiguraDetail(_) => None,
        }
    }

    /// Called whenever this screen's frame becomes the top of the stack.
    /// Local lists are never trusted across a focus change.
    pub fn on_focus(&mut self) -> Option<Command> {
        self.refresh()
    }
}

/// Run `R`'s reducer on `state` in place.
pub fn apply<R: Reducer>(state: &mut R::State, intent: R::Intent) {
    *state = R::reduce(state.clone(), intent);
}

/// Move a selection by `delta`, wrapping at both ends.
pub(crate) fn step(selected: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (selected as isize + delta).rem_euclid(len) as usize
}
