use crate::catalog::{Category, Figure, FigureId};
use crate::screens::step;
use crate::sync::Command;
use crate::ui::mvi::{Intent, Reducer, UiState};

/// Figures of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogoState {
    pub category: Category,
    pub figures: Vec<Figure>,
    pub selected: usize,
    pub loading: bool,
}

impl UiState for CatalogoState {}

impl CatalogoState {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            figures: Vec::new(),
            selected: 0,
            loading: false,
        }
    }

    pub fn selected_figure(&self) -> Option<&Figure> {
        self.figures.get(self.selected)
    }

    pub fn refresh_command(&self) -> Command {
        Command::LoadCategory(self.category)
    }

    /// Delete request for the selected figure. The figure stays in the list
    /// until the server confirms.
    pub fn delete_command(&self) -> Option<Command> {
        self.selected_figure()
            .map(|figure| Command::Delete(figure.id.clone()))
    }
}

#[derive(Debug, Clone)]
pub enum CatalogoIntent {
    Refresh,
    Loaded(Vec<Figure>),
    LoadFailed,
    MoveUp,
    MoveDown,
    /// Server confirmed the deletion of this figure.
    Removed(FigureId),
}

impl Intent for CatalogoIntent {}

pub struct CatalogoReducer;

impl Reducer for CatalogoReducer {
    type State = CatalogoState;
    type Intent = CatalogoIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogoIntent::Refresh => CatalogoState {
                loading: true,
                ..state
            },
            CatalogoIntent::Loaded(figures) => {
                let selected = clamp(state.selected, figures.len());
                CatalogoState {
                    figures,
                    selected,
                    loading: false,
                    ..state
                }
            }
            CatalogoIntent::LoadFailed => CatalogoState {
                loading: false,
                ..state
            },
            CatalogoIntent::MoveUp => CatalogoState {
                selected: step(state.selected, state.figures.len(), -1),
                ..state
            },
            CatalogoIntent::MoveDown => CatalogoState {
                selected: step(state.selected, state.figures.len(), 1),
                ..state
            },
            CatalogoIntent::Removed(id) => {
                let mut figures = state.figures;
                figures.retain(|f| f.id != id);
                let selected = clamp(state.selected, figures.len());
                CatalogoState {
                    figures,
                    selected,
                    ..state
                }
            }
        }
    }
}

fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}
