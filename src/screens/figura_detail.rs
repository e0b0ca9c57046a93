use crate::catalog::Figure;
use crate::sync::Command;
use crate::ui::mvi::{Intent, Reducer, UiState};

/// A single figure. The acquired flag only changes when the server answers.
#[derive(Debug, Clone, PartialEq)]
pub struct FiguraDetailState {
    pub figure: Figure,
    /// A toggle request is in flight.
    pub updating: bool,
}

impl UiState for FiguraDetailState {}

impl FiguraDetailState {
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            updating: false,
        }
    }

    /// Request flipping the acquired flag relative to what is shown.
    pub fn toggle_command(&self) -> Command {
        Command::SetAcquired {
            id: self.figure.id.clone(),
            acquired: !self.figure.acquired,
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.figure.acquired {
            "Marcar como pendiente"
        } else {
            "Marcar como adquirida"
        }
    }
}

#[derive(Debug, Clone)]
pub enum FiguraDetailIntent {
    ToggleRequested,
    /// Server returned the updated figure.
    Confirmed(Figure),
    Failed,
    /// The figure was edited elsewhere. An in-flight toggle keeps running.
    Saved(Figure),
}

impl Intent for FiguraDetailIntent {}

pub struct FiguraDetailReducer;

impl Reducer for FiguraDetailReducer {
    type State = FiguraDetailState;
    type Intent = FiguraDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FiguraDetailIntent::ToggleRequested => FiguraDetailState {
                updating: true,
                ..state
            },
            FiguraDetailIntent::Confirmed(figure) if figure.id == state.figure.id => {
                FiguraDetailState {
                    figure,
                    updating: false,
                }
            }
            FiguraDetailIntent::Confirmed(_) => state,
            FiguraDetailIntent::Failed => FiguraDetailState {
                updating: false,
                ..state
            },
            FiguraDetailIntent::Saved(figure) if figure.id == state.figure.id => {
                FiguraDetailState { figure, ..state }
            }
            FiguraDetailIntent::Saved(_) => state,
        }
    }
}
