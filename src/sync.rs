//! Commands screens issue against the catalog, and their results.
//!
//! Screens never call [`CatalogClient`] directly. They queue a [`Command`];
//! the runtime executes it on its own task and hands the [`Outcome`] back
//! to the frame that asked for it. There is no deduplication: two commands
//! on the same figure both run and their outcomes apply in completion order.

use crate::api::{ApiError, CatalogClient, UpdateMode};
use crate::catalog::{Category, CategoryStats, Figure, FigureDraft, FigureId, FigurePatch};

/// A single data-access request.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    LoadStats,
    LoadCategory(Category),
    Create(FigureDraft),
    Update {
        id: FigureId,
        patch: FigurePatch,
        mode: UpdateMode,
    },
    /// Merge-update of the acquired flag only.
    SetAcquired { id: FigureId, acquired: bool },
    Delete(FigureId),
}

/// Result of executing a [`Command`].
#[derive(Debug)]
pub enum Outcome {
    Stats(Result<CategoryStats, ApiError>),
    Figures(Result<Vec<Figure>, ApiError>),
    /// Create or full update.
    Saved(Result<Figure, ApiError>),
    AcquiredChanged(Result<Figure, ApiError>),
    Deleted {
        id: FigureId,
        result: Result<(), ApiError>,
    },
}

impl Outcome {
    /// The error carried by this outcome, if any.
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Outcome::Stats(r) => r.as_ref().err(),
            Outcome::Figures(r) => r.as_ref().err(),
            Outcome::Saved(r) | Outcome::AcquiredChanged(r) => r.as_ref().err(),
            Outcome::Deleted { result, .. } => result.as_ref().err(),
        }
    }
}

impl Command {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::LoadStats => "load_stats",
            Command::LoadCategory(_) => "load_category",
            Command::Create(_) => "create",
            Command::Update { .. } => "update",
            Command::SetAcquired { .. } => "set_acquired",
            Command::Delete(_) => "delete",
        }
    }
}

/// Run `command` against the catalog.
pub async fn execute(client: &CatalogClient, command: Command) -> Outcome {
    tracing::debug!(command = command.name(), "Executing catalog command");
    match command {
        Command::LoadStats => Outcome::Stats(client.get_stats().await),
        Command::LoadCategory(category) => {
            Outcome::Figures(client.list_by_category(category).await)
        }
        Command::Create(draft) => Outcome::Saved(client.create(&draft).await),
        Command::Update { id, patch, mode } => {
            Outcome::Saved(client.update(&id, &patch, mode).await)
        }
        Command::SetAcquired { id, acquired } => Outcome::AcquiredChanged(
            client
                .update(&id, &FigurePatch::acquired(acquired), UpdateMode::Merge)
                .await,
        ),
        Command::Delete(id) => {
            let result = client.remove(&id).await;
            Outcome::Deleted { id, result }
        }
    }
}
