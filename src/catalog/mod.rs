//! Catalog domain types: figures, categories and client-side validation.

mod category;
mod figure;

pub use category::{Category, CategoryStats};
pub use figure::{parse_price, Figure, FigureDraft, FigureId, FigurePatch, ValidationError};
