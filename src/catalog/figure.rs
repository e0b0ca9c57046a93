use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::catalog::category::Category;

/// Server-assigned identifier of a persisted figure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FigureId(String);

impl FigureId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FigureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FigureId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A collectible figure as stored by the remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    #[serde(rename = "_id")]
    pub id: FigureId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(
        rename = "descripcion",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(rename = "precio", default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(
        rename = "imagen",
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    #[serde(rename = "categoria", default)]
    pub category: Category,
    #[serde(rename = "adquirida", default)]
    pub acquired: bool,
}

impl Figure {
    /// Editable fields of this figure, without its identity.
    pub fn to_draft(&self) -> FigureDraft {
        FigureDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category,
            image: self.image.clone(),
            acquired: self.acquired,
        }
    }
}

/// Full set of editable fields, used for create and full replace.
///
/// Absent optionals serialize as `null` so a replace clears them on the
/// server.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FigureDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    #[serde(rename = "precio")]
    pub price: Option<f64>,
    #[serde(rename = "categoria")]
    pub category: Category,
    #[serde(rename = "imagen")]
    pub image: Option<String>,
    #[serde(rename = "adquirida")]
    pub acquired: bool,
}

impl FigureDraft {
    pub fn new(name: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            description: None,
            price: None,
            category,
            image: None,
            acquired: false,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

/// Partial set of editable fields, used for merge updates.
///
/// Only fields that are `Some` go on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FigurePatch {
    #[serde(rename = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "descripcion", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "precio", skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "categoria", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(rename = "imagen", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "adquirida", skip_serializing_if = "Option::is_none")]
    pub acquired: Option<bool>,
}

impl FigurePatch {
    /// Patch that only sets the acquired flag.
    pub fn acquired(value: bool) -> Self {
        Self {
            acquired: Some(value),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        validate_price(self.price)
    }

    /// Turn the patch into a complete draft for a full replace.
    ///
    /// Unset optionals become absent, category falls back to `otros` and
    /// acquired to `false`.
    pub fn into_draft(self) -> Result<FigureDraft, ValidationError> {
        let draft = FigureDraft {
            name: self.name.ok_or(ValidationError::EmptyName)?,
            description: self.description,
            price: self.price,
            category: self.category.unwrap_or_default(),
            image: self.image,
            acquired: self.acquired.unwrap_or(false),
        };
        draft.validate()?;
        Ok(draft)
    }
}

impl From<FigureDraft> for FigurePatch {
    fn from(draft: FigureDraft) -> Self {
        Self {
            name: Some(draft.name),
            description: draft.description,
            price: draft.price,
            category: Some(draft.category),
            image: draft.image,
            acquired: Some(draft.acquired),
        }
    }
}

/// Client-side checks run before anything is sent.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("name is required")]
    EmptyName,

    #[error("price must not be negative (got {0})")]
    NegativePrice(f64),

    #[error("price '{0}' is not a number")]
    InvalidPrice(String),
}

impl ValidationError {
    /// Text shown in the notification dialog.
    pub fn user_message(&self) -> String {
        match self {
            ValidationError::EmptyName => "El nombre es obligatorio".to_string(),
            ValidationError::NegativePrice(_) => "El precio no puede ser negativo".to_string(),
            ValidationError::InvalidPrice(raw) => format!("El precio '{}' no es válido", raw),
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

fn validate_price(price: Option<f64>) -> Result<(), ValidationError> {
    match price {
        Some(p) if p.is_nan() => Err(ValidationError::InvalidPrice(p.to_string())),
        Some(p) if p < 0.0 => Err(ValidationError::NegativePrice(p)),
        _ => Ok(()),
    }
}

/// Parse a price typed by the user. Empty input means no price.
pub fn parse_price(raw: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: f64 = trimmed
        .replace(',', ".")
        .parse()
        .map_err(|_| ValidationError::InvalidPrice(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(ValidationError::InvalidPrice(trimmed.to_string()));
    }
    validate_price(Some(value))?;
    Ok(Some(value))
}

fn empty_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
