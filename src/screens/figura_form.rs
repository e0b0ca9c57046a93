use crate::api::UpdateMode;
use crate::catalog::{parse_price, Category, Figure, FigureDraft, FigureId, ValidationError};
use crate::sync::Command;
use crate::ui::mvi::{Intent, Reducer, UiState};

/// Editable fields, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Description,
    Price,
    Category,
    Image,
    Acquired,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Description,
        FormField::Price,
        FormField::Category,
        FormField::Image,
        FormField::Acquired,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Nombre",
            FormField::Description => "Descripción",
            FormField::Price => "Precio",
            FormField::Category => "Categoría",
            FormField::Image => "URL Imagen",
            FormField::Acquired => "Adquirida",
        }
    }

    /// Free-text fields accept typed characters.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            FormField::Name | FormField::Description | FormField::Price | FormField::Image
        )
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Create/edit form. Text fields hold raw input; parsing happens on submit.
#[derive(Debug, Clone, PartialEq)]
pub struct FiguraFormState {
    /// Set when editing an existing figure.
    pub editing: Option<FigureId>,
    pub name: String,
    pub description: String,
    pub price: String,
    pub category: Category,
    pub image: String,
    pub acquired: bool,
    pub focused: FormField,
    pub saving: bool,
}

impl UiState for FiguraFormState {}

impl Default for FiguraFormState {
    fn default() -> Self {
        Self::blank(Category::ALL[0])
    }
}

impl FiguraFormState {
    /// Empty form for a new figure.
    pub fn blank(category: Category) -> Self {
        Self {
            editing: None,
            name: String::new(),
            description: String::new(),
            price: String::new(),
            category,
            image: String::new(),
            acquired: false,
            focused: FormField::default(),
            saving: false,
        }
    }

    /// Form prefilled from an existing figure.
    pub fn editing(figure: &Figure) -> Self {
        Self {
            editing: Some(figure.id.clone()),
            name: figure.name.clone(),
            description: figure.description.clone().unwrap_or_default(),
            price: figure.price.map(|p| p.to_string()).unwrap_or_default(),
            category: figure.category,
            image: figure.image.clone().unwrap_or_default(),
            acquired: figure.acquired,
            focused: FormField::default(),
            saving: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Display value of a field.
    pub fn value(&self, field: FormField) -> String {
        match field {
            FormField::Name => self.name.clone(),
            FormField::Description => self.description.clone(),
            FormField::Price => self.price.clone(),
            FormField::Category => self.category.label().to_string(),
            FormField::Image => self.image.clone(),
            FormField::Acquired => {
                let label = if self.acquired { "Sí" } else { "No" };
                label.to_string()
            }
        }
    }

    /// Validate the raw input and build the draft to send.
    pub fn draft(&self) -> Result<FigureDraft, ValidationError> {
        let draft = FigureDraft {
            name: self.name.trim().to_string(),
            description: non_empty(&self.description),
            price: parse_price(&self.price)?,
            category: self.category,
            image: non_empty(&self.image),
            acquired: self.acquired,
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Create when new, full replace when editing.
    pub fn submit_command(&self) -> Result<Command, ValidationError> {
        let draft = self.draft()?;
        Ok(match &self.editing {
            Some(id) => Command::Update {
                id: id.clone(),
                patch: draft.into(),
                mode: UpdateMode::Replace,
            },
            None => Command::Create(draft),
        })
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.focused {
            FormField::Name => Some(&mut self.name),
            FormField::Description => Some(&mut self.description),
            FormField::Price => Some(&mut self.price),
            FormField::Image => Some(&mut self.image),
            FormField::Category | FormField::Acquired => None,
        }
    }
}

fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone)]
pub enum FiguraFormIntent {
    FocusNext,
    FocusPrev,
    /// Typed character. On the acquired switch a space toggles it.
    Input(char),
    Backspace,
    NextCategory,
    PrevCategory,
    ToggleAcquired,
    Submitted,
    SaveFailed,
}

impl Intent for FiguraFormIntent {}

pub struct FiguraFormReducer;

impl Reducer for FiguraFormReducer {
    type State = FiguraFormState;
    type Intent = FiguraFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FiguraFormIntent::FocusNext => state.focused = state.focused.next(),
            FiguraFormIntent::FocusPrev => state.focused = state.focused.prev(),
            FiguraFormIntent::Input(ch) => match state.focused {
                FormField::Acquired if ch == ' ' => state.acquired = !state.acquired,
                _ => {
                    if let Some(text) = state.text_mut() {
                        text.push(ch);
                    }
                }
            },
            FiguraFormIntent::Backspace => {
                if let Some(text) = state.text_mut() {
                    text.pop();
                }
            }
            FiguraFormIntent::NextCategory => state.category = state.category.next(),
            FiguraFormIntent::PrevCategory => state.category = state.category.prev(),
            FiguraFormIntent::ToggleAcquired => state.acquired = !state.acquired,
            FiguraFormIntent::Submitted => state.saving = true,
            FiguraFormIntent::SaveFailed => state.saving = false,
        }
        state
    }
}
