use crate::catalog::{Category, Figure};

/// A screen together with its navigation parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Menu,
    CategoryList,
    Catalogo {
        category: Category,
    },
    /// Edit `figure` when present, otherwise create a new one, optionally
    /// preset to `category`.
    FiguraForm {
        figure: Option<Figure>,
        category: Option<Category>,
    },
    FiguraDetail {
        figure: Figure,
    },
}

impl Route {
    /// Form for a brand-new figure.
    pub fn new_figure(category: Option<Category>) -> Self {
        Route::FiguraForm {
            figure: None,
            category,
        }
    }

    /// Form editing an existing figure.
    pub fn edit_figure(figure: Figure) -> Self {
        Route::FiguraForm {
            figure: Some(figure),
            category: None,
        }
    }

    /// Screen name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Menu => "Menu",
            Route::CategoryList => "CategoryList",
            Route::Catalogo { .. } => "Catalogo",
            Route::FiguraForm { .. } => "FiguraForm",
            Route::FiguraDetail { .. } => "FiguraDetail",
        }
    }

    /// Header title shown while this route is on top.
    pub fn title(&self) -> String {
        match self {
            Route::Menu => "Saint Seiya App".to_string(),
            Route::CategoryList => "Categorías".to_string(),
            Route::Catalogo { category } => format!("Catálogo: {}", category.key()),
            Route::FiguraForm { figure: Some(_), .. } => "Editar figura".to_string(),
            Route::FiguraForm { figure: None, .. } => "Figura".to_string(),
            Route::FiguraDetail { .. } => "Detalle de figura".to_string(),
        }
    }
}
