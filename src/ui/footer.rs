use crate::nav::Route;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for the screen on top of the stack.
pub fn hints(route: &Route) -> &'static str {
    match route {
        Route::Menu => " ↑↓: Mover │ Enter: Abrir │ n: Agregar │ q: Salir",
        Route::CategoryList => " ↑↓: Mover │ Enter: Ver catálogo │ r: Recargar │ Esc: Volver",
        Route::Catalogo { .. } => {
            " ↑↓: Mover │ Enter: Detalle │ e: Editar │ n: Nueva │ d: Eliminar │ r: Recargar │ Esc: Volver"
        }
        Route::FiguraForm { .. } => {
            " Tab: Campo │ ←→: Categoría │ Espacio: Adquirida │ Enter: Guardar │ Esc: Cancelar"
        }
        Route::FiguraDetail { .. } => " Espacio: Cambiar estado │ e: Editar │ Esc: Volver",
    }
}

pub struct Footer<'a> {
    route: &'a Route,
}

impl<'a> Footer<'a> {
    pub fn new(route: &'a Route) -> Self {
        Self { route }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = hints(self.route);
        let version = format!("v{} ", VERSION);

        // Padding by char count, not bytes.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
