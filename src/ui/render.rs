use crate::catalog::Figure;
use crate::screens::{
    CatalogoState, CategoryListState, FiguraDetailState, FiguraFormState, FormField, MenuEntry,
    MenuState, Screen,
};
use crate::ui::app::{App, NotificationKind};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let route = app.current_route();

    let header_widget = Header::new(route.title(), app.navigator().state().depth(), app.server_label());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let lines = match app.current_screen() {
        Some(Screen::Menu(state)) => menu_lines(state),
        Some(Screen::CategoryList(state)) => category_lines(state),
        Some(Screen::Catalogo(state)) => catalogo_lines(state),
        Some(Screen::FiguraForm(state)) => form_lines(state),
        Some(Screen::FiguraDetail(state)) => detail_lines(state),
        None => Vec::new(),
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::NONE)),
        body,
    );

    let footer_widget = Footer::new(route);
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some(notification) = app.notification() {
        let color = match notification.kind {
            NotificationKind::Info => STATUS_OK,
            NotificationKind::Error => STATUS_ERROR,
        };
        let popup = centered_rect(60, 30, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(notification.message.clone()),
                Line::from(""),
                Line::styled("Enter: aceptar", Style::default().fg(MUTED_TEXT)),
            ])
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(Span::styled(
                        format!(" {} ", notification.title),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(POPUP_BORDER)),
            ),
            popup,
        );
    }
}

fn row(selected: bool, spans: Vec<Span<'static>>) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let mut all = vec![Span::styled(marker, Style::default().fg(ACCENT))];
    all.extend(spans);
    let line = Line::from(all);
    if selected {
        line.style(Style::default().bg(ACTIVE_HIGHLIGHT))
    } else {
        line
    }
}

fn title_line(text: impl Into<String>) -> Line<'static> {
    Line::styled(
        text.into(),
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    )
}

fn menu_lines(state: &MenuState) -> Vec<Line<'static>> {
    let mut lines = vec![title_line("Menú principal"), Line::from("")];
    let selected = state.selected_entry();
    for entry in MenuEntry::ALL {
        lines.push(row(entry == selected, vec![Span::raw(entry.label())]));
    }
    lines
}

fn category_lines(state: &CategoryListState) -> Vec<Line<'static>> {
    let mut lines = vec![title_line("Categorías")];
    lines.push(if state.loading {
        Line::styled("Actualizando...", Style::default().fg(MUTED_TEXT))
    } else {
        Line::from("")
    });
    for (index, card) in state.cards().into_iter().enumerate() {
        lines.push(row(
            index == state.selected,
            vec![
                Span::styled(
                    format!("{:<24}", card.label()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(card.count_label(), Style::default().fg(MUTED_TEXT)),
            ],
        ));
    }
    lines
}

/// "$ 120" or "N/A".
pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("$ {}", p),
        None => "N/A".to_string(),
    }
}

fn status_label(figure: &Figure) -> &'static str {
    if figure.acquired {
        "Adquirida"
    } else {
        "Pendiente"
    }
}

fn catalogo_lines(state: &CatalogoState) -> Vec<Line<'static>> {
    let mut lines = vec![title_line(state.category.key().to_uppercase())];
    if state.loading {
        lines.push(Line::styled("Cargando...", Style::default().fg(MUTED_TEXT)));
    } else {
        lines.push(Line::from(""));
    }

    if state.figures.is_empty() && !state.loading {
        lines.push(Line::styled(
            "No hay figuras en esta categoría",
            Style::default().fg(MUTED_TEXT),
        ));
        return lines;
    }

    for (index, figure) in state.figures.iter().enumerate() {
        let status_color = if figure.acquired { STATUS_OK } else { STATUS_ERROR };
        lines.push(row(
            index == state.selected,
            vec![
                Span::styled(
                    figure.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    figure
                        .description
                        .clone()
                        .unwrap_or_else(|| "Sin descripción".to_string()),
                    Style::default().fg(MUTED_TEXT),
                ),
                Span::raw("  "),
                Span::raw(format!("Precio: {}", format_price(figure.price))),
                Span::raw("  "),
                Span::styled(status_label(figure), Style::default().fg(status_color)),
            ],
        ));
    }
    lines
}

fn detail_lines(state: &FiguraDetailState) -> Vec<Line<'static>> {
    let figure = &state.figure;
    let status_color = if figure.acquired { STATUS_OK } else { STATUS_ERROR };
    let field = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<13}", label), Style::default().fg(MUTED_TEXT)),
            Span::raw(value),
        ])
    };

    let mut lines = vec![title_line(figure.name.clone()), Line::from("")];
    lines.push(field("Categoría", figure.category.label().to_string()));
    lines.push(Line::from(vec![
        Span::styled(format!("{:<13}", "Estado"), Style::default().fg(MUTED_TEXT)),
        Span::styled(status_label(figure), Style::default().fg(status_color)),
    ]));
    lines.push(field("Precio", format_price(figure.price)));
    lines.push(field(
        "Descripción",
        figure
            .description
            .clone()
            .unwrap_or_else(|| "Sin descripción".to_string()),
    ));
    lines.push(field(
        "Imagen",
        figure
            .image
            .clone()
            .unwrap_or_else(|| "Sin imagen".to_string()),
    ));
    lines.push(Line::from(""));

    let action = if state.updating {
        "Actualizando...".to_string()
    } else {
        format!("[Espacio] {}", state.toggle_label())
    };
    lines.push(Line::styled(action, Style::default().fg(ACCENT)));
    lines
}

fn form_lines(state: &FiguraFormState) -> Vec<Line<'static>> {
    let title = if state.is_editing() {
        "Editar figura"
    } else {
        "Nueva figura"
    };
    let mut lines = vec![title_line(title), Line::from("")];

    for field in FormField::ALL {
        let focused = field == state.focused;
        let value = match field {
            FormField::Category => format!("< {} >", state.value(field)),
            FormField::Acquired => {
                let mark = if state.acquired { "x" } else { " " };
                format!("[{}]", mark)
            }
            _ if focused => format!("{}_", state.value(field)),
            _ => state.value(field),
        };
        lines.push(row(
            focused,
            vec![
                Span::styled(
                    format!("{:<13}", format!("{}:", field.label())),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value),
            ],
        ));
    }

    lines.push(Line::from(""));
    let action = if state.saving {
        "Guardando..."
    } else {
        "[Enter] Guardar"
    };
    lines.push(Line::styled(action, Style::default().fg(ACCENT)));
    lines
}
