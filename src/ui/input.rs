use crate::screens::{
    apply, CatalogoIntent, CatalogoReducer, CategoryListIntent, CategoryListReducer,
    FiguraFormIntent, FiguraFormReducer, FormField, MenuIntent, MenuReducer, Screen,
};
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Keys shared by every list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKey {
    Up,
    Down,
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.notification().is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_notification();
        }
        return;
    }

    if matches!(key.code, KeyCode::Esc) {
        app.back();
        return;
    }

    if matches!(app.current_screen(), Some(Screen::FiguraForm(_))) {
        handle_form_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Enter => app.activate_selection(),
        KeyCode::Char('e') => app.edit_current(),
        KeyCode::Char('n') => app.new_figure(),
        KeyCode::Char('d') => app.delete_selected(),
        KeyCode::Char(' ') | KeyCode::Char('a') => app.toggle_acquired(),
        KeyCode::Up | KeyCode::Char('k') => move_selection(app, ListKey::Up),
        KeyCode::Down | KeyCode::Char('j') => move_selection(app, ListKey::Down),
        _ => {}
    }
}

fn move_selection(app: &mut App, key: ListKey) {
    let up = key == ListKey::Up;
    match app.current_screen_mut() {
        Some(Screen::Menu(state)) => {
            let intent = if up { MenuIntent::MoveUp } else { MenuIntent::MoveDown };
            apply::<MenuReducer>(state, intent);
        }
        Some(Screen::CategoryList(state)) => {
            let intent = if up {
                CategoryListIntent::MoveUp
            } else {
                CategoryListIntent::MoveDown
            };
            apply::<CategoryListReducer>(state, intent);
        }
        Some(Screen::Catalogo(state)) => {
            let intent = if up {
                CatalogoIntent::MoveUp
            } else {
                CatalogoIntent::MoveDown
            };
            apply::<CatalogoReducer>(state, intent);
        }
        _ => {}
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter) || is_ctrl_char(key, 's') {
        app.submit_form();
        return;
    }

    let Some(Screen::FiguraForm(state)) = app.current_screen_mut() else {
        return;
    };

    let intent = match key.code {
        KeyCode::Tab | KeyCode::Down => FiguraFormIntent::FocusNext,
        KeyCode::BackTab | KeyCode::Up => FiguraFormIntent::FocusPrev,
        KeyCode::Backspace => FiguraFormIntent::Backspace,
        KeyCode::Right if state.focused == FormField::Category => FiguraFormIntent::NextCategory,
        KeyCode::Left if state.focused == FormField::Category => FiguraFormIntent::PrevCategory,
        KeyCode::Left | KeyCode::Right if state.focused == FormField::Acquired => {
            FiguraFormIntent::ToggleAcquired
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            FiguraFormIntent::Input(ch)
        }
        _ => return,
    };
    apply::<FiguraFormReducer>(state, intent);
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
