//! End-to-end screen flows: keys in, commands against the mock catalog,
//! outcomes back into the app.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use figuras::catalog::Category;
use figuras::nav::Route;
use figuras::screens::Screen;
use figuras::sync::{execute, Command};
use figuras::ui::app::{App, NotificationKind};
use figuras::ui::input::handle_key;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch));
    }
}

fn catalogo_names(app: &App) -> Vec<String> {
    match app.current_screen() {
        Some(Screen::Catalogo(state)) => state.figures.iter().map(|f| f.name.clone()).collect(),
        other => panic!("expected catalogo, got {:?}", other),
    }
}

#[tokio::test]
async fn opening_categories_loads_counts() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);
    mock.seed(record("a1", "Seiya", "myth cloth", false));
    mock.seed(record("a2", "Shiryu", "myth cloth", true));

    let mut app = make_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.current_route(), &Route::CategoryList);

    pump(&mut app, &client).await;
    match app.current_screen() {
        Some(Screen::CategoryList(state)) => {
            assert!(!state.loading);
            assert_eq!(state.cards()[0].count_label(), "2 figuras");
        }
        other => panic!("expected category list, got {:?}", other),
    }
}

#[tokio::test]
async fn returning_to_a_list_refetches_it() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);

    let mut app = make_app();
    app.navigate(Route::CategoryList);
    pump(&mut app, &client).await;
    press(&mut app, KeyCode::Enter);
    assert_eq!(
        app.current_route(),
        &Route::Catalogo {
            category: Category::MythCloth
        }
    );
    pump(&mut app, &client).await;

    mock.seed(record("n1", "Ikki", "myth cloth", false));
    mock.clear_requests();
    press(&mut app, KeyCode::Esc);

    let dispatches = app.take_dispatches();
    assert_eq!(dispatches.len(), 1);
    assert_eq!(dispatches[0].command, Command::LoadStats);
    assert_eq!(dispatches[0].frame, app.current_frame());

    let outcome = execute(&client, dispatches[0].command.clone()).await;
    app.on_outcome(dispatches[0].frame, outcome);
    match app.current_screen() {
        Some(Screen::CategoryList(state)) => assert_eq!(state.cards()[0].count, 1),
        other => panic!("expected category list, got {:?}", other),
    }
    assert_eq!(mock.captured_requests().len(), 1);
}

#[tokio::test]
async fn creating_from_catalog_returns_to_refreshed_list() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);
    mock.queue_id("a1");

    let mut app = make_app();
    app.navigate(Route::Catalogo {
        category: Category::MythCloth,
    });
    pump(&mut app, &client).await;
    assert!(catalogo_names(&app).is_empty());

    press(&mut app, KeyCode::Char('n'));
    assert!(matches!(
        app.current_screen(),
        Some(Screen::FiguraForm(state)) if state.category == Category::MythCloth
    ));
    type_text(&mut app, "Seiya");
    press(&mut app, KeyCode::Enter);

    pump(&mut app, &client).await;
    assert_eq!(
        app.current_route(),
        &Route::Catalogo {
            category: Category::MythCloth
        }
    );
    assert_eq!(catalogo_names(&app), vec!["Seiya".to_string()]);
    assert_eq!(mock.stored()[0]["_id"], "a1");
}

#[tokio::test]
async fn empty_name_shows_error_and_sends_nothing() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);

    let mut app = make_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert!(matches!(app.current_screen(), Some(Screen::FiguraForm(_))));

    type_text(&mut app, "  ");
    press(&mut app, KeyCode::Enter);

    assert!(app.take_dispatches().is_empty());
    let notification = app.notification().expect("validation notification");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "El nombre es obligatorio");

    pump(&mut app, &client).await;
    assert!(mock.captured_requests().is_empty());
    assert!(matches!(app.current_screen(), Some(Screen::FiguraForm(_))));
}

#[tokio::test]
async fn toggle_in_detail_confirms_server_value() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);
    mock.seed(record("a1", "Seiya", "myth cloth", false));

    let mut app = make_app();
    app.navigate(Route::Catalogo {
        category: Category::MythCloth,
    });
    pump(&mut app, &client).await;
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char(' '));

    match app.current_screen() {
        Some(Screen::FiguraDetail(state)) => {
            assert!(state.updating);
            assert!(!state.figure.acquired);
        }
        other => panic!("expected detail, got {:?}", other),
    }

    pump(&mut app, &client).await;
    match app.current_screen() {
        Some(Screen::FiguraDetail(state)) => {
            assert!(!state.updating);
            assert!(state.figure.acquired);
        }
        other => panic!("expected detail, got {:?}", other),
    }
    let notification = app.notification().expect("status notification");
    assert_eq!(notification.kind, NotificationKind::Info);
    assert_eq!(notification.message, "Marcada como adquirida");
    assert_eq!(mock.stored()[0]["adquirida"], true);

    // Keys are swallowed until the notification is dismissed.
    press(&mut app, KeyCode::Char(' '));
    assert!(app.take_dispatches().is_empty());
    press(&mut app, KeyCode::Enter);
    assert!(app.notification().is_none());

    press(&mut app, KeyCode::Esc);
    pump(&mut app, &client).await;
    match app.current_screen() {
        Some(Screen::Catalogo(state)) => assert!(state.figures[0].acquired),
        other => panic!("expected catalogo, got {:?}", other),
    }
}

fn rename_in_form(app: &mut App, old: &str, new: &str) {
    for _ in old.chars() {
        press(app, KeyCode::Backspace);
    }
    type_text(app, new);
}

#[tokio::test]
async fn editing_from_detail_updates_the_detail() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);
    mock.seed(record("a1", "Seiya", "myth cloth", false));

    let mut app = make_app();
    app.navigate(Route::Catalogo {
        category: Category::MythCloth,
    });
    pump(&mut app, &client).await;
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('e'));
    assert!(matches!(
        app.current_screen(),
        Some(Screen::FiguraForm(state)) if state.is_editing()
    ));

    rename_in_form(&mut app, "Seiya", "Pegaso");
    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    pump(&mut app, &client).await;

    let request = mock
        .captured_requests()
        .into_iter()
        .find(|r| r.method == "PUT")
        .expect("replace request");
    assert_eq!(request.path, "/api/figuras/a1");
    assert_eq!(mock.stored()[0]["nombre"], "Pegaso");

    match app.current_screen() {
        Some(Screen::FiguraDetail(state)) => {
            assert_eq!(state.figure.name, "Pegaso");
            assert!(state.figure.acquired);
            assert_eq!(
                state.toggle_command(),
                Command::SetAcquired {
                    id: state.figure.id.clone(),
                    acquired: false
                }
            );
        }
        other => panic!("expected detail, got {:?}", other),
    }

    press(&mut app, KeyCode::Char(' '));
    pump(&mut app, &client).await;
    assert_eq!(mock.stored()[0]["adquirida"], false);

    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    pump(&mut app, &client).await;
    assert_eq!(catalogo_names(&app), vec!["Pegaso".to_string()]);
}

#[tokio::test]
async fn editing_from_catalog_returns_to_refreshed_list() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);
    mock.seed(record("a1", "Seiya", "myth cloth", false));
    mock.seed(record("a2", "Shiryu", "myth cloth", false));

    let mut app = make_app();
    app.navigate(Route::Catalogo {
        category: Category::MythCloth,
    });
    pump(&mut app, &client).await;
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));

    rename_in_form(&mut app, "Shiryu", "Shiryu de Dragon");
    press(&mut app, KeyCode::Enter);
    pump(&mut app, &client).await;

    assert_eq!(
        app.current_route(),
        &Route::Catalogo {
            category: Category::MythCloth
        }
    );
    assert_eq!(
        catalogo_names(&app),
        vec!["Seiya".to_string(), "Shiryu de Dragon".to_string()]
    );
    assert_eq!(mock.stored()[1]["nombre"], "Shiryu de Dragon");
}

#[tokio::test]
async fn failed_delete_keeps_list_and_notifies() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);
    mock.seed(record("a1", "Seiya", "myth cloth", false));

    let mut app = make_app();
    app.navigate(Route::Catalogo {
        category: Category::MythCloth,
    });
    pump(&mut app, &client).await;

    mock.enqueue_response(MockResponse::error(404, "Figura no encontrada"));
    press(&mut app, KeyCode::Char('d'));
    pump(&mut app, &client).await;

    assert_eq!(catalogo_names(&app), vec!["Seiya".to_string()]);
    let notification = app.notification().expect("error notification");
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification.message.contains("Figura no encontrada"));
}

#[tokio::test]
async fn successful_delete_removes_row() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);
    mock.seed(record("a1", "Seiya", "myth cloth", false));
    mock.seed(record("a2", "Shiryu", "myth cloth", false));

    let mut app = make_app();
    app.navigate(Route::Catalogo {
        category: Category::MythCloth,
    });
    pump(&mut app, &client).await;
    press(&mut app, KeyCode::Char('d'));
    pump(&mut app, &client).await;

    assert_eq!(catalogo_names(&app), vec!["Shiryu".to_string()]);
    assert!(app.notification().is_none());
    assert_eq!(mock.stored().len(), 1);
}

#[tokio::test]
async fn outcome_for_closed_frame_is_dropped() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);
    mock.seed(record("a1", "Seiya", "myth cloth", false));

    let mut app = app_at(Route::CategoryList);
    app.navigate(Route::Catalogo {
        category: Category::MythCloth,
    });
    let stale = app.take_dispatches();
    app.back();
    let _ = app.take_dispatches();

    let before = app.current_screen().cloned();
    for dispatch in stale {
        let outcome = execute(&client, dispatch.command).await;
        app.on_outcome(dispatch.frame, outcome);
        assert!(app.screen(dispatch.frame).is_none());
    }
    assert_eq!(app.current_screen().cloned(), before);
    assert!(app.notification().is_none());
}

#[tokio::test]
async fn load_failure_is_reported_and_list_kept() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock);
    mock.seed(record("a1", "Seiya", "myth cloth", false));

    let mut app = make_app();
    app.navigate(Route::Catalogo {
        category: Category::MythCloth,
    });
    pump(&mut app, &client).await;

    mock.enqueue_response(MockResponse::error(500, "Base de datos caída"));
    press(&mut app, KeyCode::Char('r'));
    pump(&mut app, &client).await;

    assert_eq!(catalogo_names(&app), vec!["Seiya".to_string()]);
    assert!(app.notification().is_some());
}

#[test]
fn ctrl_c_quits_from_anywhere() {
    let mut app = app_at(Route::new_figure(None));
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    );
    assert!(app.should_quit());
}

#[test]
fn q_in_form_is_text_not_quit() {
    let mut app = app_at(Route::new_figure(None));
    type_text(&mut app, "q");
    assert!(!app.should_quit());
    match app.current_screen() {
        Some(Screen::FiguraForm(state)) => assert_eq!(state.name, "q"),
        other => panic!("expected form, got {:?}", other),
    }
}
