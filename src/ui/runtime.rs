use crate::api::CatalogClient;
use crate::config::UiConfig;
use crate::sync::execute;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Run the interactive catalog until the user quits.
pub async fn run(client: CatalogClient, ui: UiConfig) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(Duration::from_millis(ui.tick_rate_ms));
    let mut app = App::new();
    app.set_server_label(client.base_url());
    tracing::info!(base_url = client.base_url(), "Catalog UI started");

    loop {
        spawn_dispatches(&mut app, &client, events.sender());
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next().await {
            Some(AppEvent::Key(key)) => handle_key(&mut app, key),
            Some(AppEvent::Resize(_, _)) => {}
            Some(AppEvent::Outcome { frame, outcome }) => app.on_outcome(frame, outcome),
            None => break,
        }
    }

    drop(guard);
    tracing::info!("Catalog UI stopped");
    Ok(())
}

/// Execute every queued command on its own task.
fn spawn_dispatches(app: &mut App, client: &CatalogClient, tx: UnboundedSender<AppEvent>) {
    for dispatch in app.take_dispatches() {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = execute(&client, dispatch.command).await;
            let _ = tx.send(AppEvent::Outcome {
                frame: dispatch.frame,
                outcome,
            });
        });
    }
}
