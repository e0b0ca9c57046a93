use tokio::sync::broadcast::{self, error::TryRecvError};

use crate::catalog::Figure;
use crate::nav::{FocusEvent, FrameId, Navigator, Route, Transition};
use crate::screens::{
    apply, CatalogoIntent, CatalogoReducer, CategoryListIntent, CategoryListReducer,
    FiguraDetailIntent, FiguraDetailReducer, FiguraFormIntent, FiguraFormReducer, Screen,
};
use crate::sync::{Command, Outcome};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NotificationKind {
    Info,
    Error,
}

/// Blocking message shown over the current screen until dismissed.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}

/// A command queued by a screen, tagged with the frame that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub frame: FrameId,
    pub command: Command,
}

/// What to do once the borrow on a screen is released.
enum FollowUp {
    /// The form saved this figure.
    CloseForm(Figure),
    Info {
        title: &'static str,
        message: &'static str,
    },
}

pub struct App {
    should_quit: bool,
    navigator: Navigator,
    focus_rx: broadcast::Receiver<FocusEvent>,
    /// Screen state per live frame, bottom to top.
    screens: Vec<(FrameId, Screen)>,
    notification: Option<Notification>,
    pending: Vec<Dispatch>,
    server_label: String,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let navigator = Navigator::new();
        let focus_rx = navigator.subscribe();
        let root = navigator.current().clone();

        let mut app = Self {
            should_quit: false,
            navigator,
            focus_rx,
            screens: vec![(root.id, Screen::open(&root.route))],
            notification: None,
            pending: Vec::new(),
            server_label: String::new(),
        };
        app.navigator.start();
        app.process_focus_events();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Shown in the header; usually the collection's base URL.
    pub fn server_label(&self) -> &str {
        &self.server_label
    }

    pub fn set_server_label(&mut self, label: impl Into<String>) {
        self.server_label = label.into();
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_route(&self) -> &Route {
        &self.navigator.current().route
    }

    pub fn current_frame(&self) -> FrameId {
        self.navigator.current().id
    }

    pub fn screen(&self, frame: FrameId) -> Option<&Screen> {
        self.screens
            .iter()
            .find(|(id, _)| *id == frame)
            .map(|(_, screen)| screen)
    }

    fn screen_mut(&mut self, frame: FrameId) -> Option<&mut Screen> {
        self.screens
            .iter_mut()
            .find(|(id, _)| *id == frame)
            .map(|(_, screen)| screen)
    }

    pub fn current_screen(&self) -> Option<&Screen> {
        self.screen(self.current_frame())
    }

    pub fn current_screen_mut(&mut self) -> Option<&mut Screen> {
        self.screen_mut(self.current_frame())
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn dismiss_notification(&mut self) {
        self.notification = None;
    }

    pub fn notify_error(&mut self, message: impl Into<String>) {
        self.notification = Some(Notification {
            kind: NotificationKind::Error,
            title: "Error".to_string(),
            message: message.into(),
        });
    }

    pub fn notify_info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notification = Some(Notification {
            kind: NotificationKind::Info,
            title: title.into(),
            message: message.into(),
        });
    }

    /// Drain the commands screens queued since the last call.
    pub fn take_dispatches(&mut self) -> Vec<Dispatch> {
        std::mem::take(&mut self.pending)
    }

    pub fn navigate(&mut self, route: Route) {
        let transition = self.navigator.navigate(route);
        self.apply_transition(transition);
    }

    pub fn back(&mut self) {
        let transition = self.navigator.back();
        self.apply_transition(transition);
    }

    fn apply_transition(&mut self, transition: Transition) {
        match transition {
            Transition::Pushed(frame) => {
                self.screens.push((frame.id, Screen::open(&frame.route)));
            }
            Transition::Popped { removed, .. } => {
                self.screens.retain(|(id, _)| *id != removed.id);
            }
            Transition::Ignored => {}
        }
        self.process_focus_events();
    }

    fn process_focus_events(&mut self) {
        loop {
            match self.focus_rx.try_recv() {
                Ok(event) => {
                    let command = self
                        .screen_mut(event.frame)
                        .and_then(|screen| screen.on_focus());
                    if let Some(command) = command {
                        tracing::debug!(
                            frame = %event.frame,
                            screen = event.route.name(),
                            command = command.name(),
                            "Refreshing on focus"
                        );
                        self.issue(event.frame, command);
                    }
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Focus events lagged");
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }

    fn issue(&mut self, frame: FrameId, command: Command) {
        self.pending.push(Dispatch { frame, command });
    }

    /// Refresh the current screen on demand.
    pub fn refresh(&mut self) {
        let frame = self.current_frame();
        if let Some(command) = self.current_screen_mut().and_then(Screen::refresh) {
            self.issue(frame, command);
        }
    }

    /// Enter on a list: open whatever is selected.
    pub fn activate_selection(&mut self) {
        let route = match self.current_screen() {
            Some(Screen::Menu(state)) => Some(state.selected_entry().route()),
            Some(Screen::CategoryList(state)) => Some(Route::Catalogo {
                category: state.selected_category(),
            }),
            Some(Screen::Catalogo(state)) => state
                .selected_figure()
                .map(|figure| Route::FiguraDetail {
                    figure: figure.clone(),
                }),
            _ => None,
        };
        if let Some(route) = route {
            self.navigate(route);
        }
    }

    /// Open the form for the figure on screen.
    pub fn edit_current(&mut self) {
        let figure = match self.current_screen() {
            Some(Screen::Catalogo(state)) => state.selected_figure().cloned(),
            Some(Screen::FiguraDetail(state)) => Some(state.figure.clone()),
            _ => None,
        };
        if let Some(figure) = figure {
            self.navigate(Route::edit_figure(figure));
        }
    }

    /// Open an empty form, preset to the catalog's category when inside one.
    pub fn new_figure(&mut self) {
        let category = match self.current_screen() {
            Some(Screen::Catalogo(state)) => Some(state.category),
            Some(Screen::Menu(_)) => None,
            _ => return,
        };
        self.navigate(Route::new_figure(category));
    }

    /// Ask the server to delete the selected figure in a catalog.
    pub fn delete_selected(&mut self) {
        let frame = self.current_frame();
        let command = match self.current_screen() {
            Some(Screen::Catalogo(state)) => state.delete_command(),
            _ => None,
        };
        if let Some(command) = command {
            self.issue(frame, command);
        }
    }

    /// Request flipping the acquired flag of the figure on screen.
    pub fn toggle_acquired(&mut self) {
        let frame = self.current_frame();
        let command = match self.current_screen_mut() {
            Some(Screen::FiguraDetail(state)) => {
                let command = state.toggle_command();
                apply::<FiguraDetailReducer>(state, FiguraDetailIntent::ToggleRequested);
                Some(command)
            }
            _ => None,
        };
        if let Some(command) = command {
            self.issue(frame, command);
        }
    }

    /// Validate the form and queue create or replace.
    ///
    /// Invalid input is reported and nothing is sent.
    pub fn submit_form(&mut self) {
        let frame = self.current_frame();
        let result = match self.current_screen_mut() {
            Some(Screen::FiguraForm(state)) => {
                let result = state.submit_command();
                if result.is_ok() {
                    apply::<FiguraFormReducer>(state, FiguraFormIntent::Submitted);
                }
                result
            }
            _ => return,
        };
        match result {
            Ok(command) => self.issue(frame, command),
            Err(err) => {
                tracing::warn!(error = %err, "Form rejected");
                self.notify_error(err.user_message());
            }
        }
    }

    /// Apply a finished command to the frame that issued it.
    ///
    /// Errors always produce a notification. State changes are dropped when
    /// the frame is no longer on the stack.
    pub fn on_outcome(&mut self, frame: FrameId, outcome: Outcome) {
        if let Some(err) = outcome.error() {
            tracing::error!(
                frame = %frame,
                error_type = err.error_type(),
                error = %err,
                "Catalog command failed"
            );
            self.notify_error(err.user_message());
        }

        let Some(screen) = self.screen_mut(frame) else {
            tracing::debug!(frame = %frame, "Outcome for closed frame dropped");
            return;
        };

        let follow_up = match (screen, outcome) {
            (Screen::CategoryList(state), Outcome::Stats(result)) => {
                let intent = match result {
                    Ok(stats) => CategoryListIntent::Loaded(stats),
                    Err(_) => CategoryListIntent::LoadFailed,
                };
                apply::<CategoryListReducer>(state, intent);
                None
            }
            (Screen::Catalogo(state), Outcome::Figures(result)) => {
                let intent = match result {
                    Ok(figures) => CatalogoIntent::Loaded(figures),
                    Err(_) => CatalogoIntent::LoadFailed,
                };
                apply::<CatalogoReducer>(state, intent);
                None
            }
            (Screen::Catalogo(state), Outcome::Deleted { id, result }) => {
                if result.is_ok() {
                    apply::<CatalogoReducer>(state, CatalogoIntent::Removed(id));
                }
                None
            }
            (Screen::FiguraForm(state), Outcome::Saved(result)) => match result {
                Ok(figure) => Some(FollowUp::CloseForm(figure)),
                Err(_) => {
                    apply::<FiguraFormReducer>(state, FiguraFormIntent::SaveFailed);
                    None
                }
            },
            (Screen::FiguraDetail(state), Outcome::AcquiredChanged(result)) => match result {
                Ok(figure) => {
                    let message = if figure.acquired {
                        "Marcada como adquirida"
                    } else {
                        "Marcada como pendiente"
                    };
                    apply::<FiguraDetailReducer>(state, FiguraDetailIntent::Confirmed(figure));
                    Some(FollowUp::Info {
                        title: "Estado actualizado",
                        message,
                    })
                }
                Err(_) => {
                    apply::<FiguraDetailReducer>(state, FiguraDetailIntent::Failed);
                    None
                }
            },
            (_, outcome) => {
                tracing::debug!(frame = %frame, outcome = ?outcome, "Outcome not handled by screen");
                None
            }
        };

        match follow_up {
            Some(FollowUp::CloseForm(figure)) => {
                self.show_saved(&figure);
                if self.current_frame() == frame {
                    self.back();
                }
            }
            Some(FollowUp::Info { title, message }) => self.notify_info(title, message),
            None => {}
        }
    }

    /// Detail screens hold a copy of the figure; replace it with what the
    /// server stored.
    fn show_saved(&mut self, figure: &Figure) {
        for (_, screen) in &mut self.screens {
            if let Screen::FiguraDetail(state) = screen {
                apply::<FiguraDetailReducer>(state, FiguraDetailIntent::Saved(figure.clone()));
            }
        }
    }
}
