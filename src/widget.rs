use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::session::{Effect, SearchSession};
use crate::{RepositorySearch, ResultSet, SearchError};

/// Something the user did to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The search box now holds this value.
    Input(String),
    /// Zero-based page chosen in the pager.
    SelectPage(usize),
    NextPage,
    PreviousPage,
    Quit,
}

/// Outcome of work spawned by the widget itself.
enum Completion {
    DebounceElapsed,
    Fetched(Result<ResultSet, SearchError>),
}

/// Sender side of a running [`SearchWidget`].
///
/// Every method returns `false` once the widget has stopped.
#[derive(Debug, Clone)]
pub struct WidgetHandle {
    tx: mpsc::UnboundedSender<WidgetEvent>,
}

impl WidgetHandle {
    pub fn send(&self, event: WidgetEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn input(&self, value: impl Into<String>) -> bool {
        self.send(WidgetEvent::Input(value.into()))
    }

    pub fn select_page(&self, selected: usize) -> bool {
        self.send(WidgetEvent::SelectPage(selected))
    }

    pub fn next_page(&self) -> bool {
        self.send(WidgetEvent::NextPage)
    }

    pub fn previous_page(&self) -> bool {
        self.send(WidgetEvent::PreviousPage)
    }

    pub fn quit(&self) -> bool {
        self.send(WidgetEvent::Quit)
    }
}

/// Event loop owning a [`SearchSession`].
///
/// Debounce timers and fetches run as separate tasks and report back over a
/// channel; only the loop touches the session. Superseded fetches are not
/// cancelled, so a late response still replaces what is on screen.
pub struct SearchWidget<A> {
    session: SearchSession,
    api: Arc<A>,
    events: mpsc::UnboundedReceiver<WidgetEvent>,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions: mpsc::UnboundedReceiver<Completion>,
    pending: usize,
}

impl<A: RepositorySearch> SearchWidget<A> {
    pub fn new(api: Arc<A>, debounce: Duration) -> (Self, WidgetHandle) {
        let (tx, events) = mpsc::unbounded_channel();
        let (completions_tx, completions) = mpsc::unbounded_channel();
        let widget = SearchWidget {
            session: SearchSession::new(debounce),
            api,
            events,
            completions_tx,
            completions,
            pending: 0,
        };
        (widget, WidgetHandle { tx })
    }

    /// Process events until [`WidgetEvent::Quit`] arrives, or until every
    /// handle is dropped and no timer or fetch is outstanding.
    ///
    /// `observer` sees the session after each processed event.
    pub async fn run<F>(mut self, mut observer: F) -> SearchSession
    where
        F: FnMut(&SearchSession),
    {
        let mut events_open = true;

        loop {
            if !events_open && self.pending == 0 {
                debug!("All handles dropped and nothing pending, stopping");
                break;
            }

            tokio::select! {
                Some(completion) = self.completions.recv() => {
                    self.pending = self.pending.saturating_sub(1);
                    self.complete(completion);
                }
                event = self.events.recv(), if events_open => match event {
                    Some(WidgetEvent::Quit) => {
                        info!("Quit requested");
                        break;
                    }
                    Some(event) => self.dispatch(event),
                    None => {
                        events_open = false;
                        continue;
                    }
                },
                else => break,
            }

            observer(&self.session);
        }

        self.session
    }

    fn dispatch(&mut self, event: WidgetEvent) {
        let effect = match event {
            WidgetEvent::Input(value) => self.session.on_input(value),
            WidgetEvent::SelectPage(selected) => self.session.on_page_selected(selected),
            WidgetEvent::NextPage => self.session.on_next_page(),
            WidgetEvent::PreviousPage => self.session.on_previous_page(),
            WidgetEvent::Quit => None,
        };
        if let Some(effect) = effect {
            self.spawn(effect);
        }
    }

    fn complete(&mut self, completion: Completion) {
        match completion {
            Completion::DebounceElapsed => {
                if let Some(effect) = self.session.on_debounce_elapsed() {
                    self.spawn(effect);
                }
            }
            Completion::Fetched(outcome) => self.session.on_fetch_complete(outcome),
        }
    }

    fn spawn(&mut self, effect: Effect) {
        let tx = self.completions_tx.clone();
        self.pending += 1;

        match effect {
            Effect::ScheduleDebounce(delay) => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Completion::DebounceElapsed);
                });
            }
            Effect::Fetch(request) => {
                debug!("Issuing fetch: {:?}", request);
                let api = Arc::clone(&self.api);
                tokio::spawn(async move {
                    let outcome = api.search(request).await;
                    let _ = tx.send(Completion::Fetched(outcome));
                });
            }
        }
    }
}
