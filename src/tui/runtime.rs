use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, trace};

use crate::greeting::GreetingRefresher;

use super::action::Action;
use super::effects::Effect;
use super::reducer::reduce;
use super::state::AppState;

/// Screen runtime - owns the state and processes actions
///
/// The Runtime is responsible for:
/// - Dispatching actions through the reducer
/// - Executing effects (carousel scrolls, follow-up actions)
/// - Owning the greeting refresher for the lifetime of the screen
pub struct Runtime {
    /// Current screen state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Periodic greeting refresh, aborted when the runtime is dropped
    greeting_refresher: Option<GreetingRefresher>,
}

impl Runtime {
    /// Create a runtime without background tasks
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            state: initial_state,
            action_tx,
            action_rx,
            greeting_refresher: None,
        }
    }

    /// Start the periodic greeting refresh
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_greeting_refresh(&mut self) {
        let seconds = self.state.system.config.greeting_refresh_interval.max(1);
        debug!("GREETING: Refreshing every {}s", seconds);
        self.greeting_refresher = Some(GreetingRefresher::spawn(
            Duration::from_secs(u64::from(seconds)),
            self.action_tx.clone(),
            || Action::RefreshGreeting,
        ));
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::ScrollCarousel { index, animated } => {
                debug!("EFFECT: Scrolling carousel to {} (animated: {})", index, animated);
                self.state.carousel_view.scroll_to(index, animated);
            }
            Effect::Action(action) => {
                trace!("EFFECT: Queueing {:?}", action);
                let _ = self.action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Dispatch an action and drain everything it triggers
    pub fn dispatch_and_settle(&mut self, action: Action) -> usize {
        self.dispatch(action);
        1 + self.process_actions()
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Stop background work before the screen goes away
    pub fn unmount(&mut self) {
        if let Some(refresher) = self.greeting_refresher.take() {
            debug!("GREETING: Stopping refresh");
            refresher.stop();
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        self.unmount();
    }
}
