use std::cell::RefCell;
use std::rc::Rc;

use gloo::console::{error, log};
use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::board::{BoardAction, BoardState};
use crate::config::MESSAGE_TTL_MS;
use crate::models::Severity;

pub const SELECT_ACTIVITY_FIRST: &str = "Please select an activity.";

const SIGNUP_REJECTED: &str = "An error occurred";
const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
const REMOVAL_REJECTED: &str = "Failed to remove participant.";
const REMOVAL_FAILED: &str = "Failed to remove participant. Please try again.";

/// The board's operations. Cheap to clone into event handlers and tasks.
#[derive(Clone)]
pub struct Controller {
    board: UseReducerDispatcher<BoardState>,
    load_seq: Rc<RefCell<u64>>,
    message_seq: Rc<RefCell<u64>>,
    // Holding the Timeout keeps it armed; dropping it cancels it.
    hide_timer: Rc<RefCell<Option<Timeout>>>,
}

/// The only client-side check: an activity has to be picked.
pub fn check_selection(activity: &str) -> Result<(), &'static str> {
    if activity.is_empty() {
        Err(SELECT_ACTIVITY_FIRST)
    } else {
        Ok(())
    }
}

fn next_id(seq: &RefCell<u64>) -> u64 {
    let mut n = seq.borrow_mut();
    *n += 1;
    *n
}

impl Controller {
    pub fn new(
        board: UseReducerDispatcher<BoardState>,
        load_seq: Rc<RefCell<u64>>,
        message_seq: Rc<RefCell<u64>>,
        hide_timer: Rc<RefCell<Option<Timeout>>>,
    ) -> Self {
        Self {
            board,
            load_seq,
            message_seq,
            hide_timer,
        }
    }

    pub fn select_activity(&self, name: String) {
        self.board.dispatch(BoardAction::SelectActivity(name));
    }

    pub fn edit_email(&self, email: String) {
        self.board.dispatch(BoardAction::EditEmail(email));
    }

    /// Replaces the banner and restarts its hide countdown.
    pub fn show_message(&self, text: impl Into<String>, severity: Severity) {
        let generation = next_id(&self.message_seq);
        self.board.dispatch(BoardAction::ShowMessage {
            generation,
            text: text.into(),
            severity,
        });

        let board = self.board.clone();
        let timer = Timeout::new(MESSAGE_TTL_MS, move || {
            board.dispatch(BoardAction::ExpireMessage { generation });
        });
        self.hide_timer.borrow_mut().replace(timer);
    }

    pub fn load_activities(&self) {
        let this = self.clone();
        spawn_local(async move { this.reload().await });
    }

    async fn reload(&self) {
        let load = next_id(&self.load_seq);
        self.board.dispatch(BoardAction::LoadIssued(load));

        match api::fetch_activities().await {
            Ok(activities) => {
                log!(format!("loaded {} activities (load #{load})", activities.len()));
                self.board.dispatch(BoardAction::Loaded { load, activities });
            }
            Err(e) => {
                error!("Error fetching activities:", e.to_string());
                self.board.dispatch(BoardAction::LoadFailed { load });
            }
        }
    }

    pub fn submit_signup(&self, activity: String, email: String) {
        if let Err(msg) = check_selection(&activity) {
            self.show_message(msg, Severity::Error);
            return;
        }

        let this = self.clone();
        spawn_local(async move {
            match api::signup(&activity, &email).await {
                Ok(message) => {
                    this.show_message(message, Severity::Success);
                    this.board.dispatch(BoardAction::SignupSucceeded);
                    this.reload().await;
                }
                Err(e) => this.report("Error signing up:", &e, SIGNUP_REJECTED, SIGNUP_FAILED),
            }
        });
    }

    pub fn remove_participant(&self, activity: String, email: String) {
        self.board.dispatch(BoardAction::RemovalStarted {
            activity: activity.clone(),
            email: email.clone(),
        });

        let this = self.clone();
        spawn_local(async move {
            match api::remove_participant(&activity, &email).await {
                Ok(message) => {
                    this.show_message(message, Severity::Success);
                    this.reload().await;
                }
                Err(e) => this.report(
                    "Error removing participant:",
                    &e,
                    REMOVAL_REJECTED,
                    REMOVAL_FAILED,
                ),
            }
            this.board
                .dispatch(BoardAction::RemovalSettled { activity, email });
        });
    }

    fn report(&self, context: &str, e: &ApiError, rejected: &str, failed: &str) {
        if e.is_unexpected() {
            error!(context.to_string(), e.to_string());
        }
        self.show_message(e.user_message(rejected, failed), Severity::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_is_refused_with_exact_text() {
        assert_eq!(check_selection(""), Err("Please select an activity."));
        assert_eq!(check_selection("Chess Club"), Ok(()));
    }

    #[test]
    fn ids_increase_from_one() {
        let seq = RefCell::new(0);
        assert_eq!(next_id(&seq), 1);
        assert_eq!(next_id(&seq), 2);
    }
}
