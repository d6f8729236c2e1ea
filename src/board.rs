//! Everything the board renders, as one reducer.
//!
//! Async tasks only ever talk to the board through [`BoardAction`]s, so a
//! task that resumes late never writes back a snapshot it captured before
//! suspending.

use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::models::{Activity, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardState {
    pub status: LoadStatus,
    /// Last roster that loaded. Kept on failure so the select still works.
    pub activities: Vec<Activity>,
    /// Selected activity name; empty means the placeholder option.
    pub selected: String,
    pub email: String,
    pub message: Option<Message>,
    pending_removals: HashSet<(String, String)>,
    message_generation: u64,
    latest_load: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    LoadIssued(u64),
    Loaded { load: u64, activities: Vec<Activity> },
    LoadFailed { load: u64 },
    SelectActivity(String),
    EditEmail(String),
    SignupSucceeded,
    RemovalStarted { activity: String, email: String },
    RemovalSettled { activity: String, email: String },
    ShowMessage { generation: u64, text: String, severity: Severity },
    ExpireMessage { generation: u64 },
}

impl BoardState {
    pub fn is_removing(&self, activity: &str, email: &str) -> bool {
        self.pending_removals
            .contains(&(activity.to_string(), email.to_string()))
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: BoardAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            BoardAction::LoadIssued(load) => {
                next.latest_load = next.latest_load.max(load);
            }
            BoardAction::Loaded { load, activities } => {
                if load != self.latest_load {
                    return self;
                }
                if !activities.iter().any(|a| a.name == next.selected) {
                    next.selected.clear();
                }
                next.activities = activities;
                next.status = LoadStatus::Ready;
            }
            BoardAction::LoadFailed { load } => {
                if load != self.latest_load {
                    return self;
                }
                next.status = LoadStatus::Failed;
            }
            BoardAction::SelectActivity(name) => next.selected = name,
            BoardAction::EditEmail(email) => next.email = email,
            BoardAction::SignupSucceeded => {
                next.selected.clear();
                next.email.clear();
            }
            BoardAction::RemovalStarted { activity, email } => {
                next.pending_removals.insert((activity, email));
            }
            BoardAction::RemovalSettled { activity, email } => {
                next.pending_removals.remove(&(activity, email));
            }
            BoardAction::ShowMessage {
                generation,
                text,
                severity,
            } => {
                next.message_generation = generation;
                next.message = Some(Message {
                    text,
                    severity,
                    visible: true,
                });
            }
            BoardAction::ExpireMessage { generation } => {
                if generation != self.message_generation {
                    return self;
                }
                if let Some(m) = next.message.as_mut() {
                    m.visible = false;
                }
            }
        }
        next.into()
    }
}
