use yew::prelude::*;

use crate::board::{BoardState, LoadStatus, Message};
use crate::models::Activity;

pub const PLACEHOLDER_OPTION: &str = "-- Select an activity --";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

/// Contents of `#activities-list`.
pub fn activities_list(state: &BoardState, on_remove: &Callback<(String, String)>) -> Html {
    match state.status {
        LoadStatus::Loading => html! { <p>{ "Loading activities..." }</p> },
        LoadStatus::Failed => html! { <p>{ LOAD_FAILED }</p> },
        LoadStatus::Ready => html! {
            <>
              { for state.activities.iter().map(|a| activity_card(a, state, on_remove)) }
            </>
        },
    }
}

fn activity_card(activity: &Activity, state: &BoardState, on_remove: &Callback<(String, String)>) -> Html {
    html! {
        <div class="activity-card">
          <h4>{ activity.name.clone() }</h4>
          <p>{ activity.description.clone() }</p>
          <p><strong>{ "Schedule:" }</strong>{ format!(" {}", activity.schedule) }</p>
          <p><strong>{ "Availability:" }</strong>{ format!(" {} spots left", activity.spots_left()) }</p>

          <div class="participants-section">
            <p><strong>{ "Current Participants:" }</strong></p>
            if activity.participants.is_empty() {
              <p class="no-participants">{ "No participants yet" }</p>
            } else {
              <ul class="participants-list">
                { for activity.participants.iter().map(|p| {
                    participant_row(&activity.name, p, state.is_removing(&activity.name, p), on_remove)
                }) }
              </ul>
            }
          </div>
        </div>
    }
}

fn participant_row(activity: &str, email: &str, removing: bool, on_remove: &Callback<(String, String)>) -> Html {
    let onclick = {
        let on_remove = on_remove.clone();
        let key = (activity.to_string(), email.to_string());
        Callback::from(move |_: MouseEvent| on_remove.emit(key.clone()))
    };

    html! {
        <li class="participant-item">
          <span>{ email }</span>
          <button
            type="button"
            class="delete-participant"
            aria-label={remove_label(activity, email)}
            disabled={removing}
            {onclick}
          >
            { "\u{00d7}" }
          </button>
        </li>
    }
}

pub fn remove_label(activity: &str, email: &str) -> String {
    format!("Remove {email} from {activity}")
}

/// Options for `#activity`: placeholder first, then one per activity.
pub fn activity_options(state: &BoardState) -> Html {
    html! {
        <>
          <option value="" selected={state.selected.is_empty()}>{ PLACEHOLDER_OPTION }</option>
          { for state.activities.iter().map(|a| html! {
              <option value={a.name.clone()} selected={a.name == state.selected}>{ a.name.clone() }</option>
          }) }
        </>
    }
}

/// Class list for `#message`; `hidden` once the countdown runs out.
pub fn message_classes(message: Option<&Message>) -> Classes {
    match message {
        Some(m) => classes!(m.severity.as_class(), (!m.visible).then_some("hidden")),
        None => classes!("hidden"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    #[test]
    fn remove_label_names_participant_and_activity() {
        assert_eq!(
            remove_label("Chess Club", "michael@mergington.edu"),
            "Remove michael@mergington.edu from Chess Club"
        );
    }

    #[test]
    fn message_classes_follow_severity_and_visibility() {
        let shown = Message {
            text: "Removed a@b.edu from Chess Club".into(),
            severity: Severity::Success,
            visible: true,
        };
        assert_eq!(message_classes(Some(&shown)).to_string(), "success");

        let hidden = Message {
            visible: false,
            severity: Severity::Error,
            ..shown
        };
        assert_eq!(message_classes(Some(&hidden)).to_string(), "error hidden");
        assert_eq!(message_classes(None).to_string(), "hidden");
    }
}
