use gloo::timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::board::BoardState;
use crate::controller::Controller;
use crate::view;

#[function_component(App)]
pub fn app() -> Html {
    let board = use_reducer(BoardState::default);
    let load_seq = use_mut_ref(|| 0u64);
    let message_seq = use_mut_ref(|| 0u64);
    let hide_timer = use_mut_ref(|| None::<Timeout>);
    let select_ref = use_node_ref();

    let controller = Controller::new(board.dispatcher(), load_seq, message_seq, hide_timer);

    // Initial load
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            controller.load_activities();
            || ()
        });
    }

    // `selected` on <option> only sets the default; push the live value too,
    // otherwise a form reset or a reload can leave the browser's choice behind.
    {
        let select_ref = select_ref.clone();
        let deps = (board.selected.clone(), board.activities.clone());
        use_effect_with(deps, move |(selected, _)| {
            if let Some(sel) = select_ref.cast::<HtmlSelectElement>() {
                sel.set_value(selected);
            }
            || ()
        });
    }

    let on_select = {
        let controller = controller.clone();
        Callback::from(move |e: Event| {
            let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() else { return; };
            controller.select_activity(sel.value());
        })
    };

    let on_email = {
        let controller = controller.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            controller.edit_email(input.value());
        })
    };

    let on_submit = {
        let controller = controller.clone();
        let activity = board.selected.clone();
        let email = board.email.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            controller.submit_signup(activity.clone(), email.clone());
        })
    };

    let on_remove = {
        let controller = controller.clone();
        Callback::from(move |(activity, email): (String, String)| {
            controller.remove_participant(activity, email);
        })
    };

    let message_text = board
        .message
        .as_ref()
        .map(|m| m.text.clone())
        .unwrap_or_default();

    html! {
        <div class="wrap">
          <header>
            <h1>{ "Mergington High School" }</h1>
            <h2>{ "Extracurricular Activities" }</h2>
          </header>

          <main>
            <section id="activities-container">
              <h3>{ "Available Activities" }</h3>
              <div id="activities-list">
                { view::activities_list(&board, &on_remove) }
              </div>
            </section>

            <section id="signup-container">
              <h3>{ "Sign Up for an Activity" }</h3>
              <form id="signup-form" onsubmit={on_submit}>
                <div class="form-group">
                  <label for="email">{ "Student Email:" }</label>
                  <input
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                    value={board.email.clone()}
                    oninput={on_email}
                  />
                </div>
                <div class="form-group">
                  <label for="activity">{ "Select Activity:" }</label>
                  <select id="activity" ref={select_ref} onchange={on_select}>
                    { view::activity_options(&board) }
                  </select>
                </div>
                <button type="submit">{ "Sign Up" }</button>
              </form>
              <div id="message" class={view::message_classes(board.message.as_ref())}>
                { message_text }
              </div>
            </section>
          </main>
        </div>
    }
}
