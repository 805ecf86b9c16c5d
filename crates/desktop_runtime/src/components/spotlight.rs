use super::*;
use crate::host::{random_index, SPOTLIGHT_INPUT_DOM_ID};

const SPOTLIGHT_RESPONSES: [&str; 15] = [
    "Searching for intelligence... 404 Not Found.",
    "Why are you searching here? Go use Google like a normal person.",
    "You type like you have mittens on. Try again.",
    "I'd tell you the answer, but I don't think you'd understand.",
    "Nice try. Access Denied.",
    "Loading results... just kidding.",
    "Error: User implementation flawed.",
    "Do you always ask such silly questions?",
    "Calculations indicate a 99% chance of user error.",
    "System overload: Too much incompetence detected.",
    "Have you tried turning your brain off and on again?",
    "I'm a portfolio, not a genie. Make a wish elsewhere.",
    "Search results for that query have been permanently deleted.",
    "Analyzing your request... logic not found.",
    "Wow, original query. Never heard that one before.",
];

/// Reply shown for a submitted query; blank queries get none.
fn spotlight_response(query: &str, roll: usize) -> Option<&'static str> {
    if query.trim().is_empty() {
        return None;
    }
    Some(SPOTLIGHT_RESPONSES[roll % SPOTLIGHT_RESPONSES.len()])
}

#[component]
pub(super) fn Spotlight() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let open = create_memo(move |_| runtime.state.get().system.spotlight_open);
    let query = create_rw_signal(String::new());
    let response = create_rw_signal(None::<&'static str>);

    create_effect(move |_| {
        if !open.get() {
            query.set(String::new());
            response.set(None);
        }
    });

    let close = move |_| runtime.dispatch_action(DesktopAction::SetSpotlightOpen { open: false });
    let search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let reply = spotlight_response(
            &query.get_untracked(),
            random_index(SPOTLIGHT_RESPONSES.len()),
        );
        if reply.is_some() {
            response.set(reply);
        }
    };

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div class="spotlight-backdrop" on:mousedown=close>
                <div
                    class="spotlight"
                    role="search"
                    on:mousedown=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                >
                    <form class="spotlight-form" on:submit=search>
                        <input
                            id=SPOTLIGHT_INPUT_DOM_ID
                            type="text"
                            placeholder="Spotlight Search"
                            autocomplete="off"
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <Show when=move || query.get().is_empty() fallback=|| ()>
                            <span class="spotlight-hint">"Esc to close"</span>
                        </Show>
                    </form>
                    {move || {
                        response
                            .get()
                            .map(|reply| {
                                view! {
                                    <div class="spotlight-result">
                                        <h4>"Top Hit"</h4>
                                        <p>{reply}</p>
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </Show>
    }
}
