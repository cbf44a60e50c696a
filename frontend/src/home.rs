use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use crate::{auth, Route, styles::*};

#[function_component]
pub fn Home() -> Html {
    let navigator = use_navigator().unwrap();
    let game_ref = use_node_ref();
    let viewer_ref = use_node_ref();
    let invalid_viewer = use_state(|| false);

    let onclick = {
        let game_ref = game_ref.clone();
        let viewer_ref = viewer_ref.clone();
        let invalid_viewer = invalid_viewer.clone();
        Callback::from(move |_| {
            if let Some(input) = viewer_ref.cast::<HtmlInputElement>() {
                let value = input.value();
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    auth::forget_viewer();
                    invalid_viewer.set(false);
                } else if auth::remember_viewer(trimmed) {
                    invalid_viewer.set(false);
                } else {
                    invalid_viewer.set(true);
                    return;
                }
            }

            if let Some(input) = game_ref.cast::<HtmlInputElement>() {
                let id = input.value().trim().to_string();
                if !id.is_empty() {
                    navigator.push(&Route::Game { id });
                }
            }
        })
    };

    html! {
        <div class={CONTAINER}>
            <h1 class={HEADING_LG}>{"Game Picks"}</h1>
            <div class="text-center mb-6">
                <p class="text-gray-300 mb-4">
                    {"Pick a side for any scheduled game and watch the fan split update live."}
                </p>
            </div>

            <div class="bg-gray-800 p-6 rounded-lg shadow-lg max-w-xl mx-auto space-y-4">
                <div>
                    <label class={combine_classes(TEXT_LABEL, "mb-2")}>{"Game ID"}</label>
                    <input ref={game_ref} class={INPUT_BASE} placeholder="Game UUID" />
                </div>
                <div>
                    <label class={combine_classes(TEXT_LABEL, "mb-2")}>{"Your user ID (optional)"}</label>
                    <input
                        ref={viewer_ref}
                        class={INPUT_BASE}
                        placeholder="Leave empty to browse anonymously"
                        value={auth::viewer_id().unwrap_or_default()}
                    />
                    {if *invalid_viewer {
                        html! { <p class={TEXT_ERROR}>{"That doesn't look like a valid user ID."}</p> }
                    } else {
                        html! {}
                    }}
                </div>
                <button
                    type="button"
                    class={combine_classes(BUTTON_BASE, BUTTON_PRIMARY)}
                    {onclick}
                >
                    {"Open game"}
                </button>
            </div>
        </div>
    }
}
