use yew::prelude::*;
use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;
use shared::error::VoteError;
use shared::models::{TeamChoice, TeamLabels, VoteSummary};
use crate::api;
use crate::config::CONFIG;
use crate::controller::{PickAction, PickController};
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub game_id: String,
    #[prop_or_default]
    pub labels: TeamLabels,
}

pub enum Msg {
    Poll,
    SummaryReceived(VoteSummary),
    PollFailed(String),
    Press(TeamChoice),
    WriteSettled(Result<VoteSummary, VoteError>),
}

/// The live pick panel: two team chips, a share bar, and a caption, kept
/// fresh by a polling loop that lives exactly as long as the component.
pub struct PickPanel {
    controller: PickController,
    poll: Option<Interval>,
    needs_signin: bool,
    write_error: Option<String>,
}

impl Component for PickPanel {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        // First read immediately; the interval owns the steady-state refresh
        // and is dropped with the component, so no tick can outlive the view.
        ctx.link().send_message(Msg::Poll);
        let tick = ctx.link().clone();
        let poll = Interval::new(CONFIG.poll_interval_ms, move || {
            tick.send_message(Msg::Poll);
        });

        Self {
            controller: PickController::new(),
            poll: Some(poll),
            needs_signin: false,
            write_error: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().game_id != old_props.game_id {
            self.controller = PickController::new();
            self.needs_signin = false;
            self.write_error = None;
            ctx.link().send_message(Msg::Poll);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Poll => {
                let game_id = ctx.props().game_id.clone();
                ctx.link().send_future(async move {
                    match api::fetch_summary(&game_id).await {
                        Ok(summary) => Msg::SummaryReceived(summary),
                        Err(error) => Msg::PollFailed(error),
                    }
                });
                false
            }
            Msg::SummaryReceived(summary) => self.controller.apply_poll(summary),
            Msg::PollFailed(error) => {
                // Swallowed: the last good summary stays up and the next
                // tick is already scheduled.
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "failed to load game votes: {error}"
                )));
                false
            }
            Msg::Press(choice) => {
                let Some(action) = self.controller.gesture(choice) else {
                    return false;
                };
                if !self.controller.begin_submit() {
                    return false;
                }
                self.needs_signin = false;
                self.write_error = None;

                let game_id = ctx.props().game_id.clone();
                ctx.link().send_future(async move {
                    let outcome = match action {
                        PickAction::Cast(choice) => api::cast_vote(&game_id, choice).await,
                        PickAction::Clear => api::clear_vote(&game_id).await,
                    };
                    Msg::WriteSettled(outcome)
                });
                true
            }
            Msg::WriteSettled(Ok(summary)) => {
                self.controller.settle(Some(summary));
                true
            }
            Msg::WriteSettled(Err(error)) => {
                self.controller.settle(None);
                match error {
                    VoteError::Unauthorized => self.needs_signin = true,
                    _ => {
                        self.write_error =
                            Some("Unable to update your pick right now. Please try again.".into());
                    }
                }
                true
            }
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Dropping the handle cancels the ticking.
        self.poll = None;
        self.controller.deactivate();
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let labels = &ctx.props().labels;
        let (flex_a, flex_b) = self.controller.bar();
        let (pct_a, pct_b) = self.controller.percent_labels();

        html! {
            <div class="bg-gray-800 border border-gray-700 rounded-lg shadow-md p-5">
                <h2 class={HEADING_SM}>{"Who wins?"}</h2>

                <div class="flex gap-3 mb-4">
                    {self.render_chip(ctx, TeamChoice::A, &labels.team_a, &pct_a)}
                    {self.render_chip(ctx, TeamChoice::B, &labels.team_b, &pct_b)}
                </div>

                <div class="flex h-3 rounded-full overflow-hidden bg-gray-700 mb-3">
                    <div class="bg-blue-500" style={format!("flex-grow: {flex_a}")}></div>
                    <div class="bg-orange-500" style={format!("flex-grow: {flex_b}")}></div>
                </div>

                <p class={TEXT_MUTED}>{self.controller.caption(labels)}</p>

                {if self.needs_signin {
                    html! {
                        <p class="text-sm text-yellow-400 mt-2">
                            {"Sign in to cast a pick."}
                        </p>
                    }
                } else {
                    html! {}
                }}

                {if let Some(error) = &self.write_error {
                    html! { <p class={combine_classes(TEXT_ERROR, "mt-2")}>{error}</p> }
                } else {
                    html! {}
                }}
            </div>
        }
    }
}

impl PickPanel {
    fn render_chip(&self, ctx: &Context<Self>, choice: TeamChoice, label: &str, pct: &str) -> Html {
        let busy = self.controller.is_busy();
        let selected = self.controller.viewer_choice() == Some(choice);
        let onclick = ctx.link().callback(move |_| Msg::Press(choice));

        let classes = if selected {
            "flex-1 px-4 py-3 rounded-lg border border-blue-400 bg-blue-600 text-white font-semibold shadow-lg transition-all duration-150 disabled:opacity-50"
        } else {
            "flex-1 px-4 py-3 rounded-lg border border-gray-600 bg-gray-700 hover:bg-gray-600 text-gray-200 font-medium transition-all duration-150 disabled:opacity-50"
        };

        html! {
            <button type="button" class={classes} disabled={busy} {onclick}>
                <div class="text-base break-words">{label}</div>
                <div class={TEXT_MUTED}>{pct}</div>
            </button>
        }
    }
}
