use yew::prelude::*;
use shared::models::{GameInfo, TeamLabels};
use crate::api;
use crate::pick_panel::PickPanel;
use crate::styles::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub id: String,
}

pub enum Msg {
    GameReceived(GameInfo),
    GameUnavailable,
}

/// Game page shell. Metadata is cosmetic here: the pick panel runs with
/// default labels until (or even if) the metadata service answers.
pub struct GamePage {
    title: Option<String>,
    labels: TeamLabels,
}

impl Component for GamePage {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let id = ctx.props().id.clone();
        ctx.link().send_future(async move {
            match api::fetch_game(&id).await {
                Ok(game) => Msg::GameReceived(game),
                Err(_) => Msg::GameUnavailable,
            }
        });

        Self {
            title: None,
            labels: TeamLabels::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::GameReceived(game) => {
                self.labels = game.team_labels();
                self.title = game.title.clone().or_else(|| {
                    Some(format!("{} vs {}", self.labels.team_a, self.labels.team_b))
                });
                true
            }
            Msg::GameUnavailable => false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class={CONTAINER_SM}>
                <h1 class={HEADING_MD}>
                    {self.title.clone().unwrap_or_else(|| "Game".to_string())}
                </h1>
                <PickPanel game_id={ctx.props().id.clone()} labels={self.labels.clone()} />
            </div>
        }
    }
}
