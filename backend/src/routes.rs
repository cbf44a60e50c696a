use rocket::{Build, Rocket, State, catchers, delete, get, http::Status, post, routes, serde::json::Json};
use tracing::instrument;
use shared::models::{CastVoteRequest, VoteSummary};
use shared::viewer::Viewer;
use crate::{
    catchers::{bad_request, internal_error, not_found, unauthorized, unprocessable_entity},
    cors::CORS,
    error::ApiError,
    processor::VoteProcessor,
    store::VoteStore,
    utils::parse_game_id,
};

pub struct AppState {
    pub store: Box<dyn VoteStore>,
}

impl AppState {
    pub fn new(store: impl VoteStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }
}

#[get("/games/<id>/votes/summary")]
pub async fn vote_summary(
    state: &State<AppState>,
    id: &str,
    viewer: Viewer,
) -> Result<Json<VoteSummary>, ApiError> {
    let game_id = parse_game_id(id)?;
    VoteProcessor::read_summary(state.store.as_ref(), game_id, viewer)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

#[instrument(skip(state, request, viewer), fields(game_id = %id))]
#[post("/games/<id>/votes", format = "json", data = "<request>")]
pub async fn cast_vote(
    state: &State<AppState>,
    id: &str,
    request: Json<CastVoteRequest>,
    viewer: Viewer,
) -> Result<Json<VoteSummary>, ApiError> {
    let game_id = parse_game_id(id)?;
    let request = request.into_inner();
    VoteProcessor::cast_vote(
        state.store.as_ref(),
        game_id,
        viewer,
        request.choice.as_deref(),
    )
    .await
    .map(Json)
    .map_err(ApiError::from)
}

#[instrument(skip(state, viewer), fields(game_id = %id))]
#[delete("/games/<id>/votes")]
pub async fn clear_vote(
    state: &State<AppState>,
    id: &str,
    viewer: Viewer,
) -> Result<Json<VoteSummary>, ApiError> {
    let game_id = parse_game_id(id)?;
    VoteProcessor::clear_vote(state.store.as_ref(), game_id, viewer)
        .await
        .map(Json)
        .map_err(ApiError::from)
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

/// Assembles the Rocket instance. Production hands in a Postgres store; the
/// test suite hands in the in-memory one.
pub fn server(state: AppState) -> Rocket<Build> {
    rocket::build()
        .attach(CORS)
        .manage(state)
        .mount(
            "/api",
            routes![vote_summary, cast_vote, clear_vote, all_options],
        )
        .register(
            "/",
            catchers![
                bad_request,
                unauthorized,
                not_found,
                unprocessable_entity,
                internal_error
            ],
        )
}
