use gloo_net::http::Request;
use serde::Serialize;
use shared::error::VoteError;
use shared::models::{GameInfo, TeamChoice, VoteSummary};
use shared::summary::decode_summary_str;
use shared::viewer::VIEWER_HEADER;
use crate::auth;
use crate::config::CONFIG;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CastRequest<'a> {
    choice: &'a str,
}

fn with_viewer(request: Request) -> Request {
    match auth::viewer_id() {
        Some(id) => request.header(VIEWER_HEADER, &id),
        None => request,
    }
}

/// Reads the current summary. The body goes through the lenient decoder so
/// a field the server dropped or renamed degrades to zero instead of
/// breaking the panel.
pub async fn fetch_summary(game_id: &str) -> Result<VoteSummary, String> {
    let url = format!("{}/games/{}/votes/summary", CONFIG.api_base_url, game_id);
    let response = with_viewer(Request::get(&url))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status() != 200 {
        return Err(format!("summary request failed: {}", response.status()));
    }

    let body = response.text().await.map_err(|e| e.to_string())?;
    decode_summary_str(&body).map_err(|e| e.to_string())
}

/// Game metadata from the upstream metadata service. Purely cosmetic for
/// the pick panel, so callers treat failure as "use default labels".
pub async fn fetch_game(game_id: &str) -> Result<GameInfo, String> {
    let url = format!("{}/games/{}", CONFIG.api_base_url, game_id);
    let response = Request::get(&url).send().await.map_err(|e| e.to_string())?;

    if response.status() != 200 {
        return Err(format!("game request failed: {}", response.status()));
    }

    response.json::<GameInfo>().await.map_err(|e| e.to_string())
}

pub async fn cast_vote(game_id: &str, choice: TeamChoice) -> Result<VoteSummary, VoteError> {
    let url = format!("{}/games/{}/votes", CONFIG.api_base_url, game_id);
    let request = with_viewer(Request::post(&url))
        .json(&CastRequest {
            choice: choice.as_str(),
        })
        .map_err(|e| VoteError::Transient(e.to_string()))?;
    send_write(request).await
}

pub async fn clear_vote(game_id: &str) -> Result<VoteSummary, VoteError> {
    let url = format!("{}/games/{}/votes", CONFIG.api_base_url, game_id);
    send_write(with_viewer(Request::delete(&url))).await
}

async fn send_write(request: Request) -> Result<VoteSummary, VoteError> {
    let response = request
        .send()
        .await
        .map_err(|e| VoteError::Transient(e.to_string()))?;

    match response.status() {
        200 => {
            let body = response
                .text()
                .await
                .map_err(|e| VoteError::Transient(e.to_string()))?;
            decode_summary_str(&body).map_err(|e| VoteError::Transient(e.to_string()))
        }
        400 => Err(VoteError::InvalidChoice),
        401 => Err(VoteError::Unauthorized),
        status => Err(VoteError::Transient(format!(
            "write failed with status {status}"
        ))),
    }
}
