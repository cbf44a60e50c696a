use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use thiserror::Error;
use tracing::error;
use shared::error::{ErrorResponse, VoteError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid game ID")]
    InvalidId,
    #[error(transparent)]
    Vote(#[from] VoteError),
}

impl ApiError {
    fn status(&self) -> Status {
        match self {
            ApiError::InvalidId => Status::BadRequest,
            ApiError::Vote(VoteError::InvalidChoice) => Status::BadRequest,
            ApiError::Vote(VoteError::Unauthorized) => Status::Unauthorized,
            ApiError::Vote(VoteError::Transient(_)) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!("request failed: {}", self);
        }

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
