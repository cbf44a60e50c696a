use rocket::{Request, catch, serde::json::Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorMessage {
    error: String,
    status: u16,
}

#[catch(400)]
pub fn bad_request(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Invalid request parameters.".into(),
        status: 400,
    })
}

#[catch(401)]
pub fn unauthorized(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Sign in to cast or clear a pick.".into(),
        status: 401,
    })
}

#[catch(404)]
pub fn not_found(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "The requested resource was not found.".into(),
        status: 404,
    })
}

#[catch(422)]
pub fn unprocessable_entity(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "Request body did not match the expected shape.".into(),
        status: 422,
    })
}

#[catch(500)]
pub fn internal_error(_req: &Request) -> Json<ErrorMessage> {
    Json(ErrorMessage {
        error: "An internal server error occurred.".into(),
        status: 500,
    })
}
