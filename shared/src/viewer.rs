use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Header the auth gateway uses to forward the authenticated user's id.
/// Requests without it (or with an unparseable value) are anonymous.
pub const VIEWER_HEADER: &str = "X-User-Id";

/// The caller's resolved identity. Token verification happens upstream; by
/// the time a request reaches this service the gateway has either attached
/// the user's id or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub user_id: Option<Uuid>,
}

impl Viewer {
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    pub const fn known(id: Uuid) -> Self {
        Self { user_id: Some(id) }
    }
}

// Backend-specific Rocket implementation
#[cfg(feature = "backend")]
mod backend_impl {
    use super::*;
    use rocket::request::{FromRequest, Outcome};
    use rocket::Request;

    #[rocket::async_trait]
    impl<'r> FromRequest<'r> for Viewer {
        type Error = ();

        async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
            // A malformed id is treated as anonymous rather than rejected;
            // writes still fail closed at the service layer.
            let user_id = req
                .headers()
                .get_one(VIEWER_HEADER)
                .and_then(|raw| Uuid::parse_str(raw.trim()).ok());

            Outcome::Success(Viewer { user_id })
        }
    }
}
