// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identity extraction at the server boundary.
//!
//! The identity provider (or an authenticating proxy in front of this
//! server) forwards the caller's identity in request headers:
//!
//! - `x-actor-id`: stable user id (required)
//! - `x-actor-role`: `admin`, `donor`/`donator` or `buyer` (required)
//! - `x-actor-name`: display name (optional)

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, request::Parts},
};
use loppis_api::{ApiError, authenticate_identity};
use loppis_domain::Actor;
use tracing::{debug, warn};

use crate::{AppState, HttpError};

pub const ACTOR_ID_HEADER: &str = "x-actor-id";
pub const ACTOR_ROLE_HEADER: &str = "x-actor-role";
pub const ACTOR_NAME_HEADER: &str = "x-actor-name";

/// Extractor for the calling actor.
///
/// Rejects the request with 401 when the id or role header is missing,
/// not valid UTF-8, or names an unknown role.
pub struct CallerIdentity(pub Actor);

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = HttpError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor: Actor = authenticate_identity(
            header(&parts.headers, ACTOR_ID_HEADER),
            header(&parts.headers, ACTOR_ROLE_HEADER),
            header(&parts.headers, ACTOR_NAME_HEADER),
        )
        .map_err(|err| {
            warn!(error = %err, "Rejected request without a usable identity");
            HttpError::from(ApiError::from(err))
        })?;

        debug!(actor = %actor.id, role = %actor.role, "Identity accepted");
        Ok(Self(actor))
    }
}
