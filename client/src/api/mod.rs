//! Backend API client.
//!
//! [`ApiClient`] owns the request pipeline; the remaining modules add one
//! method per backend route, grouped by feature area.

mod admin;
mod adoptions;
mod announcements;
mod articles;
mod auth;
mod cats;
mod client;
mod leaderboard;
mod moments;
mod sos;
mod users;

pub use auth::{
    AuthLoginPayload, AuthRegisterPayload, ChangePasswordPayload, ForgotPasswordPayload,
    SendVerificationCodePayload,
};
pub use client::ApiClient;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::domain::ports::HttpRequest;

fn payload<T: Serialize>(body: &T) -> Value {
    serde_json::to_value(body).unwrap_or_else(|error| {
        warn!(%error, "request body could not be serialised");
        Value::Null
    })
}

/// `PUT {collection}/{id}` when an id is given, else `POST {collection}`.
fn upsert(collection: &str, id: Option<&str>) -> HttpRequest {
    match id {
        Some(id) => HttpRequest::put(format!("{collection}/{id}")),
        None => HttpRequest::post(collection),
    }
}
