//! Contact form. Nothing is delivered: a valid submission waits the
//! configured delay and reports success.

use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ContactResponse {
    pub status: &'static str,
    pub message: &'static str,
}

impl ContactForm {
    /// Every field is required; whitespace alone does not count.
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

/// Validates the form, then simulates delivery.
pub async fn submit(form: &ContactForm, delay: Duration) -> Result<ContactResponse, AppError> {
    form.validate()?;

    tokio::time::sleep(delay).await;
    info!(subject = %form.subject, "Contact form accepted");

    Ok(ContactResponse {
        status: "sent",
        message: "Thanks for reaching out! I'll get back to you soon.",
    })
}

/// POST /api/v1/contact
pub async fn handle_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactResponse>, AppError> {
    let Json(form) = payload?;
    let delay = Duration::from_millis(state.config.contact_delay_ms);
    Ok(Json(submit(&form, delay).await?))
}
