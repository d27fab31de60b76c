use crate::api::Booking;
use anyhow::{Context, Result};

/// HTTP half of the booking kiosk. One fixed endpoint, one request per
/// operation, no retries and no timeout beyond reqwest's defaults.
pub struct BookingClient {
    http: reqwest::Client,
    endpoint: String,
}

impl BookingClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/api/bookings", base_url.trim_end_matches('/')),
        }
    }

    /// Fetch the current booking list.
    pub async fn fetch_bookings(&self) -> Result<Vec<Booking>> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .context("requesting booking list")?
            .error_for_status()
            .context("booking list request rejected")?;

        response.json().await.context("decoding booking list")
    }

    /// Submit one booking. The server replies with the full updated list.
    pub async fn submit_booking(&self, booking: &Booking) -> Result<Vec<Booking>> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(booking)
            .send()
            .await
            .context("submitting booking")?
            .error_for_status()
            .context("booking submission rejected")?;

        response
            .json()
            .await
            .context("decoding updated booking list")
    }
}
