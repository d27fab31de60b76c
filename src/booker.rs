use crate::api::Booking;
use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A booking as it sits in the snapshot file: the wire fields plus a
/// created-at stamp that never leaves the server.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct StoredBooking {
    #[serde(flatten)]
    booking: Booking,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

pub struct BookingApp {
    bookings: HashMap<u32, StoredBooking>,
    bookings_path: Option<PathBuf>,
}

impl Default for BookingApp {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingApp {
    pub fn new() -> Self {
        Self {
            bookings: HashMap::new(),
            bookings_path: None,
        }
    }

    pub fn load_bookings(&mut self, bookings_dir: &str) -> Result<()> {
        let bookings_path = Path::new(bookings_dir).join("bookings.json");
        info!("Loading bookings from: {}", bookings_path.display());

        std::fs::create_dir_all(bookings_dir)?;

        //check if file exists
        if !bookings_path.exists() {
            info!("Bookings file does not exist, creating empty file");
            std::fs::write(&bookings_path, "{}")?;
        }

        let bookings_content = std::fs::read_to_string(&bookings_path)?;
        self.bookings = serde_json::from_str(&bookings_content)
            .map_err(|e| anyhow!("Loading of bookings failed: {}", e))?;
        self.bookings_path = Some(bookings_path);

        Ok(())
    }

    /// Full list in insertion order. Ties on the timestamp fall back to the
    /// record id.
    pub fn get_bookings(&self) -> Vec<Booking> {
        let mut stored: Vec<(&u32, &StoredBooking)> = self.bookings.iter().collect();
        stored.sort_by_key(|&(&id, booking)| (booking.created_at, id));
        stored
            .into_iter()
            .map(|(_, stored)| stored.booking.clone())
            .collect()
    }

    /// Insert one booking and hand back the full updated list, which is what
    /// the POST response carries.
    pub fn handle_new_booking(&mut self, booking: Booking) -> Result<Vec<Booking>, String> {
        let stored = StoredBooking {
            booking,
            created_at: Utc::now(),
        };

        let mut id = rand::random();

        //ensure id is unique. This is definitely not necessary, but just in case
        while self.bookings.contains_key(&id) {
            id = rand::random();
        }

        self.add_booking(id, stored)?;
        Ok(self.get_bookings())
    }

    fn add_booking(&mut self, id: u32, booking: StoredBooking) -> Result<(), String> {
        debug!("Adding booking: {:?}", booking);
        self.bookings.insert(id, booking);

        self.save()
            .map_err(|e| format!("Error saving bookings: {}", e))
    }

    fn save(&self) -> Result<()> {
        let bookings_path = self
            .bookings_path
            .as_ref()
            .context("booking store was never loaded")?;
        info!("Saving bookings to: {}", bookings_path.display());

        let bookings_content = serde_json::to_string_pretty(&self.bookings)?;
        std::fs::write(bookings_path, bookings_content)?;

        Ok(())
    }
}
