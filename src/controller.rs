use crate::api::Booking;
use crate::client::BookingClient;
use crate::render::BookingTable;
use tracing::error;

/// Snapshot of the five form controls at submit time. Values pass through
/// untouched; an empty control stays an empty string.
#[derive(Debug, Default, Clone)]
pub struct BookingForm {
    pub name: String,
    pub contact: String,
    pub computer: String,
    pub start_time: String,
    pub end_time: String,
}

impl From<BookingForm> for Booking {
    fn from(form: BookingForm) -> Self {
        Booking {
            name: form.name,
            contact: form.contact,
            computer: form.computer,
            start_time: form.start_time,
            end_time: form.end_time,
        }
    }
}

/// Drives the booking form: the owning shell constructs it once, calls
/// `init`, then `submit` per form submission. Both take `&mut self`, so a
/// second submission cannot start while one is in flight.
pub struct FormController {
    client: BookingClient,
    table: BookingTable,
    status: Option<String>,
}

impl FormController {
    pub fn new(client: BookingClient) -> Self {
        Self {
            client,
            table: BookingTable::new(),
            status: None,
        }
    }

    /// Initial load: fetch the current list and draw the table.
    pub async fn init(&mut self) {
        match self.client.fetch_bookings().await {
            Ok(bookings) => self.redraw(&bookings),
            Err(e) => self.fail("loading bookings", e),
        }
    }

    /// Submit one booking and redraw from the server's updated list.
    pub async fn submit(&mut self, form: BookingForm) {
        match self.client.submit_booking(&form.into()).await {
            Ok(bookings) => self.redraw(&bookings),
            Err(e) => self.fail("submitting booking", e),
        }
    }

    fn redraw(&mut self, bookings: &[Booking]) {
        self.table.render(bookings);
        self.status = None;
    }

    // On failure the table keeps its previous rows.
    fn fail(&mut self, action: &str, err: anyhow::Error) {
        error!("Error {}: {:#}", action, err);
        self.status = Some(format!("Error {}: {:#}", action, err));
    }

    pub fn table(&self) -> &BookingTable {
        &self.table
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
