use crate::api::Booking;

/// One rendered row: the five cell texts in fixed field order.
pub type Row = [String; 5];

/// The booking table body. Every render replaces all rows, no diffing.
#[derive(Debug, Default)]
pub struct BookingTable {
    rows: Vec<Row>,
}

impl BookingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every row with one row per booking, in the order given.
    pub fn render(&mut self, bookings: &[Booking]) {
        self.rows.clear();
        for booking in bookings {
            self.rows.push([
                booking.name.clone(),
                booking.contact.clone(),
                booking.computer.clone(),
                booking.start_time.clone(),
                booking.end_time.clone(),
            ]);
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Table body markup. Cell text is escaped, so markup-significant
    /// characters in a booking field render literally.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for row in &self.rows {
            html.push_str("<tr>");
            for cell in row {
                html.push_str("<td>");
                html.push_str(&escape_text(cell));
                html.push_str("</td>");
            }
            html.push_str("</tr>\n");
        }
        html
    }
}

pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
