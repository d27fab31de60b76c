use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A booking as it crosses the wire, both in POST bodies and in list
/// responses. All five fields are opaque strings; nothing here checks that
/// the times parse or that the computer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Booking {
    pub name: String,
    pub contact: String,
    pub computer: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
}
