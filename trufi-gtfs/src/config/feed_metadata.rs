use crate::schedule::date_codec;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// publisher information written to `feed_info.txt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedMetadata {
    pub publisher_url: String,
    pub publisher_name: String,
    pub lang: String,
    pub version: String,
    pub contact_email: String,
    pub contact_url: String,
    #[serde(with = "date_codec::gtfs")]
    pub start_date: NaiveDate,
    #[serde(with = "date_codec::gtfs")]
    pub end_date: NaiveDate,
    pub id: String,
}

impl Default for FeedMetadata {
    fn default() -> Self {
        Self {
            publisher_url: String::new(),
            publisher_name: String::new(),
            lang: String::from("en"),
            version: String::from("1.0"),
            contact_email: String::new(),
            contact_url: String::new(),
            start_date: date_codec::gtfs::earliest_date(),
            end_date: date_codec::gtfs::latest_date(),
            id: String::from("1"),
        }
    }
}
