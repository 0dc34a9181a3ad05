pub mod gtfs {
    //! serde codec for dates in GTFS yyyymmdd format.
    use chrono::NaiveDate;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub const GTFS_DATE_FORMAT: &str = "%Y%m%d";

    /// lower bound of an open-ended service calendar.
    pub fn earliest_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
    }

    /// upper bound of an open-ended service calendar.
    pub fn latest_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2100, 1, 1).unwrap_or_default()
    }

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(GTFS_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let date_str: String = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&date_str, GTFS_DATE_FORMAT)
            .map_err(|e| D::Error::custom(format!("Invalid date format: {e}")))
    }
}
