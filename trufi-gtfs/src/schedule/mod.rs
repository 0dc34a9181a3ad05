pub mod calendar;
pub mod date_codec;
pub mod feed;
pub mod stops;
pub mod time;
