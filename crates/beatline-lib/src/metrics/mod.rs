pub mod hrv;

pub use hrv::{hrv_time, HrvTime};
