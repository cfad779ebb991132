//! Domain model for delay notices.

mod notice;

pub use notice::Notice;
