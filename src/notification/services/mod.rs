//! Application services for delay notices.

mod notice;

pub use notice::{NoticeError, NoticeResult, NoticeService};
