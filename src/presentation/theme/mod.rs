//! Theme values passed explicitly to every view.

mod service;

pub use service::{Theme, parse_color};
