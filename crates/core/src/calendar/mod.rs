//! Calendar adapter - time-grid events over the visit mirror.

pub mod adapter;
pub mod events;

pub use adapter::{CalendarAdapter, VisitSelection};
pub use events::CalendarEvent;
