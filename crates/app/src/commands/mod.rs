//! Command layer - the operation surface a UI shell binds to.
//!
//! Every command is a plain async function over the shared
//! [`AppContext`](crate::AppContext); outcomes are logged with duration so
//! any frontend binding stays observable.

pub mod calendar;
pub mod health;
pub mod locations;
pub mod reports;
pub mod visits;

pub use calendar::{
    activate_calendar_view, confirm_visit_edit, deactivate_calendar_view, get_calendar_events,
    select_visit, CalendarEventDto, VisitSelectionDto,
};
pub use health::get_remote_health;
pub use locations::{
    activate_map_view, deactivate_map_view, get_vendor_locations, VendorLocationDto,
};
pub use reports::get_visit_report;
pub use visits::{get_visits, get_visits_by_vendor, sync_visits, update_visit};
