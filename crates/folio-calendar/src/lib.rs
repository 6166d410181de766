//! # folio-calendar
//!
//! Activity heatmap for the Folio profile page.
//!
//! [`CalendarView::build`] turns the provider's [`ActivityDay`] list into
//! week columns of colored cells. Each dated cell carries a tooltip and a
//! click target that opens the owner's activity overview for that exact day.
//!
//! [`ActivityDay`]: folio_core::ActivityDay

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod navigation;
pub mod palette;
pub mod view;

pub use navigation::{Navigation, Navigator, RecordingNavigator, day_overview_url};
pub use palette::{LIGHT, Palette};
pub use view::{CalendarOptions, CalendarView, Cell, MonthLabel, Tooltip, Week};
