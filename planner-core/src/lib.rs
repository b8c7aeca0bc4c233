//! planner-core: task model, in-memory store, and derived views for the
//! study planner.

pub mod calendar;
pub mod error;
pub mod query;
pub mod snapshot;
pub mod store;
pub mod task;

pub use calendar::{month_grid, CalendarCell, GRID_CELLS};
pub use error::StoreError;
pub use query::{StatusFilter, TaskQuery};
pub use snapshot::RawTaskRecord;
pub use store::{sort_for_listing, Stats, TaskStore, DEFAULT_HORIZON_DAYS};
pub use task::{Priority, Task, TaskDraft};
