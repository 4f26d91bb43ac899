#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Static campus data: typed JSON records and the read-only store.
//!
//! All five data files are loaded once at startup and held in memory for
//! the process lifetime. A missing or corrupt file is reported and replaced
//! by its empty default; it never takes the assistant down.

pub mod records;
pub mod store;

pub use records::{
    CampusInfo, Canteen, ClassEntry, DepartmentRecord, Departments, DeptSchedules, EventEntry,
    Events, ExamEntry, ExamSchedule, Facilities, FaqBank, FaqEntry, Hostel, HostelBlock, Library,
    Medical, Placements, Sports, Timetable, Transport,
};
pub use store::{DataCounts, DataError, DataStore, FacilityRef};
