//! Serde record types mirroring the five JSON data files.
//!
//! Unknown fields are ignored so data files can grow without code changes;
//! absent sections fall back to empty defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schedules for one day, keyed by department code.
pub type DeptSchedules = BTreeMap<String, Vec<ClassEntry>>;

/// `timetable.json`: weekday name -> department -> classes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timetable {
    pub days: BTreeMap<String, DeptSchedules>,
}

/// One timetable slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub time: String,
    pub subject: String,
    pub room: String,
    pub faculty: String,
}

/// `exams.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamSchedule {
    #[serde(default)]
    pub upcoming_exams: BTreeMap<String, Vec<ExamEntry>>,
    #[serde(default)]
    pub exam_rules: Vec<String>,
}

/// One scheduled examination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamEntry {
    pub subject: String,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub day: String,
    pub time: String,
    pub room: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `departments.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Departments {
    #[serde(default)]
    pub departments: BTreeMap<String, DepartmentRecord>,
}

/// One department profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    pub full_name: String,
    pub hod: String,
    pub hod_contact: String,
    pub office: String,
    pub phone: String,
    pub established: u32,
    pub total_faculty: u32,
    pub total_students: u32,
    #[serde(default)]
    pub labs: Vec<String>,
    #[serde(default)]
    pub placements: Placements,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Placements {
    #[serde(default)]
    pub average_package: String,
    #[serde(default)]
    pub highest_package: String,
    #[serde(default)]
    pub placement_rate: String,
}

/// `campus_info.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampusInfo {
    #[serde(default)]
    pub facilities: Facilities,
    #[serde(default)]
    pub events: Events,
    #[serde(default)]
    pub important_contacts: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Facilities {
    #[serde(default)]
    pub library: Option<Library>,
    #[serde(default)]
    pub canteen: BTreeMap<String, Canteen>,
    #[serde(default)]
    pub hostel: Option<Hostel>,
    #[serde(default)]
    pub sports: Option<Sports>,
    #[serde(default)]
    pub medical: Option<Medical>,
    #[serde(default)]
    pub transport: Option<Transport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub name: String,
    pub location: String,
    pub timings: String,
    pub total_books: u32,
    pub digital_resources: String,
    pub contact: String,
    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canteen {
    pub location: String,
    pub timings: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hostel {
    pub boys_hostel: HostelBlock,
    pub girls_hostel: HostelBlock,
    #[serde(default)]
    pub mess_timing: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostelBlock {
    #[serde(default)]
    pub blocks: Vec<String>,
    pub warden: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sports {
    #[serde(default)]
    pub indoor: Vec<String>,
    #[serde(default)]
    pub outdoor: Vec<String>,
    pub sports_complex_timing: String,
    pub gym_timing: String,
    pub sports_officer: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medical {
    pub health_center: String,
    pub timings: String,
    pub doctor: String,
    pub contact: String,
    pub ambulance: String,
    #[serde(default)]
    pub services: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transport {
    pub bus_routes: String,
    pub total_buses: u32,
    pub timing: String,
    pub transport_officer: String,
    pub contact: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Events {
    #[serde(default)]
    pub upcoming: Vec<EventEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventEntry {
    pub name: String,
    pub date: String,
    pub venue: String,
    pub description: String,
}

/// `faqs.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaqBank {
    #[serde(default)]
    pub faqs: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn timetable_deserializes_from_nested_maps() {
        let json = r#"{
            "monday": {
                "CSE": [
                    {"time": "09:00-10:00", "subject": "Data Structures",
                     "room": "CS-101", "faculty": "Dr. Rao"}
                ]
            }
        }"#;
        let timetable: Timetable = serde_json::from_str(json).expect("valid timetable");
        let monday = timetable.days.get("monday").expect("monday present");
        assert_eq!(monday["CSE"][0].subject, "Data Structures");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn exam_entry_maps_type_field() {
        let json = r#"{"subject": "Networks", "date": "2026-09-01", "day": "Tuesday",
                       "time": "10:00-13:00", "room": "Hall A", "type": "Semester"}"#;
        let entry: ExamEntry = serde_json::from_str(json).expect("valid exam entry");
        assert_eq!(entry.kind, "Semester");
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn missing_sections_default_to_empty() {
        let info: CampusInfo = serde_json::from_str("{}").expect("empty object parses");
        assert!(info.facilities.library.is_none());
        assert!(info.events.upcoming.is_empty());
        assert!(info.important_contacts.is_empty());
    }
}
