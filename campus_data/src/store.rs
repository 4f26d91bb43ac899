//! The read-only data store and its lookups.

use chrono::{NaiveDate, Weekday};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

use campus_core::calendar::weekday_name;

use crate::records::{
    CampusInfo, Canteen, ClassEntry, DepartmentRecord, Departments, DeptSchedules, EventEntry,
    ExamEntry, ExamSchedule, FaqBank, FaqEntry, Hostel, Library, Medical, Sports, Timetable,
    Transport,
};

/// Why one data file failed to load. Never fatal; the store logs it and
/// substitutes the empty default.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("cannot read {0}: {1}")]
    Io(String, #[source] std::io::Error),

    #[error("cannot parse {0}: {1}")]
    Parse(String, #[source] serde_json::Error),
}

/// All campus datasets, loaded once and never written back.
pub struct DataStore {
    timetable: Timetable,
    exams: ExamSchedule,
    departments: Departments,
    campus: CampusInfo,
    faqs: FaqBank,
}

/// A facility record resolved from a (possibly aliased) facility name.
#[derive(Debug)]
pub enum FacilityRef<'a> {
    Library(&'a Library),
    Canteens(&'a BTreeMap<String, Canteen>),
    Hostel(&'a Hostel),
    Sports(&'a Sports),
    Medical(&'a Medical),
    Transport(&'a Transport),
}

/// Record counts per dataset, for the `info` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataCounts {
    pub timetable_days: usize,
    pub departments: usize,
    pub exams: usize,
    pub events: usize,
    pub faqs: usize,
}

impl DataStore {
    /// Load all five data files from `dir`.
    ///
    /// Each file is independent: a missing or corrupt file logs a warning
    /// and its dataset stays empty, so lookups answer "no information
    /// found" instead of failing.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let store = Self {
            timetable: load_file(dir, "timetable.json"),
            exams: load_file(dir, "exams.json"),
            departments: load_file(dir, "departments.json"),
            campus: load_file(dir, "campus_info.json"),
            faqs: load_file(dir, "faqs.json"),
        };

        let counts = store.counts();
        info!(
            "Data loaded: {} timetable days, {} departments, {} exams, {} events, {} FAQs",
            counts.timetable_days, counts.departments, counts.exams, counts.events, counts.faqs
        );

        store
    }

    /// An entirely empty store, as if every data file were missing.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            timetable: Timetable::default(),
            exams: ExamSchedule::default(),
            departments: Departments::default(),
            campus: CampusInfo::default(),
            faqs: FaqBank::default(),
        }
    }

    /// Build a store from already-parsed datasets (used by tests).
    #[must_use]
    pub const fn from_parts(
        timetable: Timetable,
        exams: ExamSchedule,
        departments: Departments,
        campus: CampusInfo,
        faqs: FaqBank,
    ) -> Self {
        Self {
            timetable,
            exams,
            departments,
            campus,
            faqs,
        }
    }

    /// All department schedules for one weekday, if the timetable has it.
    #[must_use]
    pub fn timetable_for(&self, day: Weekday) -> Option<&DeptSchedules> {
        self.timetable.days.get(weekday_name(day))
    }

    /// One department's classes on one weekday.
    #[must_use]
    pub fn classes_for(&self, day: Weekday, department: &str) -> Option<&[ClassEntry]> {
        self.timetable_for(day)
            .and_then(|depts| depts.get(&department.to_uppercase()))
            .map(Vec::as_slice)
    }

    /// Upcoming exams for one department.
    #[must_use]
    pub fn exams_for(&self, department: &str) -> Option<&[ExamEntry]> {
        self.exams
            .upcoming_exams
            .get(&department.to_uppercase())
            .map(Vec::as_slice)
    }

    /// Upcoming exams for every department.
    #[must_use]
    pub const fn all_exams(&self) -> &BTreeMap<String, Vec<ExamEntry>> {
        &self.exams.upcoming_exams
    }

    /// Exams scheduled on an exact date, across departments.
    ///
    /// Entries with unparsable dates are skipped.
    #[must_use]
    pub fn exams_on(&self, date: NaiveDate) -> Vec<(&str, &ExamEntry)> {
        self.exams
            .upcoming_exams
            .iter()
            .flat_map(|(dept, exams)| exams.iter().map(move |e| (dept.as_str(), e)))
            .filter(|(_, exam)| {
                NaiveDate::parse_from_str(&exam.date, "%Y-%m-%d").is_ok_and(|d| d == date)
            })
            .collect()
    }

    /// Examination rules, possibly empty.
    #[must_use]
    pub fn exam_rules(&self) -> &[String] {
        &self.exams.exam_rules
    }

    /// Exact department record for a canonical code, case-insensitively.
    #[must_use]
    pub fn department(&self, code: &str) -> Option<&DepartmentRecord> {
        self.departments.departments.get(&code.to_uppercase())
    }

    /// All department records.
    #[must_use]
    pub const fn departments(&self) -> &BTreeMap<String, DepartmentRecord> {
        &self.departments.departments
    }

    /// Resolve a facility name (including aliases) to its record.
    #[must_use]
    pub fn facility(&self, name: &str) -> Option<FacilityRef<'_>> {
        let facilities = &self.campus.facilities;
        match name.to_lowercase().as_str() {
            "library" => facilities.library.as_ref().map(FacilityRef::Library),
            "canteen" | "food" => {
                if facilities.canteen.is_empty() {
                    None
                } else {
                    Some(FacilityRef::Canteens(&facilities.canteen))
                }
            }
            "hostel" | "accommodation" => facilities.hostel.as_ref().map(FacilityRef::Hostel),
            "sports" | "gym" => facilities.sports.as_ref().map(FacilityRef::Sports),
            "medical" | "hospital" | "health" => {
                facilities.medical.as_ref().map(FacilityRef::Medical)
            }
            "bus" | "transport" => facilities.transport.as_ref().map(FacilityRef::Transport),
            _ => None,
        }
    }

    /// Upcoming events, possibly empty.
    #[must_use]
    pub fn events(&self) -> &[EventEntry] {
        &self.campus.events.upcoming
    }

    /// Emergency and office contacts.
    #[must_use]
    pub const fn important_contacts(&self) -> &BTreeMap<String, String> {
        &self.campus.important_contacts
    }

    /// Best FAQ for a query by keyword hit count; ties keep the earlier
    /// entry. `None` when nothing scores.
    #[must_use]
    pub fn best_faq(&self, cleaned: &str) -> Option<&FaqEntry> {
        let mut best: Option<(&FaqEntry, usize)> = None;
        for faq in &self.faqs.faqs {
            let score = faq
                .keywords
                .iter()
                .filter(|kw| cleaned.contains(&kw.to_lowercase()))
                .count();
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((faq, score));
            }
        }
        best.map(|(faq, _)| faq)
    }

    /// Record counts per dataset.
    #[must_use]
    pub fn counts(&self) -> DataCounts {
        DataCounts {
            timetable_days: self.timetable.days.len(),
            departments: self.departments.departments.len(),
            exams: self.exams.upcoming_exams.values().map(Vec::len).sum(),
            events: self.campus.events.upcoming.len(),
            faqs: self.faqs.faqs.len(),
        }
    }
}

fn load_file<T>(dir: &Path, name: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match try_load_file(dir, name) {
        Ok(value) => value,
        Err(err) => {
            warn!("{err}; continuing with empty data");
            T::default()
        }
    }
}

fn try_load_file<T>(dir: &Path, name: &str) -> Result<T, DataError>
where
    T: DeserializeOwned,
{
    let path = dir.join(name);
    let content = std::fs::read_to_string(&path)
        .map_err(|e| DataError::Io(path.display().to_string(), e))?;
    serde_json::from_str(&content).map_err(|e| DataError::Parse(path.display().to_string(), e))
}
