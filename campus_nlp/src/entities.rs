//! Entity extraction against fixed vocabularies.
//!
//! Entities are simple values recognized in the cleaned query text:
//! a department code, a weekday and a facility name. Matching is
//! case-insensitive and word-bounded; the first vocabulary hit fills a slot.

use chrono::Weekday;
use regex::Regex;
use serde::{Deserialize, Serialize};

use campus_core::calendar::weekday_name;

/// Entities extracted from one query. Absent slots stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    /// Canonical department code, e.g. `CSE`.
    pub department: Option<String>,
    /// Lowercase weekday name, with "today"/"tomorrow" already resolved.
    pub day: Option<String>,
    /// Facility name as it appears in the vocabulary.
    pub facility: Option<String>,
}

/// Department aliases mapped to canonical codes. Longer aliases are listed
/// first so "computer science" wins over "cs".
const DEPARTMENT_ALIASES: &[(&str, &str)] = &[
    ("computer science", "CSE"),
    ("communication", "ECE"),
    ("electronics", "ECE"),
    ("electrical", "EEE"),
    ("mechanical", "MECH"),
    ("computer", "CSE"),
    ("civil", "CIVIL"),
    ("mech", "MECH"),
    ("cse", "CSE"),
    ("ece", "ECE"),
    ("eee", "EEE"),
    ("cs", "CSE"),
    ("ec", "ECE"),
    ("me", "MECH"),
    ("ce", "CIVIL"),
    ("ee", "EEE"),
];

/// Relative and absolute day aliases. Relative names resolve against the
/// reference day passed to [`EntityExtractor::extract_on`].
const DAY_ALIASES: &[&str] = &[
    "today",
    "tomorrow",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
    "mon",
    "tue",
    "wed",
    "thu",
    "fri",
    "sat",
    "sun",
];

const FACILITIES: &[&str] = &[
    "library",
    "canteen",
    "hostel",
    "sports",
    "gym",
    "medical",
    "hospital",
    "bus",
    "transport",
];

struct VocabMatcher {
    entries: Vec<(Regex, String)>,
}

impl VocabMatcher {
    /// Word-bounded matcher over a vocabulary. Entries with aliases that do
    /// not compile are skipped; all built-in aliases are plain words.
    fn new<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = entries
            .into_iter()
            .filter_map(|(alias, value)| {
                let pattern = format!(r"\b{}\b", regex::escape(alias));
                Regex::new(&pattern).ok().map(|re| (re, value.to_string()))
            })
            .collect();

        Self { entries }
    }

    fn first_match(&self, cleaned: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(re, _)| re.is_match(cleaned))
            .map(|(_, value)| value.as_str())
    }
}

/// Extracts department, day and facility entities from cleaned query text.
pub struct EntityExtractor {
    departments: VocabMatcher,
    days: VocabMatcher,
    facilities: VocabMatcher,
}

impl EntityExtractor {
    /// Extractor with the built-in vocabularies.
    #[must_use]
    pub fn new() -> Self {
        Self {
            departments: VocabMatcher::new(DEPARTMENT_ALIASES.iter().copied()),
            days: VocabMatcher::new(DAY_ALIASES.iter().map(|d| (*d, *d))),
            facilities: VocabMatcher::new(FACILITIES.iter().map(|f| (*f, *f))),
        }
    }

    /// Extract entities, resolving relative days against the local clock.
    #[must_use]
    pub fn extract(&self, cleaned: &str) -> Entities {
        self.extract_on(cleaned, campus_core::calendar::today())
    }

    /// Extract entities with an explicit reference day for "today"/"tomorrow".
    #[must_use]
    pub fn extract_on(&self, cleaned: &str, today: Weekday) -> Entities {
        let day = self.days.first_match(cleaned).map(|alias| match alias {
            "today" => weekday_name(today).to_string(),
            "tomorrow" => weekday_name(today.succ()).to_string(),
            other => campus_core::calendar::parse_weekday(other)
                .map_or_else(|| other.to_string(), |d| weekday_name(d).to_string()),
        });

        Entities {
            department: self.departments.first_match(cleaned).map(ToString::to_string),
            day,
            facility: self.facilities.first_match(cleaned).map(ToString::to_string),
        }
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
