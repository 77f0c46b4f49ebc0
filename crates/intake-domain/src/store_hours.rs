//! Store Hours Changes
//!
//! One request covers one or more stores and carries exactly one of three
//! change shapes, selected by [`ChangeType`]:
//! - `new_hours`: a full seven-day schedule
//! - `temporary_close`: a single close date with a reason
//! - `holiday_hours`: a list of holiday overrides

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dates;
use crate::id::RecordId;
use crate::kind::{IntakeForm, RequestKind, Submission};
use crate::nullable::null_as_default;
use crate::status::RequestStatus;
use crate::stores::StoreNames;
use crate::validation::FieldErrors;

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Flattened payload keys, matched against day names by prefix
const DAY_KEYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    #[default]
    NewHours,
    TemporaryClose,
    HolidayHours,
}

impl ChangeType {
    pub const ALL: [ChangeType; 3] = [
        ChangeType::NewHours,
        ChangeType::TemporaryClose,
        ChangeType::HolidayHours,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::NewHours => "new_hours",
            ChangeType::TemporaryClose => "temporary_close",
            ChangeType::HolidayHours => "holiday_hours",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::NewHours => "New Store Hours",
            ChangeType::TemporaryClose => "Temporary Close",
            ChangeType::HolidayHours => "Holiday Hours",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayHours {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

impl DayHours {
    pub fn empty(day: &str) -> Self {
        Self {
            day: day.to_string(),
            start_time: String::new(),
            end_time: String::new(),
        }
    }

    /// Flattened key prefix (`Mon`, `Tue`, ...) for this row's day
    fn day_key(&self) -> Option<&'static str> {
        let day = self.day.to_lowercase();
        DAY_KEYS
            .iter()
            .find(|key| day.starts_with(&key.to_lowercase()))
            .copied()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayEntry {
    pub date: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_time: String,
}

impl HolidayEntry {
    pub fn is_blank(&self) -> bool {
        [&self.date, &self.name, &self.start_time, &self.end_time]
            .iter()
            .all(|v| v.trim().is_empty())
    }

    /// Has both a date and a name
    pub fn is_populated(&self) -> bool {
        !self.date.trim().is_empty() && !self.name.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreHoursChange {
    pub id: RecordId,
    pub store_name: StoreNames,
    pub manager_name: String,
    pub manager_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub change_type: ChangeType,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours: Vec<DayHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays: Option<Vec<HolidayEntry>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submitted_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreHoursPayload {
    pub id: String,
    pub store_name: String,
    pub manager_name: String,
    pub manager_email: String,
    pub change_type: ChangeType,
    /// `Mon_Start`, `Mon_End`, ... for `new_hours` only
    #[serde(flatten)]
    pub day_hours: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_note: Option<String>,
    /// JSON-encoded holiday list for `holiday_hours` only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holidays: Option<String>,
}

impl StoreHoursChange {
    fn flattened_hours(&self) -> BTreeMap<String, String> {
        let mut flat = BTreeMap::new();
        if self.change_type != ChangeType::NewHours {
            return flat;
        }
        for row in &self.hours {
            if let Some(key) = row.day_key() {
                flat.insert(format!("{}_Start", key), row.start_time.clone());
                flat.insert(format!("{}_End", key), row.end_time.clone());
            }
        }
        flat
    }
}

impl RequestKind for StoreHoursChange {
    const ID_PREFIX: &'static str = "SHC";
    const STORAGE_KEY: &'static str = "store_intake_store_hours_changes";
    const ENDPOINT: &'static str = "/api/store-hours-changes";
    const LABEL: &'static str = "Store Hours Change";

    type Payload = StoreHoursPayload;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn submitted_date(&self) -> &str {
        &self.submitted_date
    }

    fn payload(&self) -> StoreHoursPayload {
        let (change_date, change_note) = match self.change_type {
            ChangeType::TemporaryClose => (
                Some(self.change_date.clone().unwrap_or_default()),
                Some(self.change_note.clone().unwrap_or_default()),
            ),
            _ => (None, None),
        };
        let holidays = match (self.change_type, &self.holidays) {
            (ChangeType::HolidayHours, Some(list)) => serde_json::to_string(list).ok(),
            _ => None,
        };
        StoreHoursPayload {
            id: self.id.to_string(),
            store_name: self.store_name.joined(),
            manager_name: self.manager_name.clone(),
            manager_email: self.manager_email.clone(),
            change_type: self.change_type,
            day_hours: self.flattened_hours(),
            change_date,
            change_note,
            holidays,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreHoursForm {
    /// One input per store; blank inputs are ignored
    pub store_names: Vec<String>,
    pub manager_name: String,
    pub manager_email: String,
    pub change_type: ChangeType,
    /// Always seven rows, Monday first
    pub hours: Vec<DayHours>,
    pub change_date: String,
    pub change_note: String,
    pub holidays: Vec<HolidayEntry>,
}

impl Default for StoreHoursForm {
    fn default() -> Self {
        Self {
            store_names: vec![String::new()],
            manager_name: String::new(),
            manager_email: String::new(),
            change_type: ChangeType::NewHours,
            hours: WEEKDAYS.iter().map(|d| DayHours::empty(d)).collect(),
            change_date: String::new(),
            change_note: String::new(),
            holidays: vec![HolidayEntry::default()],
        }
    }
}

impl StoreHoursForm {
    pub fn add_store(&mut self) {
        self.store_names.push(String::new());
    }

    /// The last remaining input is cleared instead of removed
    pub fn remove_store(&mut self, index: usize) {
        if self.store_names.len() > 1 && index < self.store_names.len() {
            self.store_names.remove(index);
        } else if let Some(name) = self.store_names.get_mut(index) {
            name.clear();
        }
    }

    pub fn add_holiday(&mut self) {
        self.holidays.push(HolidayEntry::default());
    }

    pub fn remove_holiday(&mut self, index: usize) {
        if self.holidays.len() > 1 && index < self.holidays.len() {
            self.holidays.remove(index);
        } else if let Some(entry) = self.holidays.get_mut(index) {
            *entry = HolidayEntry::default();
        }
    }

    fn validate_hours(&self, errors: &mut FieldErrors) {
        for row in &self.hours {
            let field = format!("hours.{}", row.day);
            if row.start_time.trim().is_empty() || row.end_time.trim().is_empty() {
                errors.insert(field, "Start and end times are required");
            } else if !dates::end_after_start(&row.start_time, &row.end_time) {
                errors.insert(field, "End time must be after start time");
            }
        }
        if self.hours.len() != WEEKDAYS.len() {
            errors.insert("hours", "All seven days are required");
        }
    }

    fn validate_holidays(&self, errors: &mut FieldErrors) {
        for (i, entry) in self.holidays.iter().enumerate() {
            if entry.is_blank() {
                continue;
            }
            let field = format!("holidays.{}", i);
            if !entry.is_populated() {
                errors.insert(field, "Holiday date and name are both required");
            } else if dates::parse_input_date(&entry.date).is_none() {
                errors.insert(field, "Enter a valid date");
            } else if !entry.start_time.trim().is_empty()
                && !entry.end_time.trim().is_empty()
                && !dates::end_after_start(&entry.start_time, &entry.end_time)
            {
                errors.insert(field, "End time must be after start time");
            }
        }
        if !self.holidays.iter().any(HolidayEntry::is_populated) {
            errors.insert("holidays", "Add at least one holiday with a date and name");
        }
    }
}

impl IntakeForm for StoreHoursForm {
    type Record = StoreHoursChange;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if StoreNames::from_inputs(&self.store_names).is_empty() {
            errors.insert("storeName", "At least one store name is required");
        }
        errors.require("managerName", &self.manager_name, "Manager name is required");
        errors.require_email("managerEmail", &self.manager_email);

        match self.change_type {
            ChangeType::NewHours => self.validate_hours(&mut errors),
            ChangeType::TemporaryClose => {
                if errors.require("changeDate", &self.change_date, "Close date is required") {
                    errors.check_date("changeDate", &self.change_date);
                }
                errors.require("changeNote", &self.change_note, "Reason is required");
            }
            ChangeType::HolidayHours => self.validate_holidays(&mut errors),
        }
        errors
    }

    fn build(&self, at: &Submission) -> StoreHoursChange {
        let mut change = StoreHoursChange {
            id: at.record_id(StoreHoursChange::ID_PREFIX),
            store_name: StoreNames::from_inputs(&self.store_names),
            manager_name: self.manager_name.trim().to_string(),
            manager_email: self.manager_email.trim().to_string(),
            change_type: self.change_type,
            hours: Vec::new(),
            change_date: None,
            change_note: None,
            holidays: None,
            submitted_date: at.submitted_date(),
            status: RequestStatus::Pending,
        };
        match self.change_type {
            ChangeType::NewHours => change.hours = self.hours.clone(),
            ChangeType::TemporaryClose => {
                change.change_date = Some(dates::display_input_date(&self.change_date));
                change.change_note = Some(self.change_note.trim().to_string());
            }
            ChangeType::HolidayHours => {
                let entries = self
                    .holidays
                    .iter()
                    .filter(|h| h.is_populated())
                    .map(|h| HolidayEntry {
                        date: dates::display_input_date(&h.date),
                        name: h.name.trim().to_string(),
                        start_time: h.start_time.clone(),
                        end_time: h.end_time.clone(),
                    })
                    .collect();
                change.holidays = Some(entries);
            }
        }
        change
    }
}
