//! Request kinds
//!
//! The four request types share one lifecycle: fill a form, validate, forward
//! to the kind's endpoint, then append to the kind's local list. These traits
//! carry the per-kind constants so that lifecycle can be written once.

use chrono::{NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::dates;
use crate::id::RecordId;
use crate::status::RequestStatus;
use crate::validation::FieldErrors;

/// A stored request record
pub trait RequestKind: Serialize + DeserializeOwned + Clone + PartialEq + 'static {
    /// ID prefix without the dash, e.g. `REQ`
    const ID_PREFIX: &'static str;
    /// Local storage key holding the JSON array of records
    const STORAGE_KEY: &'static str;
    /// Forwarding endpoint path on the portal server
    const ENDPOINT: &'static str;
    /// Human label used in titles and logs
    const LABEL: &'static str;

    /// Flat JSON shape the webhook receives
    type Payload: Serialize;

    fn id(&self) -> &RecordId;

    fn status(&self) -> RequestStatus;

    fn submitted_date(&self) -> &str;

    fn payload(&self) -> Self::Payload;
}

/// Clock readings captured once per submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub now_millis: i64,
    pub today: NaiveDate,
}

impl Submission {
    pub fn new(now_millis: i64, today: NaiveDate) -> Self {
        Self { now_millis, today }
    }

    pub fn now() -> Self {
        Self::new(Utc::now().timestamp_millis(), dates::today())
    }

    pub fn record_id(&self, prefix: &str) -> RecordId {
        RecordId::generate(prefix, self.now_millis)
    }

    pub fn submitted_date(&self) -> String {
        dates::format_us(self.today)
    }
}

/// Editable form state for one request kind
pub trait IntakeForm {
    type Record: RequestKind;

    /// Check every field; an empty result means the form can be submitted
    fn validate(&self) -> FieldErrors;

    /// Build the record. Only meaningful after `validate` passed.
    fn build(&self, at: &Submission) -> Self::Record;

    fn submit(&self, at: &Submission) -> Result<Self::Record, FieldErrors> {
        self.validate().into_result(|| self.build(at))
    }
}
