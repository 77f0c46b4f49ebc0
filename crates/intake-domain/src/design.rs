//! Design Requests
//!
//! Marketing design requests submitted by a single store. Store identity is
//! pre-filled from the portal configuration and read-only in the form.

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::id::RecordId;
use crate::kind::{IntakeForm, RequestKind, Submission};
use crate::nullable::null_as_default;
use crate::status::RequestStatus;
use crate::validation::FieldErrors;

pub const DESIGN_REQUEST_TYPES: &[&str] = &[
    "Flyer",
    "Banner",
    "Social Media Post",
    "Menu Board",
    "Window Cling",
    "Other",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    pub id: RecordId,
    pub store_number: String,
    pub store_name: String,
    pub contact_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    pub request_type: String,
    pub description: String,
    /// Display date (`M/D/YYYY`) or empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub needed_by_date: String,
    /// Attachment name only; file contents never leave the browser
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RequestStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submitted_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub eta: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequestPayload {
    pub id: String,
    pub store_number: String,
    pub store_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub request_type: String,
    pub description: String,
    pub needed_by_date: String,
    pub file_name: String,
}

impl RequestKind for DesignRequest {
    const ID_PREFIX: &'static str = "REQ";
    const STORAGE_KEY: &'static str = "store_intake_design_requests";
    const ENDPOINT: &'static str = "/api/design-requests";
    const LABEL: &'static str = "Design Request";

    type Payload = DesignRequestPayload;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn submitted_date(&self) -> &str {
        &self.submitted_date
    }

    fn payload(&self) -> DesignRequestPayload {
        DesignRequestPayload {
            id: self.id.to_string(),
            store_number: self.store_number.clone(),
            store_name: self.store_name.clone(),
            contact_name: self.contact_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            request_type: self.request_type.clone(),
            description: self.description.clone(),
            needed_by_date: self.needed_by_date.clone(),
            file_name: self.file_name.clone(),
        }
    }
}

/// Form state; dates are ISO strings straight from `<input type="date">`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DesignRequestForm {
    pub store_number: String,
    pub store_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub request_type: String,
    pub description: String,
    pub needed_by_date: String,
    pub file_name: String,
}

impl DesignRequestForm {
    pub fn for_store(store_number: impl Into<String>, store_name: impl Into<String>) -> Self {
        Self {
            store_number: store_number.into(),
            store_name: store_name.into(),
            ..Default::default()
        }
    }
}

impl IntakeForm for DesignRequestForm {
    type Record = DesignRequest;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("contactName", &self.contact_name, "Contact name is required");
        errors.require_email("email", &self.email);
        errors.require("requestType", &self.request_type, "Request type is required");
        errors.require("description", &self.description, "Description is required");
        errors.check_date("neededByDate", &self.needed_by_date);
        errors
    }

    fn build(&self, at: &Submission) -> DesignRequest {
        let needed_by = dates::parse_input_date(&self.needed_by_date);
        let eta = dates::compute_eta(needed_by, at.today);
        DesignRequest {
            id: at.record_id(DesignRequest::ID_PREFIX),
            store_number: self.store_number.clone(),
            store_name: self.store_name.clone(),
            contact_name: self.contact_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            request_type: self.request_type.clone(),
            description: self.description.trim().to_string(),
            needed_by_date: needed_by.map(dates::format_us).unwrap_or_default(),
            file_name: self.file_name.clone(),
            status: RequestStatus::Pending,
            submitted_date: at.submitted_date(),
            eta: dates::format_us(eta),
        }
    }
}
