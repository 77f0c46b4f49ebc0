//! LSM (Local Store Marketing) Requests
//!
//! Custom design requests for print and digital promotional pieces.

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::id::RecordId;
use crate::kind::{IntakeForm, RequestKind, Submission};
use crate::nullable::null_as_default;
use crate::status::RequestStatus;
use crate::stores::StoreNames;
use crate::validation::FieldErrors;

pub const LSM_TYPES: &[&str] = &[
    "Print Ad",
    "Web Ad",
    "Poster - 1 sided",
    "Poster - 2 sided",
    "Flyer - 8 1/2 x 11",
    "Direct Mail",
    "Billboard",
    "Banner - Outdoor",
    "Bounce Back Coupon",
    "Counter Card (easel back)",
    "Social Art/Email Art",
    "Other",
];

pub const LSM_COLOR_OPTIONS: &[&str] = &["4-color", "Black & White", "Other"];

pub const LSM_FILE_TYPE_OPTIONS: &[&str] = &["JPG", "PDF", "PNG", "Other"];

/// Add `value` to a checkbox selection, or remove it if already selected
pub fn toggle_option(selected: &mut Vec<String>, value: &str) {
    if let Some(pos) = selected.iter().position(|v| v == value) {
        selected.remove(pos);
    } else {
        selected.push(value.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LsmRequest {
    pub id: RecordId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub request_date: String,
    pub store_location: StoreNames,
    pub contact_name: String,
    pub contact_email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contact_phone: String,
    pub lsm_types: Vec<String>,
    pub desired_message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coupon_offers: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub coupon_expiration_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub special_instructions: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size_width: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub size_height: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_type: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub file_special_instructions: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        rename = "desired1stRoundDate"
    )]
    pub desired_first_round_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub art_due_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub publication_start_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub additional_instructions: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RequestStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submitted_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LsmRequestPayload {
    pub id: String,
    pub request_date: String,
    pub store_location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub lsm_types: Vec<String>,
    pub desired_message: String,
    pub coupon_offers: String,
    pub coupon_expiration_date: String,
    pub special_instructions: String,
    pub size_width: String,
    pub size_height: String,
    pub color: Vec<String>,
    pub file_type: Vec<String>,
    pub quantity: String,
    pub file_special_instructions: String,
    #[serde(rename = "desired1stRoundDate")]
    pub desired_first_round_date: String,
    pub art_due_date: String,
    pub publication_start_date: String,
    pub additional_instructions: String,
}

impl RequestKind for LsmRequest {
    const ID_PREFIX: &'static str = "LSM";
    const STORAGE_KEY: &'static str = "store_intake_lsm_requests";
    const ENDPOINT: &'static str = "/api/lsm-requests";
    const LABEL: &'static str = "Custom Design Request";

    type Payload = LsmRequestPayload;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn submitted_date(&self) -> &str {
        &self.submitted_date
    }

    fn payload(&self) -> LsmRequestPayload {
        LsmRequestPayload {
            id: self.id.to_string(),
            request_date: self.request_date.clone(),
            store_location: self.store_location.joined(),
            contact_name: self.contact_name.clone(),
            contact_email: self.contact_email.clone(),
            contact_phone: self.contact_phone.clone(),
            lsm_types: self.lsm_types.clone(),
            desired_message: self.desired_message.clone(),
            coupon_offers: self.coupon_offers.clone(),
            coupon_expiration_date: self.coupon_expiration_date.clone(),
            special_instructions: self.special_instructions.clone(),
            size_width: self.size_width.clone(),
            size_height: self.size_height.clone(),
            color: self.color.clone(),
            file_type: self.file_type.clone(),
            quantity: self.quantity.clone(),
            file_special_instructions: self.file_special_instructions.clone(),
            desired_first_round_date: self.desired_first_round_date.clone(),
            art_due_date: self.art_due_date.clone(),
            publication_start_date: self.publication_start_date.clone(),
            additional_instructions: self.additional_instructions.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LsmRequestForm {
    pub store_location: String,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub lsm_types: Vec<String>,
    pub desired_message: String,
    pub coupon_offers: String,
    pub coupon_expiration_date: String,
    pub special_instructions: String,
    pub size_width: String,
    pub size_height: String,
    pub color: Vec<String>,
    pub file_type: Vec<String>,
    pub quantity: String,
    pub file_special_instructions: String,
    pub desired_first_round_date: String,
    pub art_due_date: String,
    pub publication_start_date: String,
    pub additional_instructions: String,
}

impl IntakeForm for LsmRequestForm {
    type Record = LsmRequest;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.require("storeLocation", &self.store_location, "Store location is required");
        errors.require("contactName", &self.contact_name, "Contact name is required");
        errors.require_email("contactEmail", &self.contact_email);
        if self.lsm_types.is_empty() {
            errors.insert("lsmTypes", "Select at least one LSM type");
        }
        errors.require("desiredMessage", &self.desired_message, "Message is required");
        errors.check_date("couponExpirationDate", &self.coupon_expiration_date);
        errors.check_date("desired1stRoundDate", &self.desired_first_round_date);
        errors.check_date("artDueDate", &self.art_due_date);
        errors.check_date("publicationStartDate", &self.publication_start_date);
        errors
    }

    fn build(&self, at: &Submission) -> LsmRequest {
        let request_date = at.submitted_date();
        LsmRequest {
            id: at.record_id(LsmRequest::ID_PREFIX),
            request_date: request_date.clone(),
            store_location: StoreNames::from_inputs([&self.store_location]),
            contact_name: self.contact_name.trim().to_string(),
            contact_email: self.contact_email.trim().to_string(),
            contact_phone: self.contact_phone.trim().to_string(),
            lsm_types: self.lsm_types.clone(),
            desired_message: self.desired_message.trim().to_string(),
            coupon_offers: self.coupon_offers.clone(),
            coupon_expiration_date: dates::display_input_date(&self.coupon_expiration_date),
            special_instructions: self.special_instructions.clone(),
            size_width: self.size_width.clone(),
            size_height: self.size_height.clone(),
            color: self.color.clone(),
            file_type: self.file_type.clone(),
            quantity: self.quantity.clone(),
            file_special_instructions: self.file_special_instructions.clone(),
            desired_first_round_date: dates::display_input_date(&self.desired_first_round_date),
            art_due_date: dates::display_input_date(&self.art_due_date),
            publication_start_date: dates::display_input_date(&self.publication_start_date),
            additional_instructions: self.additional_instructions.clone(),
            status: RequestStatus::Pending,
            submitted_date: request_date,
        }
    }
}
