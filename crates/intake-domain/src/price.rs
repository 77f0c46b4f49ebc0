//! Price Change Requests

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::id::RecordId;
use crate::kind::{IntakeForm, RequestKind, Submission};
use crate::nullable::null_as_default;
use crate::status::RequestStatus;
use crate::stores::StoreNames;
use crate::validation::FieldErrors;

/// Where the price change applies
pub const PRICE_REQUEST_TYPES: &[&str] = &["InStore", "Online", "NCR", "Others"];

/// Whether point-of-purchase signage must be reprinted
pub const POP_OPTIONS: &[&str] = &["Yes", "No"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChange {
    pub id: RecordId,
    pub store_name: StoreNames,
    pub manager_name: String,
    pub manager_email: String,
    pub price_change_request: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub effective_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pop_needed: String,
    pub description: String,
    pub current_price: String,
    pub updated_price: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub submitted_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RequestStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChangePayload {
    pub id: String,
    pub store_name: String,
    pub manager_name: String,
    pub manager_email: String,
    pub price_change_request: String,
    pub effective_date: String,
    pub pop_needed: String,
    pub description: String,
    pub current_price: String,
    pub updated_price: String,
}

impl RequestKind for PriceChange {
    const ID_PREFIX: &'static str = "PC";
    const STORAGE_KEY: &'static str = "store_intake_price_changes";
    const ENDPOINT: &'static str = "/api/price-changes";
    const LABEL: &'static str = "Price Change";

    type Payload = PriceChangePayload;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn status(&self) -> RequestStatus {
        self.status
    }

    fn submitted_date(&self) -> &str {
        &self.submitted_date
    }

    fn payload(&self) -> PriceChangePayload {
        PriceChangePayload {
            id: self.id.to_string(),
            store_name: self.store_name.joined(),
            manager_name: self.manager_name.clone(),
            manager_email: self.manager_email.clone(),
            price_change_request: self.price_change_request.clone(),
            effective_date: self.effective_date.clone(),
            pop_needed: self.pop_needed.clone(),
            description: self.description.clone(),
            current_price: self.current_price.clone(),
            updated_price: self.updated_price.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceChangeForm {
    pub store_names: Vec<String>,
    pub manager_name: String,
    pub manager_email: String,
    pub price_change_request: String,
    pub effective_date: String,
    pub pop_needed: String,
    pub description: String,
    pub current_price: String,
    pub updated_price: String,
}

impl Default for PriceChangeForm {
    fn default() -> Self {
        Self {
            store_names: vec![String::new()],
            manager_name: String::new(),
            manager_email: String::new(),
            price_change_request: String::new(),
            effective_date: String::new(),
            pop_needed: String::new(),
            description: String::new(),
            current_price: String::new(),
            updated_price: String::new(),
        }
    }
}

impl PriceChangeForm {
    pub fn add_store(&mut self) {
        self.store_names.push(String::new());
    }

    pub fn remove_store(&mut self, index: usize) {
        if self.store_names.len() > 1 && index < self.store_names.len() {
            self.store_names.remove(index);
        } else if let Some(name) = self.store_names.get_mut(index) {
            name.clear();
        }
    }
}

impl IntakeForm for PriceChangeForm {
    type Record = PriceChange;

    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if StoreNames::from_inputs(&self.store_names).is_empty() {
            errors.insert("storeName", "At least one store name is required");
        }
        errors.require("managerName", &self.manager_name, "Manager name is required");
        errors.require_email("managerEmail", &self.manager_email);
        errors.require("priceChangeRequest", &self.price_change_request, "Request type is required");
        if errors.require("effectiveDate", &self.effective_date, "Effective date is required") {
            errors.check_date("effectiveDate", &self.effective_date);
        }
        errors.require("popNeeded", &self.pop_needed, "Please indicate whether POP is needed");
        errors.require("description", &self.description, "Description is required");
        errors.require_price("currentPrice", &self.current_price, "Current price is required");
        errors.require_price("updatedPrice", &self.updated_price, "Updated price is required");
        errors
    }

    fn build(&self, at: &Submission) -> PriceChange {
        PriceChange {
            id: at.record_id(PriceChange::ID_PREFIX),
            store_name: StoreNames::from_inputs(&self.store_names),
            manager_name: self.manager_name.trim().to_string(),
            manager_email: self.manager_email.trim().to_string(),
            price_change_request: self.price_change_request.clone(),
            effective_date: dates::display_input_date(&self.effective_date),
            pop_needed: self.pop_needed.clone(),
            description: self.description.trim().to_string(),
            current_price: self.current_price.trim().to_string(),
            updated_price: self.updated_price.trim().to_string(),
            submitted_date: at.submitted_date(),
            status: RequestStatus::Pending,
        }
    }
}
