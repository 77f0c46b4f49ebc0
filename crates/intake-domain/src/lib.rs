//! Store Intake Domain
//!
//! Request records, form validation and webhook payload shaping shared by the
//! portal frontend and the forwarding server. This crate does no I/O apart from
//! the [`KeyValueStorage`] abstraction that callers implement.

pub mod dates;
mod design;
mod error;
mod id;
mod kind;
mod lsm;
mod nullable;
mod portal;
mod price;
mod status;
mod store;
mod store_hours;
mod stores;
mod validation;

pub use design::{DesignRequest, DesignRequestForm, DesignRequestPayload, DESIGN_REQUEST_TYPES};
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
pub use kind::{IntakeForm, RequestKind, Submission};
pub use lsm::{
    toggle_option, LsmRequest, LsmRequestForm, LsmRequestPayload, LSM_COLOR_OPTIONS,
    LSM_FILE_TYPE_OPTIONS, LSM_TYPES,
};
pub use portal::PortalConfig;
pub use price::{PriceChange, PriceChangeForm, PriceChangePayload, POP_OPTIONS, PRICE_REQUEST_TYPES};
pub use status::RequestStatus;
pub use store::{KeyValueStorage, MemoryStorage, RecordLog};
pub use store_hours::{
    ChangeType, DayHours, HolidayEntry, StoreHoursChange, StoreHoursForm, StoreHoursPayload,
    WEEKDAYS,
};
pub use stores::StoreNames;
pub use validation::{is_valid_email, FieldErrors};

#[cfg(test)]
mod tests;
