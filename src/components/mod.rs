//! UI Components
//!
//! Shared building blocks first, then one module per tab.

mod display;
pub mod fields;
mod modal;
mod request_table;

mod design_requests;
mod layout;
mod lsm_requests;
mod marketing_assets;
mod price_changes;
mod store_hours;

pub use display::{DetailRow, EmptyState, SectionHeader, StatusBadge};
pub use fields::{
    CheckboxGroup, DateField, FieldError, FileNameField, SelectField, StoreNamesField, TextAreaField,
    TextField,
};
pub use modal::Modal;
pub use request_table::RequestTable;

pub use design_requests::{DesignRequestDetailsModal, DesignRequestModal, DesignRequests};
pub use layout::{Footer, Header, Tab, TabBar};
pub use lsm_requests::{LsmRequestDetailsModal, LsmRequestModal};
pub use marketing_assets::{MarketingAssetsModal, MarketingAssetsTab};
pub use price_changes::{PriceChangeDetailsModal, PriceChangeModal, PriceChanges};
pub use store_hours::{StoreHoursChanges, StoreHoursDetailsModal, StoreHoursModal};
