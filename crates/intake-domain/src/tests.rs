//! Form, payload and record log tests across all four request kinds

use chrono::NaiveDate;
use serde_json::json;

use crate::*;

fn at() -> Submission {
    Submission::new(1_760_000_654_321, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
}

fn design_form() -> DesignRequestForm {
    DesignRequestForm {
        contact_name: "Dana Reyes".into(),
        email: "dana@store.com".into(),
        request_type: "Flyer".into(),
        description: "Fall flavor flyer".into(),
        ..DesignRequestForm::for_store("1234", "Downtown LA")
    }
}

fn hours_form() -> StoreHoursForm {
    let mut form = StoreHoursForm {
        store_names: vec!["Downtown LA".into(), "Irvine".into()],
        manager_name: "Sam Lee".into(),
        manager_email: "sam@store.com".into(),
        ..Default::default()
    };
    for row in form.hours.iter_mut() {
        row.start_time = "10:00".into();
        row.end_time = "22:00".into();
    }
    form
}

fn price_form() -> PriceChangeForm {
    PriceChangeForm {
        store_names: vec!["Irvine".into()],
        manager_name: "Sam Lee".into(),
        manager_email: "sam@store.com".into(),
        price_change_request: "InStore".into(),
        effective_date: "2026-11-01".into(),
        pop_needed: "Yes".into(),
        description: "Per-ounce price update".into(),
        current_price: "0.69".into(),
        updated_price: "0.72".into(),
    }
}

fn lsm_form() -> LsmRequestForm {
    LsmRequestForm {
        store_location: "#1234 - Downtown LA".into(),
        contact_name: "Dana Reyes".into(),
        contact_email: "dana@store.com".into(),
        lsm_types: vec!["Print Ad".into()],
        desired_message: "Grand reopening".into(),
        ..Default::default()
    }
}

// ========================
// Design requests
// ========================

#[test]
fn test_design_blank_required_fields_block_submit() {
    let form = DesignRequestForm::for_store("1234", "Downtown LA");
    let errors = form.submit(&at()).unwrap_err();
    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec!["contactName", "email", "requestType", "description"]
    );
    assert_eq!(errors.get("description"), Some("Description is required"));
}

#[test]
fn test_design_record_fields() {
    let record = design_form().submit(&at()).unwrap();
    assert_eq!(record.id.as_str(), "REQ-654321");
    assert_eq!(record.status, RequestStatus::Pending);
    assert_eq!(record.submitted_date, "10/16/2026");
    assert_eq!(record.eta, "10/23/2026");
    assert_eq!(record.needed_by_date, "");
}

#[test]
fn test_design_eta_follows_needed_by() {
    let mut form = design_form();
    form.needed_by_date = "2026-12-01".into();
    form.file_name = "mockup.pdf".into();
    let record = form.submit(&at()).unwrap();
    assert_eq!(record.needed_by_date, "12/1/2026");
    assert_eq!(record.eta, "12/1/2026");

    let payload = serde_json::to_value(record.payload()).unwrap();
    assert_eq!(payload["fileName"], "mockup.pdf");
    assert_eq!(payload["phone"], "");
    assert!(payload.get("status").is_none());
}

// ========================
// Store hours
// ========================

#[test]
fn test_new_hours_requires_every_day_after_start() {
    let mut form = hours_form();
    form.hours[2].end_time = "09:00".into();
    form.hours[6].start_time.clear();
    let errors = form.validate();
    assert_eq!(errors.get("hours.Wednesday"), Some("End time must be after start time"));
    assert_eq!(errors.get("hours.Sunday"), Some("Start and end times are required"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_new_hours_payload_is_flattened() {
    let change = hours_form().submit(&at()).unwrap();
    assert!(change.id.has_prefix("SHC"));
    let payload = serde_json::to_value(change.payload()).unwrap();
    assert_eq!(payload["storeName"], "Downtown LA, Irvine");
    assert_eq!(payload["changeType"], "new_hours");
    assert_eq!(payload["Mon_Start"], "10:00");
    assert_eq!(payload["Sun_End"], "22:00");
    assert!(payload.get("holidays").is_none());
    assert!(payload.get("changeDate").is_none());
}

#[test]
fn test_temporary_close_requires_date_and_note() {
    let mut form = hours_form();
    form.change_type = ChangeType::TemporaryClose;
    let errors = form.validate();
    assert_eq!(errors.get("changeDate"), Some("Close date is required"));
    assert_eq!(errors.get("changeNote"), Some("Reason is required"));
    assert!(!errors.fields().any(|f| f.starts_with("hours")));

    form.change_date = "2026-11-26".into();
    form.change_note = "Flooring repair".into();
    let change = form.submit(&at()).unwrap();
    assert!(change.hours.is_empty());
    let payload = serde_json::to_value(change.payload()).unwrap();
    assert_eq!(payload["changeDate"], "11/26/2026");
    assert_eq!(payload["changeNote"], "Flooring repair");
    assert!(payload.get("Mon_Start").is_none());
}

#[test]
fn test_removing_holiday_row_drops_stale_row_errors() {
    let mut form = hours_form();
    form.change_type = ChangeType::HolidayHours;
    form.holidays[0].date = "2026-12-25".into();
    form.holidays[0].name = "Christmas".into();
    form.add_holiday();
    form.holidays[1].date = "2027-01-01".into();

    let mut errors = form.validate();
    assert!(errors.contains("holidays.1"));

    form.remove_holiday(0);
    errors.remove_prefixed("holidays.");
    assert!(!errors.contains("holidays.1"));
    assert!(!errors.contains("holidays.0"));
    assert!(form.validate().contains("holidays.0"));
}

#[test]
fn test_holiday_hours_needs_one_populated_entry() {
    let mut form = hours_form();
    form.change_type = ChangeType::HolidayHours;
    assert!(form.validate().contains("holidays"));

    form.holidays[0].date = "2026-12-25".into();
    assert_eq!(
        form.validate().get("holidays.0"),
        Some("Holiday date and name are both required")
    );

    form.holidays[0].name = "Christmas".into();
    form.add_holiday();
    let change = form.submit(&at()).unwrap();
    let holidays = change.holidays.clone().unwrap();
    assert_eq!(holidays.len(), 1, "blank rows are dropped");
    assert_eq!(holidays[0].date, "12/25/2026");

    let payload = serde_json::to_value(change.payload()).unwrap();
    let encoded = payload["holidays"].as_str().unwrap();
    let decoded: serde_json::Value = serde_json::from_str(encoded).unwrap();
    assert_eq!(decoded[0]["name"], "Christmas");
}

#[test]
fn test_store_hours_requires_a_store() {
    let mut form = hours_form();
    form.store_names = vec![" ".into()];
    assert_eq!(
        form.validate().get("storeName"),
        Some("At least one store name is required")
    );
}

#[test]
fn test_store_hours_inbound_defaults_change_type() {
    let body = json!({
        "id": "SHC-000001",
        "storeName": "Irvine",
        "managerName": "Sam",
        "managerEmail": "sam@store.com",
        "hours": [{ "day": "monday", "startTime": "09:00", "endTime": "17:00" }]
    });
    let change: StoreHoursChange = serde_json::from_value(body).unwrap();
    assert_eq!(change.change_type, ChangeType::NewHours);
    let payload = serde_json::to_value(change.payload()).unwrap();
    assert_eq!(payload["Mon_Start"], "09:00");
    assert_eq!(payload["storeName"], "Irvine");
}

// ========================
// Price changes
// ========================

#[test]
fn test_price_change_validation() {
    let mut form = price_form();
    form.current_price = "-1".into();
    form.updated_price.clear();
    form.pop_needed.clear();
    let errors = form.validate();
    assert_eq!(errors.get("currentPrice"), Some("Price must be a positive number"));
    assert_eq!(errors.get("updatedPrice"), Some("Updated price is required"));
    assert!(errors.contains("popNeeded"));
}

#[test]
fn test_price_change_payload() {
    let change = price_form().submit(&at()).unwrap();
    assert_eq!(change.id.as_str(), "PC-654321");
    assert_eq!(change.store_name, StoreNames::One("Irvine".into()));
    let payload = serde_json::to_value(change.payload()).unwrap();
    assert_eq!(payload["effectiveDate"], "11/1/2026");
    assert_eq!(payload["storeName"], "Irvine");
    assert_eq!(payload["updatedPrice"], "0.72");
}

// ========================
// LSM requests
// ========================

#[test]
fn test_lsm_requires_a_type_and_message() {
    let mut form = lsm_form();
    toggle_option(&mut form.lsm_types, "Print Ad");
    form.desired_message = "  ".into();
    let errors = form.validate();
    assert_eq!(errors.get("lsmTypes"), Some("Select at least one LSM type"));
    assert_eq!(errors.get("desiredMessage"), Some("Message is required"));
}

#[test]
fn test_lsm_payload_defaults() {
    let mut form = lsm_form();
    form.art_due_date = "2026-11-10".into();
    toggle_option(&mut form.color, "4-color");
    let request = form.submit(&at()).unwrap();
    assert_eq!(request.request_date, "10/16/2026");
    let payload = serde_json::to_value(request.payload()).unwrap();
    assert_eq!(payload["id"], "LSM-654321");
    assert_eq!(payload["storeLocation"], "#1234 - Downtown LA");
    assert_eq!(payload["artDueDate"], "11/10/2026");
    assert_eq!(payload["desired1stRoundDate"], "");
    assert_eq!(payload["color"], json!(["4-color"]));
    assert_eq!(payload["fileType"], json!([]));
}

// ========================
// Record log
// ========================

#[test]
fn test_append_adds_exactly_one_record() {
    let log = RecordLog::new(MemoryStorage::new());
    assert!(log.list::<DesignRequest>().unwrap().is_empty());

    let first = design_form().submit(&at()).unwrap();
    let second = design_form()
        .submit(&Submission::new(1_760_000_654_999, at().today))
        .unwrap();
    assert_eq!(log.append(&first).unwrap(), 1);
    assert_eq!(log.append(&second).unwrap(), 2);

    let listed = log.list::<DesignRequest>().unwrap();
    assert_eq!(listed, vec![first.clone(), second]);
    assert_eq!(log.find_by_id::<DesignRequest>("REQ-654321").unwrap(), Some(first));
    assert!(log.list::<PriceChange>().unwrap().is_empty());
}

#[test]
fn test_kinds_use_separate_keys() {
    let storage = MemoryStorage::new();
    let log = RecordLog::new(storage.clone());
    log.append(&price_form().submit(&at()).unwrap()).unwrap();
    assert!(storage.raw(PriceChange::STORAGE_KEY).is_some());
    assert!(storage.raw(StoreHoursChange::STORAGE_KEY).is_none());
}

#[test]
fn test_corrupt_list_is_reported_not_overwritten() {
    let storage = MemoryStorage::new();
    storage.set_item(LsmRequest::STORAGE_KEY, "{not json").unwrap();
    let log = RecordLog::new(storage.clone());
    assert!(matches!(
        log.list::<LsmRequest>(),
        Err(DomainError::Corrupt { key: "store_intake_lsm_requests", .. })
    ));
    assert!(log.append(&lsm_form().submit(&at()).unwrap()).is_err());
    assert_eq!(storage.raw(LsmRequest::STORAGE_KEY).as_deref(), Some("{not json"));
}

#[test]
fn test_records_round_trip_through_storage_format() {
    let log = RecordLog::new(MemoryStorage::new());
    let mut form = hours_form();
    form.change_type = ChangeType::TemporaryClose;
    form.change_date = "2026-11-26".into();
    form.change_note = "Repairs".into();
    let change = form.submit(&at()).unwrap();
    log.append(&change).unwrap();
    assert_eq!(log.list::<StoreHoursChange>().unwrap(), vec![change]);
}
