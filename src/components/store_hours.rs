//! Store Hours Change Tab
//!
//! The form switches between three sections by change type: the weekly hours
//! table, a temporary closure, or a list of holiday overrides.

use intake_domain::{ChangeType, HolidayEntry, StoreHoursChange, StoreHoursForm, WEEKDAYS};
use leptos::prelude::*;

use super::fields::{list, text};
use super::{
    DateField, DetailRow, FieldError, Modal, RequestTable, SectionHeader, StoreNamesField,
    TextAreaField, TextField,
};
use crate::store::{use_app_store, StoredRecords};
use crate::submit::FormState;

fn store_hours_cells(change: &StoreHoursChange) -> Vec<String> {
    vec![
        change.store_name.joined(),
        change.change_type.label().to_string(),
        change.submitted_date.clone(),
    ]
}

#[component]
pub fn StoreHoursChanges() -> impl IntoView {
    let store = use_app_store();
    let form_open = RwSignal::new(false);
    let details = RwSignal::new(None::<StoreHoursChange>);
    let changes = Signal::derive(move || StoreHoursChange::read_all(store));

    view! {
        <div class="section">
            <SectionHeader
                title="Store Hours Change Center"
                subtitle="Submit and track store hours change requests"
            >
                <button type="button" class="btn" on:click=move |_| form_open.set(true)>
                    "+ New Hours Change"
                </button>
            </SectionHeader>

            <RequestTable
                records=changes
                columns=&["Store Name", "Change Type", "Submitted"]
                cells=store_hours_cells
                on_view=move |change| details.set(Some(change))
                empty_title="No changes yet"
                empty_message="Click \"New Hours Change\" to submit your first store hours change."
                new_label="+ New Hours Change"
                on_new=move |_: ()| form_open.set(true)
            />

            <Show when=move || form_open.get()>
                <StoreHoursModal on_close=move |_: ()| form_open.set(false) />
            </Show>
            {move || {
                details
                    .get()
                    .map(|change| {
                        view! {
                            <StoreHoursDetailsModal
                                change=change
                                on_close=move |_: ()| details.set(None)
                            />
                        }
                    })
            }}
        </div>
    }
}

#[component]
pub fn StoreHoursModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let state = FormState::new(StoreHoursForm::default());
    let FormState { form, errors, submitting } = state;
    let change_type = Memo::new(move |_| form.with(|f| f.change_type));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit(store, on_close);
    };

    view! {
        <Modal title="New Store Hours Change" class="modal-wide" on_close=on_close>
            <form class="intake-form" on:submit=on_submit>
                <StoreNamesField
                    field="storeName"
                    names=list(form, |f| &f.store_names)
                    on_edit=move |(i, v): (usize, String)| {
                        form.update(|f| {
                            if let Some(name) = f.store_names.get_mut(i) {
                                *name = v;
                            }
                        })
                    }
                    on_add=move |_: ()| form.update(|f| f.add_store())
                    on_remove=move |i: usize| form.update(|f| f.remove_store(i))
                    errors=errors
                />
                <div class="form-grid">
                    <TextField
                        label="Manager Name"
                        field="managerName"
                        required=true
                        placeholder="Full name"
                        value=text(form, |f| &f.manager_name)
                        on_input=move |v| form.update(|f| f.manager_name = v)
                        errors=errors
                    />
                    <TextField
                        label="Manager Email"
                        field="managerEmail"
                        input_type="email"
                        required=true
                        placeholder="manager@example.com"
                        value=text(form, |f| &f.manager_email)
                        on_input=move |v| form.update(|f| f.manager_email = v)
                        errors=errors
                    />
                </div>

                <fieldset class="form-field change-type">
                    <legend>"Change Type" <span class="required">" *"</span></legend>
                    {ChangeType::ALL
                        .iter()
                        .map(|ct| {
                            let ct = *ct;
                            view! {
                                <label class="radio-option">
                                    <input
                                        type="radio"
                                        name="changeType"
                                        value=ct.as_str()
                                        prop:checked=move || change_type.get() == ct
                                        on:change=move |_| form.update(|f| f.change_type = ct)
                                    />
                                    {ct.label()}
                                </label>
                            }
                        })
                        .collect_view()}
                </fieldset>

                {move || match change_type.get() {
                    ChangeType::NewHours => view! { <WeeklyHoursSection state=state /> }.into_any(),
                    ChangeType::TemporaryClose => view! { <TemporaryCloseSection state=state /> }.into_any(),
                    ChangeType::HolidayHours => view! { <HolidayHoursSection state=state /> }.into_any(),
                }}

                <div class="form-actions">
                    <button type="button" class="btn btn-outline" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Submit Change" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

/// Seven rows, Monday first, each with a start and end time
#[component]
fn WeeklyHoursSection(state: FormState<StoreHoursForm>) -> impl IntoView {
    let FormState { form, errors, .. } = state;
    let time = move |day: usize, end: bool| {
        form.with(|f| {
            f.hours
                .get(day)
                .map(|row| if end { row.end_time.clone() } else { row.start_time.clone() })
                .unwrap_or_default()
        })
    };
    let set_time = move |day: usize, end: bool, value: String| {
        form.update(|f| {
            if let Some(row) = f.hours.get_mut(day) {
                if end {
                    row.end_time = value;
                } else {
                    row.start_time = value;
                }
            }
        })
    };

    view! {
        <section class="form-section">
            <h3>"Weekly Hours"</h3>
            <div class="hours-table">
                <div class="hours-row hours-head">
                    <span>"Day"</span>
                    <span>"Start Time"</span>
                    <span>"End Time"</span>
                </div>
                {WEEKDAYS
                    .iter()
                    .enumerate()
                    .map(|(i, day)| {
                        view! {
                            <div class="hours-row">
                                <span class="hours-day">{*day}</span>
                                <input
                                    type="time"
                                    prop:value=move || time(i, false)
                                    on:input=move |ev| set_time(i, false, event_target_value(&ev))
                                />
                                <input
                                    type="time"
                                    prop:value=move || time(i, true)
                                    on:input=move |ev| set_time(i, true, event_target_value(&ev))
                                />
                            </div>
                            <FieldError errors=errors field=format!("hours.{}", day) />
                        }
                    })
                    .collect_view()}
            </div>
            <FieldError errors=errors field="hours" />
        </section>
    }
}

#[component]
fn TemporaryCloseSection(state: FormState<StoreHoursForm>) -> impl IntoView {
    let FormState { form, errors, .. } = state;

    view! {
        <section class="form-section">
            <h3>"Temporary Close"</h3>
            <DateField
                label="Close Date"
                field="changeDate"
                required=true
                value=text(form, |f| &f.change_date)
                on_input=move |v| form.update(|f| f.change_date = v)
                errors=errors
            />
            <TextAreaField
                label="Reason"
                field="changeNote"
                required=true
                placeholder="Why is the store closing?"
                value=text(form, |f| &f.change_note)
                on_input=move |v| form.update(|f| f.change_note = v)
                errors=errors
            />
        </section>
    }
}

/// Editable holiday rows; blank rows are ignored on submit
#[component]
fn HolidayHoursSection(state: FormState<StoreHoursForm>) -> impl IntoView {
    let FormState { form, errors, .. } = state;
    let count = Memo::new(move |_| form.with(|f| f.holidays.len()));

    let cell = move |i: usize, get: fn(&HolidayEntry) -> &String| {
        form.with(|f| f.holidays.get(i).map(|h| get(h).clone()).unwrap_or_default())
    };
    let set_cell = move |i: usize, set: fn(&mut HolidayEntry, String), value: String| {
        form.update(|f| {
            if let Some(entry) = f.holidays.get_mut(i) {
                set(entry, value);
            }
        })
    };

    view! {
        <section class="form-section">
            <h3>"Holiday Hours"</h3>
            <div class="holiday-table">
                <div class="holiday-row holiday-head">
                    <span>"Date"</span>
                    <span>"Holiday Name"</span>
                    <span>"Start Time"</span>
                    <span>"End Time"</span>
                    <span></span>
                </div>
                {move || {
                    (0..count.get())
                        .map(|i| {
                            view! {
                                <div class="holiday-row">
                                    <input
                                        type="date"
                                        prop:value=move || cell(i, |h| &h.date)
                                        on:input=move |ev| set_cell(i, |h, v| h.date = v, event_target_value(&ev))
                                    />
                                    <input
                                        type="text"
                                        placeholder="e.g. Thanksgiving"
                                        prop:value=move || cell(i, |h| &h.name)
                                        on:input=move |ev| set_cell(i, |h, v| h.name = v, event_target_value(&ev))
                                    />
                                    <input
                                        type="time"
                                        prop:value=move || cell(i, |h| &h.start_time)
                                        on:input=move |ev| {
                                            set_cell(i, |h, v| h.start_time = v, event_target_value(&ev))
                                        }
                                    />
                                    <input
                                        type="time"
                                        prop:value=move || cell(i, |h| &h.end_time)
                                        on:input=move |ev| set_cell(i, |h, v| h.end_time = v, event_target_value(&ev))
                                    />
                                    <button
                                        type="button"
                                        class="btn btn-ghost row-remove"
                                        on:click=move |_| {
                                            form.update(|f| f.remove_holiday(i));
                                            // Row errors are keyed by position
                                            errors.update(|e| e.remove_prefixed("holidays."));
                                        }
                                    >
                                        "×"
                                    </button>
                                </div>
                                <FieldError errors=errors field=format!("holidays.{}", i) />
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button type="button" class="btn btn-link" on:click=move |_| form.update(|f| f.add_holiday())>
                "+ Add holiday"
            </button>
            <FieldError errors=errors field="holidays" />
        </section>
    }
}

#[component]
pub fn StoreHoursDetailsModal(
    change: StoreHoursChange,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Hours Change {}", change.id);

    let section = match change.change_type {
        ChangeType::NewHours => view! {
            <div class="detail-section">
                <h4>"Weekly Hours"</h4>
                <div class="hours-table">
                    <div class="hours-row hours-head">
                        <span>"Day"</span>
                        <span>"Start Time"</span>
                        <span>"End Time"</span>
                    </div>
                    {change
                        .hours
                        .iter()
                        .map(|h| {
                            view! {
                                <div class="hours-row">
                                    <span class="hours-day">{h.day.clone()}</span>
                                    <span>{h.start_time.clone()}</span>
                                    <span>{h.end_time.clone()}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
        ChangeType::TemporaryClose => view! {
            <div class="detail-list">
                <DetailRow label="Close Date" value=change.change_date.clone().unwrap_or_default() />
                <DetailRow label="Reason" value=change.change_note.clone().unwrap_or_default() />
            </div>
        }
        .into_any(),
        ChangeType::HolidayHours => view! {
            <div class="detail-section">
                <h4>"Holidays"</h4>
                <div class="holiday-table">
                    <div class="holiday-row holiday-head">
                        <span>"Date"</span>
                        <span>"Holiday Name"</span>
                        <span>"Start Time"</span>
                        <span>"End Time"</span>
                    </div>
                    {change
                        .holidays
                        .clone()
                        .unwrap_or_default()
                        .into_iter()
                        .map(|h| {
                            view! {
                                <div class="holiday-row">
                                    <span>{h.date}</span>
                                    <span>{h.name}</span>
                                    <span>{h.start_time}</span>
                                    <span>{h.end_time}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        }
        .into_any(),
    };

    view! {
        <Modal title=title status=change.status on_close=on_close>
            <div class="detail-list">
                <DetailRow label="Store Name" value=change.store_name.joined() />
                <DetailRow label="Change Type" value=change.change_type.label() />
                <DetailRow label="Manager" value=change.manager_name.clone() />
                <DetailRow label="Email" value=change.manager_email.clone() />
                <DetailRow label="Submitted" value=change.submitted_date.clone() />
            </div>
            {section}
        </Modal>
    }
}
