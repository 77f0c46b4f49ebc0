//! Price Change Tab

use intake_domain::{PriceChange, PriceChangeForm, POP_OPTIONS, PRICE_REQUEST_TYPES};
use leptos::prelude::*;

use super::fields::{list, text};
use super::{
    DateField, DetailRow, Modal, RequestTable, SectionHeader, SelectField, StoreNamesField,
    TextAreaField, TextField,
};
use crate::store::{use_app_store, StoredRecords};
use crate::submit::FormState;

/// Prices are stored as typed; show them with a single leading `$`
fn money(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() || value.starts_with('$') {
        value.to_string()
    } else {
        format!("${}", value)
    }
}

fn price_cells(change: &PriceChange) -> Vec<String> {
    vec![
        change.store_name.joined(),
        money(&change.current_price),
        money(&change.updated_price),
        change.submitted_date.clone(),
    ]
}

#[component]
pub fn PriceChanges() -> impl IntoView {
    let store = use_app_store();
    let form_open = RwSignal::new(false);
    let details = RwSignal::new(None::<PriceChange>);
    let changes = Signal::derive(move || PriceChange::read_all(store));

    view! {
        <div class="section">
            <SectionHeader
                title="Price Change Center"
                subtitle="Submit and track price change requests"
            >
                <button type="button" class="btn" on:click=move |_| form_open.set(true)>
                    "+ New Price Change"
                </button>
            </SectionHeader>

            <RequestTable
                records=changes
                columns=&["Store Name", "Current Price", "Updated Price", "Submitted"]
                cells=price_cells
                on_view=move |change| details.set(Some(change))
                empty_title="No changes yet"
                empty_message="Click \"New Price Change\" to submit your first price change."
                new_label="+ New Price Change"
                on_new=move |_: ()| form_open.set(true)
            />

            <Show when=move || form_open.get()>
                <PriceChangeModal on_close=move |_: ()| form_open.set(false) />
            </Show>
            {move || {
                details
                    .get()
                    .map(|change| {
                        view! {
                            <PriceChangeDetailsModal
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
pub fn PriceChangeModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let state = FormState::new(PriceChangeForm::default());
    let FormState { form, errors, submitting } = state;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit(store, on_close);
    };

    view! {
        <Modal title="New Price Change" on_close=on_close>
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
                <div class="form-grid">
                    <SelectField
                        label="Price Change Request"
                        field="priceChangeRequest"
                        required=true
                        options=PRICE_REQUEST_TYPES
                        placeholder="Select type..."
                        value=text(form, |f| &f.price_change_request)
                        on_change=move |v| form.update(|f| f.price_change_request = v)
                        errors=errors
                    />
                    <DateField
                        label="Effective Date"
                        field="effectiveDate"
                        required=true
                        value=text(form, |f| &f.effective_date)
                        on_input=move |v| form.update(|f| f.effective_date = v)
                        errors=errors
                    />
                </div>
                <SelectField
                    label="POP Needed"
                    field="popNeeded"
                    required=true
                    options=POP_OPTIONS
                    value=text(form, |f| &f.pop_needed)
                    on_change=move |v| form.update(|f| f.pop_needed = v)
                    errors=errors
                />
                <TextAreaField
                    label="Description"
                    field="description"
                    required=true
                    placeholder="Describe the price change reason..."
                    value=text(form, |f| &f.description)
                    on_input=move |v| form.update(|f| f.description = v)
                    errors=errors
                />
                <div class="form-grid">
                    <TextField
                        label="Current Price"
                        field="currentPrice"
                        required=true
                        placeholder="0.00"
                        value=text(form, |f| &f.current_price)
                        on_input=move |v| form.update(|f| f.current_price = v)
                        errors=errors
                    />
                    <TextField
                        label="Updated Price"
                        field="updatedPrice"
                        required=true
                        placeholder="0.00"
                        value=text(form, |f| &f.updated_price)
                        on_input=move |v| form.update(|f| f.updated_price = v)
                        errors=errors
                    />
                </div>
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

#[component]
pub fn PriceChangeDetailsModal(
    change: PriceChange,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Price Change {}", change.id);

    view! {
        <Modal title=title status=change.status on_close=on_close>
            <div class="detail-list">
                <DetailRow label="Store Name" value=change.store_name.joined() />
                <DetailRow label="Manager" value=change.manager_name />
                <DetailRow label="Email" value=change.manager_email />
                <DetailRow label="Request Type" value=change.price_change_request />
                <DetailRow label="Effective Date" value=change.effective_date />
                <DetailRow label="POP Needed" value=change.pop_needed />
                <DetailRow label="Description" value=change.description />
                <DetailRow label="Current Price" value=money(&change.current_price) />
                <DetailRow label="Updated Price" value=money(&change.updated_price) />
                <DetailRow label="Submitted" value=change.submitted_date />
            </div>
        </Modal>
    }
}
