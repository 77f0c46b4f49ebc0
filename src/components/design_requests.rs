//! Design Requests Tab
//!
//! Store design requests and custom (LSM) design requests, plus the embedded
//! evergreen order form.

use intake_domain::{DesignRequest, DesignRequestForm, LsmRequest, DESIGN_REQUEST_TYPES};
use leptos::prelude::*;

use super::fields::text;
use super::{
    DateField, DetailRow, FileNameField, LsmRequestDetailsModal, LsmRequestModal,
    MarketingAssetsModal, Modal, RequestTable, SectionHeader, SelectField, TextAreaField,
    TextField,
};
use crate::store::{use_app_store, AppStateStoreFields, StoredRecords};
use crate::submit::FormState;

fn design_cells(request: &DesignRequest) -> Vec<String> {
    vec![
        request.request_type.clone(),
        request.submitted_date.clone(),
        request.eta.clone(),
    ]
}

fn lsm_cells(request: &LsmRequest) -> Vec<String> {
    vec![
        request.store_location.joined(),
        request.lsm_types.join(", "),
        request.submitted_date.clone(),
    ]
}

#[component]
pub fn DesignRequests() -> impl IntoView {
    let store = use_app_store();
    let form_open = RwSignal::new(false);
    let lsm_open = RwSignal::new(false);
    let order_form_open = RwSignal::new(false);
    let details = RwSignal::new(None::<DesignRequest>);
    let lsm_details = RwSignal::new(None::<LsmRequest>);

    let designs = Signal::derive(move || DesignRequest::read_all(store));
    let lsm_requests = Signal::derive(move || LsmRequest::read_all(store));

    view! {
        <div class="section">
            <SectionHeader
                title="Design Request Center"
                subtitle="Submit and track your marketing design requests"
            >
                <button type="button" class="btn btn-outline" on:click=move |_| order_form_open.set(true)>
                    "Evergreen Order Form"
                </button>
                <button type="button" class="btn btn-outline" on:click=move |_| lsm_open.set(true)>
                    "Custom Design Request"
                </button>
                <button type="button" class="btn" on:click=move |_| form_open.set(true)>
                    "+ New Request"
                </button>
            </SectionHeader>

            <RequestTable
                records=designs
                columns=&["Type", "Submitted", "ETA"]
                cells=design_cells
                on_view=move |request| details.set(Some(request))
                empty_title="No requests yet"
                empty_message="Click \"New Request\" to submit your first design request."
                new_label="+ New Request"
                on_new=move |_: ()| form_open.set(true)
            />

            <h3 class="subsection-title">"Custom Design Requests"</h3>
            <RequestTable
                records=lsm_requests
                columns=&["Store/Location", "LSM Types", "Submitted"]
                cells=lsm_cells
                on_view=move |request| lsm_details.set(Some(request))
                empty_title="No custom design requests yet"
                empty_message="Use \"Custom Design Request\" for print and digital LSM pieces."
            />

            <Show when=move || form_open.get()>
                <DesignRequestModal on_close=move |_: ()| form_open.set(false) />
            </Show>
            <Show when=move || lsm_open.get()>
                <LsmRequestModal on_close=move |_: ()| lsm_open.set(false) />
            </Show>
            <Show when=move || order_form_open.get()>
                <MarketingAssetsModal on_close=move |_: ()| order_form_open.set(false) />
            </Show>
            {move || {
                details
                    .get()
                    .map(|request| {
                        view! {
                            <DesignRequestDetailsModal
                                request=request
                                on_close=move |_: ()| details.set(None)
                            />
                        }
                    })
            }}
            {move || {
                lsm_details
                    .get()
                    .map(|request| {
                        view! {
                            <LsmRequestDetailsModal
                                request=request
                                on_close=move |_: ()| lsm_details.set(None)
                            />
                        }
                    })
            }}
        </div>
    }
}

/// New design request form; store identity comes from the portal config
#[component]
pub fn DesignRequestModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let portal = store.portal().get_untracked();
    let state = FormState::new(DesignRequestForm::for_store(
        portal.store_number,
        portal.store_name,
    ));
    let FormState { form, errors, submitting } = state;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit(store, on_close);
    };

    view! {
        <Modal title="New Design Request" on_close=on_close>
            <form class="intake-form" on:submit=on_submit>
                <div class="form-grid">
                    <TextField
                        label="Store Number"
                        field="storeNumber"
                        value=text(form, |f| &f.store_number)
                        on_input=|_: String| {}
                        errors=errors
                        readonly=true
                    />
                    <TextField
                        label="Store Name"
                        field="storeName"
                        value=text(form, |f| &f.store_name)
                        on_input=|_: String| {}
                        errors=errors
                        readonly=true
                    />
                </div>
                <TextField
                    label="Contact Name"
                    field="contactName"
                    required=true
                    placeholder="Your full name"
                    value=text(form, |f| &f.contact_name)
                    on_input=move |v| form.update(|f| f.contact_name = v)
                    errors=errors
                />
                <div class="form-grid">
                    <TextField
                        label="Email"
                        field="email"
                        input_type="email"
                        required=true
                        placeholder="you@example.com"
                        value=text(form, |f| &f.email)
                        on_input=move |v| form.update(|f| f.email = v)
                        errors=errors
                    />
                    <TextField
                        label="Phone (optional)"
                        field="phone"
                        input_type="tel"
                        placeholder="(555) 123-4567"
                        value=text(form, |f| &f.phone)
                        on_input=move |v| form.update(|f| f.phone = v)
                        errors=errors
                    />
                </div>
                <SelectField
                    label="Request Type"
                    field="requestType"
                    required=true
                    options=DESIGN_REQUEST_TYPES
                    placeholder="Select type..."
                    value=text(form, |f| &f.request_type)
                    on_change=move |v| form.update(|f| f.request_type = v)
                    errors=errors
                />
                <TextAreaField
                    label="Description"
                    field="description"
                    required=true
                    rows=4
                    placeholder="Describe what you need designed..."
                    value=text(form, |f| &f.description)
                    on_input=move |v| form.update(|f| f.description = v)
                    errors=errors
                />
                <div class="form-grid">
                    <DateField
                        label="Needed By Date"
                        field="neededByDate"
                        value=text(form, |f| &f.needed_by_date)
                        on_input=move |v| form.update(|f| f.needed_by_date = v)
                        errors=errors
                    />
                    <FileNameField
                        label="File Upload (optional)"
                        field="fileName"
                        on_pick=move |name| form.update(|f| f.file_name = name)
                    />
                </div>
                <div class="form-actions">
                    <button type="button" class="btn btn-outline" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn" disabled=move || submitting.get()>
                        {move || if submitting.get() { "Submitting..." } else { "Submit Request" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}

#[component]
pub fn DesignRequestDetailsModal(
    request: DesignRequest,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Request {}", request.id);
    let store = format!("{} (#{})", request.store_name, request.store_number);

    view! {
        <Modal title=title status=request.status on_close=on_close>
            <div class="detail-list">
                <DetailRow label="Request Type" value=request.request_type />
                <DetailRow label="Store" value=store />
                <DetailRow label="Contact" value=request.contact_name />
                <DetailRow label="Email" value=request.email />
                <DetailRow label="Phone" value=request.phone />
                <DetailRow label="Description" value=request.description />
                <DetailRow label="Needed By" value=request.needed_by_date />
                <DetailRow label="Submitted" value=request.submitted_date />
                <DetailRow label="ETA" value=request.eta />
                <DetailRow label="Attachment" value=request.file_name />
            </div>
        </Modal>
    }
}
