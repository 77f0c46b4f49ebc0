//! Custom Design (LSM) Request Components

use intake_domain::{
    dates, toggle_option, LsmRequest, LsmRequestForm, LSM_COLOR_OPTIONS, LSM_FILE_TYPE_OPTIONS,
    LSM_TYPES,
};
use leptos::prelude::*;

use super::fields::{list, text};
use super::{CheckboxGroup, DateField, DetailRow, Modal, TextAreaField, TextField};
use crate::store::use_app_store;
use crate::submit::FormState;

#[component]
pub fn LsmRequestModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let state = FormState::new(LsmRequestForm::default());
    let FormState { form, errors, submitting } = state;
    let request_date = dates::format_us(dates::today());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        state.submit(store, on_close);
    };

    view! {
        <Modal title="LSM Request Form" class="modal-wide" on_close=on_close>
            <form class="intake-form" on:submit=on_submit>
                <section class="form-section">
                    <h3>"Contact Information"</h3>
                    <div class="form-grid">
                        <div class="form-field">
                            <label for="requestDate">"Request Date"</label>
                            <input id="requestDate" type="text" readonly=true value=request_date />
                        </div>
                        <TextField
                            label="Store #/Location"
                            field="storeLocation"
                            required=true
                            placeholder="e.g. #1234 - Downtown LA"
                            value=text(form, |f| &f.store_location)
                            on_input=move |v| form.update(|f| f.store_location = v)
                            errors=errors
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
                            field="contactEmail"
                            input_type="email"
                            required=true
                            placeholder="you@example.com"
                            value=text(form, |f| &f.contact_email)
                            on_input=move |v| form.update(|f| f.contact_email = v)
                            errors=errors
                        />
                        <TextField
                            label="Phone"
                            field="contactPhone"
                            input_type="tel"
                            placeholder="(555) 123-4567"
                            value=text(form, |f| &f.contact_phone)
                            on_input=move |v| form.update(|f| f.contact_phone = v)
                            errors=errors
                        />
                    </div>
                </section>

                <section class="form-section">
                    <CheckboxGroup
                        label="Type of LSM Request"
                        field="lsmTypes"
                        required=true
                        options=LSM_TYPES
                        selected=list(form, |f| &f.lsm_types)
                        on_toggle=move |v: String| form.update(|f| toggle_option(&mut f.lsm_types, &v))
                        errors=errors
                    />
                </section>

                <section class="form-section">
                    <h3>"Message"</h3>
                    <TextAreaField
                        label="Desired LSM Message(s)"
                        field="desiredMessage"
                        required=true
                        placeholder="Enter your desired marketing message..."
                        value=text(form, |f| &f.desired_message)
                        on_input=move |v| form.update(|f| f.desired_message = v)
                        errors=errors
                    />
                </section>

                <section class="form-section">
                    <h3>"Coupon Information"</h3>
                    <div class="form-grid">
                        <TextField
                            label="Coupon Offer(s)"
                            field="couponOffers"
                            placeholder="e.g. Buy 1 Get 1 Free"
                            value=text(form, |f| &f.coupon_offers)
                            on_input=move |v| form.update(|f| f.coupon_offers = v)
                            errors=errors
                        />
                        <DateField
                            label="Coupon Expiration Date"
                            field="couponExpirationDate"
                            value=text(form, |f| &f.coupon_expiration_date)
                            on_input=move |v| form.update(|f| f.coupon_expiration_date = v)
                            errors=errors
                        />
                    </div>
                    <p class="form-note">
                        "Note: If coupon needs a unique code, please submit a separate Portal Request."
                    </p>
                </section>

                <TextAreaField
                    label="Special Instructions"
                    field="specialInstructions"
                    placeholder="Any special instructions for the design..."
                    value=text(form, |f| &f.special_instructions)
                    on_input=move |v| form.update(|f| f.special_instructions = v)
                    errors=errors
                />

                <section class="form-section">
                    <h3>"File Details"</h3>
                    <div class="form-grid form-grid-3">
                        <TextField
                            label="Width"
                            field="sizeWidth"
                            placeholder="e.g. 8.5\""
                            value=text(form, |f| &f.size_width)
                            on_input=move |v| form.update(|f| f.size_width = v)
                            errors=errors
                        />
                        <TextField
                            label="Height"
                            field="sizeHeight"
                            placeholder="e.g. 11\""
                            value=text(form, |f| &f.size_height)
                            on_input=move |v| form.update(|f| f.size_height = v)
                            errors=errors
                        />
                        <TextField
                            label="Quantity"
                            field="quantity"
                            placeholder="e.g. 500"
                            value=text(form, |f| &f.quantity)
                            on_input=move |v| form.update(|f| f.quantity = v)
                            errors=errors
                        />
                    </div>
                    <CheckboxGroup
                        label="Color"
                        field="color"
                        options=LSM_COLOR_OPTIONS
                        selected=list(form, |f| &f.color)
                        on_toggle=move |v: String| form.update(|f| toggle_option(&mut f.color, &v))
                        errors=errors
                    />
                    <CheckboxGroup
                        label="File Type"
                        field="fileType"
                        options=LSM_FILE_TYPE_OPTIONS
                        selected=list(form, |f| &f.file_type)
                        on_toggle=move |v: String| form.update(|f| toggle_option(&mut f.file_type, &v))
                        errors=errors
                    />
                    <TextAreaField
                        label="Special Instructions for File"
                        field="fileSpecialInstructions"
                        rows=2
                        placeholder="Any special instructions for the file..."
                        value=text(form, |f| &f.file_special_instructions)
                        on_input=move |v| form.update(|f| f.file_special_instructions = v)
                        errors=errors
                    />
                </section>

                <section class="form-section">
                    <h3>"Due Dates"</h3>
                    <div class="form-grid form-grid-3">
                        <DateField
                            label="Desired 1st Round"
                            field="desired1stRoundDate"
                            value=text(form, |f| &f.desired_first_round_date)
                            on_input=move |v| form.update(|f| f.desired_first_round_date = v)
                            errors=errors
                        />
                        <DateField
                            label="Art Due Date"
                            field="artDueDate"
                            value=text(form, |f| &f.art_due_date)
                            on_input=move |v| form.update(|f| f.art_due_date = v)
                            errors=errors
                        />
                        <DateField
                            label="Publication Start"
                            field="publicationStartDate"
                            value=text(form, |f| &f.publication_start_date)
                            on_input=move |v| form.update(|f| f.publication_start_date = v)
                            errors=errors
                        />
                    </div>
                    <p class="form-note">"Note: Please allow 5-7 business days for the design process."</p>
                </section>

                <TextAreaField
                    label="Additional Instructions"
                    field="additionalInstructions"
                    placeholder="Any additional instructions or notes..."
                    value=text(form, |f| &f.additional_instructions)
                    on_input=move |v| form.update(|f| f.additional_instructions = v)
                    errors=errors
                />

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
pub fn LsmRequestDetailsModal(
    request: LsmRequest,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let title = format!("Custom Design Request {}", request.id);
    let size = match (request.size_width.trim(), request.size_height.trim()) {
        ("", "") => String::new(),
        (w, h) => format!("{} x {}", w, h),
    };

    view! {
        <Modal title=title status=request.status class="modal-wide" on_close=on_close>
            <div class="detail-list">
                <DetailRow label="Request Date" value=request.request_date />
                <DetailRow label="Store/Location" value=request.store_location.joined() />
                <DetailRow label="Contact" value=request.contact_name />
                <DetailRow label="Email" value=request.contact_email />
                <DetailRow label="Phone" value=request.contact_phone />
                <DetailRow label="LSM Types" value=request.lsm_types.join(", ") />
                <DetailRow label="Message" value=request.desired_message />
                <DetailRow label="Coupon Offers" value=request.coupon_offers />
                <DetailRow label="Coupon Expires" value=request.coupon_expiration_date />
                <DetailRow label="Special Instructions" value=request.special_instructions />
                <DetailRow label="Size" value=size />
                <DetailRow label="Color" value=request.color.join(", ") />
                <DetailRow label="File Type" value=request.file_type.join(", ") />
                <DetailRow label="Quantity" value=request.quantity />
                <DetailRow label="File Instructions" value=request.file_special_instructions />
                <DetailRow label="Desired 1st Round" value=request.desired_first_round_date />
                <DetailRow label="Art Due" value=request.art_due_date />
                <DetailRow label="Publication Start" value=request.publication_start_date />
                <DetailRow label="Additional Instructions" value=request.additional_instructions />
                <DetailRow label="Submitted" value=request.submitted_date />
            </div>
        </Modal>
    }
}
