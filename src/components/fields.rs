//! Form Field Components
//!
//! Controlled inputs: each takes its current value as a signal and reports
//! edits through a callback. `field` is the wire name used as the element id
//! and as the key into [`FieldErrors`].

use intake_domain::FieldErrors;
use leptos::prelude::*;

/// Read one text field out of a form signal
pub fn text<F: Send + Sync + 'static>(form: RwSignal<F>, get: fn(&F) -> &String) -> Signal<String> {
    Signal::derive(move || form.with(|f| get(f).clone()))
}

/// Read one list field out of a form signal
pub fn list<F: Send + Sync + 'static>(
    form: RwSignal<F>,
    get: fn(&F) -> &Vec<String>,
) -> Signal<Vec<String>> {
    Signal::derive(move || form.with(|f| get(f).clone()))
}

/// Inline message for one field, if it has an error
#[component]
pub fn FieldError(errors: RwSignal<FieldErrors>, #[prop(into)] field: String) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(&field)
                .map(|message| view! { <p class="field-error">{message.to_string()}</p> })
        })
    }
}

#[component]
fn FieldLabel(field: &'static str, label: &'static str, required: bool) -> impl IntoView {
    view! {
        <label for=field>
            {label}
            {required.then(|| view! { <span class="required">" *"</span> })}
        </label>
    }
}

#[component]
pub fn TextField(
    label: &'static str,
    field: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] required: bool,
    /// `text`, `email`, `tel`, `date`, `time`...
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] readonly: bool,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <FieldLabel field=field label=label required=required />
            <input
                id=field
                type=input_type
                placeholder=placeholder
                readonly=readonly
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <FieldError errors=errors field=field />
        </div>
    }
}

/// `YYYY-MM-DD` date picker
#[component]
pub fn DateField(
    label: &'static str,
    field: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <TextField
            label=label
            field=field
            input_type="date"
            required=required
            value=value
            on_input=on_input
            errors=errors
        />
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    field: &'static str,
    value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <FieldLabel field=field label=label required=required />
            <textarea
                id=field
                rows=rows.to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
            <FieldError errors=errors field=field />
        </div>
    }
}

/// Dropdown over fixed options; the empty value means nothing chosen
#[component]
pub fn SelectField(
    label: &'static str,
    field: &'static str,
    options: &'static [&'static str],
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] required: bool,
    #[prop(default = "Select...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <FieldLabel field=field label=label required=required />
            <select
                id=field
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|opt| {
                        let opt = *opt;
                        view! {
                            <option value=opt prop:selected=move || value.with(|v| v == opt)>
                                {opt}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <FieldError errors=errors field=field />
        </div>
    }
}

/// Multi-select checkbox list
#[component]
pub fn CheckboxGroup(
    label: &'static str,
    field: &'static str,
    options: &'static [&'static str],
    selected: Signal<Vec<String>>,
    #[prop(into)] on_toggle: Callback<String>,
    errors: RwSignal<FieldErrors>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <fieldset class="form-field checkbox-group" id=field>
            <legend>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </legend>
            <div class="checkbox-grid">
                {options
                    .iter()
                    .map(|opt| {
                        let opt = *opt;
                        view! {
                            <label class="checkbox-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selected.with(|s| s.iter().any(|v| v == opt))
                                    on:change=move |_| on_toggle.run(opt.to_string())
                                />
                                {opt}
                            </label>
                        }
                    })
                    .collect_view()}
            </div>
            <FieldError errors=errors field=field />
        </fieldset>
    }
}

/// One text input per store, with add and remove buttons
#[component]
pub fn StoreNamesField(
    field: &'static str,
    names: Signal<Vec<String>>,
    #[prop(into)] on_edit: Callback<(usize, String)>,
    #[prop(into)] on_add: Callback<()>,
    #[prop(into)] on_remove: Callback<usize>,
    errors: RwSignal<FieldErrors>,
) -> impl IntoView {
    // Rows re-render only when the count changes, so typing keeps focus
    let count = Memo::new(move |_| names.with(Vec::len));

    view! {
        <div class="form-field store-names" id=field>
            <label>"Store Name(s)" <span class="required">" *"</span></label>
            {move || {
                (0..count.get())
                    .map(|i| {
                        view! {
                            <div class="store-name-row">
                                <input
                                    type="text"
                                    placeholder="e.g. Downtown LA"
                                    prop:value=move || names.with(|n| n.get(i).cloned().unwrap_or_default())
                                    on:input=move |ev| on_edit.run((i, event_target_value(&ev)))
                                />
                                <button
                                    type="button"
                                    class="btn btn-ghost row-remove"
                                    on:click=move |_| on_remove.run(i)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button type="button" class="btn btn-link" on:click=move |_| on_add.run(())>
                "+ Add another store"
            </button>
            <FieldError errors=errors field=field />
        </div>
    }
}

/// Attachment picker; only the chosen file's name is kept
#[component]
pub fn FileNameField(
    label: &'static str,
    field: &'static str,
    #[prop(into)] on_pick: Callback<String>,
) -> impl IntoView {
    let pick = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        let name = input
            .files()
            .and_then(|files| files.get(0))
            .map(|file| file.name())
            .unwrap_or_default();
        on_pick.run(name);
    };

    view! {
        <div class="form-field">
            <label for=field>{label}</label>
            <input id=field type="file" on:change=pick />
        </div>
    }
}
