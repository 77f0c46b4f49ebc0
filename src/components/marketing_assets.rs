//! Marketing Assets Components
//!
//! The evergreen order form is a third-party form embedded by URL. The
//! Marketing Assets tab itself is a placeholder for now.

use leptos::prelude::*;

use super::{EmptyState, Modal};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MarketingAssetsModal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let store = use_app_store();
    let form_url = move || store.portal().with(|p| p.marketing_assets_form_url.clone());

    view! {
        <Modal title="Marketing Assets Form" class="modal-full" on_close=on_close>
            {move || match form_url() {
                Some(url) => view! {
                    <iframe
                        class="embedded-form"
                        src=url
                        allow="fullscreen"
                        title="Marketing Assets Form"
                    ></iframe>
                }
                .into_any(),
                None => view! {
                    <p class="form-note">"The order form is not configured for this portal."</p>
                }
                .into_any(),
            }}
        </Modal>
    }
}

#[component]
pub fn MarketingAssetsTab() -> impl IntoView {
    view! {
        <EmptyState
            title="Marketing Assets"
            message="Coming Soon: downloadable templates, logos, and brand assets."
        />
    }
}
