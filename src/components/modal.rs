//! Modal Component
//!
//! Overlay dialog. Clicking the backdrop or the close button calls `on_close`;
//! the parent decides whether the modal is mounted.

use intake_domain::RequestStatus;
use leptos::prelude::*;

use super::StatusBadge;

#[component]
pub fn Modal(
    #[prop(into)] title: String,
    #[prop(into)] on_close: Callback<()>,
    /// Badge shown after the title (details views)
    #[prop(optional)]
    status: Option<RequestStatus>,
    /// Extra class for the dialog box, e.g. `modal-wide`
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let dialog_class = if class.is_empty() {
        "modal".to_string()
    } else {
        format!("modal {}", class)
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class=dialog_class on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">
                        {title}
                        {status.map(|status| view! { <StatusBadge status=status /> })}
                    </h2>
                    <button type="button" class="modal-close" on:click=move |_| on_close.run(())>
                        "×"
                    </button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
