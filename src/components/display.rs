//! Read-only display pieces shared by the list and details views

use intake_domain::RequestStatus;
use leptos::prelude::*;

#[component]
pub fn StatusBadge(status: RequestStatus) -> impl IntoView {
    view! { <span class=status.badge_class()>{status.as_str()}</span> }
}

/// Label/value row; blank values render as a dash
#[component]
pub fn DetailRow(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    let value = if value.trim().is_empty() {
        "—".to_string()
    } else {
        value
    };
    view! {
        <div class="detail-row">
            <span class="detail-label">{label}</span>
            <span class="detail-value">{value}</span>
        </div>
    }
}

/// Placeholder for a list with no records yet
#[component]
pub fn EmptyState(
    title: &'static str,
    message: &'static str,
    #[prop(optional)] action_label: Option<&'static str>,
    #[prop(optional, into)] on_action: Option<Callback<()>>,
) -> impl IntoView {
    let action = action_label.zip(on_action).map(|(label, on_action)| {
        view! {
            <button type="button" class="btn btn-outline" on:click=move |_| on_action.run(())>
                {label}
            </button>
        }
    });

    view! {
        <div class="empty-state">
            <h3>{title}</h3>
            <p>{message}</p>
            {action}
        </div>
    }
}

/// Section heading with the actions on the right
#[component]
pub fn SectionHeader(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <div>
                <h2>{title}</h2>
                <p class="section-subtitle">{subtitle}</p>
            </div>
            <div class="section-actions">{children()}</div>
        </div>
    }
}
