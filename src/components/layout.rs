//! Page chrome: header with store identity, tab bar, footer

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

const HELP_EMAIL: &str = "marketingdept@example.com";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    DesignRequests,
    MarketingAssets,
    StoreHours,
    PriceChange,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::DesignRequests,
        Tab::MarketingAssets,
        Tab::StoreHours,
        Tab::PriceChange,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::DesignRequests => "Design Requests",
            Tab::MarketingAssets => "Marketing Assets",
            Tab::StoreHours => "Store Hours Change",
            Tab::PriceChange => "Price Change",
        }
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();
    let portal = store.portal();

    view! {
        <header class="app-header">
            <div class="brand">
                <h1>"Store Portal"</h1>
                <p class="brand-subtitle">"Local Store Marketing Portal"</p>
            </div>
            <div class="store-identity">
                <p class="store-number">{move || format!("Store #{}", portal.with(|p| p.store_number.clone()))}</p>
                <p class="store-name">{move || portal.with(|p| p.store_name.clone())}</p>
            </div>
        </header>
    }
}

#[component]
pub fn TabBar(current: RwSignal<Tab>) -> impl IntoView {
    view! {
        <nav class="tab-bar">
            {Tab::ALL
                .iter()
                .map(|tab| {
                    let tab = *tab;
                    view! {
                        <button
                            type="button"
                            class=move || if current.get() == tab { "tab active" } else { "tab" }
                            on:click=move |_| current.set(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="app-footer">
            <p>
                "Need help? Contact: "
                <a href=format!("mailto:{}", HELP_EMAIL)>{HELP_EMAIL}</a>
            </p>
        </footer>
    }
}
