//! Store Intake Portal App
//!
//! Header, four tabs, footer. Saved requests are read from local storage once
//! at startup; the store identity is fetched from the server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    DesignRequests, Footer, Header, MarketingAssetsTab, PriceChanges, StoreHoursChanges, Tab,
    TabBar,
};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::load());
    provide_context(store);
    let current_tab = RwSignal::new(Tab::default());

    // Load portal config on mount; defaults stay if the server has none
    Effect::new(move |_| {
        spawn_local(async move {
            match api::load_portal_config().await {
                Ok(config) => {
                    web_sys::console::log_1(
                        &format!("[APP] Portal config for store #{}", config.store_number).into(),
                    );
                    store.portal().set(config);
                }
                Err(e) => {
                    web_sys::console::warn_1(&format!("[APP] Using default portal config: {}", e).into())
                }
            }
        });
    });

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content">
                <TabBar current=current_tab />
                {move || match current_tab.get() {
                    Tab::DesignRequests => view! { <DesignRequests /> }.into_any(),
                    Tab::MarketingAssets => view! { <MarketingAssetsTab /> }.into_any(),
                    Tab::StoreHours => view! { <StoreHoursChanges /> }.into_any(),
                    Tab::PriceChange => view! { <PriceChanges /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
