//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every route renders inside the same chrome: a collapsible sidebar on the
//! left and a header with the active-alert badge on top. Shared UI state, the
//! toast queue and the cluster overview poll are provided here so any page or
//! component can reach them through `expect_context`.
//!
//! The overview poll lives at the root because the header badge, the stats
//! cards and the resource gauges all render from the same snapshot.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::components::sidebar::Sidebar;
use crate::components::toast_stack::ToastStack;
use crate::net::api;
use crate::net::poll::{OVERVIEW_INTERVAL, use_polling};
use crate::pages::{
    alerts::AlertsPage, dashboard::DashboardPage, infrastructure::InfrastructurePage, not_found::NotFoundPage,
    service_detail::ServiceDetailPage, services::ServicesPage, settings::SettingsPage, vm_detail::VmDetailPage,
};
use crate::state::toast::ToastState;
use crate::state::ui::{SIDEBAR_COLLAPSED_KEY, UiState};
use crate::util::ui_persistence::load_json;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(ui);
    provide_context(toasts);
    provide_context(use_polling(|| Some(()), Some(OVERVIEW_INTERVAL), |()| api::fetch_overview()));

    // Persisted chrome flags are applied after hydration so the first client
    // render matches the server markup.
    Effect::new(move || {
        if let Some(collapsed) = load_json::<bool>(SIDEBAR_COLLAPSED_KEY) {
            ui.update(|u| u.sidebar_collapsed = collapsed);
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/nexops.css"/>
        <Title text="NexOps"/>

        <Router>
            <div class="app-shell">
                <Sidebar/>
                <div class="app-shell__main">
                    <Header/>
                    <main class="app-shell__content">
                        <Routes fallback=|| view! { <NotFoundPage/> }>
                            <Route path=StaticSegment("") view=DashboardPage/>
                            <Route path=StaticSegment("infrastructure") view=InfrastructurePage/>
                            <Route path=(StaticSegment("infrastructure"), ParamSegment("id")) view=VmDetailPage/>
                            <Route path=StaticSegment("services") view=ServicesPage/>
                            <Route path=(StaticSegment("services"), ParamSegment("id")) view=ServiceDetailPage/>
                            <Route path=StaticSegment("alerts") view=AlertsPage/>
                            <Route path=StaticSegment("settings") view=SettingsPage/>
                        </Routes>
                    </main>
                </div>
            </div>
            <ToastStack/>
        </Router>
    }
}
