//! Collapsible left navigation.
//!
//! DESIGN
//! ======
//! Plain `<a href>` links grouped under "Overview" and "System". The active
//! entry is derived from the current path; the collapse flag lives in
//! `UiState` and is persisted to `localStorage`.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::{SIDEBAR_COLLAPSED_KEY, UiState};
use crate::util::ui_persistence::save_json;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct NavGroup {
    pub label: &'static str,
    pub items: &'static [NavItem],
}

pub static NAV_GROUPS: [NavGroup; 2] = [
    NavGroup {
        label: "Overview",
        items: &[
            NavItem { name: "Dashboard", href: "/", glyph: "▦" },
            NavItem { name: "Infrastructure", href: "/infrastructure", glyph: "▤" },
            NavItem { name: "Services", href: "/services", glyph: "◈" },
        ],
    },
    NavGroup {
        label: "System",
        items: &[
            NavItem { name: "Alerts", href: "/alerts", glyph: "◉" },
            NavItem { name: "Settings", href: "/settings", glyph: "⚙" },
        ],
    },
];

/// The root only matches itself; other entries match their whole subtree.
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    pathname == href || pathname.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;
    let collapsed = move || ui.get().sidebar_collapsed;

    let on_toggle = move |_| {
        let mut next = false;
        ui.update(|u| next = u.toggle_sidebar());
        save_json(SIDEBAR_COLLAPSED_KEY, &next);
    };

    view! {
        <aside class="sidebar" class:sidebar--collapsed=collapsed>
            <div class="sidebar__brand">
                <a href="/" class="sidebar__logo">
                    <span class="sidebar__logo-mark">"N"</span>
                    <Show when=move || !collapsed()>
                        <span class="sidebar__logo-text">"NexOps"</span>
                    </Show>
                </a>
            </div>
            <nav class="sidebar__nav">
                {NAV_GROUPS
                    .iter()
                    .map(|group| {
                        let label = group.label;
                        view! {
                            <div class="sidebar__group">
                                <Show when=move || !collapsed()>
                                    <p class="sidebar__group-label">{label}</p>
                                </Show>
                                {group
                                    .items
                                    .iter()
                                    .map(|item| {
                                        let href = item.href;
                                        let name = item.name;
                                        let active = move || is_active(href, &pathname.get());
                                        view! {
                                            <a
                                                href=href
                                                class="sidebar__link"
                                                class:sidebar__link--active=active
                                                title=name
                                            >
                                                <span class="sidebar__glyph" aria-hidden="true">{item.glyph}</span>
                                                <Show when=move || !collapsed()>
                                                    <span class="sidebar__label">{name}</span>
                                                </Show>
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </nav>
            <button
                class="sidebar__toggle"
                on:click=on_toggle
                title=move || if collapsed() { "Expand sidebar" } else { "Collapse sidebar" }
            >
                {move || if collapsed() { "›" } else { "‹" }}
            </button>
        </aside>
    }
}
