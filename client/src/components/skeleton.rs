//! Loading placeholders shown until the first response arrives.

use leptos::prelude::*;

#[component]
pub fn CardSkeleton() -> impl IntoView {
    view! {
        <div class="card skeleton skeleton--card" aria-busy="true">
            <span class="skeleton__line skeleton__line--short"></span>
            <span class="skeleton__line skeleton__line--wide"></span>
            <span class="skeleton__line"></span>
        </div>
    }
}

#[component]
pub fn TableSkeleton(#[prop(default = 5)] rows: usize) -> impl IntoView {
    view! {
        <div class="skeleton skeleton--table" aria-busy="true">
            <span class="skeleton__line skeleton__line--header"></span>
            {(0..rows).map(|_| view! { <span class="skeleton__line skeleton__line--row"></span> }).collect_view()}
        </div>
    }
}

#[component]
pub fn ChartSkeleton() -> impl IntoView {
    view! {
        <div class="card skeleton skeleton--chart" aria-busy="true">
            <span class="skeleton__line skeleton__line--short"></span>
            <span class="skeleton__block"></span>
        </div>
    }
}
