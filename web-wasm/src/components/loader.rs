//! スピナーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! { <div class="spinner" role="status"></div> }
}
