//! テーマ切り替えボタン

use leptos::prelude::*;

use crate::theme::Theme;

#[component]
pub fn DarkModeToggle(
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView {
    view! {
        <button
            class="btn btn-secondary theme-toggle"
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            {move || match theme.get() {
                Theme::Light => "ダーク",
                Theme::Dark => "ライト",
            }}
        </button>
    }
}
