//! 検索バーコンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar<F>(on_search: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    let (query, set_query) = signal(String::new());

    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder="レシピ名で検索..."
                prop:value=move || query.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_query.set(value.clone());
                    on_search(value);
                }
            />
        </div>
    }
}
