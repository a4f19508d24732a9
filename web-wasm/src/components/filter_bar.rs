//! ジャンルフィルタコンポーネント
//!
//! 選択肢は初回の一覧取得から導出されたものを表示するだけ。
//! 検索結果に応じて増減はしない。

use leptos::prelude::*;

#[component]
pub fn FilterBar<F>(
    cuisines: Signal<Vec<String>>,
    selected: Signal<String>,
    on_change: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <div class="filter-bar">
            <select on:change=move |ev| on_change(event_target_value(&ev))>
                <option value="" selected=move || selected.get().is_empty()>
                    "すべてのジャンル"
                </option>
                <For
                    each=move || cuisines.get()
                    key=|cuisine| cuisine.clone()
                    children=move |cuisine| {
                        let value = cuisine.clone();
                        let is_selected = {
                            let cuisine = cuisine.clone();
                            move || selected.get() == cuisine
                        };
                        view! {
                            <option value=value selected=is_selected>{cuisine}</option>
                        }
                    }
                />
            </select>
        </div>
    }
}
