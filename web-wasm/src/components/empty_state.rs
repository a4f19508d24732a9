//! 0件表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>"レシピが見つかりません"</h3>
            <p>"検索条件やジャンルを変えてみてください"</p>
        </div>
    }
}
