//! エラー表示コンポーネント
//!
//! メッセージと再試行ボタンの組。再試行の中身（どの操作をやり直すか）は
//! 呼び出し側が決める。

use leptos::prelude::*;

#[component]
pub fn ErrorView<F>(message: String, on_retry: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <div class="error-view">
            <p class="error-icon">"!"</p>
            <h3>"エラーが発生しました"</h3>
            <p class="error-message">{message}</p>
            <button
                class="btn btn-primary"
                on:click=move |_| on_retry(())
            >
                "再試行"
            </button>
        </div>
    }
}
