//! ローディング中のプレースホルダカード

use leptos::prelude::*;

#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="recipe-card skeleton">
            <div class="skeleton-image"></div>
            <div class="card-body">
                <div class="skeleton-line wide"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line narrow"></div>
            </div>
        </div>
    }
}
