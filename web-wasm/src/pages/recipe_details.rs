//! 詳細画面
//!
//! ナビゲーションから渡されたidで1件取得するだけの独立した状態機械。
//! 一覧側のフィルタ状態には一切触れない。idが変わると親がこの
//! コンポーネントを作り直すので、必ずLoadingから始まる。

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use recipe_web_common::{DetailState, Recipe};

use crate::api;
use crate::components::{
    dark_mode_toggle::DarkModeToggle,
    error_view::ErrorView,
    loader::Loader,
    recipe_card::difficulty_class,
};
use crate::theme::Theme;

#[component]
pub fn RecipeDetails<FB>(
    id: i64,
    on_back: FB,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView
where
    FB: Fn(()) + 'static + Clone + Send,
{
    let (state, set_state) = signal(DetailState::Loading);

    // 同じidで再取得（初回ロードとリトライ）
    let load = move || {
        set_state.set(DetailState::Loading);
        spawn_local(async move {
            match api::fetch_recipe_by_id(id).await {
                Ok(recipe) => set_state.set(DetailState::Populated(recipe)),
                Err(e) => set_state.set(DetailState::Error(e.to_string())),
            }
        });
    };
    let on_retry = move |_: ()| load();

    load();

    let on_back_btn = on_back.clone();

    view! {
        <div class="page">
            <header class="page-header">
                <div class="header-row">
                    <button
                        class="btn btn-secondary"
                        on:click=move |_| on_back_btn(())
                    >
                        "← 一覧へ戻る"
                    </button>
                    <DarkModeToggle theme=theme set_theme=set_theme />
                </div>
            </header>

            <main class="page-main">
                {move || match state.get() {
                    DetailState::Loading => view! {
                        <div class="loader-screen">
                            <Loader />
                        </div>
                    }
                        .into_any(),
                    DetailState::Error(message) => view! {
                        <ErrorView message=message on_retry=on_retry />
                    }
                        .into_any(),
                    DetailState::Populated(recipe) => view! { <RecipeBody recipe=recipe /> }
                        .into_any(),
                }}
            </main>
        </div>
    }
}

/// 取得済みレシピの本文
#[component]
fn RecipeBody(recipe: Recipe) -> impl IntoView {
    let filled_stars = recipe.rating.floor() as usize;

    view! {
        <article class="recipe-details">
            <div class="detail-hero">
                <img src=recipe.image.clone() alt=recipe.name.clone() />
                <span class=format!("badge {}", difficulty_class(&recipe.difficulty))>
                    {recipe.difficulty.clone()}
                </span>
            </div>

            <section class="detail-info">
                <h1>{recipe.name.clone()}</h1>
                <div class="meta-row">
                    <span class="meta-item">{recipe.cuisine.clone()}</span>
                    <span class="meta-item stars">
                        {(0..5)
                            .map(|i| {
                                let class = if i < filled_stars { "star filled" } else { "star" };
                                view! { <span class=class>"★"</span> }
                            })
                            .collect_view()}
                        <span class="rating-value">{format!("{:.1}", recipe.rating)}</span>
                    </span>
                    <span class="meta-item">{format!("準備 {}分", recipe.prep_time_minutes)}</span>
                    <span class="meta-item">{format!("調理 {}分", recipe.cook_time_minutes)}</span>
                    <span class="meta-item">{format!("{}人分", recipe.servings)}</span>
                    <span class="meta-item">{format!("{} kcal", recipe.calories_per_serving)}</span>
                </div>
                <div class="tag-row">
                    {recipe
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="tag">{tag.clone()}</span> })
                        .collect_view()}
                </div>
            </section>

            <section class="detail-section">
                <h2>"材料"</h2>
                <ul class="ingredient-list">
                    {recipe
                        .ingredients
                        .iter()
                        .map(|item| view! { <li>{item.clone()}</li> })
                        .collect_view()}
                </ul>
            </section>

            <section class="detail-section">
                <h2>"作り方"</h2>
                <ol class="instruction-list">
                    {recipe
                        .instructions
                        .iter()
                        .enumerate()
                        .map(|(i, step)| {
                            view! {
                                <li>
                                    <span class="step-number">{i + 1}</span>
                                    <p>{step.clone()}</p>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </section>
        </article>
    }
}
