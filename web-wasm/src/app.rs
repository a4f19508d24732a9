//! メインアプリケーションコンポーネント

use leptos::prelude::*;

use crate::pages::{home::Home, recipe_details::RecipeDetails};
use crate::theme;

/// 表示中の画面
///
/// レシピidから詳細画面へ、戻る操作で一覧へ。URLバーとの同期は持たない。
#[derive(Clone, PartialEq)]
pub enum Route {
    Home,
    Recipe(i64),
}

#[component]
pub fn App() -> impl IntoView {
    let (route, set_route) = signal(Route::Home);
    let (theme, set_theme) = signal(theme::load());

    // テーマ変更のたびにbodyへ反映して保存
    Effect::new(move |_| theme::apply(theme.get()));

    let on_open_recipe = move |id: i64| set_route.set(Route::Recipe(id));
    let on_back = move |_: ()| set_route.set(Route::Home);

    view! {
        <div class="app">
            {move || match route.get() {
                Route::Home => view! {
                    <Home
                        on_open_recipe=on_open_recipe
                        theme=theme
                        set_theme=set_theme
                    />
                }
                    .into_any(),
                Route::Recipe(id) => view! {
                    <RecipeDetails
                        id=id
                        on_back=on_back
                        theme=theme
                        set_theme=set_theme
                    />
                }
                    .into_any(),
            }}
        </div>
    }
}
