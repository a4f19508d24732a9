//! 一覧画面
//!
//! フィルタ照合エンジン(Catalog)を1つのシグナルで保持し、ユーザー操作に
//! 応じてfetchを発行して画面状態(ListState)へ落とし込む。
//!
//! - クエリ変更: 空なら保持済み全件へローカル復元、非空なら検索fetch
//! - ジャンル変更: 常に同期的な再絞り込み（fetchなし）
//! - リトライ: 直近の操作(FetchAction)を同じ引数で再実行

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use recipe_web_common::{Catalog, FetchAction, ListState};

use crate::api;
use crate::components::{
    dark_mode_toggle::DarkModeToggle,
    empty_state::EmptyState,
    error_view::ErrorView,
    filter_bar::FilterBar,
    recipe_card::RecipeCard,
    search_bar::SearchBar,
    skeleton_card::SkeletonCard,
};
use crate::theme::Theme;

#[component]
pub fn Home<FO>(
    on_open_recipe: FO,
    theme: ReadSignal<Theme>,
    set_theme: WriteSignal<Theme>,
) -> impl IntoView
where
    FO: Fn(i64) + 'static + Clone + Send,
{
    let catalog = RwSignal::new(Catalog::new());
    let (view_state, set_view_state) = signal(ListState::Loading);
    let (last_action, set_last_action) = signal(FetchAction::LoadAll);

    // エンジンの現状から Empty / Populated を再導出する
    let refresh_displayed = move || {
        let displayed = catalog.with_untracked(|c| c.displayed());
        set_view_state.set(ListState::from_displayed(displayed));
    };

    // 一覧取得（初回ロードとそのリトライ）
    let load_all = move || {
        set_view_state.set(ListState::Loading);
        set_last_action.set(FetchAction::LoadAll);
        let token = catalog
            .try_update(|c| c.begin_request())
            .unwrap_or_default();
        spawn_local(async move {
            // 後から発行されたリクエストがあれば、この結果は捨てる
            let still_current = move || catalog.with_untracked(|c| c.is_current(token));
            match api::fetch_recipes().await {
                Ok(data) if still_current() => {
                    catalog.update(|c| c.apply_full(data.recipes));
                    refresh_displayed();
                }
                Err(e) if still_current() => {
                    set_view_state.set(ListState::Error(e.to_string()));
                }
                _ => {}
            }
        });
    };

    // 検索入力
    let on_search = move |query: String| {
        catalog.update(|c| c.set_query(&query));

        if query.trim().is_empty() {
            // 検索解除: fetchせず保持済みの全件カタログへ戻す
            catalog.update(|c| c.clear_search());
            if view_state.get_untracked().is_settled() {
                refresh_displayed();
            }
            return;
        }

        set_view_state.set(ListState::Loading);
        set_last_action.set(FetchAction::Search(query.clone()));
        let token = catalog
            .try_update(|c| c.begin_request())
            .unwrap_or_default();
        spawn_local(async move {
            let still_current = move || catalog.with_untracked(|c| c.is_current(token));
            match api::search_recipes(&query).await {
                Ok(data) if still_current() => {
                    catalog.update(|c| c.apply_search(data.recipes));
                    refresh_displayed();
                }
                // 失敗時はbaselineに触れずエラー表示だけ
                Err(e) if still_current() => {
                    set_view_state.set(ListState::Error(e.to_string()));
                }
                _ => {}
            }
        });
    };

    // ジャンル選択（常にローカルな再絞り込み）
    let on_cuisine = move |cuisine: String| {
        catalog.update(|c| c.set_cuisine(&cuisine));
        if view_state.get_untracked().is_settled() {
            refresh_displayed();
        }
    };

    // リトライ: 直近のfetch操作をそのまま再実行
    let on_retry = move |_: ()| match last_action.get_untracked() {
        FetchAction::LoadAll => load_all(),
        FetchAction::Search(query) => on_search(query),
    };

    let cuisines = Signal::derive(move || catalog.with(|c| c.cuisines().to_vec()));
    let selected_cuisine = Signal::derive(move || catalog.with(|c| c.cuisine().to_string()));

    // 初回ロード
    load_all();

    view! {
        <div class="page">
            <header class="page-header">
                <div class="header-row">
                    <div>
                        <h1>"Recipe Web"</h1>
                        <p class="subtitle">"世界のレシピを探す"</p>
                    </div>
                    <DarkModeToggle theme=theme set_theme=set_theme />
                </div>
                <div class="filter-row">
                    <SearchBar on_search=on_search />
                    <FilterBar
                        cuisines=cuisines
                        selected=selected_cuisine
                        on_change=on_cuisine
                    />
                </div>
            </header>

            <main class="page-main">
                {move || match view_state.get() {
                    ListState::Loading => view! {
                        <div class="recipe-grid">
                            {(0..8).map(|_| view! { <SkeletonCard /> }).collect_view()}
                        </div>
                    }
                        .into_any(),
                    ListState::Error(message) => view! {
                        <ErrorView message=message on_retry=on_retry />
                    }
                        .into_any(),
                    ListState::Empty => view! { <EmptyState /> }.into_any(),
                    ListState::Populated(recipes) => {
                        let on_open_recipe = on_open_recipe.clone();
                        view! {
                            <div class="result-count">
                                {format!("{}件のレシピ", recipes.len())}
                            </div>
                            <div class="recipe-grid">
                                {recipes
                                    .into_iter()
                                    .map(|recipe| {
                                        let on_open_recipe = on_open_recipe.clone();
                                        view! {
                                            <RecipeCard recipe=recipe on_open=on_open_recipe />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>

            <footer class="page-footer">
                <p>"Data from DummyJSON"</p>
            </footer>
        </div>
    }
}
