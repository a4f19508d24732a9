//! レシピカードコンポーネント

use leptos::prelude::*;
use recipe_web_common::Recipe;

/// 難易度バッジのCSSクラス
///
/// Easy/Medium/Hard以外の値はそのままHard相当の見た目に落とす。
pub fn difficulty_class(difficulty: &str) -> &'static str {
    match difficulty {
        "Easy" => "badge-easy",
        "Medium" => "badge-medium",
        _ => "badge-hard",
    }
}

#[component]
pub fn RecipeCard<F>(recipe: Recipe, on_open: F) -> impl IntoView
where
    F: Fn(i64) + 'static + Clone + Send,
{
    let filled_stars = recipe.rating.floor() as usize;
    let recipe_id = recipe.id;

    view! {
        <div class="recipe-card" on:click=move |_| on_open(recipe_id)>
            <div class="card-image">
                <img src=recipe.image.clone() alt=recipe.name.clone() loading="lazy" />
                <span class=format!("badge {}", difficulty_class(&recipe.difficulty))>
                    {recipe.difficulty.clone()}
                </span>
            </div>
            <div class="card-body">
                <h3>{recipe.name.clone()}</h3>
                <p class="card-cuisine">{recipe.cuisine.clone()}</p>
                <div class="stars">
                    {(0..5)
                        .map(|i| {
                            let class = if i < filled_stars { "star filled" } else { "star" };
                            view! { <span class=class>"★"</span> }
                        })
                        .collect_view()}
                    <span class="rating-value">{format!("{:.1}", recipe.rating)}</span>
                </div>
            </div>
        </div>
    }
}
