//! レシピの型定義
//!
//! Web(WASM)で共有される型:
//! - Recipe: レシピ1件（APIレスポンスそのまま）
//! - RecipeListResponse: 一覧・検索APIのレスポンス

use serde::{Deserialize, Serialize};

/// レシピ1件
///
/// APIのJSONをそのまま保持する。フィールド単位のバリデーションは行わず、
/// 欠損フィールドはデフォルト値で埋める（画像欠損などは表示側で吸収）。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub image: String,
    pub cuisine: String,
    pub difficulty: String,       // Easy / Medium / Hard
    pub rating: f64,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub servings: u32,
    pub calories_per_serving: u32,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub tags: Vec<String>,
}

impl Recipe {
    /// 調理時間の合計（準備＋加熱）
    pub fn total_time_minutes(&self) -> u32 {
        self.prep_time_minutes + self.cook_time_minutes
    }
}

/// 一覧・検索APIのレスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecipeListResponse {
    pub recipes: Vec<Recipe>,
    pub total: u32,
    pub skip: u32,
    pub limit: u32,
}
