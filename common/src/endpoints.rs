//! レシピAPIのエンドポイント定義
//!
//! URL組み立てはここに集約する（WASM外でテスト可能にするため）。

/// レシピAPIのベースURL（唯一の設定値）
pub const API_BASE_URL: &str = "https://dummyjson.com";

/// 一覧取得: GET /recipes
pub fn recipes_url() -> String {
    format!("{}/recipes", API_BASE_URL)
}

/// 1件取得: GET /recipes/{id}
///
/// idは不透明な識別子としてそのまま埋め込む（存在チェックはしない）。
pub fn recipe_url(id: i64) -> String {
    format!("{}/recipes/{}", API_BASE_URL, id)
}

/// 検索: GET /recipes/search?q={query}
///
/// クエリは送信前にURLエスケープする。
pub fn search_url(query: &str) -> String {
    format!("{}/recipes/search?q={}", API_BASE_URL, urlencoding::encode(query))
}
