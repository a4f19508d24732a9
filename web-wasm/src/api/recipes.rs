//! レシピAPI呼び出し
//!
//! 一覧・1件・検索の3つの読み取り操作だけを持つ。リトライもタイムアウトも
//! キャッシュもなし。非2xxは一律 ApiError::Status に落とす。

use recipe_web_common::{endpoints, ApiError, Recipe, RecipeListResponse};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// JsValueのエラーをconsoleへ出してApiErrorへ変換する
fn js_error(context: &str, value: JsValue) -> ApiError {
    let message = format!("{}: {:?}", context, value);
    web_sys::console::error_1(&JsValue::from_str(&message));
    ApiError::Network(message)
}

/// GETリクエストを発行してJSONボディを取り出す（共通処理）
async fn fetch_json(url: &str) -> Result<JsValue, ApiError> {
    let mut opts = RequestInit::new();
    opts.method("GET");
    opts.mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| js_error("Request build failed", e))?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| js_error("Fetch failed", e))?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|e| js_error("Unexpected response object", e))?;

    if !resp.ok() {
        let error = ApiError::Status(resp.status());
        web_sys::console::error_1(&JsValue::from_str(&format!("{} ({})", error, url)));
        return Err(error);
    }

    let json_promise = resp.json().map_err(|e| js_error("json() failed", e))?;
    JsFuture::from(json_promise)
        .await
        .map_err(|e| js_error("JSON decode failed", e))
}

/// 一覧取得: GET /recipes
pub async fn fetch_recipes() -> Result<RecipeListResponse, ApiError> {
    let json = fetch_json(&endpoints::recipes_url()).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Network(e.to_string()))
}

/// 1件取得: GET /recipes/{id}
///
/// idの存在チェックはしない。未知のidはAPI側の404がそのままエラーになる。
pub async fn fetch_recipe_by_id(id: i64) -> Result<Recipe, ApiError> {
    let json = fetch_json(&endpoints::recipe_url(id)).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Network(e.to_string()))
}

/// 検索: GET /recipes/search?q={query}
///
/// 空クエリの扱い（検索解除）は呼び出し側の責務。ここでは受け取った
/// クエリをエスケープして送るだけ。
pub async fn search_recipes(query: &str) -> Result<RecipeListResponse, ApiError> {
    let json = fetch_json(&endpoints::search_url(query)).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Network(e.to_string()))
}
