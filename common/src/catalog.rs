//! フィルタ照合エンジン
//!
//! 一覧画面の状態の本体。保持するもの:
//! - full: 最後に成功した一覧取得の全件（検索結果では上書きしない）
//! - baseline: 現在アクティブな集合（全件 or 最新の検索結果）
//! - cuisines: フィルタ候補（fullからのみ導出）
//! - query / cuisine: ユーザーのフィルタ入力
//!
//! コレクションは常にスナップショットとして丸ごと差し替える。
//! 表示集合は displayed() で都度導出し、部分更新は存在しない。

use crate::types::Recipe;

/// リクエスト順序トークン
///
/// 検索が重なったとき、古いレスポンスが新しい状態を上書きしないよう
/// fetch開始時に begin_request() で採番し、反映前に is_current() で照合する。
pub type RequestToken = u64;

/// レシピカタログとフィルタ状態
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    full: Vec<Recipe>,
    baseline: Vec<Recipe>,
    cuisines: Vec<String>,
    query: String,
    cuisine: String,
    seq: RequestToken,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// fetch開始を宣言し、このリクエストのトークンを返す
    pub fn begin_request(&mut self) -> RequestToken {
        self.seq += 1;
        self.seq
    }

    /// トークンが最新のリクエストのものか
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.seq == token
    }

    /// 一覧取得の成功を反映する
    ///
    /// full と baseline を丸ごと差し替え、cuisines を導出し直す。
    /// cuisines が更新されるのはここだけ（検索結果からは導出しない）。
    pub fn apply_full(&mut self, recipes: Vec<Recipe>) {
        self.cuisines = derive_cuisines(&recipes);
        self.baseline = recipes.clone();
        self.full = recipes;
    }

    /// 検索クエリを記録する（fetch発行の有無は呼び出し側が決める）
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    /// 検索成功を反映する
    ///
    /// baseline だけを差し替える。full と cuisines には触れない。
    pub fn apply_search(&mut self, recipes: Vec<Recipe>) {
        self.baseline = recipes;
    }

    /// 検索解除
    ///
    /// 直前の検索結果ではなく、保持していた全件カタログへ必ず戻す。
    /// ネットワーク呼び出しは不要。seqを進めて、飛行中の検索レスポンスが
    /// 解除後に着地しても無効になるようにする。
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.baseline = self.full.clone();
        self.seq += 1;
    }

    /// 料理ジャンルフィルタを設定する（空文字 = すべて）
    pub fn set_cuisine(&mut self, cuisine: &str) {
        self.cuisine = cuisine.to_string();
    }

    /// 表示集合を導出する
    ///
    /// cuisine が空なら baseline そのまま。一致判定は大文字小文字を
    /// 区別する完全一致。
    pub fn displayed(&self) -> Vec<Recipe> {
        if self.cuisine.is_empty() {
            self.baseline.clone()
        } else {
            self.baseline
                .iter()
                .filter(|r| r.cuisine == self.cuisine)
                .cloned()
                .collect()
        }
    }

    /// フィルタ候補（最後の一覧取得時点のもの）
    pub fn cuisines(&self) -> &[String] {
        &self.cuisines
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn cuisine(&self) -> &str {
        &self.cuisine
    }

    /// 検索が有効か（トリム後に空でないクエリを保持しているか）
    pub fn is_search_active(&self) -> bool {
        !self.query.trim().is_empty()
    }
}

/// 全件カタログからフィルタ候補を導出する（ユニーク化して辞書順）
fn derive_cuisines(recipes: &[Recipe]) -> Vec<String> {
    let mut cuisines: Vec<String> = recipes.iter().map(|r| r.cuisine.clone()).collect();
    cuisines.sort();
    cuisines.dedup();
    cuisines
}
