//! 画面状態の型定義
//!
//! 読込中・エラー・0件・一覧ありを排他的なタグ付きバリアントで表現する。
//! booleanの組み合わせで不正な状態が作れないようにするための型。

use crate::types::Recipe;

/// 一覧画面の状態
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<Recipe>),
}

impl ListState {
    /// fetch成功後の表示集合から Empty / Populated を決める
    pub fn from_displayed(displayed: Vec<Recipe>) -> Self {
        if displayed.is_empty() {
            ListState::Empty
        } else {
            ListState::Populated(displayed)
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    /// ローカルなフィルタ変更で表示集合を差し替えてよい状態か
    ///
    /// Loading / Error はfetch側の遷移でしか抜けない。
    pub fn is_settled(&self) -> bool {
        matches!(self, ListState::Empty | ListState::Populated(_))
    }
}

/// 詳細画面の状態
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Error(String),
    Populated(Recipe),
}

/// 直近のfetchを発生させた操作
///
/// エラー後のリトライはページ再読込ではなく、この操作を
/// 現在のフィルタ状態のままもう一度実行する。
#[derive(Debug, Clone, PartialEq)]
pub enum FetchAction {
    LoadAll,
    Search(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: i64, cuisine: &str) -> Recipe {
        Recipe {
            id,
            cuisine: cuisine.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_from_displayed_empty() {
        assert_eq!(ListState::from_displayed(vec![]), ListState::Empty);
    }

    #[test]
    fn test_from_displayed_populated() {
        let state = ListState::from_displayed(vec![recipe(1, "Italian")]);
        match state {
            ListState::Populated(recipes) => assert_eq!(recipes.len(), 1),
            other => panic!("Populatedでない: {:?}", other),
        }
    }

    #[test]
    fn test_is_settled() {
        assert!(!ListState::Loading.is_settled());
        assert!(!ListState::Error("x".to_string()).is_settled());
        assert!(ListState::Empty.is_settled());
        assert!(ListState::Populated(vec![recipe(1, "Thai")]).is_settled());
    }

    #[test]
    fn test_fetch_action_retry_equality() {
        // 検索失敗後のリトライは同じクエリの検索であること
        let action = FetchAction::Search("xyz".to_string());
        assert_eq!(action, FetchAction::Search("xyz".to_string()));
        assert_ne!(action, FetchAction::LoadAll);
    }
}
