//! フィルタ照合フローの結合テスト
//!
//! 一覧取得 → ジャンル選択 → 検索 → 検索解除 の一連の流れと、
//! 検索が重なったときのトークンによる取りこぼし制御を検証する。

use recipe_web_common::{Catalog, FetchAction, ListState, Recipe};

fn recipe(id: i64, name: &str, cuisine: &str) -> Recipe {
    Recipe {
        id,
        name: name.to_string(),
        cuisine: cuisine.to_string(),
        ..Default::default()
    }
}

/// 5ジャンル50件のカタログを作る
fn big_catalog() -> Vec<Recipe> {
    let cuisines = ["Italian", "Mexican", "Japanese", "Indian", "Thai"];
    (0..50)
        .map(|i| recipe(i + 1, &format!("Dish {}", i + 1), cuisines[(i % 5) as usize]))
        .collect()
}

/// 検索して3件に絞った後に検索解除すると、3件ではなく50件の
/// フィルタ済みビューへ戻る
#[test]
fn test_clearing_search_restores_whole_catalog() {
    let mut catalog = Catalog::new();
    catalog.apply_full(big_catalog());
    assert_eq!(catalog.displayed().len(), 50);

    catalog.set_query("pasta");
    catalog.apply_search(vec![
        recipe(1, "Pasta Primavera", "Italian"),
        recipe(6, "Pasta Bake", "Italian"),
        recipe(11, "Seafood Pasta", "Italian"),
    ]);
    assert_eq!(catalog.displayed().len(), 3);

    catalog.clear_search();
    assert_eq!(catalog.displayed().len(), 50);
}

/// 検索中のジャンル変更は同期的に効き、検索解除後も維持される
#[test]
fn test_cuisine_filter_survives_search_lifecycle() {
    let mut catalog = Catalog::new();
    catalog.apply_full(big_catalog());

    catalog.set_cuisine("Mexican");
    assert_eq!(catalog.displayed().len(), 10);

    catalog.set_query("dish");
    catalog.apply_search(vec![
        recipe(2, "Dish 2", "Mexican"),
        recipe(3, "Dish 3", "Japanese"),
    ]);
    // 検索結果のうちMexicanだけが表示される
    assert_eq!(catalog.displayed().len(), 1);

    catalog.clear_search();
    assert_eq!(catalog.displayed().len(), 10);
}

/// 検索してもフィルタ候補は初回ロード時のまま
#[test]
fn test_search_never_changes_cuisine_options() {
    let mut catalog = Catalog::new();
    catalog.apply_full(big_catalog());
    let options: Vec<String> = catalog.cuisines().to_vec();

    catalog.set_query("pho");
    catalog.apply_search(vec![recipe(99, "Pho", "Vietnamese")]);
    assert_eq!(catalog.cuisines(), options.as_slice());

    catalog.clear_search();
    assert_eq!(catalog.cuisines(), options.as_slice());
}

/// 追い越しレース: 先発の検索レスポンスが後着しても反映されない
#[test]
fn test_overlapping_searches_latest_wins() {
    let mut catalog = Catalog::new();
    catalog.apply_full(big_catalog());

    // "a"の検索を発行、完了前に"ab"の検索を発行
    let token_a = catalog.begin_request();
    let token_ab = catalog.begin_request();

    // "ab"が先に完了して反映される
    assert!(catalog.is_current(token_ab));
    catalog.set_query("ab");
    catalog.apply_search(vec![recipe(7, "Abura Soba", "Japanese")]);

    // 遅れて"a"の結果が届くが、トークンが古いので捨てる
    assert!(!catalog.is_current(token_a));

    let displayed = catalog.displayed();
    assert_eq!(displayed.len(), 1);
    assert_eq!(displayed[0].name, "Abura Soba");
}

/// 表示集合は常にbaselineの部分集合
#[test]
fn test_displayed_always_subset_of_baseline() {
    let mut catalog = Catalog::new();
    catalog.apply_full(big_catalog());

    for cuisine in ["", "Italian", "Thai", "Nonexistent"] {
        catalog.set_cuisine(cuisine);
        let displayed = catalog.displayed();
        assert!(displayed.len() <= 50);
        if !cuisine.is_empty() {
            assert!(displayed.iter().all(|r| r.cuisine == cuisine));
        }
    }
}

/// ListStateの導出: 0件のときだけEmpty
#[test]
fn test_list_state_empty_iff_no_recipes() {
    let mut catalog = Catalog::new();
    catalog.apply_full(big_catalog());

    catalog.set_cuisine("Nonexistent");
    assert_eq!(ListState::from_displayed(catalog.displayed()), ListState::Empty);

    catalog.set_cuisine("Thai");
    assert!(matches!(
        ListState::from_displayed(catalog.displayed()),
        ListState::Populated(_)
    ));
}

/// リトライ契約: 最後の操作をそのまま再実行する
#[test]
fn test_retry_replays_last_action() {
    // 検索"xyz"が失敗した場合、リトライ対象は同じ検索
    let last_action = FetchAction::Search("xyz".to_string());

    let replayed = match &last_action {
        FetchAction::LoadAll => FetchAction::LoadAll,
        FetchAction::Search(q) => FetchAction::Search(q.clone()),
    };
    assert_eq!(replayed, FetchAction::Search("xyz".to_string()));
}
