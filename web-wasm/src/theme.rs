//! ライト/ダークテーマの保持と適用
//!
//! LocalStorageに保存し、bodyのclassで切り替える。

use gloo::storage::{LocalStorage, Storage};

const STORAGE_KEY: &str = "recipe-web-theme";

/// 表示テーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// 保存済みテーマを読み込む（未保存・読込失敗はライト）
pub fn load() -> Theme {
    LocalStorage::get::<String>(STORAGE_KEY)
        .map(|value| Theme::parse(&value))
        .unwrap_or_default()
}

/// テーマをbodyへ反映し、LocalStorageへ保存する
pub fn apply(theme: Theme) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        body.set_class_name(match theme {
            Theme::Dark => "dark",
            Theme::Light => "",
        });
    }
    let _ = LocalStorage::set(STORAGE_KEY, theme.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!(Theme::parse("dark"), Theme::Dark);
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("???"), Theme::Light); // 不明値はライト
    }

    #[test]
    fn test_theme_roundtrip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::parse(theme.as_str()), theme);
        }
    }
}
