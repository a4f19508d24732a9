//! エラー型定義

use thiserror::Error;

/// API呼び出しエラー
///
/// ユーザーに見せるのは「通信に失敗した」という1種類だけ。
/// ステータス異常と転送層の失敗を区別するのはメッセージ文面のみ。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    #[error("HTTP error! status: {0}")]
    Status(u16),

    #[error("Network error: {0}")]
    Network(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
