//! Error Kind
//!
//! HTTP-level classification of an [`super::app_error::AppError`].

use serde::Serialize;

/// エラーの HTTP 分類
///
/// レスポンスのステータスだけを決めます。クライアント向けの安定した
/// 識別子は [`super::code::ErrorCode`] 側で持ちます。
///
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// assert_eq!(ErrorKind::Conflict.status_code(), 409);
/// assert_eq!(ErrorKind::Conflict.to_string(), "409 Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// 入力不備
    BadRequest,
    /// 認証なし・トークン無効・ログイン失敗
    Unauthorized,
    /// 投稿・コメントが存在しない
    NotFound,
    /// ユーザー名の重複
    Conflict,
    /// 永続化層の失敗など
    InternalServerError,
}

impl ErrorKind {
    pub const fn status_code(self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::InternalServerError => 500,
        }
    }

    /// 標準の理由フレーズ
    pub const fn reason(self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::InternalServerError => "Internal Server Error",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status_code(), self.reason())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_and_display() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::NotFound.to_string(), "404 Not Found");
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
    }
}
