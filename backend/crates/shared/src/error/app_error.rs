//! Application Error - Unified error type for the application
//!
//! Defines [`AppError`] struct and [`AppResult<T>`] type alias.

use std::borrow::Cow;
use std::error::Error;
use std::fmt;

use super::code::ErrorCode;
use super::kind::ErrorKind;

/// アプリケーション統一エラー型
///
/// 各クレート固有のエラー（`AuthError`, `ForumError`）はレスポンス生成時に
/// この型へ変換されます。
///
/// ## Fields
/// * `kind` - HTTP ステータスにマッピングされる分類
/// * `code` - クライアント向けの安定コード（省略時は `kind` から導出）
/// * `message` - ユーザー向けのエラーメッセージ
/// * `action` - ユーザーが取るべきアクション（オプション）
/// * `source` - 元のエラー（デバッグ用、レスポンスには含めない）
///
/// ## Examples
/// ```rust
/// use kernel::error::{app_error::AppError, code::ErrorCode};
///
/// let err = AppError::from_code(ErrorCode::InvalidCredentials, "Incorrect username or password")
///     .with_action("Check your username and password");
/// assert_eq!(err.status_code(), 401);
/// ```
pub struct AppError {
    kind: ErrorKind,
    code: Option<ErrorCode>,
    message: Cow<'static, str>,
    action: Option<Cow<'static, str>>,
    source: Option<Box<dyn Error + Send + Sync + 'static>>,
}

/// `Result<T, AppError>` の省略形
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// 新しいエラーを作成
    #[inline]
    pub fn new(kind: ErrorKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            action: None,
            source: None,
        }
    }

    /// 安定コードからエラーを作成（HTTP 分類はコードから決まる）
    #[inline]
    pub fn from_code(code: ErrorCode, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: Some(code),
            ..Self::new(code.kind(), message)
        }
    }

    /// 400 Bad Request / VALIDATION_ERROR
    #[inline]
    pub fn validation(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_code(ErrorCode::ValidationError, message)
    }

    /// 401 Unauthorized / UNAUTHORIZED
    #[inline]
    pub fn unauthorized(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_code(ErrorCode::Unauthorized, message)
    }

    /// 404 Not Found / NOT_FOUND
    #[inline]
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_code(ErrorCode::NotFound, message)
    }

    /// 500 Internal Server Error / INTERNAL_ERROR
    #[inline]
    pub fn internal(message: impl Into<Cow<'static, str>>) -> Self {
        Self::from_code(ErrorCode::InternalError, message)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// ユーザー向けアクションを設定
    #[inline]
    pub fn with_action(mut self, action: impl Into<Cow<'static, str>>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// 元のエラーを設定（デバッグ用）
    #[inline]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// 安定コード（明示されていなければ `kind` から導出）
    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.code.unwrap_or(ErrorCode::from_kind(self.kind))
    }

    #[inline]
    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// JSON body sent to clients. Never includes `source`.
    pub fn to_body(&self) -> serde_json::Value {
        let mut body = serde_json::json!({
            "status": self.status_code(),
            "code": self.code().as_str(),
            "message": self.message(),
        });
        if let Some(action) = self.action() {
            body["action"] = serde_json::Value::from(action);
        }
        body
    }
}

impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct("AppError");
        builder.field("kind", &self.kind);
        builder.field("code", &self.code());
        builder.field("message", &self.message);
        if let Some(action) = &self.action {
            builder.field("action", action);
        }
        if let Some(source) = &self.source {
            builder.field("source", source);
        }
        builder.finish()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(action) = &self.action {
            write!(f, " (Action: {})", action)?;
        }
        Ok(())
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn Error + 'static))
    }
}
