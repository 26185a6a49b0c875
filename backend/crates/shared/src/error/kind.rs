//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー種別の列挙体
///
/// HTTP ステータスコードに対応するエラー分類を定義します。
/// 認証・プロフィール・レビューの各ドメインエラーはここへ集約されます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Conflict;
/// assert_eq!(kind.status_code(), 409);
/// assert_eq!(kind.as_str(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: 入力値の検証エラー
    BadRequest,
    /// 401 - Unauthorized: 資格情報またはトークンが無効
    Unauthorized,
    /// 404 - Not Found: 参照先のユーザー等が存在しない
    NotFound,
    /// 409 - Conflict: メールアドレスの重複など
    Conflict,
    /// 422 - Unprocessable Entity: 構文は正しいが処理できない
    UnprocessableEntity,
    /// 500 - Internal Server Error: サーバー内部エラー
    InternalServerError,
    /// 503 - Service Unavailable: ストレージ接続障害など一時的な失敗
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP ステータスコードを取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::BadRequest.status_code(), 400);
    /// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// HTTP ステータスの標準的な理由フレーズ
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// サーバー側のエラーかどうかを判定
    ///
    /// 5xx系のエラーは `true` を返します。
    /// これらのエラーはログに記録すべきです。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// クライアント側のエラーかどうかを判定
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }

    /// 呼び出し側で再試行してよい一時的な失敗かどうか
    ///
    /// サーバー内部での自動リトライは行いません。
    #[inline]
    pub const fn is_transient(&self) -> bool {
        matches!(self, ErrorKind::ServiceUnavailable)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
