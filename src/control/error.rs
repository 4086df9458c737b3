use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    // 不正な入力 (牌の指定ミスなど) 状態は変化しない
    InvalidInput(String),
    // 局が開始されていない
    NotStarted,
    // 局が既に開始されている
    AlreadyStarted,
    // 現在の局面では実行できない操作
    InvalidPhase(&'static str),
    // 呼び出し側の契約違反 (牌山の枚数,座席の数,存在しないプレイヤー名など)
    Precondition(String),
    // 牌譜の保存,読み込みの失敗
    Store(String),
}

impl RoundError {
    // ユーザの指定ミスとして無視してよいエラーかどうか
    pub fn is_ignorable(&self) -> bool {
        matches!(self, RoundError::InvalidInput(_))
    }
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundError::InvalidInput(s) => write!(f, "invalid input: {}", s),
            RoundError::NotStarted => write!(f, "round is not started"),
            RoundError::AlreadyStarted => write!(f, "round is already started"),
            RoundError::InvalidPhase(s) => write!(f, "invalid phase: {}", s),
            RoundError::Precondition(s) => write!(f, "precondition violated: {}", s),
            RoundError::Store(s) => write!(f, "record store: {}", s),
        }
    }
}

impl std::error::Error for RoundError {}

impl From<serde_json::Error> for RoundError {
    fn from(e: serde_json::Error) -> Self {
        RoundError::Store(e.to_string())
    }
}

impl From<std::io::Error> for RoundError {
    fn from(e: std::io::Error) -> Self {
        RoundError::Store(e.to_string())
    }
}

pub type RoundResult<T> = Result<T, RoundError>;
