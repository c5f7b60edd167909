// author: kodeholic (powered by Claude)
// CalcError — 모든 원격 호출의 실패를 값으로 표현하는 정규화 에러
//
//   Status        서버가 non-2xx 로 응답        { status, message }
//   Transport     응답 자체를 못 받음 (연결 거부, DNS, 타임아웃) — reqwest::Error 원본
//   InvalidFormat overwrite 포맷 검증 실패 — 요청 발행 전 반환
//
// 재시도 없음. 호출자는 variant 로 분기한다.

use reqwest::StatusCode;
use thiserror::Error;

/// 표준 reason phrase 가 없는 상태 코드용
const UNKNOWN_REASON: &str = "Unknown Status";

#[derive(Debug, Error)]
pub enum CalcError {
    /// 서버 응답은 받았으나 2xx 가 아님
    #[error("[{status}] {message}")]
    Status { status: u16, message: String },

    /// HTTP 응답 없음 — 하위 전송 계층 에러를 그대로 보관
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// overwrite 포맷이 socialcalc / xlsx / csv 중 하나가 아님
    #[error("Invalid snapshot format: {0:?} (expected socialcalc, xlsx or csv)")]
    InvalidFormat(String),

    #[error("Invalid client config: {0}")]
    InvalidConfig(String),

    /// CSV import 대상 로컬 파일 오픈 실패
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CalcResult<T> = Result<T, CalcError>;

impl CalcError {
    /// non-2xx 상태 코드 → Status 에러 (표준 reason phrase)
    pub fn from_status(status: StatusCode) -> Self {
        Self::from_status_reason(status, None)
    }

    /// 서버가 보낸 reason phrase 우선, 없으면 표준 phrase
    pub fn from_status_reason(status: StatusCode, reason: Option<&str>) -> Self {
        let message = reason
            .filter(|r| !r.is_empty())
            .or_else(|| status.canonical_reason())
            .unwrap_or(UNKNOWN_REASON);
        CalcError::Status {
            status:  status.as_u16(),
            message: message.to_string(),
        }
    }

    /// HTTP 상태 코드 (Status 에러일 때만)
    pub fn status(&self) -> Option<u16> {
        match self {
            CalcError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 전송 계층 원본 에러 (Transport 에러일 때만)
    pub fn transport(&self) -> Option<&reqwest::Error> {
        match self {
            CalcError::Transport(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND.as_u16())
    }

    pub fn is_timeout(&self) -> bool {
        self.transport().map(|e| e.is_timeout()).unwrap_or(false)
    }
}
