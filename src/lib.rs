// author: kodeholic (powered by Claude)
//
// ethercalc-client — 원격 협업 스프레드시트 서비스 HTTP API 클라이언트
//
// 모든 연산은 HTTP 요청 1회 + 동일한 결과 정규화:
//   Ok(본문)                              2xx
//   Err(CalcError::Status{status,message}) non-2xx 응답
//   Err(CalcError::Transport(..))          응답 없음
//
// snapshot / command 는 불투명 payload — 해석하지 않고 그대로 전달

pub mod body;
pub mod client;
pub mod command;
pub mod config;
pub mod error;
pub mod format;

pub use body::ResponseBody;
pub use client::RemoteSpreadsheetClient;
pub use command::Command;
pub use config::ClientConfig;
pub use error::{CalcError, CalcResult};
pub use format::{ExportFormat, SnapshotFormat};
