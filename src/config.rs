// author: kodeholic (powered by Claude)
// 매직 넘버를 배제하고 클라이언트 기본값/한계를 제어하는 상수 모음 + ClientConfig

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};

/// 기본 프로토콜
pub const DEFAULT_PROTOCOL: &str = "http";

/// 기본 호스트
pub const DEFAULT_HOST: &str = "localhost";

/// 기본 포트 (원격 스프레드시트 서비스)
pub const DEFAULT_PORT: u16 = 8000;

/// 요청당 기본 타임아웃 (2.5초) — 연결 + 응답 전체
pub const DEFAULT_TIMEOUT_MS: u64 = 2_500;

/// 방 생성 계열 요청 타임아웃 (10초)
/// 서버 측 방 생성이 일반 조회보다 느리다
pub const CREATE_TIMEOUT_MS: u64 = 10_000;

// ----------------------------------------------------------------------------
// 환경변수 오버라이드 키
// ----------------------------------------------------------------------------

pub const ENV_PROTOCOL:   &str = "ETHERCALC_PROTOCOL";
pub const ENV_HOST:       &str = "ETHERCALC_HOST";
pub const ENV_PORT:       &str = "ETHERCALC_PORT";
pub const ENV_TIMEOUT_MS: &str = "ETHERCALC_TIMEOUT_MS";

// ----------------------------------------------------------------------------
// Content-Type
// ----------------------------------------------------------------------------

pub const CONTENT_TYPE_SOCIALCALC: &str = "text/x-socialcalc";
pub const CONTENT_TYPE_XLSX:       &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const CONTENT_TYPE_CSV:        &str = "text/csv";

/// id 없이 방을 만들 때 snapshot 미지정 시 보내는 최소 SocialCalc 저장본 (빈 시트)
pub const DEFAULT_SNAPSHOT: &str = "socialcalc:version:1.0\n\
MIME-Version: 1.0\n\
Content-Type: multipart/mixed; boundary=SocialCalcSpreadsheetControlSave\n\
--SocialCalcSpreadsheetControlSave\n\
Content-type: text/plain; charset=UTF-8\n\
\n\
# SocialCalc Spreadsheet Control Save\n\
version:1.0\n\
part:sheet\n\
--SocialCalcSpreadsheetControlSave\n\
Content-type: text/plain; charset=UTF-8\n\
\n\
version:1.5\n\
\n\
--SocialCalcSpreadsheetControlSave--\n";

// ----------------------------------------------------------------------------
// [ClientConfig] 전송 계층을 완전히 결정하는 불변 설정
// ----------------------------------------------------------------------------

/// 클라이언트 생성 시 1회 주입되는 설정
/// - 기본값은 위 상수
/// - 운영 환경에서는 ETHERCALC_* 환경변수로 오버라이드 (from_env)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub protocol:   String,
    pub host:       String,
    pub port:       u16,
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            protocol:   DEFAULT_PROTOCOL.to_string(),
            host:       DEFAULT_HOST.to_string(),
            port:       DEFAULT_PORT,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl ClientConfig {
    pub fn new(protocol: &str, host: &str, port: u16, timeout_ms: u64) -> Self {
        Self {
            protocol: protocol.to_string(),
            host:     host.to_string(),
            port,
            timeout_ms,
        }
    }

    /// 기본값 위에 ETHERCALC_* 환경변수를 덮어쓴다
    pub fn from_env() -> CalcResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 키 → 값 조회 함수로부터 설정 구성 (환경변수 대신 주입 가능)
    pub fn from_lookup<F>(lookup: F) -> CalcResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(protocol) = lookup(ENV_PROTOCOL) {
            config.protocol = protocol;
        }
        if let Some(host) = lookup(ENV_HOST) {
            config.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            config.port = port.trim().parse().map_err(|_| {
                CalcError::InvalidConfig(format!("{}={:?} is not a valid port", ENV_PORT, port))
            })?;
        }
        if let Some(ms) = lookup(ENV_TIMEOUT_MS) {
            config.timeout_ms = ms.trim().parse().map_err(|_| {
                CalcError::InvalidConfig(format!("{}={:?} is not a valid timeout", ENV_TIMEOUT_MS, ms))
            })?;
        }

        Ok(config)
    }

    /// {protocol}://{host}:{port}
    pub fn base_url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// 생성 시점 검증 — timeout_ms > 0, base URL 파싱 가능
    pub fn validate(&self) -> CalcResult<()> {
        if self.timeout_ms == 0 {
            return Err(CalcError::InvalidConfig("timeout_ms must be greater than 0".into()));
        }
        reqwest::Url::parse(&self.base_url()).map_err(|e| {
            CalcError::InvalidConfig(format!("invalid base url {}: {}", self.base_url(), e))
        })?;
        Ok(())
    }
}
