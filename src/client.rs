// author: kodeholic (powered by Claude)
//
// RemoteSpreadsheetClient — 원격 스프레드시트 서비스 HTTP API 클라이언트
//
// 구조:
//   호출자 (async)
//       └── RemoteSpreadsheetClient::<operation>()
//               ├── 요청 구성 (method, path, body encoding, headers)
//               ├── execute()  — 공유 reqwest::Client 로 1회 발행 (재시도 없음)
//               └── 결과 정규화
//                       2xx          → 본문 그대로 (ResponseBody)
//                       non-2xx      → CalcError::Status { status, message }
//                       응답 없음    → CalcError::Transport(reqwest::Error 원본)
//
// 연산별 구현:
//   room.rs    생성 / 조회 / overwrite / 삭제 / 존재 확인
//   import.rs  CSV 파일 스트리밍 import / append, 명령 전송
//   export.rs  export / 목록 / 셀 조회 / 고정 포맷 export
//
// 클라이언트 로컬 상태 변경 없음 → &self 로 동시 호출 가능, Clone 시 전송 핸들 공유

mod export;
mod import;
mod room;

use std::time::Duration;

use reqwest::{RequestBuilder, Response};
use tracing::{debug, trace, warn};

use crate::body::ResponseBody;
use crate::config::{ClientConfig, CREATE_TIMEOUT_MS};
use crate::error::{CalcError, CalcResult};

// ----------------------------------------------------------------------------
// 고정 경로
// ----------------------------------------------------------------------------

/// id 없는 방 생성 (폼)
const COLLECTION_PATH: &str = "/_";
/// CSV 스트림으로 방 생성
const IMPORT_PATH:     &str = "/_/";
const EXISTS_PATH:     &str = "/_exists";
const ROOMS_PATH:      &str = "/_rooms";

/// room 은 escape 없이 그대로 경로에 들어간다 — '/', '?', '#' 포함 시 다른 엔드포인트로 향함
fn room_path(room: &str) -> String {
    format!("{}/{}", COLLECTION_PATH, room)
}

// ----------------------------------------------------------------------------
// [RemoteSpreadsheetClient]
// ----------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RemoteSpreadsheetClient {
    config:   ClientConfig,
    base_url: String,
    http:     reqwest::Client,
}

impl RemoteSpreadsheetClient {
    /// 설정 검증 후 공유 전송 계층 생성. 네트워크 접속은 첫 호출 시점
    pub fn new(config: ClientConfig) -> CalcResult<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout())
            .timeout(config.timeout())
            .build()?;

        let base_url = config.base_url();
        trace!("[client] created base_url={} timeout_ms={}", base_url, config.timeout_ms);

        Ok(Self { config, base_url, http })
    }

    /// http://localhost:8000, 2500ms
    pub fn with_defaults() -> CalcResult<Self> {
        Self::new(ClientConfig::default())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn create_timeout() -> Duration {
        Duration::from_millis(CREATE_TIMEOUT_MS)
    }

    /// 요청 1회 발행 + 상태 코드 정규화. 본문은 읽지 않는다
    async fn execute(&self, op: &'static str, req: RequestBuilder) -> CalcResult<Response> {
        let request = req.build().map_err(|e| {
            warn!("[client] {} request build failed: {}", op, e);
            CalcError::Transport(e)
        })?;
        let method = request.method().clone();
        let url    = request.url().clone();
        debug!("[client] {} {} {}", op, method, url);

        let resp = match self.http.execute(request).await {
            Ok(r)  => r,
            Err(e) => {
                warn!("[client] {} {} {} transport failure: {}", op, method, url, e);
                return Err(CalcError::Transport(e));
            }
        };

        let status = resp.status();
        if !status.is_success() {
            // HTTP/1 비표준 reason phrase 는 hyper 가 extension 으로 남긴다
            let reason = resp.extensions()
                .get::<hyper::ext::ReasonPhrase>()
                .and_then(|r| std::str::from_utf8(r.as_bytes()).ok());
            warn!("[client] {} {} {} → {} {:?}", op, method, url, status, reason);
            return Err(CalcError::from_status_reason(status, reason));
        }

        debug!("[client] {} {} {} → {}", op, method, url, status);
        Ok(resp)
    }

    /// execute + 본문 디코딩
    async fn fetch(&self, op: &'static str, req: RequestBuilder) -> CalcResult<ResponseBody> {
        let resp = self.execute(op, req).await?;
        ResponseBody::read(resp).await.map_err(|e| {
            warn!("[client] {} body read failed: {}", op, e);
            e
        })
    }

    async fn get(&self, op: &'static str, path: &str) -> CalcResult<ResponseBody> {
        self.fetch(op, self.http.get(self.url(path))).await
    }
}
