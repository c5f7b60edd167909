// author: kodeholic (powered by Claude)
//
// 원격 스프레드시트 서비스 stub — 통합 테스트 공용
//
// 모든 요청을 fallback 하나로 받아 기록(method, path, content-type, body)한 뒤
// 경로별로 최소한의 방 저장소 동작을 흉내낸다.
//
// 특수 방 이름:
//   slow  — 응답 전 500ms 지연 (타임아웃 검증)
//   boom  — 항상 500
//   gone  — 404 + 비표준 reason phrase "Room Gone"

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    body::Bytes,
    extract::State,
    http::{header::CONTENT_TYPE, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use ethercalc_client::{ClientConfig, RemoteSpreadsheetClient};
use portpicker::pick_unused_port;
use serde_json::json;
use tokio::net::TcpListener;

pub const SLOW_ROOM:  &str = "slow";
pub const BOOM_ROOM:  &str = "boom";
pub const GONE_ROOM:  &str = "gone";
pub const GONE_REASON: &[u8] = b"Room Gone";
pub const SLOW_DELAY: Duration = Duration::from_millis(500);

const XLSX_CONTENT_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

// ----------------------------------------------------------------------------
// [요청 기록]
// ----------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method:       Method,
    pub path:         String,
    pub content_type: Option<String>,
    pub body:         Bytes,
}

impl RecordedRequest {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// x-www-form-urlencoded 본문 → (key, value) 목록 (순서 보존)
    pub fn form(&self) -> Vec<(String, String)> {
        form_pairs(&self.body_text())
    }

    pub fn form_keys(&self) -> Vec<String> {
        self.form().into_iter().map(|(k, _)| k).collect()
    }
}

fn form_pairs(encoded: &str) -> Vec<(String, String)> {
    let url = reqwest::Url::parse(&format!("http://stub/?{}", encoded)).expect("폼 본문 파싱 실패");
    url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}

// ----------------------------------------------------------------------------
// [StubState]
// ----------------------------------------------------------------------------

#[derive(Default)]
struct Inner {
    rooms:    HashMap<String, String>,
    requests: Vec<RecordedRequest>,
    next_id:  u32,
}

#[derive(Clone, Default)]
pub struct StubState {
    inner: Arc<Mutex<Inner>>,
}

impl StubState {
    pub fn hits(&self) -> usize {
        self.inner.lock().unwrap().requests.len()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.inner.lock().unwrap().requests.last().cloned().expect("기록된 요청이 없습니다.")
    }

    pub fn room(&self, room: &str) -> Option<String> {
        self.inner.lock().unwrap().rooms.get(room).cloned()
    }

    pub fn seed_room(&self, room: &str, content: &str) {
        self.inner.lock().unwrap().rooms.insert(room.to_string(), content.to_string());
    }
}

// ----------------------------------------------------------------------------
// [StubService] 랜덤 포트에 바인딩된 stub 서버
// ----------------------------------------------------------------------------

pub struct StubService {
    pub port:  u16,
    pub state: StubState,
}

impl StubService {
    pub fn client(&self) -> RemoteSpreadsheetClient {
        self.client_with_timeout(ethercalc_client::config::DEFAULT_TIMEOUT_MS)
    }

    pub fn client_with_timeout(&self, timeout_ms: u64) -> RemoteSpreadsheetClient {
        RemoteSpreadsheetClient::new(ClientConfig::new("http", "127.0.0.1", self.port, timeout_ms))
            .expect("클라이언트 생성 실패")
    }
}

pub async fn spawn_stub_service() -> StubService {
    init_tracing();

    let port  = pick_unused_port().expect("사용 가능한 포트를 찾을 수 없습니다.");
    let addr  = format!("127.0.0.1:{}", port);
    let state = StubState::default();

    let app = Router::new()
        .fallback(dispatch)
        .with_state(state.clone());

    let listener = TcpListener::bind(&addr).await.unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubService { port, state }
}

/// 아무것도 listen 하지 않는 포트를 가리키는 클라이언트 (connection refused)
pub fn unreachable_client() -> RemoteSpreadsheetClient {
    init_tracing();
    let port = pick_unused_port().expect("사용 가능한 포트를 찾을 수 없습니다.");
    RemoteSpreadsheetClient::new(ClientConfig::new("http", "127.0.0.1", port, 1_000))
        .expect("클라이언트 생성 실패")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ----------------------------------------------------------------------------
// [디스패치]
// ----------------------------------------------------------------------------

async fn dispatch(
    State(state): State<StubState>,
    method:  Method,
    uri:     Uri,
    headers: HeaderMap,
    body:    Bytes,
) -> Response {
    let path = uri.path().to_string();
    let content_type = headers.get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    state.inner.lock().unwrap().requests.push(RecordedRequest {
        method:       method.clone(),
        path:         path.clone(),
        content_type: content_type.clone(),
        body:         body.clone(),
    });

    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    if segments.get(1) == Some(&SLOW_ROOM) {
        tokio::time::sleep(SLOW_DELAY).await;
    }
    if segments.get(1) == Some(&BOOM_ROOM) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if segments.get(1) == Some(&GONE_ROOM) {
        let mut resp = StatusCode::NOT_FOUND.into_response();
        resp.extensions_mut().insert(hyper::ext::ReasonPhrase::from_static(GONE_REASON));
        return resp;
    }

    let mut inner = state.inner.lock().unwrap();
    let is_csv = content_type.as_deref().map(|ct| ct.starts_with("text/csv")).unwrap_or(false);

    match (method, segments.as_slice()) {
        (Method::GET, ["_rooms"]) => {
            let mut rooms: Vec<&String> = inner.rooms.keys().collect();
            rooms.sort();
            axum::Json(json!(rooms)).into_response()
        }

        (Method::GET, ["_exists", room]) => {
            axum::Json(json!(inner.rooms.contains_key(*room))).into_response()
        }

        // id 없는 생성 (폼)
        (Method::POST, ["_"]) => {
            let form     = form_pairs(&String::from_utf8_lossy(&body));
            let snapshot = form_value(&form, "snapshot").unwrap_or_default();
            let room     = allocate_room(&mut inner, snapshot);
            (StatusCode::CREATED, format!("/{}", room)).into_response()
        }

        // CSV 스트림으로 생성
        (Method::POST, ["_", ""]) if is_csv => {
            let csv  = String::from_utf8_lossy(&body).into_owned();
            let room = allocate_room(&mut inner, csv);
            (StatusCode::CREATED, format!("/{}", room)).into_response()
        }

        (Method::POST, ["_", room]) if is_csv => match inner.rooms.get_mut(*room) {
            Some(content) => {
                content.push_str(&String::from_utf8_lossy(&body));
                (StatusCode::ACCEPTED, "OK").into_response()
            }
            None => StatusCode::NOT_FOUND.into_response(),
        },

        (Method::POST, ["_", room]) => {
            let form = form_pairs(&String::from_utf8_lossy(&body));
            let commands: Vec<String> = form.iter()
                .filter(|(k, _)| k == "command")
                .map(|(_, v)| v.clone())
                .collect();

            if !commands.is_empty() {
                if !inner.rooms.contains_key(*room) {
                    return StatusCode::NOT_FOUND.into_response();
                }
                return (StatusCode::ACCEPTED, axum::Json(json!({ "command": commands }))).into_response();
            }

            let snapshot = form_value(&form, "snapshot").unwrap_or_default();
            inner.rooms.insert(room.to_string(), snapshot);
            (StatusCode::CREATED, axum::Json(json!({ "command": "ok" }))).into_response()
        }

        (Method::PUT, ["_", room]) => {
            inner.rooms.insert(room.to_string(), String::from_utf8_lossy(&body).into_owned());
            (StatusCode::CREATED, "OK").into_response()
        }

        (Method::DELETE, ["_", room]) => match inner.rooms.remove(*room) {
            Some(_) => (StatusCode::CREATED, "OK").into_response(),
            None    => StatusCode::NOT_FOUND.into_response(),
        },

        (Method::GET, ["_", room]) => match inner.rooms.get(*room) {
            Some(content) => ([(CONTENT_TYPE, "text/plain; charset=utf-8")], content.clone()).into_response(),
            None          => StatusCode::NOT_FOUND.into_response(),
        },

        (Method::GET, ["_", room, "cells"]) => match inner.rooms.get(*room) {
            Some(content) => axum::Json(json!(cells_of(content))).into_response(),
            None          => StatusCode::NOT_FOUND.into_response(),
        },

        (Method::GET, ["_", room, "cells", coord]) => {
            let cell = inner.rooms.get(*room).and_then(|c| cells_of(c).remove(*coord));
            match cell {
                Some(cell) => axum::Json(cell).into_response(),
                None       => StatusCode::NOT_FOUND.into_response(),
            }
        }

        (Method::GET, ["_", room, format]) => {
            let Some(content) = inner.rooms.get(*room).cloned() else {
                return StatusCode::NOT_FOUND.into_response();
            };
            export(&content, format)
        }

        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn allocate_room(inner: &mut Inner, content: String) -> String {
    inner.next_id += 1;
    let room = format!("room-{}", inner.next_id);
    inner.rooms.insert(room.clone(), content);
    room
}

fn form_value(form: &[(String, String)], key: &str) -> Option<String> {
    form.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}

fn rows_of(content: &str) -> Vec<Vec<String>> {
    content.lines()
        .filter(|l| !l.is_empty())
        .map(|l| l.split(',').map(str::to_string).collect())
        .collect()
}

/// CSV 로 저장된 방 → { "A1": { coord, datavalue }, ... }
fn cells_of(content: &str) -> HashMap<String, serde_json::Value> {
    let mut cells = HashMap::new();
    for (r, row) in rows_of(content).into_iter().enumerate() {
        for (c, value) in row.into_iter().enumerate() {
            let coord = format!("{}{}", (b'A' + c as u8) as char, r + 1);
            cells.insert(coord.clone(), json!({ "coord": coord, "datavalue": value }));
        }
    }
    cells
}

fn export(content: &str, format: &str) -> Response {
    match format {
        "csv"      => ([(CONTENT_TYPE, "text/csv; charset=utf-8")], content.to_string()).into_response(),
        "csv.json" => axum::Json(json!(rows_of(content))).into_response(),
        "html"     => {
            let rows: String = rows_of(content).iter()
                .map(|r| format!("<tr>{}</tr>", r.iter().map(|v| format!("<td>{}</td>", v)).collect::<String>()))
                .collect();
            ([(CONTENT_TYPE, "text/html; charset=utf-8")], format!("<table>{}</table>", rows)).into_response()
        }
        "md"       => ([(CONTENT_TYPE, "text/x-markdown; charset=utf-8")], content.replace(',', " | ")).into_response(),
        "xlsx"     => ([(CONTENT_TYPE, XLSX_CONTENT_TYPE)], Bytes::from_static(b"PK\x03\x04stub")).into_response(),
        _          => StatusCode::NOT_FOUND.into_response(),
    }
}
