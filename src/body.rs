// author: kodeholic (powered by Claude)
// ResponseBody — 2xx 응답 본문을 Content-Type 에 따라 원래 모양대로 디코딩
//
//   *json*                                → Json  (파싱 실패 시 Text)
//   text/*, application/xml, *+xml, *javascript* → Text
//   Content-Type 없음 + 유효한 UTF-8      → Text
//   그 외 (xlsx 등)                        → Binary

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use serde_json::Value;

use crate::error::CalcResult;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Json(Value),
    Text(String),
    Binary(Bytes),
}

impl ResponseBody {
    /// 응답 본문 전체 수신 후 디코딩. 수신 도중 끊기면 Transport 에러
    pub async fn read(resp: Response) -> CalcResult<Self> {
        let content_type = resp.headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase);
        let bytes = resp.bytes().await?;
        Ok(Self::decode(content_type.as_deref(), bytes))
    }

    pub fn decode(content_type: Option<&str>, bytes: Bytes) -> Self {
        match content_type {
            Some(ct) if ct.contains("json") => match serde_json::from_slice(&bytes) {
                Ok(v)  => ResponseBody::Json(v),
                Err(_) => Self::text_or_binary(bytes),
            },
            Some(ct) if is_textual(ct) => Self::text_or_binary(bytes),
            Some(_) => ResponseBody::Binary(bytes),
            None    => Self::text_or_binary(bytes),
        }
    }

    fn text_or_binary(bytes: Bytes) -> Self {
        match std::str::from_utf8(&bytes) {
            Ok(s)  => ResponseBody::Text(s.to_owned()),
            Err(_) => ResponseBody::Binary(bytes),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ResponseBody::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<Value> {
        match self {
            ResponseBody::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            ResponseBody::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// 원본 바이트 (Json 은 재직렬화)
    pub fn into_bytes(self) -> Bytes {
        match self {
            ResponseBody::Json(v)   => Bytes::from(v.to_string()),
            ResponseBody::Text(s)   => Bytes::from(s),
            ResponseBody::Binary(b) => b,
        }
    }

    /// JSON bool 또는 텍스트 "true"/"false"
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ResponseBody::Json(Value::Bool(b)) => Some(*b),
            ResponseBody::Text(s) => match s.trim() {
                "true"  => Some(true),
                "false" => Some(false),
                _       => None,
            },
            _ => None,
        }
    }
}

/// xml 은 application/xml, text/xml, +xml 접미사만 — openxmlformats(xlsx) 는 바이너리
fn is_textual(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or("").trim();
    mime.starts_with("text/")
        || mime == "application/xml"
        || mime.ends_with("+xml")
        || content_type.contains("javascript")
        || content_type.contains("x-www-form-urlencoded")
}
