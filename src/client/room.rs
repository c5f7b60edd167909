// author: kodeholic (powered by Claude)
// 방 생명주기 연산
//   POST   /_/{room}        create_room (id 지정) — form: room, snapshot
//   POST   /_               create_room (id 없음) — form: snapshot
//   GET    /_/{room}        get_room
//   PUT    /_/{room}        overwrite — raw body + 포맷별 Content-Type
//   DELETE /_/{room}        delete_room
//   GET    /_exists/{room}  room_exists
//
// room id 는 escape 없이 경로에 삽입된다. '/', '?', '#' 를 포함한 id 는
// 다른 엔드포인트로 요청이 가므로 호출자가 걸러야 한다

use reqwest::header::CONTENT_TYPE;
use tracing::warn;

use super::{room_path, RemoteSpreadsheetClient, COLLECTION_PATH, EXISTS_PATH};
use crate::body::ResponseBody;
use crate::config::DEFAULT_SNAPSHOT;
use crate::error::CalcResult;
use crate::format::SnapshotFormat;

impl RemoteSpreadsheetClient {
    /// 방 생성
    ///
    /// - `room` 지정: `/_/{room}` 로 room + snapshot 폼 전송. 서버는 create-or-update 로 처리
    /// - `room` 없음 (None 또는 빈 문자열): `/_` 로 snapshot 만 전송, 서버가 id 를 할당해 반환.
    ///   snapshot 미지정 시 빈 시트 저장본([`DEFAULT_SNAPSHOT`])
    ///
    /// 두 경우 모두 생성용 타임아웃(10초) 적용.
    pub async fn create_room(
        &self,
        room:     Option<&str>,
        snapshot: Option<&str>,
    ) -> CalcResult<ResponseBody> {
        let req = match room.filter(|r| !r.is_empty()) {
            Some(room) => self.http
                .post(self.url(&room_path(room)))
                .form(&[("room", room), ("snapshot", snapshot.unwrap_or(""))]),
            None => self.http
                .post(self.url(COLLECTION_PATH))
                .form(&[("snapshot", snapshot.unwrap_or(DEFAULT_SNAPSHOT))]),
        };

        self.fetch("create_room", req.timeout(Self::create_timeout())).await
    }

    /// 방의 원본(SocialCalc) 저장본. 해석하지 않고 그대로 반환
    ///
    /// `room` 은 escape 없이 경로에 들어간다 (`/`, `?`, `#` 주의)
    pub async fn get_room(&self, room: &str) -> CalcResult<ResponseBody> {
        self.get("get_room", &room_path(room)).await
    }

    /// 방 전체 덮어쓰기
    ///
    /// `format` 은 정확히 `socialcalc` / `xlsx` / `csv` 중 하나 (대소문자 구분).
    /// 그 외 값은 요청을 발행하지 않고 [`CalcError::InvalidFormat`](crate::CalcError::InvalidFormat) 반환.
    pub async fn overwrite<B>(&self, room: &str, snapshot: B, format: &str) -> CalcResult<ResponseBody>
    where
        B: Into<reqwest::Body>,
    {
        let format = format.parse::<SnapshotFormat>().map_err(|e| {
            warn!("[client] overwrite rejected before request: {}", e);
            e
        })?;
        self.overwrite_as(room, snapshot, format).await
    }

    pub async fn overwrite_as<B>(&self, room: &str, snapshot: B, format: SnapshotFormat) -> CalcResult<ResponseBody>
    where
        B: Into<reqwest::Body>,
    {
        let req = self.http
            .put(self.url(&room_path(room)))
            .header(CONTENT_TYPE, format.content_type())
            .body(snapshot);

        self.fetch("overwrite", req).await
    }

    /// 2xx 응답이면 true. 상태 코드 외 응답 내용은 보지 않는다
    pub async fn delete_room(&self, room: &str) -> CalcResult<bool> {
        let req = self.http.delete(self.url(&room_path(room)));
        self.execute("delete_room", req).await.map(|_| true)
    }

    /// 방 존재 여부
    ///
    /// 다른 연산과 달리 실패를 구분하지 않는다: HTTP 에러, 전송 실패, bool 이 아닌 본문
    /// 모두 `false`. "없음" 과 "확인 불가" 가 같은 값이 된다.
    pub async fn room_exists(&self, room: &str) -> bool {
        let path = format!("{}/{}", EXISTS_PATH, room);
        match self.get("room_exists", &path).await {
            Ok(body) => body.as_bool().unwrap_or_else(|| {
                warn!("[client] room_exists non-boolean body for {}: {:?}", room, body);
                false
            }),
            Err(_) => false,
        }
    }
}
