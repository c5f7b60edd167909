// author: kodeholic (powered by Claude)
// 대량 데이터 연산
//   POST /_/        create_room_from_csv_file  — CSV 파일 스트리밍
//   POST /_/{room}  append_rows_from_csv_file  — CSV 파일 스트리밍 (서버가 행 추가로 해석)
//   POST /_/{room}  post_command               — form: command (반복 필드, 순서 보존)

use std::path::Path;

use reqwest::header::CONTENT_TYPE;
use tracing::{debug, warn};

use super::{room_path, RemoteSpreadsheetClient, IMPORT_PATH};
use crate::body::ResponseBody;
use crate::command::Command;
use crate::config::CONTENT_TYPE_CSV;
use crate::error::CalcResult;

impl RemoteSpreadsheetClient {
    /// CSV 파일로 새 방 생성. 서버가 할당한 방 정보 반환 (생성용 타임아웃)
    pub async fn create_room_from_csv_file(&self, path: impl AsRef<Path>) -> CalcResult<ResponseBody> {
        let body = open_csv_stream(path.as_ref()).await?;
        let req  = self.http
            .post(self.url(IMPORT_PATH))
            .header(CONTENT_TYPE, CONTENT_TYPE_CSV)
            .body(body)
            .timeout(Self::create_timeout());

        self.fetch("create_room_from_csv_file", req).await
    }

    /// 기존 방에 CSV 파일 행 추가
    pub async fn append_rows_from_csv_file(
        &self,
        room: &str,
        path: impl AsRef<Path>,
    ) -> CalcResult<ResponseBody> {
        let body = open_csv_stream(path.as_ref()).await?;
        let req  = self.http
            .post(self.url(&room_path(room)))
            .header(CONTENT_TYPE, CONTENT_TYPE_CSV)
            .body(body);

        self.fetch("append_rows_from_csv_file", req).await
    }

    /// 명령 전송. 묶음은 주어진 순서 그대로 인코딩
    ///
    /// `room` 은 escape 없이 경로에 들어간다 (`/`, `?`, `#` 주의)
    pub async fn post_command(&self, room: &str, command: impl Into<Command>) -> CalcResult<ResponseBody> {
        let command = command.into();
        debug!("[client] post_command room={} count={}", room, command.len());

        let req = self.http
            .post(self.url(&room_path(room)))
            .form(&command.form_pairs());

        self.fetch("post_command", req).await
    }
}

/// 파일 전체를 메모리에 올리지 않고 요청 본문 스트림으로 변환
async fn open_csv_stream(path: &Path) -> CalcResult<reqwest::Body> {
    let file = tokio::fs::File::open(path).await.map_err(|e| {
        warn!("[client] csv open failed {}: {}", path.display(), e);
        e
    })?;
    Ok(reqwest::Body::from(file))
}
