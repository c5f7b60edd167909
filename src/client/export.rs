// author: kodeholic (powered by Claude)
// 조회 / export 연산 — 모두 GET, 본문 그대로 반환
// room id 는 escape 없이 경로에 삽입 (호출자가 안전한 id 를 넘긴다)

use super::{room_path, RemoteSpreadsheetClient, ROOMS_PATH};
use crate::body::ResponseBody;
use crate::error::CalcResult;
use crate::format::ExportFormat;

impl RemoteSpreadsheetClient {
    /// GET /_/{room}/{type}
    /// type 은 소문자로 정규화, csv.json / xlsx / md / html 외에는 csv 로 폴백
    pub async fn export_room(&self, room: &str, ty: &str) -> CalcResult<ResponseBody> {
        self.export_as(room, ExportFormat::from_type(ty)).await
    }

    pub async fn export_as(&self, room: &str, format: ExportFormat) -> CalcResult<ResponseBody> {
        let path = format!("{}/{}", room_path(room), format.path_segment());
        self.get("export_room", &path).await
    }

    /// GET /_rooms
    pub async fn list_rooms(&self) -> CalcResult<ResponseBody> {
        self.get("list_rooms", ROOMS_PATH).await
    }

    /// GET /_/{room}/cells
    pub async fn get_cells(&self, room: &str) -> CalcResult<ResponseBody> {
        let path = format!("{}/cells", room_path(room));
        self.get("get_cells", &path).await
    }

    /// GET /_/{room}/cells/{coord} — 좌표(예: A1)는 그대로 전달
    ///
    /// room / coord 모두 escape 하지 않는다. '/', '?', '#' 가 들어가면 요청이 다른 경로로 간다
    pub async fn get_cell_value(&self, room: &str, coord: &str) -> CalcResult<ResponseBody> {
        let path = format!("{}/cells/{}", room_path(room), coord);
        self.get("get_cell_value", &path).await
    }

    pub async fn get_html(&self, room: &str) -> CalcResult<ResponseBody> {
        self.export_as(room, ExportFormat::Html).await
    }

    pub async fn get_csv(&self, room: &str) -> CalcResult<ResponseBody> {
        self.export_as(room, ExportFormat::Csv).await
    }

    /// csv.json — 행 배열의 JSON
    pub async fn get_json(&self, room: &str) -> CalcResult<ResponseBody> {
        self.export_as(room, ExportFormat::CsvJson).await
    }
}
