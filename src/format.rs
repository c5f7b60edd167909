// author: kodeholic (powered by Claude)
// 포맷 디스패치
//
//   SnapshotFormat — overwrite 용. 정확히 일치해야 함 (대소문자 구분, 정규화 없음)
//   ExportFormat   — export 용. 소문자 정규화 후 모르는 값은 csv 로 폴백 (에러 없음)

use std::fmt;
use std::str::FromStr;

use crate::config::{CONTENT_TYPE_CSV, CONTENT_TYPE_SOCIALCALC, CONTENT_TYPE_XLSX};
use crate::error::CalcError;

// ----------------------------------------------------------------------------
// [SnapshotFormat] PUT /_/{room} 본문 포맷
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    SocialCalc,
    Xlsx,
    Csv,
}

impl SnapshotFormat {
    pub fn content_type(self) -> &'static str {
        match self {
            SnapshotFormat::SocialCalc => CONTENT_TYPE_SOCIALCALC,
            SnapshotFormat::Xlsx       => CONTENT_TYPE_XLSX,
            SnapshotFormat::Csv        => CONTENT_TYPE_CSV,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SnapshotFormat::SocialCalc => "socialcalc",
            SnapshotFormat::Xlsx       => "xlsx",
            SnapshotFormat::Csv        => "csv",
        }
    }
}

impl FromStr for SnapshotFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "socialcalc" => Ok(SnapshotFormat::SocialCalc),
            "xlsx"       => Ok(SnapshotFormat::Xlsx),
            "csv"        => Ok(SnapshotFormat::Csv),
            other        => Err(CalcError::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for SnapshotFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ----------------------------------------------------------------------------
// [ExportFormat] GET /_/{room}/{type} 경로 세그먼트
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    CsvJson,
    Xlsx,
    Markdown,
    Html,
    Csv,
}

impl ExportFormat {
    /// 관대한 파싱 — 대소문자 무시, 모르는 타입은 Csv
    pub fn from_type(ty: &str) -> Self {
        match ty.to_lowercase().as_str() {
            "csv.json" => ExportFormat::CsvJson,
            "xlsx"     => ExportFormat::Xlsx,
            "md"       => ExportFormat::Markdown,
            "html"     => ExportFormat::Html,
            _          => ExportFormat::Csv,
        }
    }

    /// URL 경로 세그먼트
    pub fn path_segment(self) -> &'static str {
        match self {
            ExportFormat::CsvJson  => "csv.json",
            ExportFormat::Xlsx     => "xlsx",
            ExportFormat::Markdown => "md",
            ExportFormat::Html     => "html",
            ExportFormat::Csv      => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path_segment())
    }
}
