use std::collections::BTreeMap;

use lathe_api::{Column, Row, TabularCursor};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════
//  Enumerations
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    #[default]
    Mysql,
    Local,
    File,
    S3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReportType {
    #[default]
    Generic,
    Table,
}

// ═══════════════════════════════════════════════════════════════
//  Staging requests: POST /lathe/stage/data
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartitionRequest {
    pub partition_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_values: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combine_partitions: Option<bool>,
}

impl PartitionRequest {
    pub fn new(partition_by: impl Into<String>) -> Self {
        Self {
            partition_by: partition_by.into(),
            ..Default::default()
        }
    }
}

/// One dataset to stage: a query against a named database, or a file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageDataSourceRequest {
    pub database_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub s3_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition: Option<PartitionRequest>,
}

impl StageDataSourceRequest {
    pub fn new(database_name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_table(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_s3(mut self, s3_path: impl Into<String>) -> Self {
        self.s3_path = Some(s3_path.into());
        self
    }

    pub fn with_partition(mut self, partition: PartitionRequest) -> Self {
        self.partition = Some(partition);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageDataRequest {
    pub source_type: SourceType,
    pub source_request: StageDataSourceRequest,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chip_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateChipResponse {
    #[serde(default)]
    pub chip_id: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

// ═══════════════════════════════════════════════════════════════
//  Report requests: POST /lathe/report
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceRequest {
    pub query: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl SourceRequest {
    pub fn new(query: Vec<String>) -> Self {
        Self {
            query,
            file_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    #[serde(rename = "chip_id")]
    pub chip_ids: Vec<String>,
    pub source_type: SourceType,
    #[serde(rename = "type")]
    pub report_type: ReportType,
    pub query_request: SourceRequest,
}

impl ReportRequest {
    pub fn new(chip_ids: Vec<String>, source_type: SourceType, query_request: SourceRequest) -> Self {
        Self {
            chip_ids,
            source_type,
            report_type: ReportType::Generic,
            query_request,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportResponse {
    /// Per-query results keyed by the query's index, as a string.
    #[serde(default)]
    pub result: Option<BTreeMap<String, ReportResult>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome of one query in a report: either rows plus schema, or an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportResult {
    #[serde(default)]
    pub idx: Option<String>,
    #[serde(default)]
    pub result: Option<Vec<Row>>,
    /// Older servers send rows here instead of in `result`.
    #[serde(default)]
    pub data: Option<Vec<Row>>,
    #[serde(default)]
    pub schema: Option<Vec<Column>>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ReportResult {
    pub fn columns(&self) -> &[Column] {
        self.schema.as_deref().unwrap_or_default()
    }

    pub fn rows(&self) -> &[Row] {
        self.result
            .as_deref()
            .or(self.data.as_deref())
            .unwrap_or_default()
    }

    /// Cursor borrowing this result's schema and rows.
    pub fn cursor(&self) -> TabularCursor<'_> {
        TabularCursor::new(self.columns(), self.rows())
    }

    pub fn into_cursor(self) -> TabularCursor<'static> {
        let rows = self.result.or(self.data).unwrap_or_default();
        TabularCursor::new(self.schema.unwrap_or_default(), rows)
    }
}
