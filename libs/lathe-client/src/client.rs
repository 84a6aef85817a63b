use std::collections::BTreeMap;
use std::time::Duration;

use lathe_api::TabularCursor;

use crate::command::{Command, CreateChipCommand, GenerateReportCommand};
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::{
    ReportRequest, ReportResult, SourceRequest, SourceType, StageDataRequest,
    StageDataSourceRequest,
};

/// HTTP client for the lathe service.
///
/// Staging turns source queries into chips; reports run SQL against chips
/// and return one [`ReportResult`] per query.
#[derive(Debug, Clone)]
pub struct LatheClient {
    http: reqwest::Client,
    base_url: String,
    source_type: SourceType,
}

impl LatheClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::default()
        })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Config(format!("HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            source_type: config.source_type,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the command's request as JSON and decode the response body.
    pub async fn send_command<C: Command>(&self, command: &C) -> Result<C::Response, ClientError> {
        let url = format!("{}{}", self.base_url, C::ENDPOINT);
        let body = serde_json::to_string(command.request())?;
        tracing::debug!(url = %url, body = %body, "sending command");

        let resp = self
            .http
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                endpoint: C::ENDPOINT,
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Stage the result of `query` on `source_name` and return its chip id.
    pub async fn stage_data(
        &self,
        source_name: &str,
        query: &str,
        table_name: &str,
        chip_id: Option<&str>,
    ) -> Result<String, ClientError> {
        let source = StageDataSourceRequest::new(source_name, query).with_table(table_name);
        self.stage(source, chip_id).await
    }

    /// Stage each request in turn, one command per request.
    pub async fn stage_data_many(
        &self,
        requests: Vec<StageDataSourceRequest>,
        chip_id: Option<&str>,
    ) -> Result<Vec<String>, ClientError> {
        let mut chip_ids = Vec::with_capacity(requests.len());
        for source in requests {
            chip_ids.push(self.stage(source, chip_id).await?);
        }
        Ok(chip_ids)
    }

    async fn stage(
        &self,
        source: StageDataSourceRequest,
        chip_id: Option<&str>,
    ) -> Result<String, ClientError> {
        let command = CreateChipCommand::new(StageDataRequest {
            source_type: self.source_type,
            source_request: source,
            chip_id: chip_id.map(str::to_owned),
        });
        let response = self.send_command(&command).await?;

        if let Some(error) = response.error {
            return Err(ClientError::Stage(error));
        }
        let chip_id = response
            .chip_id
            .ok_or_else(|| ClientError::Stage("response has no chip_id".into()))?;
        tracing::info!(chip_id = %chip_id, "data staged");
        Ok(chip_id)
    }

    /// Run `queries` against the chips. Results are keyed by query index
    /// and include failed queries with their `error` set.
    pub async fn generate_report(
        &self,
        chip_ids: Vec<String>,
        queries: Vec<String>,
    ) -> Result<BTreeMap<usize, ReportResult>, ClientError> {
        let request = ReportRequest::new(chip_ids, SourceType::Local, SourceRequest::new(queries));
        let response = self
            .send_command(&GenerateReportCommand::new(request))
            .await?;

        if let Some(error) = response.error {
            return Err(ClientError::Report(error));
        }

        response
            .result
            .unwrap_or_default()
            .into_iter()
            .map(|(idx, result)| {
                let idx = idx
                    .parse::<usize>()
                    .map_err(|_| ClientError::InvalidIndex(idx))?;
                Ok((idx, result))
            })
            .collect()
    }

    /// Like [`generate_report`](Self::generate_report), keeping only the
    /// queries that succeeded, each as a cursor.
    pub async fn query(
        &self,
        chip_ids: Vec<String>,
        queries: Vec<String>,
    ) -> Result<BTreeMap<usize, TabularCursor<'static>>, ClientError> {
        let results = self.generate_report(chip_ids, queries).await?;
        let mut cursors = BTreeMap::new();
        for (idx, result) in results {
            if let Some(error) = &result.error {
                tracing::warn!(query = idx, error = %error, "query failed");
                continue;
            }
            cursors.insert(idx, result.into_cursor());
        }
        Ok(cursors)
    }
}
