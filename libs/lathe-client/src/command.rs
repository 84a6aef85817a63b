use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{CreateChipResponse, ReportRequest, ReportResponse, StageDataRequest};

/// A request to the service: where it goes, what is sent, what comes back.
pub trait Command {
    type Request: Serialize;
    type Response: DeserializeOwned;

    /// Path appended to the client's base URL.
    const ENDPOINT: &'static str;

    fn request(&self) -> &Self::Request;
}

/// Stage a dataset and get back a chip id.
#[derive(Debug, Clone)]
pub struct CreateChipCommand {
    request: StageDataRequest,
}

impl CreateChipCommand {
    pub fn new(request: StageDataRequest) -> Self {
        Self { request }
    }
}

impl Command for CreateChipCommand {
    type Request = StageDataRequest;
    type Response = CreateChipResponse;

    const ENDPOINT: &'static str = "/lathe/stage/data";

    fn request(&self) -> &StageDataRequest {
        &self.request
    }
}

/// Run queries against staged chips.
#[derive(Debug, Clone)]
pub struct GenerateReportCommand {
    request: ReportRequest,
}

impl GenerateReportCommand {
    pub fn new(request: ReportRequest) -> Self {
        Self { request }
    }
}

impl Command for GenerateReportCommand {
    type Request = ReportRequest;
    type Response = ReportResponse;

    const ENDPOINT: &'static str = "/lathe/report";

    fn request(&self) -> &ReportRequest {
        &self.request
    }
}
