
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::bytes_format::format_bytes;
use crate::evaluation_client::EvaluationClient;
use crate::file_source::DiskFile;

/// One output line of the command line front end.
#[derive(Serialize, Debug)]
pub struct ReportLine {
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReportLine {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

pub async fn evaluate_path(client: &EvaluationClient, path: &Path) -> ReportLine {
    let file_name = path.display().to_string();
    if let Ok(metadata) = tokio::fs::metadata(path).await {
        info!("evaluating {} ({})", file_name, format_bytes(metadata.len(), 2));
    }
    match client.evaluate(DiskFile::new(path)).await {
        Ok(result) => ReportLine {
            file: file_name,
            result: Some(result),
            error: None,
        },
        Err(e) => {
            warn!("evaluation of {} failed: {:?}", file_name, e);
            ReportLine {
                file: file_name,
                result: None,
                error: Some(e.to_string()),
            }
        }
    }
}

pub fn failed_count(lines: &[ReportLine]) -> usize {
    lines.iter()
        .filter(|line| !line.is_ok())
        .count()
}
