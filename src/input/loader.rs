//! Loading of weight tables, response sheets and exercise metrics.

use serde::de::DeserializeOwned;
use std::path::Path;

use super::format::InputFormat;
use crate::error::{ErrorContext, MaturityError, Result};
use crate::governance::{ResponseSheet, WeightTable};
use crate::purple::PurpleMetrics;

/// Deserialize a document in the given format.
pub fn parse_document<T: DeserializeOwned>(content: &str, format: InputFormat) -> Result<T> {
    match format {
        InputFormat::Json => Ok(serde_json::from_str(content)?),
        InputFormat::Yaml => Ok(serde_yaml::from_str(content)?),
    }
}

/// Read and deserialize a YAML or JSON document.
///
/// The format comes from the file extension, or from the content when the
/// extension is not recognized.
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| MaturityError::io(path, e))?;
    let format = InputFormat::detect(path, &content)
        .ok_or_else(|| MaturityError::unknown_format(path.display().to_string()))?;
    tracing::debug!("Reading {} as {}", path.display(), format);
    parse_document(&content, format).with_context(|| format!("loading {}", path.display()))
}

/// Load and validate a questionnaire weight table
pub fn load_weight_table(path: &Path) -> Result<WeightTable> {
    let table: WeightTable = load_document(path)?;
    table
        .validate()
        .with_context(|| format!("weight table {}", path.display()))?;
    tracing::info!(
        "Loaded {} questions across {} domains from {}",
        table.questions.len(),
        table.domains().len(),
        path.display()
    );
    Ok(table)
}

/// Load a questionnaire response sheet
pub fn load_response_sheet(path: &Path) -> Result<ResponseSheet> {
    let sheet: ResponseSheet = load_document(path)?;
    tracing::info!(
        "Loaded {} answers from {}",
        sheet.answers.len(),
        path.display()
    );
    Ok(sheet)
}

/// Load and validate Purple Team exercise metrics
pub fn load_purple_metrics(path: &Path) -> Result<PurpleMetrics> {
    let metrics: PurpleMetrics = load_document(path)?;
    metrics
        .validate()
        .with_context(|| format!("exercise metrics {}", path.display()))?;
    Ok(metrics)
}
