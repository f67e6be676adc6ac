//! Selector files: scope configuration plus grouped options, stored as JSON.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rowkit_model::{Dataset, LabeledOption, SelectorOptions};
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorFile {
    #[serde(default)]
    pub options: SelectorOptions,
    #[serde(default)]
    pub sections: Dataset<LabeledOption>,
}

impl SelectorFile {
    pub fn from_json(json: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(json).context("parse selector file")?;
        file.options
            .validate()
            .context("invalid scope configuration")?;
        Ok(file)
    }
}

pub fn load_selector_file(path: &Path) -> Result<SelectorFile> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("read selector file {}", path.display()))?;
    let file = SelectorFile::from_json(&json)
        .with_context(|| format!("load selector file {}", path.display()))?;
    info!(
        path = %path.display(),
        sections = file.sections.section_count(),
        options = file.sections.option_count(),
        "Loaded selector file"
    );
    Ok(file)
}
