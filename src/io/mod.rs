//! Export documents consumed by external report and storage collaborators.
//!
//! The core produces structured values only; rendering (HTML, terminal
//! tables) and persistence stay outside. Document layouts here are the
//! interchange formats downstream tooling already parses, so field names
//! and column layouts are stable.

pub mod writers;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::aggregation::{aggregate, PortfolioStats};
use crate::config;
use crate::core::Study;

/// Timestamp layout used in export documents and the Assessment_Date column
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Header block of the full-portfolio export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportInfo {
    pub tool_name: String,
    pub version: String,
    pub export_date: String,
    pub total_studies: usize,
    pub assessor: String,
}

/// Complete portfolio export: header, aggregated statistics, and the full
/// study list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioExport {
    pub export_info: ExportInfo,
    pub summary_statistics: PortfolioStats,
    pub studies: Vec<Study>,
}

impl PortfolioExport {
    /// Assemble the export document for a set of studies
    pub fn build(studies: &[Study], exported_at: DateTime<Utc>) -> Self {
        PortfolioExport {
            export_info: ExportInfo {
                tool_name: config::get().export.tool_name.clone(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                export_date: exported_at.format(TIMESTAMP_FORMAT).to_string(),
                total_studies: studies.len(),
                assessor: assessor_summary(studies),
            },
            summary_statistics: aggregate(studies),
            studies: studies.to_vec(),
        }
    }
}

/// The single distinct assessor name, "Multiple" when several appear, or
/// "Unknown" for no studies / no recorded assessor.
fn assessor_summary(studies: &[Study]) -> String {
    let names: BTreeSet<&str> = studies
        .iter()
        .map(|s| s.metadata.assessor_name.as_deref().unwrap_or("Unknown"))
        .collect();
    match names.len() {
        0 => "Unknown".to_string(),
        1 => names.iter().next().map(|n| n.to_string()).unwrap_or_default(),
        _ => "Multiple".to_string(),
    }
}

/// Backup document handed to the external store; round-trips through JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackupDocument {
    pub studies: Vec<Study>,
    pub backup_date: String,
}

impl BackupDocument {
    pub fn new(studies: &[Study], backed_up_at: DateTime<Utc>) -> Self {
        BackupDocument {
            studies: studies.to_vec(),
            backup_date: backed_up_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}
