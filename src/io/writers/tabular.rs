//! Row-per-study CSV encodings.
//!
//! The detailed layout carries base metadata columns, one
//! `{Domain}_Stars` / `{Domain}_Max_Stars` / `{Domain}_Percentage` triple
//! per domain, and one `NOS_{criterion}` column per raw answer. The `NOS_`
//! prefix keeps criterion keys from colliding with metadata columns.
//! Studies of different designs union their columns; absent cells stay
//! empty.

use std::collections::HashMap;
use std::io::Write;

use serde::Serialize;

use crate::catalog::catalog;
use crate::core::{DomainName, Study};
use crate::io::writers::ExportWriter;
use crate::io::{PortfolioExport, TIMESTAMP_FORMAT};

static BASE_COLUMNS: &[&str] = &[
    "Study_ID",
    "Study_Name",
    "First_Author",
    "All_Authors",
    "Publication_Year",
    "Journal",
    "DOI",
    "Study_Type",
    "Assessment_Date",
    "Total_Stars",
    "Max_Possible_Stars",
    "Quality_Rating",
    "Quality_Percentage",
    "Notes",
];

/// Detailed row-per-study writer
pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ExportWriter for CsvWriter<W> {
    fn write_portfolio(&mut self, export: &PortfolioExport) -> anyhow::Result<()> {
        let columns = collect_columns(&export.studies);
        let mut csv_writer = ::csv::Writer::from_writer(&mut self.writer);

        csv_writer.write_record(&columns)?;
        for (index, study) in export.studies.iter().enumerate() {
            let row = study_row(index + 1, study);
            csv_writer.write_record(
                columns
                    .iter()
                    .map(|column| row.get(column).cloned().unwrap_or_default()),
            )?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Union of columns across all studies: base fields first, then domain
/// triples in first-seen order, then raw-answer columns in catalog order.
fn collect_columns(studies: &[Study]) -> Vec<String> {
    let mut columns: Vec<String> = BASE_COLUMNS.iter().map(|c| c.to_string()).collect();

    for study in studies {
        for domain in study.score_breakdown().domains {
            let stars_column = format!("{}_Stars", domain.name);
            if !columns.contains(&stars_column) {
                columns.push(stars_column);
                columns.push(format!("{}_Max_Stars", domain.name));
                columns.push(format!("{}_Percentage", domain.name));
            }
        }
    }

    for study in studies {
        for domain in catalog().domains_for(study.study_design) {
            for criterion in domain.criteria {
                if study.assessment.response(criterion.key).is_some() {
                    let column = format!("NOS_{}", criterion.key);
                    if !columns.contains(&column) {
                        columns.push(column);
                    }
                }
            }
        }
    }

    columns
}

fn study_row(id: usize, study: &Study) -> HashMap<String, String> {
    let meta = &study.metadata;
    let mut row = HashMap::new();

    row.insert("Study_ID".to_string(), id.to_string());
    row.insert("Study_Name".to_string(), meta.study_name.clone());
    row.insert("First_Author".to_string(), meta.first_author().to_string());
    row.insert("All_Authors".to_string(), meta.authors.clone());
    row.insert(
        "Publication_Year".to_string(),
        meta.publication_year.to_string(),
    );
    row.insert("Journal".to_string(), meta.journal.clone());
    row.insert("DOI".to_string(), meta.doi.clone().unwrap_or_default());
    row.insert("Study_Type".to_string(), study.study_design.to_string());
    row.insert(
        "Assessment_Date".to_string(),
        study.assessed_at.format(TIMESTAMP_FORMAT).to_string(),
    );
    row.insert("Total_Stars".to_string(), study.total_stars.to_string());
    row.insert(
        "Max_Possible_Stars".to_string(),
        study.study_design.max_stars().to_string(),
    );
    row.insert("Quality_Rating".to_string(), study.quality_tier.to_string());
    row.insert(
        "Quality_Percentage".to_string(),
        format!("{:.1}", study.quality_percentage()),
    );
    row.insert("Notes".to_string(), meta.notes.clone().unwrap_or_default());

    for domain in study.score_breakdown().domains {
        row.insert(format!("{}_Stars", domain.name), domain.stars.to_string());
        row.insert(
            format!("{}_Max_Stars", domain.name),
            domain.max_stars.to_string(),
        );
        row.insert(
            format!("{}_Percentage", domain.name),
            format!("{:.1}", domain.percentage()),
        );
    }

    for (criterion, option) in study.assessment.iter() {
        row.insert(format!("NOS_{criterion}"), option.to_string());
    }

    row
}

/// One row of the publication-ready summary table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Reference")]
    pub reference: String,
    #[serde(rename = "Study Design")]
    pub study_design: String,
    #[serde(rename = "Selection")]
    pub selection: String,
    #[serde(rename = "Comparability")]
    pub comparability: String,
    #[serde(rename = "Outcome/Exposure")]
    pub outcome_exposure: String,
    #[serde(rename = "Total Score")]
    pub total_score: String,
    #[serde(rename = "Quality Assessment")]
    pub quality: String,
}

/// Publication-ready summary rows, one per study
pub fn summary_rows(studies: &[Study]) -> Vec<SummaryRow> {
    studies
        .iter()
        .map(|study| {
            let breakdown = study.score_breakdown();
            let cell = |name: DomainName| {
                breakdown
                    .domain(name)
                    .map(|d| format!("{}/{}", d.stars, d.max_stars))
                    .unwrap_or_else(|| "N/A".to_string())
            };
            // Exposure stands in for Outcome in case-control studies
            let outcome_exposure = breakdown
                .domain(DomainName::Outcome)
                .or_else(|| breakdown.domain(DomainName::Exposure))
                .map(|d| format!("{}/{}", d.stars, d.max_stars))
                .unwrap_or_else(|| "N/A".to_string());

            SummaryRow {
                reference: study.metadata.reference(),
                study_design: study.study_design.to_string(),
                selection: cell(DomainName::Selection),
                comparability: cell(DomainName::Comparability),
                outcome_exposure,
                total_score: format!("{}/9", study.total_stars),
                quality: study.quality_tier.to_string(),
            }
        })
        .collect()
}

/// Summary-table writer
pub struct SummaryCsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryCsvWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ExportWriter for SummaryCsvWriter<W> {
    fn write_portfolio(&mut self, export: &PortfolioExport) -> anyhow::Result<()> {
        let mut csv_writer = ::csv::Writer::from_writer(&mut self.writer);
        for row in summary_rows(&export.studies) {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Assessment, StudyDesign, StudyMetadata};
    use chrono::{TimeZone, Utc};

    fn cohort_study() -> Study {
        Study::assess_at(
            StudyMetadata {
                study_name: "Cohort A".to_string(),
                authors: "Smith J, Lee K".to_string(),
                publication_year: 2018,
                journal: "BMJ".to_string(),
                ..Default::default()
            },
            StudyDesign::Cohort,
            Assessment::new()
                .with("representativeness", "truly_representative")
                .with("comparability", "most_important"),
            Utc.with_ymd_and_hms(2024, 1, 10, 14, 0, 0).unwrap(),
        )
    }

    #[test]
    fn columns_start_with_base_layout() {
        let columns = collect_columns(&[cohort_study()]);
        assert_eq!(&columns[..3], &["Study_ID", "Study_Name", "First_Author"]);
        assert!(columns.contains(&"Selection_Stars".to_string()));
        assert!(columns.contains(&"Comparability_Percentage".to_string()));
        assert!(columns.contains(&"NOS_comparability".to_string()));
        // unanswered criteria get no raw-answer column
        assert!(!columns.contains(&"NOS_adequacy_followup".to_string()));
    }

    #[test]
    fn row_values_match_the_study() {
        let study = cohort_study();
        let row = study_row(1, &study);
        assert_eq!(row["Study_ID"], "1");
        assert_eq!(row["First_Author"], "Smith J");
        assert_eq!(row["Study_Type"], "Cohort Studies");
        assert_eq!(row["Assessment_Date"], "2024-01-10 14:00:00");
        assert_eq!(row["Total_Stars"], "2");
        assert_eq!(row["Max_Possible_Stars"], "9");
        assert_eq!(row["Selection_Stars"], "1");
        assert_eq!(row["Comparability_Max_Stars"], "2");
        assert_eq!(row["NOS_representativeness"], "truly_representative");
    }

    #[test]
    fn summary_row_for_case_control_uses_exposure() {
        let study = Study::assess_at(
            StudyMetadata {
                study_name: "CC".to_string(),
                authors: "Patel R, Wong S".to_string(),
                publication_year: 2020,
                journal: "Lancet".to_string(),
                ..Default::default()
            },
            StudyDesign::CaseControl,
            Assessment::new().with("same_method", "yes"),
            Utc.with_ymd_and_hms(2024, 1, 10, 14, 0, 0).unwrap(),
        );
        let rows = summary_rows(&[study]);
        assert_eq!(rows[0].reference, "Patel R et al. (2020)");
        assert_eq!(rows[0].outcome_exposure, "1/3");
        assert_eq!(rows[0].total_score, "1/9");
        assert_eq!(rows[0].quality, "Poor Quality");
    }
}
