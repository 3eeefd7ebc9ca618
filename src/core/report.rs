use crate::core::{Generation, GenerationsInfo};
use crate::utils::error::{GenerationsError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::str::FromStr;

pub const OUTPUT_FORMATS: [&str; 3] = ["table", "csv", "json"];

const HEADERS: [&str; 4] = [
    "generation",
    "initial_release",
    "oss_support_end",
    "commercial_support_end",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = GenerationsError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(GenerationsError::InvalidConfigValueError {
                field: "format".to_string(),
                value: value.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", OUTPUT_FORMATS.join(", ")),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    generation: &'a str,
    initial_release: NaiveDate,
    oss_support_end: Option<NaiveDate>,
    commercial_support_end: Option<NaiveDate>,
}

impl<'a> From<&'a Generation> for ReportRow<'a> {
    fn from(generation: &'a Generation) -> Self {
        Self {
            generation: generation.name().as_str(),
            initial_release: generation.initial_release_date,
            oss_support_end: generation.oss_support_end_date,
            commercial_support_end: generation.commercial_support_end_date,
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    project: &'a str,
    last_modified: DateTime<Utc>,
    generations: Vec<ReportRow<'a>>,
}

/// Support dates of one project's generations, ready to print.
pub struct Report<'a> {
    project: &'a str,
    info: &'a GenerationsInfo,
}

impl<'a> Report<'a> {
    pub fn new(project: &'a str, info: &'a GenerationsInfo) -> Self {
        Self { project, info }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Csv => self.render_csv(),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn rows(&self) -> impl Iterator<Item = ReportRow<'a>> {
        let info: &'a GenerationsInfo = self.info;
        info.generations().map(ReportRow::from)
    }

    fn cells(row: &ReportRow<'_>) -> [String; 4] {
        [
            row.generation.to_string(),
            row.initial_release.to_string(),
            date_cell(row.oss_support_end),
            date_cell(row.commercial_support_end),
        ]
    }

    fn render_table(&self) -> String {
        let rows: Vec<[String; 4]> = self.rows().map(|row| Self::cells(&row)).collect();

        let mut widths = HEADERS.map(display_width);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(cell));
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "{}", self.project);
        let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        push_table_line(&mut out, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_table_line(&mut out, &rule, &widths);
        for row in &rows {
            push_table_line(&mut out, row, &widths);
        }
        out
    }

    fn render_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(HEADERS)?;
        for row in self.rows() {
            writer.write_record(Self::cells(&row))?;
        }
        let bytes = writer.into_inner().map_err(|e| e.into_error())?;
        String::from_utf8(bytes)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
    }

    fn render_json(&self) -> Result<String> {
        let report = JsonReport {
            project: self.project,
            last_modified: self.info.last_modified(),
            generations: self.rows().collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

fn date_cell(date: Option<NaiveDate>) -> String {
    date.map(|d| d.to_string()).unwrap_or_default()
}

fn display_width(cell: &str) -> usize {
    cell.chars().count()
}

fn push_table_line(out: &mut String, cells: &[String], widths: &[usize; 4]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(display_width(cell));
            format!("{}{}", cell, " ".repeat(padding))
        })
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
