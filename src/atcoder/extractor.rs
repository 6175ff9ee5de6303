//! Extraction of submission rows from an AtCoder submissions-list page.
//!
//! Column positions follow AtCoder's table layout: 0 submission time, 1 task,
//! 6 verdict, 9 detail link. The extractor is a pure function of the page
//! text so the HTML backend can change without touching later stages.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::core::models::SubmissionRecord;
use crate::errors::SummaryError;

const TIME_COLUMN: usize = 0;
const TITLE_COLUMN: usize = 1;
const STATUS_COLUMN: usize = 6;
const DETAIL_COLUMN: usize = 9;

static SCRAPER: Lazy<SubmissionsPageScraper> = Lazy::new(SubmissionsPageScraper::new);

static DETAIL_HREF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^/contests/\w+/submissions/\d+$").expect("static regex compile")
});

pub struct SubmissionsPageScraper {
    tr: Selector,
    td: Selector,
    time: Selector,
    a: Selector,
}

impl SubmissionsPageScraper {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tr: Selector::parse("tr").expect("static selector"),
            td: Selector::parse("td").expect("static selector"),
            time: Selector::parse("time").expect("static selector"),
            a: Selector::parse("a").expect("static selector"),
        }
    }

    /// Reads every row after the header into a record. Any row that does not
    /// fit the column layout fails the whole page.
    pub fn extract_submissions(
        &self,
        html: &str,
        base_url: &Url,
    ) -> Result<Vec<SubmissionRecord>, SummaryError> {
        let document = Html::parse_document(html);

        document
            .select(&self.tr)
            .skip(1)
            .enumerate()
            .map(|(i, tr)| self.extract_row(i + 1, tr, base_url))
            .collect()
    }

    fn extract_row(
        &self,
        row: usize,
        tr: ElementRef<'_>,
        base_url: &Url,
    ) -> Result<SubmissionRecord, SummaryError> {
        let td: Vec<ElementRef<'_>> = tr.select(&self.td).collect();
        let cell = |index: usize| {
            td.get(index).copied().ok_or_else(|| {
                SummaryError::ScrapeError(format!("row {} has no column {}", row, index))
            })
        };

        let time_text = cell(TIME_COLUMN)?
            .select(&self.time)
            .next()
            .map(|time| collect_text(&time))
            .ok_or_else(|| {
                SummaryError::ScrapeError(format!("row {} has no submission time", row))
            })?;
        let time = parse_submission_time(&time_text).ok_or_else(|| {
            SummaryError::ScrapeError(format!(
                "row {} has an unreadable submission time: {}",
                row, time_text
            ))
        })?;

        let title = collect_text(&cell(TITLE_COLUMN)?);
        let status = collect_text(&cell(STATUS_COLUMN)?);

        let href = td
            .get(DETAIL_COLUMN)
            .and_then(|detail| detail.select(&self.a).next())
            .and_then(|a| a.value().attr("href"))
            .map(ToString::to_string)
            .or_else(|| self.find_detail_href(tr))
            .ok_or_else(|| {
                SummaryError::ScrapeError(format!("row {} has no submission detail link", row))
            })?;
        let detail = base_url.join(&href).map_err(|e| {
            SummaryError::ScrapeError(format!("row {} has a bad detail link {}: {}", row, href, e))
        })?;

        Ok(SubmissionRecord {
            time,
            title,
            status,
            detail: detail.to_string(),
        })
    }

    /// Rows with merged exec-time/memory cells shift the detail column, so
    /// fall back to the last anchor that points at a submission page.
    fn find_detail_href(&self, tr: ElementRef<'_>) -> Option<String> {
        tr.select(&self.a)
            .filter_map(|a| a.value().attr("href"))
            .filter(|href| DETAIL_HREF_RE.is_match(href))
            .last()
            .map(ToString::to_string)
    }
}

impl Default for SubmissionsPageScraper {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parses AtCoder's `2024-01-13 21:05:33+0900` rendering, or RFC 3339.
#[must_use]
pub fn parse_submission_time(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%z")
        .or_else(|_| DateTime::parse_from_rfc3339(text))
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Extracts submission records from a submissions-list page.
pub fn parse_submissions(
    html: &str,
    base_url: &Url,
) -> Result<Vec<SubmissionRecord>, SummaryError> {
    SCRAPER.extract_submissions(html, base_url)
}
