use tracing::{debug, trace};

use super::types::{LABELS, MetadataField, StatementMetadata};
use crate::parsers::lines::page_lines;
use crate::parsers::traits::SectionParser;

/// Header line of the transaction table; metadata never appears below it.
const TABLE_HEADER: &str = "transaction date";

/// Reads the statement header from the first page.
///
/// The header prints each field as a bilingual label pair followed by a value
/// line starting with `:`:
///
/// ```text
/// No. Rekening
/// Account No
/// : 123-456-789
/// ```
pub struct MetadataExtractor;

impl MetadataExtractor {
    fn label_pair(line: &str, next_line: &str) -> Option<MetadataField> {
        let line = line.to_lowercase();
        let next_line = next_line.to_lowercase();

        LABELS
            .iter()
            .find(|(id_label, en_label, _)| line == *id_label && next_line == *en_label)
            .map(|(_, _, field)| *field)
    }

    fn header_lines(page: &str) -> Vec<&str> {
        let mut lines = Vec::new();
        for line in page_lines(page) {
            if line.to_lowercase() == TABLE_HEADER {
                debug!("Metadata scan stopped at table header after {} lines", lines.len());
                break;
            }
            lines.push(line);
        }
        lines
    }

    /// Extracts the header fields from the text of a single page.
    pub fn extract(page: &str) -> StatementMetadata {
        let lines = Self::header_lines(page);
        let mut metadata = StatementMetadata::default();
        let mut expected: Option<MetadataField> = None;

        for (i, line) in lines.iter().enumerate() {
            if let Some(next_line) = lines.get(i + 1) {
                if let Some(field) = Self::label_pair(line, next_line) {
                    expected = Some(field);
                }
            }

            if !line.starts_with(':') {
                continue;
            }

            // Only the first value line after a label pair is taken.
            if let Some(field) = expected.take() {
                let value = line.trim_start_matches(':').trim();
                trace!("{} = {:?}", field.key(), value);
                metadata.set(field, value.to_string());
            }
        }

        metadata
    }
}

impl SectionParser for MetadataExtractor {
    type Output = StatementMetadata;

    fn is_supported(page: &str) -> bool {
        let lines = Self::header_lines(page);
        lines
            .windows(2)
            .any(|pair| Self::label_pair(pair[0], pair[1]).is_some())
    }

    fn parse(pages: &[&str]) -> Self::Output {
        pages
            .first()
            .map(|page| Self::extract(page))
            .unwrap_or_default()
    }
}
