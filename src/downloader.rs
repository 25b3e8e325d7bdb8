use chrono::Utc;

/// A record that can be serialized into a CSV export
///
/// `field_names` gives the column headers in declaration order;
/// `field_values` must emit values in the same order. The export assumes a
/// homogeneous record set: one header row serves every record.
pub trait Exportable {
    fn field_names() -> &'static [&'static str];
    fn field_values(&self) -> Vec<String>;
}

/// Serialize a filtered record set to CSV
///
/// Returns `None` for an empty set (a zero-row export is a no-op, not an
/// error). The header row comes first; every value is quoted with internal
/// quotes doubled. Embedded newlines pass through unhandled; that is a
/// known limitation of the export, not something this function repairs.
///
/// # Examples
/// ```
/// use gundagardi::downloader::to_csv;
/// use gundagardi::feedback::FeedbackRow;
///
/// let rows: Vec<FeedbackRow> = Vec::new();
/// assert!(to_csv(&rows).is_none());
/// ```
pub fn to_csv<R: Exportable>(records: &[R]) -> Option<String> {
    if records.is_empty() {
        return None;
    }

    let mut csv_content = R::field_names().join(",");

    for record in records {
        csv_content.push('\n');
        let row = record
            .field_values()
            .iter()
            .map(|value| format!("\"{}\"", value.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(",");
        csv_content.push_str(&row);
    }

    Some(csv_content)
}

/// Name for a feedback export file: `feedback_data_<ISO-date>.csv`
pub fn csv_filename() -> String {
    format!("feedback_data_{}.csv", Utc::now().format("%Y-%m-%d"))
}

/// Parse one CSV row into its fields
///
/// Handles quoted fields and doubled internal quotes. Used to verify that
/// exports re-parse to the values that went in.
pub fn parse_csv_row(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if let Some(&next) = chars.peek() {
                    if next == '"' && in_quotes {
                        // Doubled quote inside a quoted field
                        current_field.push('"');
                        chars.next();
                    } else {
                        in_quotes = !in_quotes;
                    }
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                result.push(current_field);
                current_field = String::new();
            }
            _ => {
                current_field.push(c);
            }
        }
    }

    result.push(current_field);
    result
}
