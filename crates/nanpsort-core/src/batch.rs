use crate::domain::{PhoneNumber, Record};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

const FIELD_SEPARATOR: char = '\t';

/// What to do with a line that does not split into exactly two fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedLinePolicy {
    #[default]
    Abort,
    Skip,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SortReport {
    pub records: Vec<Record>,
    /// Records whose number failed validation.
    pub dropped: usize,
    /// Malformed lines passed over under [`MalformedLinePolicy::Skip`].
    pub skipped: usize,
    pub warnings: Vec<String>,
}

/// Splits one `name<TAB>number` line and normalizes the number.
///
/// Returns `Ok(None)` when the number is not a valid NANP number. A line
/// that does not have exactly two fields is reported with line number 0;
/// [`sort_records`] fills in the real position.
pub fn parse_record_line(line: &str) -> Result<Option<Record>, CoreError> {
    let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
    let [name, raw_number] = fields.as_slice() else {
        return Err(CoreError::MalformedRecord {
            line: 0,
            fields: fields.len(),
        });
    };

    match PhoneNumber::from_text(raw_number) {
        Ok(number) => Ok(Some(Record::new(*name, number))),
        Err(CoreError::InvalidNumber(_)) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Parses every line of `data` and returns the valid records ordered by
/// number. Records sharing a number keep their input order.
pub fn sort_records(data: &str, policy: MalformedLinePolicy) -> Result<SortReport, CoreError> {
    let mut report = SortReport::default();

    for (index, line) in data.lines().enumerate() {
        let line_no = index + 1;
        match parse_record_line(line) {
            Ok(Some(record)) => report.records.push(record),
            Ok(None) => {
                report.dropped += 1;
                report
                    .warnings
                    .push(format!("line {line_no}: invalid phone number dropped"));
            }
            Err(CoreError::MalformedRecord { fields, .. }) => {
                if policy == MalformedLinePolicy::Abort {
                    return Err(CoreError::MalformedRecord {
                        line: line_no,
                        fields,
                    });
                }
                report.skipped += 1;
                report.warnings.push(format!(
                    "line {line_no}: expected 2 tab-separated fields, found {fields}"
                ));
            }
            Err(err) => return Err(err),
        }
    }

    report
        .records
        .sort_by_key(|record| record.number.to_integer());
    Ok(report)
}
