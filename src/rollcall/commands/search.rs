use crate::commands::CmdResult;
use crate::model::StudentRecord;

/// Case-insensitive substring match on name, roll number and email.
///
/// An empty query matches everything. Results keep the input order.
pub fn filter(records: &[StudentRecord], query: &str) -> Vec<StudentRecord> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            [&r.name, &r.roll_no, &r.email]
                .iter()
                .any(|field| field.to_lowercase().contains(&query_lower))
        })
        .cloned()
        .collect()
}

pub fn run(records: &[StudentRecord], query: &str) -> CmdResult {
    CmdResult::default().with_listed_records(filter(records, query))
}
