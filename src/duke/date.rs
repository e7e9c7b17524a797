//! Date literals typed by the user: `dd/mm/yyyy`, zero-padded.

use chrono::NaiveDate;

pub const INPUT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses `dd/mm/yyyy` into a calendar date.
///
/// Field widths are checked before handing off to chrono, which on its own
/// would also take `2/12/2024`. Impossible dates such as `31/02/2024` fail.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let fields: Vec<&str> = text.split('/').collect();
    let widths_ok = matches!(fields.as_slice(), [d, m, y] if d.len() == 2 && m.len() == 2 && y.len() == 4);
    let digits_ok = fields
        .iter()
        .all(|f| f.bytes().all(|b| b.is_ascii_digit()));
    if !widths_ok || !digits_ok {
        return None;
    }
    NaiveDate::parse_from_str(text, INPUT_DATE_FORMAT).ok()
}
