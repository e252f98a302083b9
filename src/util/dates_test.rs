use super::*;

#[test]
fn formats_sqlite_timestamp() {
    assert_eq!(format_comment_date("2024-03-05 10:11:12"), "3/5/2024");
}

#[test]
fn formats_rfc3339_and_naive_iso() {
    assert_eq!(format_comment_date("2023-12-31T23:00:00Z"), "12/31/2023");
    assert_eq!(format_comment_date("2023-01-09T08:00:00.250"), "1/9/2023");
}

#[test]
fn formats_bare_date() {
    assert_eq!(format_comment_date("2022-07-04"), "7/4/2022");
}

#[test]
fn returns_unparseable_input_unchanged() {
    assert_eq!(format_comment_date("yesterday"), "yesterday");
    assert_eq!(format_comment_date(""), "");
}
