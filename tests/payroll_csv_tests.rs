use chrono::{NaiveDate, NaiveTime};
use rtimesheet::core::AppState;
use rtimesheet::core::period::blank_week;
use rtimesheet::export::json::PeriodExport;
use rtimesheet::export::{CsvQuoting, default_file_name, payroll_rows, render_csv};
use rtimesheet::models::{DayRecord, Employee, WorkPeriod};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn named(name: &str) -> Employee {
    Employee {
        full_name: Some(name.into()),
        ..Default::default()
    }
}

#[test]
fn test_single_day_exact_output() {
    let mut day = DayRecord::blank(d(2024, 1, 8));
    day.total_hours = Some(8.0);
    day.kilometers = Some(15.0);
    let period = WorkPeriod::new(vec![day]).unwrap();

    let csv = render_csv(&named("Jane Doe"), &period, CsvQuoting::Verbatim).unwrap();
    assert_eq!(
        csv,
        "Employee Name,Date,Earnings Rate,Units,Notes\n\
         \"Jane Doe\",\"2024-01-08\",\"Ordinary Hours\",\"8.00\",\"\"\n\
         \"Jane Doe\",\"2024-01-08\",\"Kilometers\",\"15.00\",\"15 km\""
    );
}

#[test]
fn test_empty_days_contribute_no_rows() {
    let period = blank_week(d(2024, 1, 8)).unwrap();
    assert!(payroll_rows("Jane Doe", &period).is_empty());

    let csv = render_csv(&named("Jane Doe"), &period, CsvQuoting::Verbatim).unwrap();
    assert_eq!(csv, "Employee Name,Date,Earnings Rate,Units,Notes");
}

#[test]
fn test_rows_follow_period_order() {
    let mut mon = DayRecord::blank(d(2024, 1, 8));
    mon.set_times(
        NaiveTime::from_hms_opt(9, 0, 0),
        NaiveTime::from_hms_opt(17, 30, 0),
    );
    mon.break_minutes = Some(30);
    mon.notes = Some("site visit".into());

    let mut tue = DayRecord::blank(d(2024, 1, 9));
    tue.kilometers = Some(12.5);

    let wed = DayRecord::blank(d(2024, 1, 10));

    let period = WorkPeriod::new(vec![mon, tue, wed]).unwrap();
    let rows = payroll_rows("Jane Doe", &period);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].earnings_rate, "Ordinary Hours");
    assert_eq!(rows[0].units, "8.00");
    assert_eq!(rows[0].notes, "site visit");
    assert_eq!(rows[1].date, "2024-01-09");
    assert_eq!(rows[1].units, "12.50");
    assert_eq!(rows[1].notes, "12.5 km");
}

#[test]
fn test_missing_name_falls_back_to_email_then_placeholder() {
    let mut day = DayRecord::blank(d(2024, 1, 8));
    day.total_hours = Some(1.0);
    let period = WorkPeriod::new(vec![day]).unwrap();

    let by_mail = Employee {
        email: Some("jane@example.com".into()),
        ..Default::default()
    };
    let csv = render_csv(&by_mail, &period, CsvQuoting::Verbatim).unwrap();
    assert!(csv.contains("\"jane@example.com\",\"2024-01-08\""));

    let csv = render_csv(&Employee::default(), &period, CsvQuoting::Verbatim).unwrap();
    assert!(csv.contains("\"Unknown Employee\""));
}

#[test]
fn test_embedded_quotes() {
    let mut day = DayRecord::blank(d(2024, 1, 8));
    day.total_hours = Some(4.0);
    day.notes = Some(r#"client "ACME""#.into());
    let period = WorkPeriod::new(vec![day]).unwrap();
    let jane = named("Jane Doe");

    let verbatim = render_csv(&jane, &period, CsvQuoting::Verbatim).unwrap();
    assert!(verbatim.ends_with(r#""4.00","client "ACME"""#));

    let escaped = render_csv(&jane, &period, CsvQuoting::Escaped).unwrap();
    assert!(escaped.ends_with(r#""4.00","client ""ACME""""#));
    assert!(!escaped.ends_with('\n'));
}

#[test]
fn test_default_file_name() {
    let period = blank_week(d(2024, 1, 10)).unwrap();
    assert_eq!(
        default_file_name(&named("Jane  Mary Doe"), &period),
        "timesheet_2024-01-08_Jane_Mary_Doe.csv"
    );
}

#[test]
fn test_json_export_carries_derived_hours() {
    let mut day = DayRecord::blank(d(2024, 1, 8));
    day.total_hours = Some(7.5);
    let state = AppState::new(named("Jane Doe"), WorkPeriod::new(vec![day]).unwrap());

    let json = serde_json::to_value(PeriodExport::from_state(&state)).unwrap();
    let text = json.to_string();
    assert!(text.contains("\"2024-01-08\""));
    assert!(text.contains("MON"));
    assert!(text.contains("7.5"));
}
