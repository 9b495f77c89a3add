use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_week, rts, setup_test_db, temp_file, temp_out};

const EXTRACTED_WEEK: &str = r#"{
  "employee": {"fullName": "Someone Else", "employeeId": "E-42"},
  "period": {"weekStartDate": "2024-01-08", "weekEndDate": "2024-01-12"},
  "days": [
    {"date": "2024-01-08", "dayOfWeek": "MON",
     "work": {"startTime": "09:00", "endTime": "17:30"},
     "confidence": {"overall": 0.95, "fields": {"startTime": 0.3}}},
    {"date": "2024-01-10", "dayOfWeek": "TUE", "work": {"totalHours": 6, "kilometers": 15}}
  ],
  "validation": {"supervisor": "M. Rossi"},
  "warnings": ["Tuesday row partly illegible"]
}"#;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init_creates");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_manual_week_export_csv() {
    let db_path = setup_test_db("manual_week_export");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "set", "2024-01-08", "--total", "8", "--km", "15"])
        .assert()
        .success();

    rts()
        .args([
            "--db",
            &db_path,
            "set",
            "2024-01-09",
            "--in",
            "09:00",
            "--out",
            "17:30",
            "--break",
            "30",
            "--notes",
            "office",
        ])
        .assert()
        .success();

    let out = temp_out("manual_week_export", "csv");
    rts()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(
        content,
        "Employee Name,Date,Earnings Rate,Units,Notes\n\
         \"Jane Doe\",\"2024-01-08\",\"Ordinary Hours\",\"8.00\",\"\"\n\
         \"Jane Doe\",\"2024-01-08\",\"Kilometers\",\"15.00\",\"15 km\"\n\
         \"Jane Doe\",\"2024-01-09\",\"Ordinary Hours\",\"8.00\",\"office\""
    );
}

#[test]
fn test_show_lists_the_week() {
    let db_path = setup_test_db("show_week");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "set", "2024-01-12", "--total", "7.5"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("2024-01-08"))
        .stdout(contains("2024-01-12"))
        .stdout(contains("7.50"))
        .stdout(contains("Jane Doe"));
}

#[test]
fn test_set_outside_period_fails() {
    let db_path = setup_test_db("set_outside");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "set", "2024-02-01", "--total", "8"])
        .assert()
        .failure()
        .stderr(contains("not part of the current period"));
}

#[test]
fn test_set_requires_both_times() {
    let db_path = setup_test_db("set_both_times");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "set", "2024-01-08", "--in", "09:00"])
        .assert()
        .failure();
}

#[test]
fn test_new_refuses_to_discard_entered_data() {
    let db_path = setup_test_db("new_refuses");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "set", "2024-01-08", "--total", "8"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "new", "2024-01-15"])
        .assert()
        .failure()
        .stderr(contains("--force"));

    rts()
        .args(["--db", &db_path, "new", "2024-01-15", "--days", "7", "--force"])
        .assert()
        .success()
        .stdout(contains("2024-01-15 → 2024-01-21"));
}

#[test]
fn test_apply_payload_replaces_the_week() {
    let db_path = setup_test_db("apply_payload");
    init_db_with_week(&db_path);

    let payload = temp_file("rtimesheet_apply_payload.json", EXTRACTED_WEEK);
    rts()
        .args(["--db", &db_path, "apply", &payload])
        .assert()
        .success()
        .stdout(contains("Extraction applied"))
        .stdout(contains("Tuesday row partly illegible"));

    let out = temp_out("apply_payload", "csv");
    rts()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    // TUE label moves 2024-01-10 to 2024-01-09; default break of 30 applies
    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("\"Jane Doe\",\"2024-01-08\",\"Ordinary Hours\",\"8.00\""));
    assert!(content.contains("\"Jane Doe\",\"2024-01-09\",\"Ordinary Hours\",\"6.00\""));
    assert!(content.contains("\"Jane Doe\",\"2024-01-09\",\"Kilometers\",\"15.00\",\"15 km\""));
    assert!(!content.contains("Someone Else"));

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .success()
        .stdout(contains("M. Rossi"));

    rts()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("reconcile"));
}

#[test]
fn test_apply_without_days_keeps_manual_entries() {
    let db_path = setup_test_db("apply_no_days");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "set", "2024-01-08", "--total", "5"])
        .assert()
        .success();

    let payload = temp_file("rtimesheet_apply_no_days.json", r#"{"days": []}"#);
    rts()
        .args(["--db", &db_path, "apply", &payload])
        .assert()
        .success()
        .stdout(contains("Nothing to apply"));

    let out = temp_out("apply_no_days", "csv");
    rts()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("\"2024-01-08\",\"Ordinary Hours\",\"5.00\""));
}

#[test]
fn test_extract_with_replayed_answer() {
    let db_path = setup_test_db("extract_replay");
    init_db_with_week(&db_path);

    let image = temp_file("rtimesheet_extract_week.png", "not really a png");
    temp_file("rtimesheet_extract_week.json", EXTRACTED_WEEK);

    rts()
        .args(["--db", &db_path, "extract", &image])
        .assert()
        .success()
        .stdout(contains("replay"))
        .stdout(contains("Extraction applied"));
}

#[test]
fn test_extract_requires_employee_name() {
    let db_path = setup_test_db("extract_no_name");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let image = temp_file("rtimesheet_extract_anon.png", "x");
    rts()
        .args(["--db", &db_path, "extract", &image])
        .assert()
        .failure()
        .stderr(contains("Employee name is required"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_week(&db_path);

    rts()
        .args(["--db", &db_path, "set", "2024-01-10", "--total", "4"])
        .assert()
        .success();

    let out = temp_out("export_json", "json");
    rts()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(value["weekStartDate"], "2024-01-08");
    assert_eq!(value["days"].as_array().map(|d| d.len()), Some(5));
    assert_eq!(value["totalHours"], 4.0);
}

#[test]
fn test_commands_without_draft_fail() {
    let db_path = setup_test_db("no_draft");

    rts()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rts()
        .args(["--db", &db_path, "show"])
        .assert()
        .failure()
        .stderr(contains("rtimesheet new"));
}

#[test]
fn test_escaped_export_reparses_as_csv() {
    let db_path = setup_test_db("escaped_reparse");
    init_db_with_week(&db_path);

    rts()
        .args([
            "--db",
            &db_path,
            "set",
            "2024-01-11",
            "--total",
            "3",
            "--notes",
            "client \"ACME\", site B",
        ])
        .assert()
        .success();

    let out = temp_out("escaped_reparse", "csv");
    rts()
        .args([
            "--db", &db_path, "export", "--file", &out, "--quoting", "escaped", "--force",
        ])
        .assert()
        .success();

    let mut reader = csv::Reader::from_path(&out).expect("open exported csv");
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        vec!["Employee Name", "Date", "Earnings Rate", "Units", "Notes"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("record")).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][1], "2024-01-11");
    assert_eq!(&rows[0][3], "3.00");
    assert_eq!(&rows[0][4], "client \"ACME\", site B");
}
