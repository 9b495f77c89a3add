mod common;
use common::temp_file;
use rtimesheet::core::ReconcilePolicy;
use rtimesheet::errors::AppError;
use rtimesheet::models::ExtractionPayload;
use rtimesheet::models::payload::parse_number_text;
use rtimesheet::provider::command::CommandProvider;
use rtimesheet::provider::prompt::build_prompt;
use rtimesheet::provider::upload::{Upload, UploadKind};
use rtimesheet::provider::{ExtractionProvider, ExtractionRequest};
use std::path::Path;

#[test]
fn test_model_answer_with_code_fence() {
    let raw = "Here is the timesheet:\n```json\n{\"days\": [{\"date\": \"2024-01-08\"}]}\n```\n";
    let payload = ExtractionPayload::parse_response(raw).expect("payload");
    assert_eq!(payload.usable_days().map(|d| d.len()), Some(1));
}

#[test]
fn test_prose_with_braces_after_the_json() {
    let raw = "```json\n{\"days\": [{\"date\": \"2024-01-08\"}, {\"date\": \"2024-01-09\"}]}\n```\n\
               I used the format {date} as requested.";
    let payload = ExtractionPayload::parse_response(raw).expect("payload");
    assert_eq!(payload.usable_days().map(|d| d.len()), Some(2));
}

#[test]
fn test_non_object_answers_are_rejected() {
    assert!(ExtractionPayload::parse_response("I could not read the image.").is_none());
    assert!(ExtractionPayload::parse_response("} nope {").is_none());
    assert!(ExtractionPayload::from_json("[1, 2, 3]").is_none());
}

#[test]
fn test_wrong_shapes_degrade_to_absent() {
    let payload = ExtractionPayload::from_json(
        r#"{"employee": "Jane",
            "days": [
              42,
              {"date": 20240108, "work": {"totalHours": "eight", "kilometers": -3,
                                           "breakMinutes": "30 min", "startTime": ["9"]}}
            ],
            "warnings": "single warning"}"#,
    )
    .expect("payload");

    assert!(payload.employee.is_none());
    assert_eq!(payload.warnings, vec!["single warning".to_string()]);

    let days = payload.usable_days().expect("days");
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date.as_deref(), Some("20240108"));

    let work = days[0].work.as_ref().expect("work");
    assert_eq!(work.total_hours, None);
    assert_eq!(work.kilometers, None);
    assert_eq!(work.break_minutes, Some(30.0));
    assert_eq!(work.start_time, None);
}

#[test]
fn test_empty_days_list_is_not_usable() {
    let payload = ExtractionPayload::from_json(r#"{"days": []}"#).expect("payload");
    assert!(payload.usable_days().is_none());
}

#[test]
fn test_parse_number_text() {
    assert_eq!(parse_number_text("7.5"), Some(7.5));
    assert_eq!(parse_number_text("7,5"), Some(7.5));
    assert_eq!(parse_number_text(" 8h"), Some(8.0));
    assert_eq!(parse_number_text("15 km"), Some(15.0));
    assert_eq!(parse_number_text("abc"), None);
    assert_eq!(parse_number_text(""), None);
}

#[test]
fn test_upload_kinds_and_size_limit() {
    let txt = temp_file("rtimesheet_upload_test.txt", "MON 9-17");
    let upload = Upload::inspect(Path::new(&txt), 20).expect("accepted");
    assert_eq!(upload.kind, UploadKind::Text);
    assert_eq!(upload.size, 8);

    let big = temp_file("rtimesheet_upload_big.png", &"x".repeat(1024 * 1024 + 1));
    assert!(matches!(
        Upload::inspect(Path::new(&big), 1),
        Err(AppError::UploadTooLarge { .. })
    ));

    let exe = temp_file("rtimesheet_upload_test.exe", "MZ");
    assert!(matches!(
        Upload::inspect(Path::new(&exe), 20),
        Err(AppError::UnsupportedUpload(_))
    ));

    let huge_limit = Upload::inspect(Path::new(&txt), u64::MAX).expect("no overflow");
    assert_eq!(huge_limit.size, 8);

    assert_eq!(UploadKind::from_extension("JPG"), Some(UploadKind::Image));
    assert_eq!(UploadKind::from_extension("pdf"), Some(UploadKind::Pdf));
}

#[test]
fn test_prompt_names_employee_and_break_default() {
    let prompt = build_prompt("Jane Doe", None, &ReconcilePolicy::default());
    assert!(prompt.contains("Jane Doe"));
    assert!(prompt.contains("weekStartDate"));
    assert!(prompt.contains("30"));
}

#[cfg(unix)]
#[test]
fn test_command_ignoring_stdin_still_answers() {
    let txt = temp_file("rtimesheet_command_upload.txt", "MON 9-17");
    let provider = CommandProvider {
        program: "sh".into(),
        args: vec!["-c".into(), r#"echo '{"days": []}'"#.into()],
    };
    let request = ExtractionRequest {
        upload: Upload::inspect(Path::new(&txt), 20).expect("accepted"),
        employee_name: "Jane Doe".into(),
        // larger than a pipe buffer, so the write outlives the program
        prompt: "x".repeat(4 * 1024 * 1024),
    };

    let answer = provider.extract(&request).expect("program succeeded");
    assert!(answer.contains("\"days\""));
}
