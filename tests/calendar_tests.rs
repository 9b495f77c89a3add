use chrono::{Duration, NaiveDate, NaiveTime};
use rtimesheet::core::calendar::{
    format_iso_date, monday_of, nearest_weekday, parse_iso_date, weekday_code,
};
use rtimesheet::core::hours::{day_hours, summarize, worked_hours};
use rtimesheet::core::period::{PeriodPolicy, generate_period};
use rtimesheet::models::{DayRecord, WeekdayCode, WorkPeriod};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn test_monday_of_is_monday_and_idempotent() {
    let mut date = d(2023, 12, 20);
    for _ in 0..800 {
        let monday = monday_of(date);
        assert_eq!(weekday_code(monday), WeekdayCode::Mon);
        assert_eq!(monday_of(monday), monday);
        assert!(monday <= date && date - monday < Duration::days(7));
        date += Duration::days(1);
    }
}

#[test]
fn test_sunday_belongs_to_previous_week() {
    // 2024-01-14 is a Sunday
    assert_eq!(monday_of(d(2024, 1, 14)), d(2024, 1, 8));
    assert_eq!(monday_of(d(2024, 1, 15)), d(2024, 1, 15));
}

#[test]
fn test_iso_format_round_trip() {
    let mut date = d(1999, 12, 25);
    for _ in 0..400 {
        let s = format_iso_date(date);
        assert_eq!(s.len(), 10);
        let back = parse_iso_date(&s).expect("parse back");
        assert_eq!(format_iso_date(back), s);
        date += Duration::days(3);
    }
}

#[test]
fn test_weekday_labels_are_lenient() {
    assert_eq!(WeekdayCode::from_label("MON"), Some(WeekdayCode::Mon));
    assert_eq!(WeekdayCode::from_label("tuesday"), Some(WeekdayCode::Tue));
    assert_eq!(WeekdayCode::from_label(" Thurs "), Some(WeekdayCode::Thu));
    assert_eq!(WeekdayCode::from_label("T"), None);
    assert_eq!(WeekdayCode::from_label("Monkey"), None);
    assert_eq!(WeekdayCode::from_index(8), WeekdayCode::Mon);
}

#[test]
fn test_nearest_weekday_moves_at_most_three_days() {
    let wed = d(2024, 1, 10);
    for target in 0..7 {
        let code = WeekdayCode::from_index(target);
        let moved = nearest_weekday(wed, code);
        assert_eq!(weekday_code(moved), code);
        assert!((moved - wed).num_days().abs() <= 3);
    }
}

#[test]
fn test_generated_work_week_is_monday_to_friday() {
    let period = generate_period(d(2024, 1, 11), PeriodPolicy::WorkWeek).unwrap();
    let days = period.days();

    assert_eq!(days.len(), 5);
    assert_eq!(days[0].date, d(2024, 1, 8));
    assert_eq!(days[4].date, d(2024, 1, 12));
    for pair in days.windows(2) {
        assert!(pair[0].date < pair[1].date);
    }
    for day in days {
        assert_eq!(day.day_of_week, weekday_code(day.date));
        assert!(day.is_blank());
    }
}

#[test]
fn test_generated_custom_period_starts_at_date() {
    let period = generate_period(d(2024, 1, 10), PeriodPolicy::Days(7)).unwrap();
    assert_eq!(period.len(), 7);
    assert_eq!(period.start_date(), d(2024, 1, 10));
    assert_eq!(period.end_date(), d(2024, 1, 16));

    assert!(generate_period(d(2024, 1, 10), PeriodPolicy::Days(0)).is_err());
    assert!(generate_period(d(2024, 1, 10), PeriodPolicy::Days(8)).is_err());
}

#[test]
fn test_work_period_rejects_unordered_or_oversized_lists() {
    let a = DayRecord::blank(d(2024, 1, 9));
    let b = DayRecord::blank(d(2024, 1, 8));
    assert!(WorkPeriod::new(vec![a.clone(), b]).is_err());
    assert!(WorkPeriod::new(vec![a.clone(), a]).is_err());
    assert!(WorkPeriod::new(Vec::new()).is_err());

    let eight = (0..8)
        .map(|i| DayRecord::blank(d(2024, 1, 8) + Duration::days(i)))
        .collect();
    assert!(WorkPeriod::new(eight).is_err());
}

#[test]
fn test_hours_from_times_minus_break() {
    let mut day = DayRecord::blank(d(2024, 1, 8));
    day.set_times(Some(t(9, 0)), Some(t(17, 30)));
    day.break_minutes = Some(30);
    assert_eq!(worked_hours(&day), 8.0);
}

#[test]
fn test_total_hours_take_precedence() {
    let mut day = DayRecord::blank(d(2024, 1, 8));
    day.set_times(Some(t(9, 0)), Some(t(17, 30)));
    day.break_minutes = Some(30);
    day.total_hours = Some(7.5);
    assert_eq!(worked_hours(&day), 7.5);
}

#[test]
fn test_zero_total_falls_back_to_times() {
    let mut day = DayRecord::blank(d(2024, 1, 8));
    day.set_times(Some(t(8, 0)), Some(t(12, 0)));
    day.total_hours = Some(0.0);
    assert_eq!(worked_hours(&day), 4.0);
}

#[test]
fn test_lone_time_is_not_stored() {
    let mut day = DayRecord::blank(d(2024, 1, 8));
    day.set_times(Some(t(9, 0)), None);
    assert_eq!(day.start_time(), None);
    assert_eq!(day.end_time(), None);
    assert_eq!(worked_hours(&day), 0.0);
}

#[test]
fn test_negative_hours_are_clamped_in_summary() {
    let mut late = DayRecord::blank(d(2024, 1, 8));
    late.set_times(Some(t(17, 0)), Some(t(9, 0)));
    assert!(worked_hours(&late) < 0.0);
    assert_eq!(day_hours(&late), 0.0);

    let mut ok = DayRecord::blank(d(2024, 1, 9));
    ok.total_hours = Some(6.0);
    ok.kilometers = Some(12.5);

    let period = WorkPeriod::new(vec![late, ok]).unwrap();
    let summary = summarize(&period);
    assert_eq!(summary.total_hours, 6.0);
    assert_eq!(summary.total_kilometers, 12.5);
    assert_eq!(summary.days_worked, 1);
}
