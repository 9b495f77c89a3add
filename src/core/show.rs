use crate::config::Config;
use crate::core::AppState;
use crate::core::calendar::format_iso_date;
use crate::core::hours::{day_hours, format_hours, summarize};
use crate::models::{ConfidenceLevel, DayConfidence, DayRecord};
use crate::ui::messages::{detail, header, warning};
use crate::utils::colors::{RESET, color_for_hours, colorize_cell};
use crate::utils::formatting::{bold, optional_number};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_time;

const NOTES_WIDTH: usize = 28;

pub struct ShowLogic;

impl ShowLogic {
    pub fn render(state: &AppState, cfg: &Config) -> String {
        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Day", 3),
            Column::new("In", 5),
            Column::new("Out", 5),
            Column::new("Break", 5),
            Column::new("Total", 6),
            Column::new("Km", 7),
            Column::new("Hours", 6),
            Column::new("Notes", NOTES_WIDTH),
        ]);

        let empty = DayConfidence::default();
        for day in state.period.days() {
            let conf = state.confidence.get(&day.date).unwrap_or(&empty);
            let rows = day_rows(day, conf, cfg);
            for row in rows {
                table.add_row(row);
            }
        }

        let summary = summarize(&state.period);
        let mut out = table.render();
        out.push('\n');
        out.push_str(&format!(
            "{} {} h over {} day(s) | {} km\n",
            bold("Total:"),
            format_hours(summary.total_hours),
            summary.days_worked,
            format_hours(summary.total_kilometers)
        ));
        out
    }

    pub fn print(state: &AppState, cfg: &Config) {
        header(format!(
            "{} | {} → {}",
            state.employee.display_name(),
            format_iso_date(state.period.start_date()),
            format_iso_date(state.period.end_date())
        ));
        print!("{}", Self::render(state, cfg));

        if let Some(v) = &state.validation {
            println!();
            println!("{}", bold("Validation"));
            for (label, value) in [
                ("Supervisor", &v.supervisor),
                ("Approver", &v.approver),
                ("Client", &v.client),
            ] {
                if let Some(value) = value {
                    detail(format!("{label}: {value}"));
                }
            }
            if let Some(custom) = v.custom.as_ref().filter(|c| !c.is_null()) {
                detail(format!("Custom: {custom}"));
            }
        }

        if !state.warnings.is_empty() {
            println!();
            warning("Extraction warnings:");
            for w in &state.warnings {
                detail(w);
            }
        }
    }
}

/// One table row per day, plus continuation rows for wrapped notes.
fn day_rows(day: &DayRecord, conf: &DayConfidence, cfg: &Config) -> Vec<Vec<String>> {
    let level = |field: &str| {
        ConfidenceLevel::classify(conf.field(field), cfg.low_confidence, cfg.medium_confidence)
    };
    let hours = day_hours(day);

    let notes = day.notes.as_deref().unwrap_or("");
    let wrapped = textwrap::wrap(notes, NOTES_WIDTH);

    let mut first = vec![
        format_iso_date(day.date),
        day.day_of_week.code().to_string(),
        colorize_cell(&format_time(day.start_time()), level("startTime")),
        colorize_cell(&format_time(day.end_time()), level("endTime")),
        colorize_cell(
            &day.break_minutes
                .map(|m| m.to_string())
                .unwrap_or_else(|| "--".into()),
            level("breakMinutes"),
        ),
        colorize_cell(&optional_number(day.total_hours, 2), level("totalHours")),
        colorize_cell(&optional_number(day.kilometers, 1), level("kilometers")),
        format!("{}{}{RESET}", color_for_hours(hours), format_hours(hours)),
    ];
    first.push(
        wrapped
            .first()
            .map(|l| colorize_cell(l, level("notes")))
            .unwrap_or_default(),
    );

    let mut rows = vec![first];
    for line in wrapped.iter().skip(1) {
        let mut row = vec![String::new(); 8];
        row.push(line.to_string());
        rows.push(row);
    }
    rows
}
