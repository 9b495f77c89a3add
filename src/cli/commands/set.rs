use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{DayEdit, EditLogic};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::parse_date_arg;
use crate::utils::time::parse_optional_time;

/// Edit one day of the current period.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date,
        start,
        end,
        total,
        break_minutes,
        km,
        notes,
        clear,
    } = cmd
    {
        let d = parse_date_arg(date)?;

        // clap guarantees --in and --out come together
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        let edit = DayEdit {
            times: start.zip(end),
            total_hours: total.clone(),
            break_minutes: break_minutes.clone(),
            kilometers: km.clone(),
            notes: notes.clone(),
            clear: *clear,
        };

        let mut pool = DbPool::new(&cfg.database)?;
        EditLogic::set_day(&mut pool, d, &edit)?;
    }
    Ok(())
}
