use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::core::period::PeriodPolicy;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::New { date, days, force } = cmd {
        let start = parse_optional_date(date.as_ref())?;
        let policy = PeriodPolicy::from_days(days.or(cfg.period_days));

        let mut pool = DbPool::new(&cfg.database)?;
        EditLogic::new_period(&mut pool, start, policy, *force)?;
    }
    Ok(())
}
