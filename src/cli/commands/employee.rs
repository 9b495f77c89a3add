use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Employee {
        name,
        email,
        employee_id,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        EditLogic::set_employee(
            &mut pool,
            name.as_deref(),
            email.as_deref(),
            employee_id.as_deref(),
        )?;
    }
    Ok(())
}
