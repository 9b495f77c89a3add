use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::db::pool::DbPool;
use crate::db::queries::require_state;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::new(&cfg.database)?;
    let state = require_state(&pool.conn)?;
    ShowLogic::print(&state, cfg);
    Ok(())
}
