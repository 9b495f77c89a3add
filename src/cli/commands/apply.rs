use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::extract::ExtractLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Apply { file } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        ExtractLogic::apply_file(&mut pool, cfg, file)?;
    }
    Ok(())
}
