use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::require_state;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        quoting,
        force,
    } = cmd
    {
        let pool = DbPool::new(&cfg.database)?;
        let state = require_state(&pool.conn)?;

        let path = ExportLogic::export(
            &state,
            *format,
            file.as_deref(),
            *force,
            quoting.unwrap_or(cfg.csv_quoting),
        )?;

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("Exported to {}", path.display()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
    Ok(())
}
