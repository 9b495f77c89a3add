use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::strip_ansi;
use ansi_term::Colour;

const OP_WIDTH: usize = 60;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "new" => Colour::Green,
        "set" | "employee" => Colour::Yellow,
        "extract" => Colour::Cyan,
        "reconcile" => Colour::Blue,
        "export" => Colour::RGB(255, 153, 51),
        "migration_applied" => Colour::Purple,
        _ => Colour::White,
    }
}

/// Cut to `max` visible characters, ending with "..." when shortened.
fn truncate_visible(s: &str, max: usize) -> String {
    let visible = strip_ansi(s);
    if visible.chars().count() <= max {
        return visible;
    }
    let mut out: String = visible.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;
        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in entries {
            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let shown = truncate_visible(&op_target, OP_WIDTH);
            let padding = " ".repeat(OP_WIDTH.saturating_sub(shown.chars().count()));

            // only the operation word is colored
            let colored = match shown.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                }
                None => color_for_operation(&e.operation)
                    .paint(shown.as_str())
                    .to_string(),
            };

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id, e.date, colored, padding, e.message,
            );
        }

        Ok(())
    }
}
