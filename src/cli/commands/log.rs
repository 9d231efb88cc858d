use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{LogEntry, load_log};
use crate::db::SqliteStorage;
use crate::errors::AppResult;
use ansi_term::Colour;

/// ANSI colour for an operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "import" | "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let storage = SqliteStorage::open(&cfg.database)?;
        let entries = load_log(storage.conn())?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let op_w = entries.iter().map(|e| op_target(e).len()).max().unwrap_or(10).min(60);
        let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for e in &entries {
            let label = format!("{:<op_w$}", op_target(e), op_w = op_w);
            println!(
                "{:>id_w$}  {:<date_w$}  {}  {}",
                e.id,
                e.date,
                color_for_operation(&e.operation).paint(label),
                e.message,
                id_w = id_w,
                date_w = date_w,
            );
        }
    }

    Ok(())
}
