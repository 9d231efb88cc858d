use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::exchange::{self, ExportFormat};
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::ask_confirmation;
use crate::utils::path::expand_tilde;

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::open_store;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let path = expand_tilde(file);
        ensure_writable(&path, *force)?;

        let store = open_store(cfg)?;

        match format {
            ExportFormat::Json => fs::write(&path, store.export_all()?)?,
            ExportFormat::Csv => {
                let mut writer = BufWriter::new(File::create(&path)?);
                exchange::write_csv(store.races(), &mut writer)?;
                writer.flush()?;
            }
        }

        log::audit(
            store.storage().conn(),
            "export",
            format.as_str(),
            &format!("Exported {} races to {}", store.len(), path.display()),
        );

        success(format!(
            "{} export completed: {} races → {}",
            format.as_str().to_uppercase(),
            store.len(),
            path.display()
        ));
    }
    Ok(())
}

/// A missing file, or `--force`, is written straight away; an existing
/// file needs the user's confirmation.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    let prompt = format!("The file '{}' already exists. Overwrite it?", path.display());
    if !ask_confirmation(&prompt) {
        return Err(AppError::Io(io::Error::other(
            "Export cancelled: existing file not overwritten",
        )));
    }

    info("Existing file will be overwritten.");
    Ok(())
}
