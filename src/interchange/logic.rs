use crate::db::store::SessionStore;
use crate::errors::{AppError, AppResult};
use crate::interchange::csv_format::{export_csv, import_csv};
use crate::interchange::fs_utils::{ensure_parent, ensure_writable};
use crate::interchange::json_format::{export_json, import_json};
use crate::interchange::{ImportMode, ImportReport, InterchangeFormat, notify_export_success};
use crate::ui::messages::info;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

/// File-level backup and restore.
pub struct InterchangeLogic;

impl InterchangeLogic {
    /// Render the whole store in `format`.
    pub fn render(store: &SessionStore, format: InterchangeFormat) -> AppResult<String> {
        match format {
            InterchangeFormat::Csv => export_csv(store),
            InterchangeFormat::Json => export_json(store),
        }
    }

    /// Dump every session to `path`. An existing file is only replaced
    /// with `force` or after confirmation.
    pub fn export_to_file(
        store: &SessionStore,
        format: InterchangeFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;
        ensure_parent(path)?;

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));

        let content = Self::render(store, format)?;
        fs::write(path, content)?;

        store.audit("export", &path.to_string_lossy(), format.as_str());
        notify_export_success(&format.as_str().to_uppercase(), path);
        Ok(())
    }

    /// Replace the store content with the sessions in `text`.
    pub fn import_text(
        store: &mut SessionStore,
        format: InterchangeFormat,
        text: &str,
        mode: ImportMode,
    ) -> AppResult<ImportReport> {
        match format {
            InterchangeFormat::Csv => import_csv(store, text, mode),
            InterchangeFormat::Json => import_json(store, text, mode),
        }
    }

    pub fn import_from_file(
        store: &mut SessionStore,
        format: InterchangeFormat,
        path: &Path,
        mode: ImportMode,
    ) -> AppResult<ImportReport> {
        if !path.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Import file not found: {}", path.display()),
            )));
        }

        let text = fs::read_to_string(path)?;
        Self::import_text(store, format, &text, mode)
    }

    /// Write `worktime_backup_YYYYMMDD_HHMMSS.csv` into `dir`, optionally
    /// compressed into a `.zip`. Returns the path of the file written.
    pub fn backup(store: &SessionStore, dir: &Path, compress: bool) -> AppResult<PathBuf> {
        fs::create_dir_all(dir)?;

        let file_name = backup_file_name(&Local::now().format("%Y%m%d_%H%M%S").to_string());
        let csv_path = dir.join(&file_name);

        fs::write(&csv_path, export_csv(store)?)?;

        let final_path = if compress {
            let zip_path = compress_backup(&csv_path)?;
            fs::remove_file(&csv_path)?;
            zip_path
        } else {
            csv_path
        };

        store.audit(
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}

pub fn backup_file_name(stamp: &str) -> String {
    format!("worktime_backup_{stamp}.csv")
}

/// Compress a backup into a sibling `.zip`.
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "backup.csv".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(entry, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(zip_path)
}
