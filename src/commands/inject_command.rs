//! Definition injection command
//!
//! Registers sprite sheets that exist on disk but are missing from the
//! generator's JSON definition files.

use std::path::PathBuf;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::definitions::{inject_missing_entries, DEFAULT_BACKUP_DIR};
use crate::sheet::errors::{ForgeError, ForgeResult};
use crate::utils::logger::Logger;

/// Command for injecting missing sprite entries into definition files
pub struct InjectCommand<'a> {
    /// Root of the spritesheet tree
    spritesheet_dir: PathBuf,
    /// Directory of per-category JSON definition files
    definitions_dir: PathBuf,
    /// Where pre-modification backups are placed
    backup_dir: PathBuf,
    /// Report the diff without writing anything
    dry_run: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> InjectCommand<'a> {
    /// Create a new inject command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new InjectCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ForgeResult<Self> {
        let spritesheet_dir = args
            .get_one::<String>("input")
            .map(PathBuf::from)
            .ok_or_else(|| {
                ForgeError::GenericError("Missing spritesheet directory".to_string())
            })?;

        let definitions_dir = args
            .get_one::<String>("definitions")
            .map(PathBuf::from)
            .ok_or_else(|| {
                ForgeError::GenericError(
                    "Missing --definitions directory for injection".to_string(),
                )
            })?;

        let backup_dir = args
            .get_one::<String>("backup-dir")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKUP_DIR));

        let dry_run = args.get_flag("dry-run");

        Ok(InjectCommand {
            spritesheet_dir,
            definitions_dir,
            backup_dir,
            dry_run,
            logger,
        })
    }
}

impl<'a> Command for InjectCommand<'a> {
    fn execute(&self) -> ForgeResult<()> {
        info!(
            "Injecting definitions: sprites={}, definitions={}, dry_run={}",
            self.spritesheet_dir.display(),
            self.definitions_dir.display(),
            self.dry_run
        );

        let report = inject_missing_entries(
            &self.spritesheet_dir,
            &self.definitions_dir,
            &self.backup_dir,
            self.dry_run,
        )?;

        let summary = format!(
            "Injection complete: {} item(s) scanned, {} missing, {} injected, {} file(s) updated",
            report.items_found,
            report.entries_missing,
            report.entries_injected,
            report.files_updated
        );
        self.logger.log_line(&summary)?;
        println!("{}", summary);

        Ok(())
    }
}
