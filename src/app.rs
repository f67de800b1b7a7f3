//! Application orchestrator.
//! Loads/merges config, initializes logging, creates the temporary object and prints its path.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, error};

use tmpgen::cli::Args;
use tmpgen::config::{CONFIG_ENV, load_config};
use tmpgen::output as out;
use tmpgen::{ObjectKind, TmpGen, TmpGenError, default_config_path};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> Result<()> {
    // Handle --print-config before logging init
    if args.print_config {
        print_config();
        return Ok(());
    }

    // Config file first, CLI flags win.
    let mut cfg = load_config().map_err(|e| {
        out::print_error(&format!("{e:#}"));
        e
    })?;
    args.apply_overrides(&mut cfg);

    // Guard flushes the file appender when dropped at the end of run().
    let _guard = init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json).map_err(|e| {
        out::print_error(&format!("Failed to initialize logging: {}", e));
        e
    })?;

    debug!(naming = %cfg.naming, args = ?args, "Starting tmpgen");

    let kind = args.object_kind();
    let mut tg = TmpGen::from_kind(cfg.naming);
    match tg.make(kind) {
        Ok(path) => {
            out::print_user(&render(&path, kind));
            Ok(())
        }
        Err(e) => {
            log_failure(&e);
            out::print_error(&e.to_string());
            Err(e).context("could not create temporary object")
        }
    }
}

/// Directories are printed with a trailing separator.
fn render(path: &std::path::Path, kind: ObjectKind) -> String {
    match kind {
        ObjectKind::File => path.display().to_string(),
        ObjectKind::Directory => format!("{}/", path.display()),
    }
}

fn log_failure(e: &TmpGenError) {
    let code = e.code();
    let kind = e.kind();
    match e {
        TmpGenError::CreationConflict(path) => {
            error!(code, kind, path = %path.display(), "Temporary path was taken between check and create")
        }
        TmpGenError::PermissionDenied { path, context } => {
            error!(code, kind, path = %path.display(), %context, "Cannot write to temporary base")
        }
        TmpGenError::MissingParent(base) => {
            error!(code, kind, base = %base.display(), "Temporary base directory missing")
        }
        TmpGenError::Io { op, path, source, .. } => {
            error!(code, kind, op = *op, path = %path.display(), error = %source, "Temporary object creation failed")
        }
    }
}

fn print_config() {
    if let Some(cfg_env) = std::env::var_os(CONFIG_ENV) {
        out::print_user(&PathBuf::from(cfg_env).display().to_string());
        out::print_info(&format!("Using {CONFIG_ENV} (explicit). Unset it to use the default location."));
        return;
    }
    match default_config_path() {
        Some(p) => {
            out::print_user(&p.display().to_string());
            if !p.exists() {
                out::print_info("No config file exists there yet; built-in defaults are in use.");
            }
        }
        None => out::print_error("Could not determine a default config path"),
    }
}
