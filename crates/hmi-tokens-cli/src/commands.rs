use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info};

use hmi_tokens::{Dp, audit, border_radius};
use hmi_tokens_cli::render::{
    audit_failed, audit_summary, audit_table, export_json, token_list_json, token_table,
};

use crate::cli::{AuditArgs, ExportArgs, GetArgs, ListArgs, ListFormatArg};

pub fn run_list(args: &ListArgs) -> Result<()> {
    let tokens = border_radius();
    match args.format {
        ListFormatArg::Table => println!("{}", token_table(tokens)),
        ListFormatArg::Json => {
            let payload = serde_json::to_string_pretty(&token_list_json(tokens))
                .context("serialize token list")?;
            println!("{payload}");
        }
    }
    Ok(())
}

pub fn run_get(args: &GetArgs) -> Result<()> {
    let value: Dp = border_radius()
        .lookup(&args.name)
        .with_context(|| format!("look up token '{}'", args.name))?;
    debug!(name = %args.name, %value, "token resolved");
    if args.raw {
        println!("{}", value.get());
    } else {
        println!("{value}");
    }
    Ok(())
}

/// Runs the audit and returns whether the command should fail.
pub fn run_audit(args: &AuditArgs) -> Result<bool> {
    let report = audit(border_radius());
    if !report.is_clean() {
        println!("{}", audit_table(&report));
    }
    println!("{}", audit_summary(&report));
    Ok(audit_failed(&report, args.deny_warnings))
}

pub fn run_export(args: &ExportArgs) -> Result<()> {
    let payload = export_json(border_radius()).context("serialize tokens")?;
    match &args.output {
        Some(path) => {
            fs::write(path, format!("{payload}\n"))
                .with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "tokens exported");
        }
        None => println!("{payload}"),
    }
    Ok(())
}
