//! Check command implementation

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use serde::Serialize;

use targetrules::config::{discover_declarations, RawTargetDeclaration};
use targetrules::{BuildSettingsVersion, TargetConfigResolver, TargetType};

/// One target's row in the check report.
#[derive(Debug, Serialize)]
struct TargetReport {
    file: String,
    status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_type: Option<TargetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build_settings: Option<BuildSettingsVersion>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    extra_modules: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    warnings: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum ReportStatus {
    Ok,
    Error,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    targets: Vec<TargetReport>,
}

/// Check one declaration file, or every `*.target.toml` under a directory.
///
/// Targets fail independently: a bad file is recorded and checking moves on,
/// so the author sees every defect in one pass. Exits non-zero when any
/// target failed.
pub fn check_command(path: &Path, json: bool) -> Result<()> {
    let files = collect_files(path)?;
    let resolver = TargetConfigResolver::new();

    let mut targets = Vec::with_capacity(files.len());
    for file in &files {
        targets.push(check_one(&resolver, file));
    }

    let report = CheckReport { targets };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    let failed = report
        .targets
        .iter()
        .filter(|t| t.status == ReportStatus::Error)
        .count();
    if failed > 0 {
        bail!(
            "{failed} of {} target declaration(s) failed validation",
            report.targets.len()
        );
    }
    Ok(())
}

fn collect_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_dir() {
        let files = discover_declarations(path)?;
        if files.is_empty() {
            bail!("No *.target.toml files found under {}", path.display());
        }
        return Ok(files);
    }
    Ok(vec![path.to_path_buf()])
}

fn check_one(resolver: &TargetConfigResolver, file: &Path) -> TargetReport {
    let display = file.display().to_string();

    let raw = match RawTargetDeclaration::from_file(file) {
        Ok(raw) => raw,
        Err(e) => {
            return TargetReport {
                file: display,
                status: ReportStatus::Error,
                name: None,
                target_type: None,
                build_settings: None,
                extra_modules: vec![],
                warnings: vec![],
                error: Some(format!("{e:#}")),
            };
        }
    };

    match resolver.resolve(&raw) {
        Ok(resolution) => TargetReport {
            file: display,
            status: ReportStatus::Ok,
            name: Some(resolution.configuration.name().to_string()),
            target_type: Some(resolution.configuration.target_type()),
            build_settings: Some(resolution.configuration.build_settings()),
            extra_modules: resolution.configuration.extra_modules().to_vec(),
            warnings: resolution.warnings.iter().map(|w| w.to_string()).collect(),
            error: None,
        },
        Err(e) => TargetReport {
            file: display,
            status: ReportStatus::Error,
            name: Some(raw.name),
            target_type: None,
            build_settings: None,
            extra_modules: vec![],
            warnings: vec![],
            error: Some(e.to_string()),
        },
    }
}

fn print_report(report: &CheckReport) {
    for target in &report.targets {
        match target.status {
            ReportStatus::Ok => {
                println!(
                    "{}: ok ({}, {}, {} module(s))",
                    target.file,
                    target.target_type.map(|t| t.as_str()).unwrap_or("?"),
                    target.build_settings.map(|v| v.as_str()).unwrap_or("?"),
                    target.extra_modules.len(),
                );
            }
            ReportStatus::Error => {
                println!(
                    "{}: error: {}",
                    target.file,
                    target.error.as_deref().unwrap_or("unknown error"),
                );
            }
        }
        for warning in &target.warnings {
            println!("  warning: {warning}");
        }
    }
}
