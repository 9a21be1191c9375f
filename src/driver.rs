use crate::config::Config;
use crate::error::CompilerError;
use crate::parser;
use crate::report::Report;
use crate::SAMPLE_PROGRAM;
use log::info;
use std::fs;
use std::path::Path;

pub const SAMPLE_LABEL: &str = "<sample>";

/// Resolve the program to read: explicit path, configured sample, or the
/// embedded sample. Returns the label used in reports and the source text.
pub fn load_source(path: Option<&Path>, config: &Config) -> Result<(String, String), CompilerError> {
    let path = match path.or(config.sample_path.as_deref()) {
        Some(path) => path,
        None => return Ok((String::from(SAMPLE_LABEL), SAMPLE_PROGRAM.to_string())),
    };

    if !path.exists() {
        return Err(CompilerError::FileNotFound(path.to_path_buf()));
    }

    let source_code = fs::read_to_string(path)?;
    Ok((path.display().to_string(), source_code))
}

/// Load and check one program. Every failure, including unreadable input,
/// ends up in the report rather than as an `Err`.
pub fn check(path: Option<&Path>, config: &Config) -> Report {
    let label = path
        .or(config.sample_path.as_deref())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| String::from(SAMPLE_LABEL));

    let verdict = load_source(path, config)
        .and_then(|(_, source_code)| parser::parse(&source_code).map_err(CompilerError::from));

    let report = Report::new(label, verdict);
    info!("{}: {:?}", report.source, report.status);
    report
}
