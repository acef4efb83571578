// src/utils.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Extensions the analyze endpoint accepts
pub const RESUME_EXTENSIONS: &[&str] = &["pdf", "docx"];

/// Download name for a generated resume: whitespace runs become `_`, case is kept
pub fn resume_file_name(full_name: &str) -> String {
    let stem = full_name
        .split_whitespace()
        .map(sanitize_name_part)
        .collect::<Vec<_>>()
        .join("_");
    format!("{}_Resume.pdf", stem)
}

/// Anything outside alphanumerics, `-` and `_` becomes `_`, so separators and `..` never survive
fn sanitize_name_part(part: &str) -> String {
    part.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Timestamped output name for analysis reports
pub fn report_file_name(candidate: &str) -> String {
    format!(
        "{}_analysis_{}.pdf",
        normalize_file_stem(candidate),
        chrono::Utc::now().format("%Y%m%d_%H%M%S")
    )
}

/// Lowercase, keep alphanumerics, `-` and `_`
pub fn normalize_file_stem(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| anyhow::anyhow!("File has no extension: {}", filename))?;

    if !allowed.contains(&ext.as_str()) {
        anyhow::bail!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext,
            allowed
        );
    }

    Ok(())
}

/// Get content type for an uploaded resume
pub fn resume_content_type(file_name: &str) -> Result<&'static str> {
    match get_file_extension(file_name).as_deref() {
        Some("pdf") => Ok("application/pdf"),
        Some("docx") => {
            Ok("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        _ => anyhow::bail!("Unsupported file format: {}", file_name),
    }
}

/// Write bytes under `dir`, creating it when missing
pub async fn write_output(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let path = dir.join(file_name);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(path)
}
