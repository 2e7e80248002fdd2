use crate::errors::AppResult;

/// Resolve a file-matching pattern to an ordered list of file paths.
///
/// The pattern may hold several glob patterns separated by newlines; matches
/// are concatenated in pattern order, and each pattern's matches arrive in
/// the matcher's lexicographic order. Only plain files are kept; directories
/// that match are skipped. Duplicates are not removed; paths are assumed
/// unique per invocation.
pub async fn resolve_pattern(pattern: &str) -> AppResult<Vec<String>> {
    let mut files = Vec::new();

    for line in pattern.lines().map(str::trim).filter(|l| !l.is_empty()) {
        for entry in glob::glob(line)? {
            let path = entry?;
            if tokio::fs::metadata(&path).await?.is_file() {
                files.push(path.to_string_lossy().into_owned());
            }
        }
    }

    Ok(files)
}
