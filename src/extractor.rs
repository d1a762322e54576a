/// Suffixes (lower-case) accepted as Markdown documents.
pub const DOCUMENT_EXTENSIONS: [&str; 2] = [".md", ".markdown"];

/// Trim whitespace, then strip one surrounding double quote on each side.
pub fn normalize_argument(raw: &str) -> &str {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('"').unwrap_or(trimmed);
    trimmed.strip_suffix('"').unwrap_or(trimmed)
}

pub fn is_document_path(candidate: &str) -> bool {
    if candidate.is_empty() {
        return false;
    }
    let lower = candidate.to_lowercase();
    DOCUMENT_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Pick the document paths out of a launch argument vector.
///
/// Element 0 is not assumed to be the executable: depending on how the process
/// was started it may already be a document. Order and original casing are
/// kept and duplicates are not removed.
pub fn extract_document_paths<S: AsRef<str>>(args: &[S]) -> Vec<String> {
    args.iter()
        .map(|raw| normalize_argument(raw.as_ref()))
        .filter(|candidate| is_document_path(candidate))
        .map(str::to_string)
        .collect()
}
