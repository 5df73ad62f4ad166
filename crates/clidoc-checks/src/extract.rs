/// Derives the documented command from region text: trims it and removes a
/// leading `"<keyword> "` when present. Text without the keyword comes back
/// trimmed but otherwise untouched, so it fails the later catalog lookup.
pub fn extract_command<'a>(text: &'a str, keyword: &str) -> &'a str {
    let trimmed = text.trim();
    match trimmed
        .strip_prefix(keyword)
        .and_then(|rest| rest.strip_prefix(' '))
    {
        Some(command) => command.trim(),
        None => trimmed,
    }
}
