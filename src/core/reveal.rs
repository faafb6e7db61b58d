/// `class_name` with `token` appended, or `None` when the token is already
/// one of its whitespace-separated classes.
pub fn with_class_token(class_name: &str, token: &str) -> Option<String> {
    if token.is_empty() || class_name.split_ascii_whitespace().any(|c| c == token) {
        return None;
    }
    let trimmed = class_name.trim_end();
    if trimmed.is_empty() {
        Some(token.to_string())
    } else {
        Some(format!("{} {}", trimmed, token))
    }
}
