/// The personalization marker inside praise text.
pub const PLACEHOLDER: &str = "{name}";

/// Name used when the visitor never told the court who they are.
pub const DEFAULT_DISPLAY_NAME: &str = "Your Grace";

/// Substitute the viewer's name into a template.
///
/// Equivalent to [`render_with_fallback`] with [`DEFAULT_DISPLAY_NAME`].
pub fn render(template: &str, name: &str) -> String {
    render_with_fallback(template, name, DEFAULT_DISPLAY_NAME)
}

/// Substitute a name into a template, falling back when the name is blank.
///
/// The effective name is `name.trim()`, or `fallback` if that is empty. Only
/// the FIRST occurrence of `{name}` is replaced; any later occurrence stays
/// literal. No escaping, no recursive substitution; a template without the
/// placeholder passes through unchanged.
pub fn render_with_fallback(template: &str, name: &str, fallback: &str) -> String {
    let trimmed = name.trim();
    let effective = if trimmed.is_empty() { fallback } else { trimmed };
    template.replacen(PLACEHOLDER, effective, 1)
}
