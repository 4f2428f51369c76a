use crate::engine::style::CaseStyle;

/// Join `tokens` in the given style. An empty sequence renders as `""`.
pub fn render<T: AsRef<str>>(tokens: &[T], style: &CaseStyle) -> String {
    tokens
        .iter()
        .enumerate()
        .map(|(position, token)| style.transform_word(token.as_ref(), position))
        .collect::<Vec<_>>()
        .join(style.joiner())
}
