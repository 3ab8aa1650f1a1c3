use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Prompt,
    Value,
}

/// Applies a consistent style to a string.
///
/// Styling degrades to plain text when stdout is not a terminal, so piped
/// output stays byte-identical to the unstyled form.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Prompt => style(text).bold(),
        StyleType::Value => style(text).green().bold(),
    };
    styled.to_string()
}
