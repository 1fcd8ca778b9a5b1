//! Input checks shared by the services.

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn any_blank(values: &[&str]) -> bool {
    values.iter().any(|value| is_blank(value))
}

/// Trims `name`, returning `None` when nothing is left.
pub fn clean_name(name: &str) -> Option<String> {
    let trimmed = name.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
