pub mod config;
pub mod content;
pub mod listener;
pub mod route;
pub mod section;
pub mod theme;

// join conditional class names
//
// absent and empty parts are skipped, so callers can write
// class_names(&[Some("nav-link"), active.then_some("active")])
pub fn class_names(parts: &[Option<&str>]) -> String {
    parts
        .iter()
        .flatten()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_skips_missing_parts() {
        assert_eq!(
            class_names(&[Some("nav-link"), None, Some(""), Some("active")]),
            "nav-link active"
        );
        assert_eq!(class_names(&[None, Some("  ")]), "");
        assert_eq!(class_names(&[]), "");
    }
}
