use std::path::{Path, PathBuf};

/// Lower-cases `name` and replaces every whitespace character with `-`.
pub fn sanitize_dir_name(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

/// Keeps a token name usable as a file stem by replacing path separators.
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .collect()
}

pub fn output_dir_for(output_root: &str, name: &str) -> PathBuf {
    Path::new(output_root).join(sanitize_dir_name(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_dir_name() {
        assert_eq!(sanitize_dir_name("Time Intertwined"), "time-intertwined");
        assert_eq!(sanitize_dir_name("Growth  One"), "growth--one");
        assert_eq!(sanitize_dir_name("a\tb\nc"), "a-b-c");
        assert_eq!(sanitize_dir_name("Knowledge"), "knowledge");
    }

    #[test]
    fn test_sanitize_file_stem() {
        assert_eq!(sanitize_file_stem("Duet #12"), "Duet #12");
        assert_eq!(sanitize_file_stem("1/1 study"), "1-1 study");
        assert_eq!(sanitize_file_stem("a\\b"), "a-b");
    }

    #[test]
    fn test_output_dir_for() {
        assert_eq!(
            output_dir_for("./output", "Growth One"),
            Path::new("./output").join("growth-one")
        );
    }
}
