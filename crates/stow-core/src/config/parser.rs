//! TOML parser with helpful error messages

use super::schema::StowConfig;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse stow.toml with detailed error messages
pub fn parse_stow_toml(path: &Path) -> Result<StowConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_stow_toml_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse stow.toml content from string
pub fn parse_stow_toml_str(content: &str) -> Result<StowConfig> {
    let config: StowConfig =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    config.validate()?;

    Ok(config)
}

/// Enhance TOML parsing errors with the offending lines
fn enhance_toml_error(error: toml::de::Error, content: &str) -> anyhow::Error {
    let line_hint = error
        .span()
        .map(|span| content[..span.start.min(content.len())].matches('\n').count() + 1);

    match line_hint {
        Some(line_num) => {
            let context = get_line_context(content, line_num);
            anyhow::anyhow!(
                "TOML parsing error at line {}:\n{}\n\nError: {}",
                line_num,
                context,
                error.message()
            )
        }
        None => anyhow::anyhow!("TOML parsing error: {}", error),
    }
}

/// Get context lines around an error
fn get_line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = line_num.saturating_sub(2).min(lines.len());
    let end = (line_num + 1).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize a configuration to TOML string
pub fn to_toml(config: &StowConfig) -> Result<String> {
    toml::to_string_pretty(config).with_context(|| "Failed to serialize configuration to TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_valid_config() {
        let toml = r#"
[specifier]
core_packages = ["vue", "svelte"]
schemes = ["bun"]
"#;

        let config = parse_stow_toml_str(toml).unwrap();
        assert_eq!(config.specifier.core_packages, vec!["vue", "svelte"]);
        assert_eq!(config.specifier.schemes, vec!["bun"]);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = parse_stow_toml_str("").unwrap();
        assert_eq!(config, StowConfig::default());
    }

    #[test]
    fn test_parse_error_points_at_line() {
        let toml = "[specifier]\ncore_packages = [\"vue\"\nschemes = []\n";
        let message = parse_stow_toml_str(toml).unwrap_err().to_string();
        assert!(message.contains("TOML parsing error at line 3"), "{message}");
        assert!(message.contains(">>>    3 | schemes = []"), "{message}");
        assert!(message.contains("       2 | core_packages"), "{message}");
    }

    #[test]
    fn test_parse_runs_validation() {
        let toml = "[specifier]\nschemes = [\"bun:\"]\n";
        assert!(parse_stow_toml_str(toml).is_err());
    }

    #[test]
    fn test_parse_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[specifier]\ncore_packages = [\"solid-js\"]").unwrap();

        let config = parse_stow_toml(file.path()).unwrap();
        assert_eq!(config.specifier.core_packages, vec!["solid-js"]);
    }

    #[test]
    fn test_parse_missing_file_has_context() {
        let err = parse_stow_toml(Path::new("/nonexistent/stow.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_round_trip() {
        let config = parse_stow_toml_str("[specifier]\nschemes = [\"deno\"]\n").unwrap();
        let serialized = to_toml(&config).unwrap();
        assert_eq!(parse_stow_toml_str(&serialized).unwrap(), config);
    }
}
