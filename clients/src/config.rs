//! Client configuration.
//!
//! Settings come from an optional TOML file and from command-line flags.
//! Flags win over the file; the input file extension is the last resort for
//! the RDF format, and Turtle is the default.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use lobid_rdf_to_json::{ContextEmbedding, ProjectionOptions, RdfFormat};
use serde::Deserialize;

/// Contents of a `--config` TOML file.
///
/// ```toml
/// labels = "labels.json"
/// format = "turtle"
/// max_depth = 8
/// inline_context = false
/// compact = false
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Path of the JSON label file.
    pub labels: Option<PathBuf>,
    /// RDF syntax name (`turtle`, `ntriples`, ...).
    pub format: Option<String>,
    /// Nesting depth cap.
    pub max_depth: Option<usize>,
    /// Attach only the inner term map under `@context`.
    pub inline_context: Option<bool>,
    /// Emit single-line JSON.
    pub compact: Option<bool>,
}

impl FileConfig {
    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parses config TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid config TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Values given on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    /// `--labels`.
    pub labels: Option<PathBuf>,
    /// `--format`.
    pub format: Option<RdfFormat>,
    /// `--input`, used for format detection.
    pub input: Option<PathBuf>,
    /// `--max-depth`.
    pub max_depth: Option<usize>,
    /// `--inline-context`.
    pub inline_context: bool,
    /// `--compact`.
    pub compact: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Path of the JSON label file.
    pub labels: PathBuf,
    /// RDF syntax of the input.
    pub format: RdfFormat,
    /// Projection options.
    pub options: ProjectionOptions,
    /// Pretty-print the output.
    pub pretty: bool,
}

impl Settings {
    /// Merges command-line overrides over file config.
    ///
    /// # Errors
    ///
    /// Returns an error if no label file is given or the configured format
    /// name is unknown.
    pub fn resolve(cli: Overrides, file: FileConfig) -> Result<Self> {
        let labels = cli.labels.or(file.labels).ok_or_else(|| {
            anyhow!("No label file given; pass --labels or set `labels` in the config")
        })?;

        let format = match (cli.format, file.format) {
            (Some(format), _) => format,
            (None, Some(name)) => name.parse::<RdfFormat>().map_err(|e| anyhow!(e))?,
            (None, None) => cli
                .input
                .as_deref()
                .and_then(Path::extension)
                .and_then(|ext| ext.to_str())
                .and_then(RdfFormat::from_extension)
                .unwrap_or(RdfFormat::Turtle),
        };

        let inline = cli.inline_context || file.inline_context.unwrap_or(false);
        let options = ProjectionOptions {
            max_depth: cli.max_depth.or(file.max_depth),
            context: if inline {
                ContextEmbedding::Inline
            } else {
                ContextEmbedding::Verbatim
            },
        };

        Ok(Self {
            labels,
            format,
            options,
            pretty: !(cli.compact || file.compact.unwrap_or(false)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let file = FileConfig::from_toml_str(
            r#"
labels = "conf/labels.json"
format = "nt"
max_depth = 3
inline_context = true
compact = true
"#,
        )
        .unwrap();
        assert_eq!(file.labels, Some(PathBuf::from("conf/labels.json")));
        assert_eq!(file.max_depth, Some(3));

        let settings = Settings::resolve(Overrides::default(), file).unwrap();
        assert_eq!(settings.format, RdfFormat::NTriples);
        assert_eq!(settings.options.context, ContextEmbedding::Inline);
        assert!(!settings.pretty);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FileConfig::from_toml_str("lables = \"x\"").is_err());
    }

    #[test]
    fn flags_win_over_file() {
        let file = FileConfig {
            labels: Some(PathBuf::from("a.json")),
            format: Some("turtle".into()),
            max_depth: Some(2),
            ..FileConfig::default()
        };
        let cli = Overrides {
            labels: Some(PathBuf::from("b.json")),
            format: Some(RdfFormat::NTriples),
            max_depth: Some(5),
            ..Overrides::default()
        };
        let settings = Settings::resolve(cli, file).unwrap();
        assert_eq!(settings.labels, PathBuf::from("b.json"));
        assert_eq!(settings.format, RdfFormat::NTriples);
        assert_eq!(settings.options.max_depth, Some(5));
        assert!(settings.pretty);
    }

    #[test]
    fn format_falls_back_to_extension_then_turtle() {
        let cli = Overrides {
            labels: Some(PathBuf::from("labels.json")),
            input: Some(PathBuf::from("data/HT1.nt")),
            ..Overrides::default()
        };
        let settings = Settings::resolve(cli, FileConfig::default()).unwrap();
        assert_eq!(settings.format, RdfFormat::NTriples);

        let cli = Overrides {
            labels: Some(PathBuf::from("labels.json")),
            ..Overrides::default()
        };
        let settings = Settings::resolve(cli, FileConfig::default()).unwrap();
        assert_eq!(settings.format, RdfFormat::Turtle);
        assert_eq!(settings.options.context, ContextEmbedding::Verbatim);
    }

    #[test]
    fn missing_labels_is_an_error() {
        assert!(Settings::resolve(Overrides::default(), FileConfig::default()).is_err());
    }

    #[test]
    fn bad_format_name_is_an_error() {
        let file = FileConfig {
            labels: Some(PathBuf::from("labels.json")),
            format: Some("rdfxml".into()),
            ..FileConfig::default()
        };
        assert!(Settings::resolve(Overrides::default(), file).is_err());
    }
}
