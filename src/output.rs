//! Rendering of resolved values.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::value::{Navigable, Serializable};

/// Text format used to print resolved values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

/// Renders a resolution result as text.
///
/// An absent result renders as an empty string. `pretty` only affects JSON.
/// The returned text never ends with a newline.
///
/// # Example
///
/// ```
/// use dotpath::output::{render, OutputFormat};
/// use dotpath::value::Value;
///
/// let value = Value::list([1i64, 2]);
/// assert_eq!(render(Some(&value), OutputFormat::Json, false).unwrap(), "[1,2]");
/// assert_eq!(render(None, OutputFormat::Yaml, true).unwrap(), "");
/// ```
pub fn render(value: Option<&dyn Navigable>, format: OutputFormat, pretty: bool) -> Result<String> {
    let Some(value) = value else {
        return Ok(String::new());
    };
    let view = Serializable::new(value);

    let text = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&view).context("Failed to render YAML")?,
        OutputFormat::Json if pretty => {
            serde_json::to_string_pretty(&view).context("Failed to render JSON")?
        }
        OutputFormat::Json => serde_json::to_string(&view).context("Failed to render JSON")?,
    };

    Ok(text.trim_end_matches('\n').to_string())
}
