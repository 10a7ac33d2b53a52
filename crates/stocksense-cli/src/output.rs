use serde_json::Value;
use stocksense_core::Envelope;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(
    envelope: &Envelope<Value>,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(envelope)?
            } else {
                serde_json::to_string(envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(envelope),
    }

    Ok(())
}

/// Human-readable two-column view of the envelope payload.
fn render_table(envelope: &Envelope<Value>) {
    let mut rows = Vec::new();
    flatten("", &envelope.data, &mut rows);

    let width = rows
        .iter()
        .map(|(key, _)| key.len())
        .max()
        .unwrap_or(0);

    for (key, value) in &rows {
        println!("{key:<width$}  {value}");
    }

    for warning in &envelope.meta.warnings {
        println!("warning: {warning}");
    }
    for error in &envelope.errors {
        println!("error [{}]: {}", error.code, error.message);
    }
}

fn flatten(prefix: &str, value: &Value, rows: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, nested, rows);
            }
        }
        Value::Array(items) => {
            for (index, nested) in items.iter().enumerate() {
                flatten(&format!("{prefix}[{index}]"), nested, rows);
            }
        }
        Value::String(text) => rows.push((prefix.to_owned(), text.clone())),
        other => rows.push((prefix.to_owned(), other.to_string())),
    }
}
