use anyhow::Result;
use colored::Colorize;

use crate::errors::with_output_context;
use crate::params::{ParamValue, ParameterMap};

/// Render parameters as `key = value` lines or a JSON object
pub fn render_params(params: &ParameterMap, json: bool) -> Result<String> {
    if json {
        return with_output_context(serde_json::to_string_pretty(params), "parameters as JSON");
    }

    if params.is_empty() {
        return Ok(format!("{}", "(no parameters)".dimmed()));
    }

    let lines: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{} = {}", key.cyan(), render_value(value)))
        .collect();
    Ok(lines.join("\n"))
}

fn render_value(value: &ParamValue) -> String {
    match value {
        ParamValue::Text(text) => text.clone(),
        ParamValue::Flag => format!("{}", "true".yellow()),
    }
}

pub fn render_target(target: &str) -> String {
    format!("{}", target.green())
}
