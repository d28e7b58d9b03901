use super::to_json;
use crate::config::Config;
use anyhow::Result;
use duid::Duid;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CheckResult<'a> {
    input: &'a str,
    valid: bool,
}

/// Returns the rendered output and whether every input was a valid DUID
pub fn handle(config: &Config, inputs: &[String]) -> Result<(String, bool)> {
    let results: Vec<CheckResult> = inputs
        .iter()
        .map(|input| CheckResult {
            input,
            valid: Duid::try_parse(input).is_some(),
        })
        .collect();
    let all_valid = results.iter().all(|result| result.valid);

    if config.json {
        return Ok((to_json(&results)?, all_valid));
    }

    let output = results
        .iter()
        .map(|result| {
            let status = if result.valid { "valid" } else { "invalid" };
            format!("{:<8} {}", status, result.input)
        })
        .collect::<Vec<_>>()
        .join("\n");

    Ok((output, all_valid))
}
