use super::{parse_input, to_json};
use crate::config::Config;
use anyhow::Result;
use duid::Duid;

pub fn handle(config: &Config, inputs: &[String], unique: bool) -> Result<String> {
    let format = config.format()?;

    let mut duids = inputs
        .iter()
        .map(|input| parse_input(input))
        .collect::<Result<Vec<Duid>>>()?;
    duids.sort();
    if unique {
        duids.dedup();
    }

    let values: Vec<String> = duids
        .iter()
        .map(|duid| duid.display(format).to_string())
        .collect();

    if config.json {
        return to_json(&values);
    }

    Ok(values.join("\n"))
}
