use super::{parse_input, to_json};
use crate::config::Config;
use anyhow::Result;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum Outcome {
    Less,
    Equal,
    Greater,
}

#[derive(Debug, Serialize)]
struct Comparison {
    left: String,
    right: String,
    ordering: Outcome,
    equal_hash: bool,
}

pub fn handle(config: &Config, left: &str, right: &str) -> Result<String> {
    let format = config.format()?;
    let left = parse_input(left)?;
    let right = parse_input(right)?;

    let (ordering, symbol) = match left.cmp(&right) {
        Ordering::Less => (Outcome::Less, "<"),
        Ordering::Equal => (Outcome::Equal, "="),
        Ordering::Greater => (Outcome::Greater, ">"),
    };

    let comparison = Comparison {
        left: left.display(format).to_string(),
        right: right.display(format).to_string(),
        ordering,
        equal_hash: left.hash_code() == right.hash_code(),
    };

    if config.json {
        return to_json(&comparison);
    }

    Ok(format!("{} {} {}", comparison.left, symbol, comparison.right))
}
