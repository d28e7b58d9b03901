pub mod check;
pub mod compare;
pub mod show;
pub mod sort;

use anyhow::{Context, Result};
use duid::{Duid, DuidFormat, DuidType};
use serde::Serialize;

/// Summary of a parsed DUID, printed by `show` and `sort`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuidReport {
    pub value: String,
    pub duid_type: DuidType,
    pub type_code: Option<u16>,
    pub octets: usize,
    pub hash_code: u64,
}

impl DuidReport {
    pub fn new(duid: &Duid, format: DuidFormat) -> Self {
        Self {
            value: duid.display(format).to_string(),
            duid_type: duid.duid_type(),
            type_code: duid.duid_type().type_code(),
            octets: duid.as_bytes().len(),
            hash_code: duid.hash_code(),
        }
    }
}

fn parse_input(input: &str) -> Result<Duid> {
    Duid::parse(input).with_context(|| format!("failed to parse DUID {:?}", input))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to encode JSON output")
}
