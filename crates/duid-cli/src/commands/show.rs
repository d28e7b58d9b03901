use super::{parse_input, to_json, DuidReport};
use crate::config::Config;
use anyhow::Result;
use duid::DuidFormat;
use tracing::debug;

pub fn handle(config: &Config, input: &str, format: Option<&str>) -> Result<String> {
    let format = match format {
        Some(specifier) => specifier.parse::<DuidFormat>()?,
        None => config.format()?,
    };

    let duid = parse_input(input)?;
    debug!("Parsed {:?} as {:?}", input, duid);

    let report = DuidReport::new(&duid, format);
    if config.json {
        return to_json(&report);
    }

    let code = report
        .type_code
        .map(|code| format!("{:#06x}", code))
        .unwrap_or_else(|| "-".to_string());

    Ok(format!(
        "{}\n{:<8} {} ({})\n{:<8} {}",
        report.value, "Type:", report.duid_type, code, "Octets:", report.octets
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_text() {
        let output = handle(&Config::default(), "0-3-0-1-aa-bb-cc-dd-ee-ff", None).unwrap();
        assert_eq!(
            output,
            "00:03:00:01:AA:BB:CC:DD:EE:FF\nType:    DUID-LL (0x0003)\nOctets:  10"
        );
    }

    #[test]
    fn test_show_explicit_format() {
        let output = handle(&Config::default(), "000500aabb", Some("L-")).unwrap();
        assert!(output.starts_with("00-05-00-aa-bb\nType:    Undefined (-)"));
    }

    #[test]
    fn test_show_config_format() {
        let config = Config {
            default_format: "L".to_string(),
            json: false,
        };
        let output = handle(&config, "00:01:AB", None).unwrap();
        assert!(output.starts_with("0001ab\n"));
    }

    #[test]
    fn test_show_json() {
        let config = Config {
            json: true,
            ..Config::default()
        };
        let output = handle(&config, "00:04:01:02", None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["value"], "00:04:01:02");
        assert_eq!(value["duid_type"], "uuid");
        assert_eq!(value["type_code"], 4);
        assert_eq!(value["octets"], 4);
    }

    #[test]
    fn test_show_errors() {
        assert!(handle(&Config::default(), "potato", None).is_err());
        assert!(handle(&Config::default(), "00:01:02", Some("X")).is_err());
    }
}
