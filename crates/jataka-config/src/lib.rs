use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "JATAKA_CONFIG";
/// Environment variable overriding `server.bind`.
pub const BIND_ENV: &str = "JATAKA_BIND";

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct JatakaConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub ephemeris: EphemerisConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default = "default_ayanamsa")]
    pub ayanamsa: String,
    #[serde(default = "default_house_system")]
    pub house_system: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EphemerisConfig {
    #[serde(default = "default_source")]
    pub source: String,
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_bind() -> String {
    "0.0.0.0:8000".to_string()
}

fn default_utc_offset() -> String {
    "+05:30".to_string()
}

fn default_ayanamsa() -> String {
    "lahiri".to_string()
}

fn default_house_system() -> String {
    "P".to_string()
}

fn default_source() -> String {
    "swiss".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            utc_offset: default_utc_offset(),
            ayanamsa: default_ayanamsa(),
            house_system: default_house_system(),
        }
    }
}

impl Default for EphemerisConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            path: None,
        }
    }
}

/// Try common relative paths for `configs/jataka.toml`, or the file named by
/// `JATAKA_CONFIG`. `Ok(None)` when no default location has a file.
pub fn read_config_text() -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Ok(explicit) = env::var(CONFIG_ENV) {
        let path = PathBuf::from(explicit);
        let text = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Could not read {} ({CONFIG_ENV}): {e}", path.display()))?;
        return Ok(Some((path, text)));
    }
    let paths = ["configs/jataka.toml", "../../configs/jataka.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), c)));
        }
    }
    Ok(None)
}

pub fn parse_config(text: &str) -> anyhow::Result<JatakaConfig> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse jataka.toml: {e}"))
}

pub fn load_config_from(path: &Path) -> anyhow::Result<JatakaConfig> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    parse_config(&text)
}

/// Load the config file (or defaults when none exists) and apply
/// environment overrides.
pub fn load_config() -> anyhow::Result<JatakaConfig> {
    let mut config = match read_config_text()? {
        Some((path, text)) => {
            log::info!("Loading config from {}", path.display());
            parse_config(&text)?
        }
        None => {
            log::info!("No jataka.toml found, using built-in defaults");
            JatakaConfig::default()
        }
    };
    if let Ok(bind) = env::var(BIND_ENV) {
        config.server.bind = bind;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, JatakaConfig::default());
        assert_eq!(config.server.bind, "0.0.0.0:8000");
        assert_eq!(config.chart.utc_offset, "+05:30");
        assert_eq!(config.chart.ayanamsa, "lahiri");
        assert_eq!(config.chart.house_system, "P");
        assert_eq!(config.ephemeris.source, "swiss");
        assert_eq!(config.ephemeris.path, None);
    }

    #[test]
    fn test_partial_sections_keep_defaults() {
        let config = parse_config(
            r#"
            [chart]
            utc_offset = "-04:00"

            [ephemeris]
            source = "moshier"
            "#,
        )
        .unwrap();
        assert_eq!(config.chart.utc_offset, "-04:00");
        assert_eq!(config.chart.ayanamsa, "lahiri");
        assert_eq!(config.ephemeris.source, "moshier");
        assert_eq!(config.server.bind, "0.0.0.0:8000");
    }

    #[test]
    fn test_shipped_config_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs/jataka.toml");
        let config = load_config_from(&path).unwrap();
        assert_eq!(config.chart.utc_offset, "+05:30");
        assert_eq!(
            config.ephemeris.path,
            Some(PathBuf::from("/usr/local/share/swisseph"))
        );
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(parse_config("[chart\nutc_offset = 1").is_err());
        assert!(parse_config("[chart]\nutc_offset = 530").is_err());
    }
}
