use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub logging: LoggingConfig,
    pub parallel: ParallelConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub path: PathBuf,
    pub skip_errors: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "pretty"
}

#[derive(Debug, Clone, Deserialize)]
pub struct ParallelConfig {
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputConfig {
                path: PathBuf::from("data/graph.csv"),
                skip_errors: false,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
            parallel: ParallelConfig {
                threads: num_cpus::get(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let config = Self {
            input: InputConfig {
                path: lookup("TRACE_GRAPH_INPUT")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.input.path),
                skip_errors: match lookup("TRACE_GRAPH_SKIP_ERRORS") {
                    Some(value) => value.parse()?,
                    None => defaults.input.skip_errors,
                },
            },
            logging: LoggingConfig {
                level: lookup("LOG_LEVEL").unwrap_or(defaults.logging.level),
                format: lookup("LOG_FORMAT").unwrap_or(defaults.logging.format),
            },
            parallel: ParallelConfig {
                threads: match lookup("TRACE_GRAPH_THREADS") {
                    Some(value) => value.parse()?,
                    None => defaults.parallel.threads,
                },
            },
        };

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.input.path, PathBuf::from("data/graph.csv"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "pretty");
        assert!(config.parallel.threads >= 1);
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("TRACE_GRAPH_INPUT", "graphs/trains.csv"),
            ("TRACE_GRAPH_SKIP_ERRORS", "true"),
            ("LOG_FORMAT", "json"),
            ("TRACE_GRAPH_THREADS", "2"),
        ]
        .into_iter()
        .collect();

        let config = Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.input.path, PathBuf::from("graphs/trains.csv"));
        assert!(config.input.skip_errors);
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.parallel.threads, 2);
    }

    #[test]
    fn test_invalid_number() {
        let result = Config::from_lookup(|key| (key == "TRACE_GRAPH_THREADS").then(|| "many".to_string()));
        assert!(result.is_err());
    }
}
