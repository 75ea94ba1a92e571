use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const PORT_BOUNDS: (u16, u16) = (1, 65_535);
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Copy)]
struct RuntimeConfig {
    port: u16,
    log_level: LogLevel,
}

impl RuntimeConfig {
    fn from_env() -> Self {
        Self {
            port: parse_env_u16_with_bounds("PORT", DEFAULT_PORT, PORT_BOUNDS),
            log_level: parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthPayload {
    ok: bool,
    service: &'static str,
    version: &'static str,
}

/// Serves the Trunk build output. The site itself is fully static; this
/// process only hands out `dist/` with an SPA fallback and a health probe.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = RuntimeConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);

    let static_service = ServeDir::new("dist").not_found_service(ServeFile::new("dist/index.html"));
    let app = Router::new()
        .route("/healthz", get(get_health))
        .fallback_service(static_service);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "port": config.port,
            "serving": "dist",
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

async fn get_health() -> (StatusCode, Json<HealthPayload>) {
    (
        StatusCode::OK,
        Json(HealthPayload {
            ok: true,
            service: "vanta-site",
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}

fn parse_env_u16_with_bounds(name: &str, default: u16, bounds: (u16, u16)) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    match parse_env_non_empty_string(name)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn log_event(config: &RuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_parse_falls_back_on_out_of_bounds_value() {
        std::env::set_var("TEST_PORT_OOB", "0");
        assert_eq!(
            parse_env_u16_with_bounds("TEST_PORT_OOB", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
        std::env::remove_var("TEST_PORT_OOB");
    }

    #[test]
    fn port_parse_accepts_value_within_bounds() {
        std::env::set_var("TEST_PORT_OK", " 3000 ");
        assert_eq!(
            parse_env_u16_with_bounds("TEST_PORT_OK", DEFAULT_PORT, PORT_BOUNDS),
            3000
        );
        std::env::remove_var("TEST_PORT_OK");
    }

    #[test]
    fn port_parse_uses_default_when_unset() {
        assert_eq!(
            parse_env_u16_with_bounds("TEST_PORT_UNSET", DEFAULT_PORT, PORT_BOUNDS),
            DEFAULT_PORT
        );
    }

    #[test]
    fn log_level_parse_recognizes_debug() {
        std::env::set_var("TEST_LOG_LEVEL", "DEBUG");
        assert!(parse_log_level("TEST_LOG_LEVEL", DEFAULT_LOG_LEVEL) == LogLevel::Debug);
        std::env::remove_var("TEST_LOG_LEVEL");
    }

    #[test]
    fn log_level_parse_falls_back_on_unknown_value() {
        std::env::set_var("TEST_LOG_LEVEL_BAD", "verbose");
        assert!(parse_log_level("TEST_LOG_LEVEL_BAD", DEFAULT_LOG_LEVEL) == LogLevel::Info);
        std::env::remove_var("TEST_LOG_LEVEL_BAD");
    }

    #[test]
    fn log_level_ordering_gates_debug_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
    }
}
