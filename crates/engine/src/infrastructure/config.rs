//! Engine configuration from environment variables.
//!
//! | variable | default |
//! |---|---|
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` / `PORT` | `3002` |
//! | `CORS_ALLOWED_ORIGINS` | `*` (comma separated list, empty disables CORS) |
//! | `GAME_OVER_HEAT` | `80` |
//! | `RANDOM_EVENT_CHANCE` | `15` (percent) |
//! | `LEADERBOARD_SIZE` | `10` |

use std::str::FromStr;

use hacktycoon_domain::GameRules;

const DEFAULT_PORT: u16 = 3002;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub server_host: String,
    pub server_port: u16,
    /// `None` disables the CORS layer.
    pub cors_allowed_origins: Option<String>,
    pub rules: GameRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: DEFAULT_PORT,
            cors_allowed_origins: Some("*".to_string()),
            rules: GameRules::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let server_host = lookup("SERVER_HOST").unwrap_or(defaults.server_host);
        let server_port = lookup("SERVER_PORT")
            .or_else(|| lookup("PORT"))
            .map(|raw| parse_or("SERVER_PORT", &raw, DEFAULT_PORT))
            .unwrap_or(DEFAULT_PORT);

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => Some(raw.trim().to_string()).filter(|s| !s.is_empty()),
            None => defaults.cors_allowed_origins,
        };

        let base = defaults.rules;
        let rules = base
            .clone()
            .with_game_over_heat(
                lookup("GAME_OVER_HEAT")
                    .map(|raw| parse_or("GAME_OVER_HEAT", &raw, base.game_over_heat))
                    .unwrap_or(base.game_over_heat),
            )
            .with_random_event_chance(
                lookup("RANDOM_EVENT_CHANCE")
                    .map(|raw| parse_or("RANDOM_EVENT_CHANCE", &raw, base.random_event_chance))
                    .unwrap_or(base.random_event_chance),
            )
            .with_leaderboard_size(
                lookup("LEADERBOARD_SIZE")
                    .map(|raw| parse_or("LEADERBOARD_SIZE", &raw, base.leaderboard_size))
                    .unwrap_or(base.leaderboard_size),
            );

        Self {
            server_host,
            server_port,
            cors_allowed_origins,
            rules,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_or<T: FromStr + Copy + std::fmt::Display>(key: &str, raw: &str, default: T) -> T {
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(
                key,
                value = raw,
                default = %default,
                "Invalid config value, using default"
            );
            default
        }
    }
}
