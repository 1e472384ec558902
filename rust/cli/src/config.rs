use serde::{Deserialize, Serialize};
use std::fs;

use notty_engine::game::{MAX_PLAYERS, MIN_PLAYERS};
use notty_engine::player::Player;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub human: bool,
}

impl PlayerConfig {
    pub fn new(name: impl Into<String>, human: bool) -> Self {
        Self {
            name: name.into(),
            human,
        }
    }

    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.human)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub players: Vec<PlayerConfig>,
    pub seed: Option<u64>,
    pub max_draw: u8,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub players: ValueSource,
    pub seed: ValueSource,
    pub max_draw: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            players: ValueSource::Default,
            seed: ValueSource::Default,
            max_draw: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: vec![
                PlayerConfig::new("Human", true),
                PlayerConfig::new("Computer 1", false),
                PlayerConfig::new("Computer 2", false),
            ],
            seed: None,
            max_draw: 3,
        }
    }
}

impl Config {
    pub fn to_players(&self) -> Vec<Player> {
        self.players.iter().map(PlayerConfig::to_player).collect()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for ConfigError {}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves configuration: defaults, then the TOML file named by
/// `NOTTY_CONFIG`, then `NOTTY_SEED` / `NOTTY_MAX_DRAW`.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("NOTTY_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.max_draw {
            cfg.max_draw = v;
            sources.max_draw = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("NOTTY_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(max_draw) = std::env::var("NOTTY_MAX_DRAW")
        && !max_draw.is_empty()
    {
        cfg.max_draw = max_draw
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid max_draw".into()))?;
        sources.max_draw = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    players: Option<Vec<PlayerConfig>>,
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    max_draw: Option<u8>,
}

pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    let count = cfg.players.len();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: players must list {}-{} entries, got {}",
            MIN_PLAYERS, MAX_PLAYERS, count
        )));
    }
    if cfg.players.iter().any(|p| p.name.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: player names must not be empty".into(),
        ));
    }
    if cfg.max_draw == 0 {
        return Err(ConfigError::Invalid(
            "Invalid configuration: max_draw must be >=1".into(),
        ));
    }
    Ok(())
}

/// Parses `--players` style lists: comma-separated names, the first seat
/// human and the rest computer.
pub fn parse_player_list(list: &str) -> Vec<PlayerConfig> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(i, name)| PlayerConfig::new(name, i == 0))
        .collect()
}
