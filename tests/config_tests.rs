use std::collections::HashMap;
use std::fs;

use depobot::error::{ConfigError, Error};
use depobot::infrastructure::config::logging::LogFormat;
use depobot::infrastructure::config::settings::Config;
use depobot::infrastructure::config::telegram::UpdateMode;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

const BASE_ENV: &[(&str, &str)] = &[("TELEGRAM_BOT_TOKEN", "123456:secret"), ("ADMIN_ID", "777")];

#[test]
fn empty_config_uses_defaults() {
    let config = Config::parse_toml_with_env("", env(BASE_ENV)).unwrap();

    assert_eq!(config.bot_token(), "123456:secret");
    assert_eq!(config.telegram.admin_id, 777);
    assert_eq!(config.telegram.mode, UpdateMode::Polling);
    assert_eq!(config.telegram.port, 8080);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.data_file.to_str(), Some("bot_data.json"));

    let settings = config.bot_settings().unwrap();
    assert_eq!(settings.admin_id, 777);
    assert_eq!(settings.clock.offset().local_minus_utc(), 23_400);
}

#[test]
fn file_values_are_read() {
    let toml = r#"
data_file = "/var/lib/depobot/data.json"

[logging]
level = "debug"
format = "json"

[telegram]
admin_id = 5
mode = "webhook"
webhook_url = "https://bot.example.com"
webhook_path = "updates"
port = 9000

[schedule]
utc_offset = "+07:00"
cutoff = "06:30"
"#;
    let config =
        Config::parse_toml_with_env(toml, env(&[("TELEGRAM_BOT_TOKEN", "t")])).unwrap();

    assert_eq!(config.telegram.admin_id, 5);
    assert_eq!(config.telegram.mode, UpdateMode::Webhook);
    assert_eq!(
        config.telegram.webhook_endpoint().unwrap().as_str(),
        "https://bot.example.com/updates"
    );
    assert_eq!(config.telegram.port, 9000);
    assert_eq!(config.logging.format, LogFormat::Json);
    let clock = config.bot_settings().unwrap().clock;
    assert_eq!(clock.offset().local_minus_utc(), 7 * 3600);
}

#[test]
fn environment_overrides_file() {
    let toml = r#"
[telegram]
admin_id = 5
port = 9000
"#;
    let config = Config::parse_toml_with_env(
        toml,
        env(&[
            ("TELEGRAM_BOT_TOKEN", "123:def"),
            ("ADMIN_ID", "6"),
            ("PORT", "10000"),
            ("RENDER_EXTERNAL_URL", "https://depobot.onrender.com"),
        ]),
    )
    .unwrap();

    assert_eq!(config.telegram.admin_id, 6);
    assert_eq!(config.telegram.port, 10000);
    assert_eq!(config.telegram.mode, UpdateMode::Webhook);
    assert_eq!(
        config.telegram.webhook_endpoint().unwrap().as_str(),
        "https://depobot.onrender.com/123:def"
    );
}

#[test]
fn token_in_file_is_ignored() {
    let toml = r#"
[telegram]
admin_id = 5
bot_token = "from-file"
"#;
    let err = Config::parse_toml_with_env(toml, env(&[])).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingField {
            field: "TELEGRAM_BOT_TOKEN"
        })
    ));
}

#[test]
fn missing_admin_is_rejected() {
    let err =
        Config::parse_toml_with_env("", env(&[("TELEGRAM_BOT_TOKEN", "t")])).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "admin_id",
            ..
        })
    ));
}

#[test]
fn malformed_overrides_are_rejected() {
    let err = Config::parse_toml_with_env(
        "",
        env(&[("TELEGRAM_BOT_TOKEN", "t"), ("ADMIN_ID", "me")]),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "ADMIN_ID",
            ..
        })
    ));

    let mut pairs = BASE_ENV.to_vec();
    pairs.push(("PORT", "http"));
    let err = Config::parse_toml_with_env("", env(&pairs)).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue { field: "PORT", .. })
    ));
}

#[test]
fn bad_schedule_is_rejected() {
    let toml = r#"
[schedule]
cutoff = "half past six"
"#;
    let err = Config::parse_toml_with_env(toml, env(BASE_ENV)).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue { field: "cutoff", .. })
    ));
}

#[test]
fn webhook_mode_needs_url() {
    let toml = r#"
[telegram]
mode = "webhook"
"#;
    let err = Config::parse_toml_with_env(toml, env(BASE_ENV)).unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::MissingField {
            field: "webhook_url"
        })
    ));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Config::parse_toml_with_env("[telegram", env(BASE_ENV)).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}

#[test]
fn load_reports_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "data_file = [").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, Error::Config(ConfigError::Parse(_))));
}
