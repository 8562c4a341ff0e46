use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub access_token_secret: String,
    pub refresh_token_secret: String,
    pub password_reset_secret: String,
    pub access_token_life: i64,
    pub refresh_token_life: i64,
    pub password_reset_life: i64,
    pub webapp_url: String,
    pub mail_host: Option<String>,
    pub mail_port: u16,
    pub mail_user: Option<String>,
    pub mail_pass: Option<String>,
    pub mail_from: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            access_token_secret: get_env("ACCESS_TOKEN_SECRET")?,
            refresh_token_secret: get_env("REFRESH_TOKEN_SECRET")?,
            password_reset_secret: get_env("PASSWORD_RESET_SECRET")?,
            access_token_life: get_env_parse("ACCESS_TOKEN_LIFE")?,
            refresh_token_life: get_env_parse("REFRESH_TOKEN_LIFE")?,
            password_reset_life: get_env_parse("PASSWORD_RESET_LIFE")?,
            webapp_url: get_env("WEBAPP_URL")?,
            mail_host: env::var("MAIL_HOST").ok(),
            mail_port: env::var("MAIL_PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(587),
            mail_user: env::var("MAIL_USER").ok(),
            mail_pass: env::var("MAIL_PASS").ok(),
            mail_from: env::var("MAIL_FROM").ok(),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_parse<T>(name: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(name)?;
    raw.parse()
        .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e)))
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
