use std::{str::FromStr, time::Duration};

use crate::server::{
    error::{config::ConfigError, AppError},
    rpc::{ChannelConfig, SentinelPolicy},
    service::credential::DEFAULT_HASH_COST,
};

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CRUD_SERVICE_PORT: u16 = 1111;
const DEFAULT_AUTH_SERVICE_PORT: u16 = 2222;
/// Cost range bcrypt accepts.
const HASH_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;
const DEFAULT_RPC_TIMEOUT_MS: u64 = 5000;
const DEFAULT_RPC_CONNECT_ATTEMPTS: u32 = 3;

pub struct Config {
    pub port: u16,

    pub crud_service_host: String,
    pub crud_service_port: u16,
    pub auth_service_host: String,
    pub auth_service_port: u16,

    pub hash_cost: u32,

    pub rpc_timeout: Duration,
    pub rpc_connect_attempts: u32,
    pub sentinel_policy: SentinelPolicy,

    pub cors_allowed_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|name| std::env::var(name).ok())?)
    }

    /// Builds the configuration from any variable source.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let hash_cost = parse_or(&var, "AUTH_HASH_COST", DEFAULT_HASH_COST)?;
        if !HASH_COST_RANGE.contains(&hash_cost) {
            return Err(ConfigError::InvalidEnvVar {
                name: "AUTH_HASH_COST".to_string(),
                value: hash_cost.to_string(),
                reason: format!(
                    "must be between {} and {}",
                    HASH_COST_RANGE.start(),
                    HASH_COST_RANGE.end()
                ),
            });
        }

        let legacy_sentinel: bool = parse_or(&var, "RPC_LEGACY_SENTINEL", false)?;

        Ok(Self {
            port: parse_or(&var, "PORT", DEFAULT_PORT)?,
            crud_service_host: required(&var, "CRUD_SERVICE_HOST")?,
            crud_service_port: parse_or(&var, "CRUD_SERVICE_PORT", DEFAULT_CRUD_SERVICE_PORT)?,
            auth_service_host: required(&var, "AUTH_SERVICE_HOST")?,
            auth_service_port: parse_or(&var, "AUTH_SERVICE_PORT", DEFAULT_AUTH_SERVICE_PORT)?,
            hash_cost,
            rpc_timeout: Duration::from_millis(parse_or(
                &var,
                "RPC_TIMEOUT_MS",
                DEFAULT_RPC_TIMEOUT_MS,
            )?),
            rpc_connect_attempts: parse_or(
                &var,
                "RPC_CONNECT_ATTEMPTS",
                DEFAULT_RPC_CONNECT_ATTEMPTS,
            )?,
            sentinel_policy: if legacy_sentinel {
                SentinelPolicy::LegacyZero
            } else {
                SentinelPolicy::Tagged
            },
            cors_allowed_origin: var("CORS_ALLOWED_ORIGIN"),
        })
    }

    pub fn data_channel(&self) -> ChannelConfig {
        ChannelConfig::new(&self.crud_service_host, self.crud_service_port)
            .request_timeout(self.rpc_timeout)
            .connect_attempts(self.rpc_connect_attempts)
    }

    pub fn auth_channel(&self) -> ChannelConfig {
        ChannelConfig::new(&self.auth_service_host, self.auth_service_port)
            .request_timeout(self.rpc_timeout)
            .connect_attempts(self.rpc_connect_attempts)
    }
}

fn required<F>(var: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

fn parse_or<F, T>(var: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match var(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
