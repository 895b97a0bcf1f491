use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Default config file, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "flower_shop.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    /// Channel capacity of each store actor; zero is rejected at load time
    pub mailbox_size: NonZeroUsize,
    /// Decrement stock when an order is placed. Off by default: orders only
    /// check stock.
    pub reserve_stock_on_order: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopConfig {
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub inventory: InventoryConfig,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            inventory: InventoryConfig {
                mailbox_size: NonZeroUsize::new(32).unwrap_or(NonZeroUsize::MIN),
                reserve_stock_on_order: false,
            },
        }
    }
}

impl ShopConfig {
    /// Defaults, then the TOML file (`FLOWER_SHOP_CONFIG` or
    /// [`DEFAULT_CONFIG_FILE`]), then `FLOWER_SHOP_*` env vars with `__`
    /// separating nested keys.
    pub fn figment() -> Figment {
        let file = std::env::var("FLOWER_SHOP_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        Figment::from(Serialized::defaults(ShopConfig::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed("FLOWER_SHOP_").ignore(&["CONFIG"]).split("__"))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_file_or_env() {
        Jail::expect_with(|_jail| {
            let config = ShopConfig::load()?;
            assert_eq!(config, ShopConfig::default());
            assert_eq!(config.server.addr(), "0.0.0.0:8000");
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_FILE,
                r#"
                [server]
                port = 9000

                [inventory]
                reserve_stock_on_order = true
                "#,
            )?;
            jail.set_env("FLOWER_SHOP_SERVER__PORT", "9100");
            jail.set_env("FLOWER_SHOP_TELEMETRY__LOG_LEVEL", "debug");

            let config = ShopConfig::load()?;
            assert_eq!(config.server.port, 9100);
            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.telemetry.log_level, "debug");
            assert!(config.inventory.reserve_stock_on_order);
            assert_eq!(config.inventory.mailbox_size.get(), 32);
            Ok(())
        });
    }

    #[test]
    fn test_config_path_from_env() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[inventory]\nmailbox_size = 4\n")?;
            jail.set_env("FLOWER_SHOP_CONFIG", "custom.toml");

            let config = ShopConfig::load()?;
            assert_eq!(config.inventory.mailbox_size.get(), 4);
            Ok(())
        });
    }

    #[test]
    fn test_zero_mailbox_size_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("FLOWER_SHOP_INVENTORY__MAILBOX_SIZE", "0");
            assert!(ShopConfig::load().is_err());
            Ok(())
        });

        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_FILE, "[inventory]\nmailbox_size = 0\n")?;
            assert!(ShopConfig::load().is_err());
            Ok(())
        });
    }
}
