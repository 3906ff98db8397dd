//! Configuration command implementation

use crate::config::{ConfigKey, ConfigValue, GlobalConfig};
use anyhow::Result;
use clap::Args;
use colored::Colorize;

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Configuration key to get/set
    pub key: Option<String>,

    /// Configuration value to set
    pub value: Option<String>,

    /// List all configuration values
    #[arg(short, long)]
    pub list: bool,

    /// Show global configuration file location
    #[arg(long)]
    pub show_origin: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Execute the config command
pub fn execute(args: ConfigArgs) -> Result<()> {
    let mut config = GlobalConfig::load()?;

    if args.show_origin {
        let config_path = GlobalConfig::get_config_path()?;
        if args.json {
            println!(
                "{}",
                serde_json::json!({
                    "config_file": config_path.display().to_string(),
                    "exists": config_path.exists()
                })
            );
        } else {
            println!(
                "{}: {}",
                "Configuration file".bold(),
                config_path.display().to_string().cyan()
            );
        }
        return Ok(());
    }

    let key_str = match &args.key {
        Some(key) if !args.list => key,
        _ => return list_configuration(&config, args.json),
    };

    let config_key = ConfigKey::from_str(key_str)
        .ok_or_else(|| anyhow::anyhow!("Invalid configuration key: {}", key_str))?;

    if let Some(value_str) = &args.value {
        config.set(config_key, ConfigValue::parse(value_str))?;
        config.save()?;

        if args.json {
            println!(
                "{}",
                serde_json::json!({
                    "action": "set",
                    "key": key_str,
                    "value": value_str,
                })
            );
        } else {
            println!("{} {} = {}", "✓".green(), key_str.bold(), value_str.cyan());
        }
    } else {
        let value = config.get(config_key);
        if args.json {
            println!("{}", serde_json::json!({ "key": key_str, "value": value }));
        } else {
            println!("{}", value);
        }
    }

    Ok(())
}

fn list_configuration(config: &GlobalConfig, json: bool) -> Result<()> {
    let entries = config.list();

    if json {
        let map: serde_json::Map<String, serde_json::Value> = entries
            .into_iter()
            .map(|(key, value)| (key, serde_json::Value::String(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        for (key, value) in entries {
            println!("{}={}", key, value);
        }
    }

    Ok(())
}
