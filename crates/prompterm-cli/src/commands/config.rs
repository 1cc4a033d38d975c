use anyhow::Result;

use prompterm_core::AppConfig;

use crate::ConfigAction;

pub fn run(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = AppConfig::config_path();
            if path.exists() {
                println!("Config already exists at {}", path.display());
            } else {
                AppConfig::default().save()?;
                println!("Wrote default config to {}", path.display());
            }
        }
        ConfigAction::Path => {
            println!("{}", AppConfig::config_path().display());
        }
    }
    Ok(())
}
