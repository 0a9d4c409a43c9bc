//! Configuration inspection command handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            if !global.quiet {
                println!("config: {}", wardline_config::config_path().display());
                println!("data:   {}", wardline_config::data_path().display());
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let config = wardline_config::load_config_or_default();
            let rendered =
                toml::to_string_pretty(&config).map_err(wardline_config::ConfigError::from)?;
            if !global.quiet {
                print!("{rendered}");
            }
            Ok(())
        }
    }
}
