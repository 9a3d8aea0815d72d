use anyhow::{Context, Result};
use bandview_core::settings::{Settings, Theme};
use clap::Args;

#[derive(Args)]
pub struct ThemeArgs {
    /// New theme (dark or light); prints the current one when omitted
    pub theme: Option<Theme>,
}

pub fn run(args: &ThemeArgs) -> Result<()> {
    let mut settings = Settings::load_or_default();

    let Some(theme) = args.theme else {
        println!("{}", settings.theme);
        return Ok(());
    };

    settings.theme = theme;
    settings.save().context("Failed to save settings")?;
    println!("Theme set to {}", settings.theme);
    Ok(())
}
