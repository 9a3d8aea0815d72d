use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bandview_core::remote::{spawn_script, DEFAULT_SCRIPT_DELAY};
use clap::Args;

#[derive(Args)]
pub struct ScriptArgs {
    /// Script file, or "-" to read from stdin
    pub file: PathBuf,
}

pub fn run(args: &ScriptArgs) -> Result<()> {
    let script = if args.file.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read script from stdin")?;
        buf
    } else {
        std::fs::read_to_string(&args.file)
            .with_context(|| format!("Failed to read script {}", args.file.display()))?
    };

    let handle = spawn_script(script, DEFAULT_SCRIPT_DELAY, None)?;
    super::follow_worker(handle)?;
    Ok(())
}
