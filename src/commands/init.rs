//! Application configuration initialization command.
//!
//! Runs the interactive setup wizard that picks the data directory and the
//! file names both tools use.

use crate::{
    libs::{config::Config, messages::Message, prompt::ConsolePrompt},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Remove existing configuration instead of creating new one
    #[arg(short, long)]
    delete: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    if init_args.delete {
        Config::delete()?;
        msg_success!(Message::ConfigDeleted);
        return Ok(());
    }

    Config::init(&mut ConsolePrompt::new())?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
