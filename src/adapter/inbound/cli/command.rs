//! Command-line interface definition.

use clap::Parser;

/// Link your Linux account to your Discord id in the kernelbot database
///
/// Takes exactly one argument. There are no flags: `--help` and friends are
/// read as the id and rejected like any other non-numeric value.
#[derive(Parser, Debug)]
#[command(name = "register")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Discord user id to register
    #[arg(value_name = "DISCORD_ID", allow_hyphen_values = true)]
    pub discord_id: String,
}
