//! Entry point shared by the binary and the integration tests.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use clap::Parser;
use tracing::debug;

use super::command::Cli;
use crate::application::Registrar;
use crate::config::LoggingConfig;
use crate::error::Error;
use crate::port::outbound::identity::IdentityProvider;
use crate::port::outbound::store::UserStore;

/// Parse `args`, register, and report. Returns the process exit code.
///
/// Exactly one argument must follow the program name; anything else is a
/// usage error reported before identity or store are touched. Success
/// writes `successfully updated user <name>` to `stdout`; any failure
/// writes exactly one diagnostic line to `stderr` and returns 1.
pub fn run<I, S, A, T>(
    args: A,
    registrar: &Registrar<I, S>,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
) -> u8
where
    I: IdentityProvider,
    S: UserStore,
    A: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = program_name(&args);

    if args.len() != 2 {
        debug!(count = args.len().saturating_sub(1), "wrong argument count");
        return report(stderr, &Error::Usage { program });
    }

    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(e) => {
            debug!(error = %e, "argument parsing failed");
            return report(stderr, &Error::Usage { program });
        }
    };

    LoggingConfig::default().init();

    match registrar.register(&cli.discord_id) {
        Ok(user) => {
            let _ = writeln!(stdout, "successfully updated user {}", user.username);
            0
        }
        Err(e) => report(stderr, &e),
    }
}

fn report(stderr: &mut impl Write, error: &Error) -> u8 {
    let _ = writeln!(stderr, "{error}");
    error.exit_code()
}

fn program_name(args: &[OsString]) -> String {
    args.first()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map_or_else(|| "register".to_owned(), |name| name.to_string_lossy().into_owned())
}
