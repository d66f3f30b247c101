use std::io;
use std::process::ExitCode;

use kernelbot_register::adapter::inbound::cli;
use kernelbot_register::adapter::outbound::identity::SessionIdentity;
use kernelbot_register::adapter::outbound::sqlite::SqliteUserStore;
use kernelbot_register::application::Registrar;
use kernelbot_register::config::Config;

fn main() -> ExitCode {
    let config = Config::default();
    let registrar = Registrar::new(SessionIdentity, SqliteUserStore::new(config.database));

    let code = cli::run(
        std::env::args_os(),
        &registrar,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(code)
}
