use std::io;
use std::process::ExitCode;
use tracing::error;
use library_catalog::catalog::factory::create_catalog_service;
use library_catalog::core::domain::Configuration;
use library_catalog::shell::controller::ShellController;
use library_catalog::utils::logging::setup_tracing;

fn main() -> ExitCode {
    let config = Configuration::default();
    setup_tracing(config.log_level.as_str());

    let catalog = create_catalog_service(&config);
    let stdin = io::stdin();
    let mut shell = ShellController::new(catalog, stdin.lock(), io::stdout());
    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("console session failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
