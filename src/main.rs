use transx::cli::run_cli;
use transx::models::config::Config;
use transx::utils::logger::Logger;

fn main() {
    if let Err(e) = Config::initialize() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }

    if let Err(e) = run_cli() {
        Logger::error(format!("{:#}", e));
        std::process::exit(1);
    }
}
