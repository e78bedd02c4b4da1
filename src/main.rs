use std::path::Path;
use std::process::ExitCode;

mod config;
mod handler;
mod http;
mod logger;
mod server;

fn main() -> ExitCode {
    let cfg = match config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            logger::log_error(&format!("Failed to load configuration: {e}"));
            return ExitCode::FAILURE;
        }
    };

    // The index page must exist before any socket is bound.
    let index_path = Path::new(&cfg.site.root).join(&cfg.site.index_file);
    if !index_path.is_file() {
        logger::log_error(&format!("{} not found!", cfg.site.index_file));
        logger::log_error(&format!(
            "Make sure you're running this from your site directory (looked in: {})",
            cfg.site.root
        ));
        return ExitCode::FAILURE;
    }

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();

    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = match runtime_builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            logger::log_error(&format!("Failed to build runtime: {e}"));
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(server::run(cfg)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&format!("Server error: {e}"));
            ExitCode::FAILURE
        }
    }
}
