use std::fs::{self, File};
use std::process::ExitCode;

use coreui::prelude::*;
use playbook::{Config, Playbook, paths};
use simplelog::WriteLogger;

fn init_logging(config: &Config) {
    let Some(log_file) = paths::log_file() else {
        return;
    };
    if let Some(dir) = log_file.parent()
        && let Err(e) = fs::create_dir_all(dir)
    {
        eprintln!("Warning: could not create {}: {}", dir.display(), e);
        return;
    }
    paths::rotate_logs();
    match File::create(&log_file) {
        Ok(file) => {
            let logged = WriteLogger::init(config.log_level, simplelog::Config::default(), file);
            if let Err(e) = logged {
                eprintln!("Warning: could not start logging: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: could not create {}: {}", log_file.display(), e),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    init_logging(&config);
    log::info!("playbook starting theme={}", config.theme);

    let theme = build_theme(config.theme, &Brand::default());
    let app = Playbook::new(config);
    match Runtime::new(theme).run(&app).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
