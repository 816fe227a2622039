use std::env;
use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Select};

use crate::config::{Config, ConfigManager};
use crate::core::errors::CliError;
use crate::core::BooksManager;
use crate::render::HtmlRenderer;
use crate::store::CsvStore;

use super::{commands, output};

const SCRIPT_MODE_ENV: &str = "BOOKS_CORE_CLI_SCRIPT";

const MENU_ITEMS: &[&str] = &[
    "Dashboard",
    "Add Entry",
    "View Report",
    "Generate Invoice",
    "Exit",
];

/// Entry point for the interactive CLI. With `BOOKS_CORE_CLI_SCRIPT` set,
/// commands are read line-by-line from stdin instead, which keeps the binary
/// drivable from tests and scripts.
pub fn run_cli() -> Result<(), CliError> {
    let config_manager = ConfigManager::new()?;
    let config = config_manager.load()?;
    let store = CsvStore::new(config.books_dir())?;
    let mut manager = BooksManager::open(Box::new(store))?;
    let renderer = HtmlRenderer::new(&config.business_name, &config.currency);

    if env::var_os(SCRIPT_MODE_ENV).is_some() {
        return run_script(&mut manager, &config);
    }

    let theme = ColorfulTheme::default();
    output::section(format!("{} Books", config.business_name));
    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Go to")
            .items(MENU_ITEMS)
            .default(0)
            .interact()?;
        let result = match choice {
            0 => {
                commands::dashboard(&manager, &config);
                Ok(())
            }
            1 => commands::add_entry(&mut manager, &theme),
            2 => commands::view_report(&manager, &theme),
            3 => commands::generate_invoice(&mut manager, &renderer, &theme),
            _ => break,
        };
        // Nothing here is fatal; report and let the operator retry.
        if let Err(err) = result {
            output::error(err);
        }
    }
    Ok(())
}

fn run_script(manager: &mut BooksManager, config: &Config) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "" => continue,
            "help" => {
                output::plain("Available commands: help, version, dashboard, report, exit");
            }
            "version" => {
                output::plain(format!("Books Core v{}", env!("CARGO_PKG_VERSION")));
            }
            "dashboard" => commands::dashboard(manager, config),
            "report" => commands::print_report(manager),
            "exit" | "quit" => break,
            other => output::warning(format!("unknown command `{other}`")),
        }
    }
    Ok(())
}
