use anyhow::Result;

use super::GlobalOptions;
use crate::chat::ui;
use crate::ui::Style;

pub fn print_config(global: &GlobalOptions) -> Result<()> {
    let manager = global.config_manager()?;
    let config = global.resolve()?;

    ui::print_config(&config);

    let path = manager.config_path();
    let note = if path.exists() { "" } else { " (not found, using defaults)" };
    println!(
        "{} {}{}",
        Style::label("config file"),
        Style::secondary(path.display()),
        Style::hint(note)
    );
    Ok(())
}
