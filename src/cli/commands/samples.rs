use anyhow::Result;

use super::GlobalOptions;
use crate::chat::ui;

pub fn print_samples(global: &GlobalOptions) -> Result<()> {
    let config = global.resolve()?;
    ui::print_samples(&config.samples);
    Ok(())
}
