use anyhow::Result;
use std::path::Path;

use install_waterfox::checksum::write_checksum;

pub fn cmd_checksum(archive: &Path, out_dir: Option<&Path>) -> Result<()> {
    let written = write_checksum(archive, out_dir)?;
    println!("{}", written.display());
    Ok(())
}
