use anyhow::Result;

pub fn execute() -> Result<()> {
    println!("sysfetch version {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
