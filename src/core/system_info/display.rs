use crate::core::system_info::types::DisplayFacts;
use crate::error::Result;

/// Active displays with their current resolution
pub fn collect() -> Result<Vec<DisplayFacts>> {
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        use crate::platform::commands;

        let output = commands::run("xrandr", &["--current"])?;
        Ok(commands::parse_xrandr_displays(&output))
    }

    #[cfg(target_os = "macos")]
    {
        // Reported together with the controllers by gpu::collect
        Ok(vec![])
    }

    #[cfg(not(unix))]
    {
        Err(crate::error::SysfetchError::unsupported(
            "Display detection not implemented on this platform",
        ))
    }
}
