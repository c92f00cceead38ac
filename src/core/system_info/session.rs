use crate::core::system_info::types::UserSession;
use crate::error::Result;
use std::path::Path;
use sysinfo::{ProcessRefreshKind, RefreshKind, System};

pub fn hostname() -> Option<String> {
    System::host_name().filter(|name| !name.is_empty())
}

pub fn uptime() -> Option<u64> {
    Some(System::uptime())
}

pub fn process_count() -> Result<Option<u64>> {
    let refresh = RefreshKind::nothing().with_processes(ProcessRefreshKind::nothing());
    let sys = System::new_with_specifics(refresh);

    Ok(Some(sys.processes().len() as u64))
}

/// Name of the user's login shell
pub fn shell() -> Option<String> {
    ["SHELL", "COMSPEC"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .and_then(|path| shell_name(&path))
}

/// `/usr/bin/zsh` -> `zsh`, `C:\Windows\system32\cmd.exe` -> `cmd`
pub fn shell_name(path: &str) -> Option<String> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Windows paths may show up on any platform through COMSPEC
    let last = trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed);
    let name = Path::new(last)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())?;

    (!name.is_empty()).then_some(name)
}

/// Users with an open login session
pub fn users() -> Result<Vec<UserSession>> {
    #[cfg(unix)]
    {
        let output = crate::platform::commands::run("who", &[])?;
        Ok(crate::platform::commands::parse_who_sessions(&output))
    }

    #[cfg(not(unix))]
    {
        // Only the current interactive user is visible without elevated APIs
        Ok(std::env::var("USERNAME")
            .ok()
            .map(|user| {
                vec![UserSession {
                    user: Some(user),
                    tty: Some("console".to_string()),
                }]
            })
            .unwrap_or_default())
    }
}
