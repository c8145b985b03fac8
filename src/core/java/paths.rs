use std::ffi::OsStr;
use std::path::PathBuf;

use crate::core::error::{DiscoveryError, DiscoveryResult};

/// Name of the Java launcher executable, without platform suffix.
pub const JAVA_COMMAND: &str = "java";

const VANILLA_LAUNCHER_INSTALL_DIR: &str = "C:/Program Files (x86)/Minecraft Launcher";
const VANILLA_LAUNCHER_STORE_CACHE: &str =
    "Packages/Microsoft.4297127D64EC6_8wekyb3d8bbwe/LocalCache/Local/";

/// Runtime directories the vanilla launcher has shipped over the years,
/// relative to its install root.
const VANILLA_LAUNCHER_RUNTIME_DIRS: [&str; 10] = [
    "runtime/java-runtime-beta/windows-x64/java-runtime-beta/bin",
    "runtime/java-runtime-beta/windows-x86/java-runtime-beta/bin",
    "runtime/java-runtime-alpha/windows-x64/java-runtime-alpha/bin",
    "runtime/java-runtime-alpha/windows-x86/java-runtime-alpha/bin",
    "runtime/jre-legacy/windows-x64/jre-legacy/bin",
    "runtime/jre-legacy/windows-x86/jre-legacy/bin",
    "runtime/jre-x64/bin",
    "runtime/jre-x86/bin",
    "runtime/java-runtime-gamma/windows-x64/java-runtime-gamma/bin",
    "runtime/java-runtime-gamma/windows-x86/java-runtime-gamma/bin",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Accepts both Rust (`std::env::consts::OS`) and Node style identifiers.
    pub fn from_os(os: &str) -> DiscoveryResult<Self> {
        match os {
            "windows" | "win32" => Ok(Platform::Windows),
            "macos" | "darwin" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(DiscoveryError::UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn current() -> DiscoveryResult<Self> {
        Self::from_os(std::env::consts::OS)
    }

    pub fn executable_suffix(self) -> &'static str {
        match self {
            Platform::Windows => ".exe",
            Platform::MacOs | Platform::Linux => "",
        }
    }

    /// File name of the Java executable, e.g. `java.exe`.
    pub fn java_exe(self) -> String {
        format!("{JAVA_COMMAND}{}", self.executable_suffix())
    }

    /// The vanilla launcher only bundles private runtimes on Windows.
    pub fn has_vanilla_launcher(self) -> bool {
        self == Platform::Windows
    }
}

/// Executable suffix for a platform identifier.
///
/// Unknown platforms are a hard error: every candidate path built afterwards
/// would be wrong.
pub fn executable_suffix(os: &str) -> DiscoveryResult<&'static str> {
    Platform::from_os(os).map(Platform::executable_suffix)
}

pub fn known_launcher_subpaths() -> &'static [&'static str] {
    &VANILLA_LAUNCHER_RUNTIME_DIRS
}

/// Install roots of the vanilla launcher: the classic installer location and
/// the Microsoft Store package cache under `%LOCALAPPDATA%`.
///
/// A missing `LOCALAPPDATA` only drops the second root.
pub fn vanilla_launcher_roots(local_app_data: Option<&OsStr>) -> Vec<PathBuf> {
    let mut roots = vec![PathBuf::from(VANILLA_LAUNCHER_INSTALL_DIR)];
    if let Some(local) = local_app_data.filter(|value| !value.is_empty()) {
        roots.push(PathBuf::from(local).join(VANILLA_LAUNCHER_STORE_CACHE));
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_is_empty_on_unix_likes() {
        assert_eq!(executable_suffix("linux").unwrap(), "");
        assert_eq!(executable_suffix("macos").unwrap(), "");
        assert_eq!(executable_suffix("darwin").unwrap(), "");
    }

    #[test]
    fn suffix_is_exe_on_windows() {
        assert_eq!(executable_suffix("windows").unwrap(), ".exe");
        assert_eq!(executable_suffix("win32").unwrap(), ".exe");
        assert_eq!(Platform::Windows.java_exe(), "java.exe");
    }

    #[test]
    fn unknown_platform_is_rejected() {
        let err = executable_suffix("freebsd").unwrap_err();
        assert!(matches!(err, DiscoveryError::UnsupportedPlatform(ref os) if os == "freebsd"));
        assert!(Platform::from_os("").is_err());
    }

    #[test]
    fn current_platform_matches_target() {
        let current = Platform::current();
        if cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux")) {
            assert!(current.is_ok());
        } else {
            assert!(current.is_err());
        }
    }

    #[test]
    fn launcher_table_has_ten_bin_dirs() {
        let subpaths = known_launcher_subpaths();
        assert_eq!(subpaths.len(), 10);
        assert!(subpaths.iter().all(|p| p.starts_with("runtime/") && p.ends_with("/bin")));
        assert_eq!(subpaths[6], "runtime/jre-x64/bin");
    }

    #[test]
    fn store_root_requires_local_app_data() {
        assert_eq!(vanilla_launcher_roots(None).len(), 1);
        assert_eq!(vanilla_launcher_roots(Some(OsStr::new(""))).len(), 1);

        let roots = vanilla_launcher_roots(Some(OsStr::new("C:/Users/steve/AppData/Local")));
        assert_eq!(roots.len(), 2);
        assert!(roots[1].starts_with("C:/Users/steve/AppData/Local"));
        assert!(roots[1].ends_with("LocalCache/Local"));
    }

    #[test]
    fn only_windows_hosts_the_vanilla_launcher() {
        assert!(Platform::Windows.has_vanilla_launcher());
        assert!(!Platform::Linux.has_vanilla_launcher());
        assert!(!Platform::MacOs.has_vanilla_launcher());
    }
}
