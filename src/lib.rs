pub mod core;

use std::io::Write;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use crate::core::error::DiscoveryResult;
use crate::core::java::{DiscoveryOptions, ProcessEnvironment};

pub use crate::core::error::DiscoveryError;
pub use crate::core::java::{
    find_java_installations, find_java_installations_async, find_java_installations_async_with,
    find_java_installations_with, JavaInstallations, Platform,
};

/// Entry point of the `java-locator` binary: prints every Java runtime found
/// on this machine as JSON, keyed by major version.
pub fn run() -> DiscoveryResult<()> {
    // Logs go to stderr so stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,java_locator=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = DiscoveryOptions::from_env(&ProcessEnvironment);
    tracing::info!(
        "java-locator starting (probe timeout: {:?})",
        options.probe_timeout()
    );

    let found = find_java_installations_with(&options)?;
    write_report(&found, &mut std::io::stdout().lock())
}

/// Writes `found` as pretty JSON followed by a newline.
pub fn write_report(found: &JavaInstallations, out: &mut impl Write) -> DiscoveryResult<()> {
    let json = serde_json::to_string_pretty(found)?;
    writeln!(out, "{json}")
        .and_then(|()| out.flush())
        .map_err(|source| DiscoveryError::Io {
            path: PathBuf::from("<stdout>"),
            source,
        })
}
