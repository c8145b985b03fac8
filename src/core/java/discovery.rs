use tracing::{info, instrument};

use crate::core::error::{DiscoveryError, DiscoveryResult};

use super::env::{Environment, ProcessEnvironment};
use super::options::DiscoveryOptions;
use super::paths::Platform;
use super::probe::{CommandProbe, JavaProbe};
use super::registry::JavaInstallations;
use super::sources::{
    check_java_home, check_path_env, check_vanilla_launchers, DiscoveryContext,
};

/// Runs every discovery source against `env` and returns what was found.
///
/// Sources run in a fixed order (vanilla launcher, `PATH`, `JAVA_HOME`) so an
/// executable reachable from several of them keeps the position of its first
/// discovery.
#[instrument(skip(env, probe))]
pub fn discover(
    platform: Platform,
    env: &dyn Environment,
    probe: &dyn JavaProbe,
) -> JavaInstallations {
    let ctx = DiscoveryContext {
        platform,
        env,
        probe,
    };
    let mut found = JavaInstallations::new();

    check_vanilla_launchers(&mut found, ctx);
    check_path_env(&mut found, ctx);
    check_java_home(&mut found, ctx);

    info!(
        "Java discovery finished: versions={:?}",
        found.versions().collect::<Vec<_>>()
    );
    found
}

/// Finds the Java installations of this machine.
///
/// Fails only when the host OS is not Windows, macOS or Linux. Finding
/// nothing is not an error. Blocks on every probe; async callers use
/// [`find_java_installations_async`].
pub fn find_java_installations() -> DiscoveryResult<JavaInstallations> {
    find_java_installations_with(&DiscoveryOptions::default())
}

pub fn find_java_installations_with(
    options: &DiscoveryOptions,
) -> DiscoveryResult<JavaInstallations> {
    let platform = Platform::current()?;
    let probe = CommandProbe::from_options(options);
    Ok(discover(platform, &ProcessEnvironment, &probe))
}

/// [`find_java_installations`] on tokio's blocking pool.
pub async fn find_java_installations_async() -> DiscoveryResult<JavaInstallations> {
    find_java_installations_async_with(DiscoveryOptions::default()).await
}

pub async fn find_java_installations_async_with(
    options: DiscoveryOptions,
) -> DiscoveryResult<JavaInstallations> {
    tokio::task::spawn_blocking(move || find_java_installations_with(&options))
        .await
        .map_err(|e| DiscoveryError::Other(format!("Task join error: {e}")))?
}
