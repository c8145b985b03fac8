use std::path::Path;
use std::process::{ExitStatus, Output, Stdio};
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use tokio::process::Command;
use tracing::{debug, instrument};

use super::options::DiscoveryOptions;
use super::paths::JAVA_COMMAND;

/// Answers "is this a Java runtime, and which major version?".
pub trait JavaProbe {
    fn probe(&self, candidate: &Path) -> Option<u32>;
}

#[derive(Debug, thiserror::Error)]
enum ProbeFailure {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("exited with {0}")]
    Exit(ExitStatus),
    #[error("no answer within {0:?}")]
    TimedOut(Duration),
}

/// Probes a candidate by running `<candidate> -version`.
#[derive(Debug, Clone)]
pub struct CommandProbe {
    timeout: Option<Duration>,
}

impl CommandProbe {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    pub fn from_options(options: &DiscoveryOptions) -> Self {
        Self::new(options.probe_timeout())
    }
}

impl Default for CommandProbe {
    fn default() -> Self {
        Self::from_options(&DiscoveryOptions::default())
    }
}

impl JavaProbe for CommandProbe {
    #[instrument(skip(self))]
    fn probe(&self, candidate: &Path) -> Option<u32> {
        if !is_spawnable(candidate) {
            return None;
        }

        let banner = match capture_version_banner(candidate, self.timeout) {
            Ok(banner) => banner,
            Err(reason) => {
                debug!("Probe of {:?} failed: {}", candidate, reason);
                return None;
            }
        };
        debug!(
            "Probing {:?}: {}",
            candidate,
            banner.lines().find(|line| !line.trim().is_empty()).unwrap_or("")
        );

        parse_major_version(&banner)
    }
}

/// Probes with the default timeout.
pub fn probe_java(candidate: &Path) -> Option<u32> {
    CommandProbe::default().probe(candidate)
}

/// Extracts the major version from a `java -version` banner.
///
/// `version "17.0.2"` yields 17. Pre-9 runtimes report `version "1.8.0_311"`,
/// where the major is the group after the leading `1.`.
pub fn parse_major_version(banner: &str) -> Option<u32> {
    let leading = version_pattern().captures(banner)?.get(1)?.as_str();

    let major = if leading == "1" {
        legacy_version_pattern()
            .captures(banner)?
            .get(1)?
            .as_str()
            .parse::<u32>()
            .ok()?
    } else {
        leading.parse::<u32>().ok()?
    };

    // "0" is never a real Java release.
    (major > 0).then_some(major)
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"version "(\d+)"#).expect("valid version pattern"))
}

fn legacy_version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"version "1\.(\d+)"#).expect("valid legacy version pattern")
    })
}

fn is_search_path_command(candidate: &Path) -> bool {
    candidate.to_string_lossy().starts_with(JAVA_COMMAND)
}

/// Bare `java` is resolved through PATH by the OS, so it has nothing to
/// exist on disk. Anything else must exist before we spawn it.
fn is_spawnable(candidate: &Path) -> bool {
    is_search_path_command(candidate) || candidate.exists()
}

/// Runs `-version` and returns stderr followed by stdout. The banner is
/// printed on stderr by every JVM we know of, stdout is kept for odd
/// wrappers.
fn capture_version_banner(
    candidate: &Path,
    timeout: Option<Duration>,
) -> Result<String, ProbeFailure> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let output = runtime.block_on(run_version(candidate, timeout))?;

    if !output.status.success() {
        return Err(ProbeFailure::Exit(output.status));
    }

    Ok(format!(
        "{}\n{}",
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    ))
}

async fn run_version(
    candidate: &Path,
    timeout: Option<Duration>,
) -> Result<Output, ProbeFailure> {
    let mut command = Command::new(candidate);
    command.arg("-version").stdin(Stdio::null()).kill_on_drop(true);
    let run = command.output();

    // Dropping `run` on timeout kills the child; a grandchild holding the
    // pipes is not waited for.
    let output = match timeout {
        Some(limit) => tokio::time::timeout(limit, run)
            .await
            .map_err(|_| ProbeFailure::TimedOut(limit))??,
        None => run.await?,
    };
    Ok(output)
}
