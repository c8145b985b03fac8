pub mod discovery;
pub mod env;
pub mod options;
pub mod paths;
pub mod probe;
pub mod registry;
pub mod sources;

#[cfg(test)]
pub(crate) mod testing;

pub use discovery::discover;
pub use discovery::find_java_installations;
pub use discovery::find_java_installations_async;
pub use discovery::find_java_installations_async_with;
pub use discovery::find_java_installations_with;
pub use env::{Environment, ProcessEnvironment, StaticEnvironment};
pub use options::DiscoveryOptions;
pub use paths::{executable_suffix, known_launcher_subpaths, Platform};
pub use probe::{parse_major_version, probe_java, CommandProbe, JavaProbe};
pub use registry::JavaInstallations;
