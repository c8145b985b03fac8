use std::path::Path;

use tracing::{debug, instrument};

use super::env::{Environment, JAVA_HOME_VAR, LOCAL_APP_DATA_VAR, PATH_VAR};
use super::paths::{known_launcher_subpaths, vanilla_launcher_roots, Platform};
use super::probe::JavaProbe;
use super::registry::JavaInstallations;

/// Everything a discovery source needs besides the registry it fills.
#[derive(Clone, Copy)]
pub struct DiscoveryContext<'a> {
    pub platform: Platform,
    pub env: &'a dyn Environment,
    pub probe: &'a dyn JavaProbe,
}

impl DiscoveryContext<'_> {
    fn test(&self, found: &mut JavaInstallations, dir: &Path) {
        found.test(dir, self.platform, self.probe);
    }
}

/// Every directory on `PATH`.
#[instrument(skip_all)]
pub fn check_path_env(found: &mut JavaInstallations, ctx: DiscoveryContext<'_>) {
    let Some(paths) = ctx.env.var_os(PATH_VAR) else {
        debug!("{} is not set, skipping", PATH_VAR);
        return;
    };

    for dir in std::env::split_paths(&paths) {
        ctx.test(found, &dir);
    }
}

/// Runtimes bundled by the vanilla Minecraft launcher. Windows only.
#[instrument(skip_all)]
pub fn check_vanilla_launchers(found: &mut JavaInstallations, ctx: DiscoveryContext<'_>) {
    if !ctx.platform.has_vanilla_launcher() {
        return;
    }

    let local_app_data = ctx.env.var_os(LOCAL_APP_DATA_VAR);
    if local_app_data.is_none() {
        debug!(
            "{} is not set, skipping the Store launcher cache",
            LOCAL_APP_DATA_VAR
        );
    }

    for launcher_root in vanilla_launcher_roots(local_app_data.as_deref()) {
        check_vanilla_launcher(found, ctx, &launcher_root);
    }
}

fn check_vanilla_launcher(found: &mut JavaInstallations, ctx: DiscoveryContext<'_>, root: &Path) {
    for runtime_dir in known_launcher_subpaths() {
        ctx.test(found, &root.join(runtime_dir));
    }
}

/// `$JAVA_HOME/bin`.
#[instrument(skip_all)]
pub fn check_java_home(found: &mut JavaInstallations, ctx: DiscoveryContext<'_>) {
    let Some(java_home) = ctx.env.var_os(JAVA_HOME_VAR).filter(|home| !home.is_empty()) else {
        debug!("{} is not set, skipping", JAVA_HOME_VAR);
        return;
    };

    ctx.test(found, &Path::new(&java_home).join("bin"));
}
