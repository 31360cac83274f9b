//! Build metadata embedded at compile time via build.rs.

/// Version, commit and toolchain identifiers for the running binary.
///
/// Fixed for the life of the process and shared by every request without
/// synchronization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    pub build_time: &'static str,
    pub git_commit: &'static str,
    pub runtime_version: &'static str,
}

impl BuildInfo {
    pub const fn current() -> Self {
        Self {
            version: env!("APP_VERSION"),
            build_time: env!("BUILD_TIME"),
            git_commit: env!("GIT_COMMIT"),
            runtime_version: env!("RUNTIME_VERSION"),
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::current()
    }
}
