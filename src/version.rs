//! Version and build information.

use std::fmt;

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub arch: &'static str,
    pub rustc_version: Option<&'static str>,
    /// TLS backend compiled into the HTTP client
    pub tls: &'static str,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mhcheck {}", self.version)?;

        if let Some(commit) = self.commit {
            writeln!(f, "Commit: {}", commit)?;
        }
        if let Some(date) = self.build_date {
            writeln!(f, "Built: {}", date)?;
        }
        writeln!(f, "Arch: {}", self.arch)?;
        write!(f, "TLS: {}", self.tls)?;
        if let Some(rustc) = self.rustc_version {
            write!(f, "\nRustc: {}", rustc)?;
        }

        Ok(())
    }
}

fn tls_backend() -> &'static str {
    if cfg!(feature = "rustls") {
        "rustls"
    } else if cfg!(feature = "native-tls") {
        "native-tls"
    } else {
        "none"
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("MHCHECK_GIT_HASH"),
        build_date: option_env!("MHCHECK_BUILD_DATE"),
        arch: std::env::consts::ARCH,
        rustc_version: option_env!("MHCHECK_RUSTC_VERSION"),
        tls: tls_backend(),
    }
}
