use crate::error::HostnameError;
use crate::linux;

/// Hostname applied when the caller doesn't supply exactly one name.
pub const DEFAULT_HOSTNAME: &str = "neofetch-linux";

/// `SetHostname` is the "set system hostname" facility the tool depends on.
/// The kernel-backed implementation mutates a host-wide resource and needs
/// `CAP_SYS_ADMIN`, so tests substitute their own implementation.
pub trait SetHostname {
    fn set_hostname(&self, hostname: &str) -> Result<(), HostnameError>;
}

/// `Kernel` applies the hostname through the sethostname(2) system call.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kernel;

impl SetHostname for Kernel {
    fn set_hostname(&self, hostname: &str) -> Result<(), HostnameError> {
        linux::hostname::set_hostname(hostname)
    }
}

/// `select_hostname` picks the hostname to apply: the positional argument
/// when exactly one is given, [DEFAULT_HOSTNAME] otherwise. An invocation
/// with two or more names falls back to the default instead of raising a
/// usage error.
pub fn select_hostname(args: &[String]) -> &str {
    match args {
        [hostname] => hostname.as_str(),
        _ => DEFAULT_HOSTNAME,
    }
}
