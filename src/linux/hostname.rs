use crate::error::HostnameError;

use nix::unistd;

/// `set_hostname` updates the system hostname to the given string.
/// The change is in-kernel session state that every process on the host
/// observes immediately; it does not survive a reboot.
/// For more information, see the [sethostname(2)](https://man7.org/linux/man-pages/man2/sethostname.2.html)
/// man page.
pub fn set_hostname(hostname: &str) -> Result<(), HostnameError> {
    unistd::sethostname(hostname)?;
    Ok(())
}
