use clap::Parser;

use crate::error::HostnameError;
use crate::hostname::{self, SetHostname};

#[derive(Parser, Debug)]
#[clap(version, about)]
pub struct Cli {
    #[arg(value_name = "HOSTNAME")]
    pub hostname: Vec<String>,
}

/// `run` selects the target hostname from the argument list and asks the
/// facility to adopt it. The syscall is attempted exactly once; the outcome
/// is whatever the facility reports.
pub fn run(cli: &Cli, facility: &impl SetHostname) -> Result<(), HostnameError> {
    let hostname = hostname::select_hostname(&cli.hostname);
    facility.set_hostname(hostname)
}
