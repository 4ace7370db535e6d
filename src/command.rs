use std::ffi::{OsStr, OsString};
use std::io::ErrorKind;
use std::process::Command;

use anyhow::{anyhow, bail, Result};
use cfg_if::cfg_if;

use crate::environment::EnvironmentList;
use crate::signal::pass_control_to_child;

/// Run `cmd` to completion with `env` layered over the inherited process
/// environment. A directory-provided variable wins over an inherited one of
/// the same name. stdin/stdout/stderr are passed through to the child.
pub fn run(cmd: &[OsString], env: &EnvironmentList) -> Result<()> {
    let (exe, args) = match cmd.split_first() {
        Some(split) => split,
        None => bail!("command to run is empty"),
    };

    let mut command = create_command(exe);
    command.args(args);
    command.envs(env.iter());

    pass_control_to_child();

    let status = command.status().map_err(|err| match err.kind() {
        ErrorKind::NotFound => anyhow!("command not found: {:?}", exe),
        _ => anyhow!("could not run {:?}: {}", exe, err),
    })?;

    if !status.success() {
        bail!("command {:?} failed: {}", exe, status);
    }

    Ok(())
}

cfg_if! {
    if #[cfg(windows)] {
        // Batch scripts only resolve when launched through cmd.exe
        fn create_command<E: AsRef<OsStr>>(exe: E) -> Command {
            let mut command = Command::new("cmd");
            command.arg("/C").arg(exe.as_ref());
            command
        }
    } else {
        fn create_command<E: AsRef<OsStr>>(exe: E) -> Command {
            Command::new(exe.as_ref())
        }
    }
}
