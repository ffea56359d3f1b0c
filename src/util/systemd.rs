use crate::util::process::{run_checked, Invocation, Runner};
use anyhow::{Context, Result};

/// Service-manager operations used after a renewal.
pub struct Systemctl<'a> {
    runner: &'a dyn Runner,
    program: &'a str,
}

impl<'a> Systemctl<'a> {
    pub fn new(runner: &'a dyn Runner, program: &'a str) -> Self {
        Self { runner, program }
    }

    /// `systemctl is-active --quiet <unit>`; any non-zero exit means not active.
    pub fn is_active(&self, unit: &str) -> Result<bool> {
        let inv = Invocation::new(self.program).args(["is-active", "--quiet", unit]);
        let out = self
            .runner
            .run(&inv)
            .with_context(|| format!("run {}", inv))?;
        Ok(out.success())
    }

    pub fn restart(&self, unit: &str) -> Result<()> {
        let inv = Invocation::new(self.program).args(["restart", unit]);
        run_checked(self.runner, &inv).with_context(|| format!("systemctl restart {}", unit))?;
        Ok(())
    }

    pub fn reload(&self, unit: &str) -> Result<()> {
        let inv = Invocation::new(self.program).args(["reload", unit]);
        run_checked(self.runner, &inv).with_context(|| format!("systemctl reload {}", unit))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::process::testing::ScriptedRunner;
    use crate::util::process::Completed;

    #[test]
    fn test_is_active_maps_exit_code() {
        let runner = ScriptedRunner::new(|inv| {
            Ok(Completed::exit(if inv.has_arg("nginx") { 0 } else { 3 }))
        });
        let systemctl = Systemctl::new(&runner, "systemctl");
        assert!(systemctl.is_active("nginx").unwrap());
        assert!(!systemctl.is_active("apache2").unwrap());
    }

    #[test]
    fn test_reload_failure_carries_unit() {
        let runner = ScriptedRunner::new(|_| Ok(Completed::exit(1).with_stderr("Job failed")));
        let err = Systemctl::new(&runner, "systemctl").reload("nginx").unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.contains("systemctl reload nginx"));
        assert!(msg.contains("Job failed"));
    }
}
