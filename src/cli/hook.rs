use crate::cli::CliContext;
use crate::core::hook::Hook;
use crate::util::git::Git;
use crate::util::privilege;
use crate::util::process::SystemRunner;
use crate::util::systemd::Systemctl;
use tracing::{error, info};

pub fn run(ctx: &CliContext) -> u8 {
    privilege::warn_unless_root("hook");
    let runner = SystemRunner;
    let hook = Hook {
        git: Git::new(&runner, &ctx.config.tools.git),
        systemctl: Systemctl::new(&runner, &ctx.config.tools.systemctl),
        paths: &ctx.paths,
        console_service: &ctx.config.console.service,
    };

    let report = hook.run(&ctx.settings);
    ctx.forward_summary(&report.to_json());
    if report.succeeded() {
        info!("certificate propagation complete");
    } else {
        error!(exit_code = report.exit_code, "certificate propagation failed");
    }
    report.exit_code
}
