use crate::cli::CliContext;
use crate::constants;
use crate::core::renewal;
use crate::util::privilege;
use tracing::{error, info};

pub fn run(ctx: &CliContext) -> u8 {
    privilege::warn_unless_root("renewal");
    let outcome = match renewal::renew(&ctx.config, &ctx.paths, &ctx.settings) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{:#}", e);
            return constants::EXIT_RUNTIME_ERROR;
        }
    };

    ctx.forward_summary(&outcome.to_json());
    if outcome.succeeded() {
        info!("renewal finished");
        constants::EXIT_OK
    } else {
        error!(log = %ctx.paths.renewal_log.display(), "renewal failed");
        constants::EXIT_RENEWAL_FAILED
    }
}
