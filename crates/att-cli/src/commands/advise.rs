//! Advise command implementation
//!
//! Uses the in-process rule-based advisor behind the same async boundary a
//! hosted advisor would use, so failures fall back to the standard message.

use tracing::info;

use att_accounting::{advice_or_fallback, AdviceRequest, AttendanceConfig, RuleBasedAdvisor};

use super::StateArgs;
use crate::Result;

/// Run the advise command
pub fn run(config: &AttendanceConfig, state: StateArgs) -> Result<()> {
    let request = AdviceRequest::new(state.state()?, config.settings.percentage);
    info!(?request, "requesting advice");

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let advice = runtime.block_on(advice_or_fallback(&RuleBasedAdvisor::default(), &request));
    println!("{advice}");
    Ok(())
}
