use super::HandlerContext;
use crate::presentation::view_models::RpoViewModel;
use anyhow::Result;
use drsla_engine::{format_duration, rpo_status};

pub fn handle(current_minutes: f64, target_minutes: f64, ctx: &HandlerContext) -> Result<()> {
    if !current_minutes.is_finite() || !target_minutes.is_finite() {
        anyhow::bail!("Minute counts must be finite numbers");
    }

    let rpo = rpo_status(current_minutes, target_minutes);
    tracing::debug!(current_minutes, target_minutes, status = %rpo.status, "classified lag");

    ctx.render(RpoViewModel {
        current_minutes,
        target_minutes,
        rpo,
        current: format_duration(current_minutes),
        target: format_duration(target_minutes),
        overdue: format_duration(rpo.overdue_minutes),
    })
}
