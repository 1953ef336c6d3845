use super::HandlerContext;
use crate::presentation::view_models::DurationViewModel;
use anyhow::Result;
use drsla_engine::format_duration;

pub fn handle(minutes: f64, ctx: &HandlerContext) -> Result<()> {
    if !minutes.is_finite() {
        anyhow::bail!("Minute counts must be finite numbers");
    }
    ctx.render(DurationViewModel {
        minutes,
        formatted: format_duration(minutes),
    })
}
