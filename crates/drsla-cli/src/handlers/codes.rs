use super::HandlerContext;
use crate::presentation::view_models::CodeListViewModel;
use crate::types::CategoryFilter;
use anyhow::Result;
use drsla_engine::all_definitions;
use drsla_types::ErrorCategory;

pub fn handle(category: Option<CategoryFilter>, ctx: &HandlerContext) -> Result<()> {
    let category = category.map(ErrorCategory::from);
    let definitions = all_definitions()
        .filter(|def| category.is_none_or(|c| def.category == c))
        .collect();

    ctx.render(CodeListViewModel { definitions })
}
