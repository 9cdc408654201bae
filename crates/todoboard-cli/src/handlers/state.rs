use crate::context::CliContext;
use crate::output;
use anyhow::bail;
use todoboard_domain::commands::{ResetState, SeedSampleCard};

pub fn reset(ctx: &mut CliContext) -> anyhow::Result<()> {
    ctx.execute(Box::new(ResetState))?;
    output::output_success(ctx.manager().state());
    Ok(())
}

pub fn seed(ctx: &mut CliContext) -> anyhow::Result<()> {
    let board_id = ctx.board_id(None)?;
    if !ctx.execute(Box::new(SeedSampleCard))?.is_applied() {
        bail!("Board {} has no list for the sample card", board_id);
    }
    output::output_success(ctx.board_view(&board_id)?);
    Ok(())
}
