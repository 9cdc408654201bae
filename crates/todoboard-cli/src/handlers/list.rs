use crate::cli::ListAction;
use crate::context::CliContext;
use crate::output;
use anyhow::Context;
use todoboard_domain::commands::CreateList;

pub fn handle(ctx: &mut CliContext, action: ListAction) -> anyhow::Result<()> {
    match action {
        ListAction::Create { board, title } => {
            let board_id = ctx.board_id(board)?;
            ctx.execute(Box::new(CreateList {
                board_id: board_id.clone(),
                title,
            }))?;
            let list = ctx
                .board(&board_id)?
                .lists
                .last()
                .context("List was not created")?;
            output::output_success(serde_json::json!({
                "board_id": board_id,
                "id": list.id,
                "title": list.title,
            }));
        }
    }
    Ok(())
}
