use crate::cli::BoardAction;
use crate::context::CliContext;
use crate::output;
use anyhow::Context;
use todoboard_domain::commands::{CreateBoard, SelectBoard};

pub fn handle(ctx: &mut CliContext, action: BoardAction) -> anyhow::Result<()> {
    match action {
        BoardAction::Create { title } => {
            ctx.execute(Box::new(CreateBoard { title }))?;
            let board_id = ctx
                .manager()
                .state()
                .boards
                .last()
                .map(|b| b.id.clone())
                .context("Board was not created")?;
            output::output_success(ctx.board_view(&board_id)?);
        }
        BoardAction::List => {
            let state = ctx.manager().state();
            let boards = state
                .boards
                .iter()
                .map(|board| {
                    serde_json::json!({
                        "id": board.id,
                        "title": board.title,
                        "current": state.current_board.as_deref() == Some(board.id.as_str()),
                        "list_count": board.lists.len(),
                        "card_count": board.card_count(),
                    })
                })
                .collect();
            output::output_list::<serde_json::Value>(boards);
        }
        BoardAction::Select { id } => {
            let board_id = ctx.board_id(Some(id))?;
            ctx.execute(Box::new(SelectBoard {
                board_id: board_id.clone(),
            }))?;
            output::output_success(serde_json::json!({ "current_board": board_id }));
        }
        BoardAction::Show { id } => {
            let board_id = ctx.board_id(id)?;
            output::output_success(ctx.board_view(&board_id)?);
        }
    }
    Ok(())
}
