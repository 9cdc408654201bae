use crate::cli::DragArgs;
use crate::context::CliContext;
use crate::output;
use todoboard_domain::{DragCoordinator, DropTarget};

/// Replay one drag gesture: start on the card, hover the target, release.
pub fn handle(ctx: &mut CliContext, args: DragArgs) -> anyhow::Result<()> {
    let board_id = ctx.board_id(args.board)?;
    let from = match args.from {
        Some(list_id) => list_id,
        None => ctx.locate(Some(board_id.clone()), &args.card)?.list_id,
    };
    let target = match (args.onto_card, args.onto_list) {
        (Some(card_id), _) => Some(DropTarget::Card(card_id)),
        (None, Some(list_id)) => Some(DropTarget::List(list_id)),
        (None, None) => None,
    };

    let board = ctx.board(&board_id)?.clone();
    let mut drag = DragCoordinator::new(board_id.clone()).with_same_list_reorder(args.reorder);
    drag.start(&board, args.card.as_str(), from.as_str());
    if let Some(ref target) = target {
        drag.over(&board, target);
    }

    let Some(commit) = drag.end(&board, target.as_ref(), ctx.manager().status_policy()) else {
        output::output_success(serde_json::json!({ "moved": false, "card_id": args.card }));
        return Ok(());
    };

    let failures = ctx.manager().save_failures();
    let destination_list = commit.destination_list_id.clone();
    let destination_index = commit.destination_index;
    ctx.manager_mut().finish_drag(commit);
    ctx.check_saved(failures)?;

    output::output_success(serde_json::json!({
        "moved": true,
        "card_id": args.card,
        "from": from,
        "to": destination_list,
        "index": destination_index,
        "card": ctx.card_view(Some(board_id), &args.card)?,
    }));
    Ok(())
}
