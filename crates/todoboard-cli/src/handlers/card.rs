use crate::cli::{
    CardAction, CardAttachArgs, CardChecklistArgs, CardCommentArgs, CardCreateArgs,
    CardUpdateArgs,
};
use crate::context::CliContext;
use crate::output;
use anyhow::{anyhow, bail, Context};
use chrono::{DateTime, NaiveDate, Utc};
use todoboard_domain::commands::{
    AddAttachment, AddChecklist, AddChecklistItem, AddComment, CardLocation, ChangeCardStatus,
    CreateCard, DeleteAttachment, DeleteCard, DeleteComment, MoveCard, ToggleCardLabel,
    ToggleChecklistItem, UpdateCard,
};
use todoboard_domain::{CardPriority, CardStatus, CardUpdate, FieldUpdate};

pub fn handle(ctx: &mut CliContext, action: CardAction) -> anyhow::Result<()> {
    match action {
        CardAction::Create(args) => handle_create(ctx, args)?,
        CardAction::Get(target) => {
            output::output_success(ctx.card_view(target.board, &target.card)?);
        }
        CardAction::Update(args) => {
            let updates = build_card_update(&args).map_err(|e| anyhow!(e))?;
            if updates.is_empty() {
                bail!("Nothing to update");
            }
            let location = ctx.locate(args.target.board, &args.target.card)?;
            ctx.execute(Box::new(UpdateCard {
                board_id: location.board_id.clone(),
                list_id: location.list_id,
                card_id: location.card_id.clone(),
                updates,
            }))?;
            output::output_success(ctx.card_view(Some(location.board_id), &location.card_id)?);
        }
        CardAction::Move { target, to, index } => {
            let location = ctx.locate(target.board, &target.card)?;
            ctx.require_list(&location.board_id, &to)?;
            ctx.execute(Box::new(MoveCard {
                board_id: location.board_id.clone(),
                source_list_id: location.list_id,
                destination_list_id: to,
                destination_index: index.unwrap_or(usize::MAX),
                card_id: location.card_id.clone(),
            }))?;
            output::output_success(ctx.card_view(Some(location.board_id), &location.card_id)?);
        }
        CardAction::Delete(target) => {
            let location = ctx.locate(target.board, &target.card)?;
            ctx.execute(Box::new(DeleteCard {
                board_id: location.board_id,
                list_id: location.list_id,
                card_id: location.card_id.clone(),
            }))?;
            output::output_success(serde_json::json!({ "deleted": location.card_id }));
        }
        CardAction::Status { target, status } => {
            let status: CardStatus = status.parse().map_err(|e: String| anyhow!(e))?;
            let location = ctx.locate(target.board, &target.card)?;
            ctx.execute(Box::new(ChangeCardStatus {
                board_id: location.board_id.clone(),
                list_id: location.list_id,
                card_id: location.card_id.clone(),
                status,
            }))?;
            output::output_success(ctx.card_view(Some(location.board_id), &location.card_id)?);
        }
        CardAction::Label { target, label } => {
            if ctx.manager().state().label(&label).is_none() {
                bail!("Label not found: {}", label);
            }
            let location = ctx.locate(target.board, &target.card)?;
            ctx.execute(Box::new(ToggleCardLabel {
                card: location.clone(),
                label_id: label,
            }))?;
            output::output_success(ctx.card_view(Some(location.board_id), &location.card_id)?);
        }
        CardAction::Comment(args) => handle_comment(ctx, args)?,
        CardAction::Attach(args) => handle_attach(ctx, args)?,
        CardAction::Checklist(args) => handle_checklist(ctx, args)?,
        CardAction::Check {
            target,
            checklist,
            item,
        } => {
            let location = ctx.locate(target.board, &target.card)?;
            let outcome = ctx.execute(Box::new(ToggleChecklistItem {
                card: location.clone(),
                checklist_id: checklist,
                item_id: item.clone(),
            }))?;
            if !outcome.is_applied() {
                bail!("Checklist item not found: {}", item);
            }
            output_card(ctx, &location)?;
        }
    }
    Ok(())
}

fn handle_create(ctx: &mut CliContext, args: CardCreateArgs) -> anyhow::Result<()> {
    let board_id = ctx.board_id(args.board.clone())?;
    ctx.require_list(&board_id, &args.list)?;
    let updates = build_card_update_from_create(&args).map_err(|e| anyhow!(e))?;

    ctx.execute(Box::new(CreateCard {
        board_id: board_id.clone(),
        list_id: args.list.clone(),
        title: args.title,
    }))?;
    let card_id = ctx
        .board(&board_id)?
        .list(&args.list)
        .and_then(|l| l.cards.last())
        .map(|c| c.id.clone())
        .context("Card was not created")?;

    if !updates.is_empty() {
        ctx.execute(Box::new(UpdateCard {
            board_id: board_id.clone(),
            list_id: args.list,
            card_id: card_id.clone(),
            updates,
        }))?;
    }
    output::output_success(ctx.card_view(Some(board_id), &card_id)?);
    Ok(())
}

fn handle_comment(ctx: &mut CliContext, args: CardCommentArgs) -> anyhow::Result<()> {
    let location = ctx.locate(args.target.board, &args.target.card)?;
    if let Some(text) = args.text {
        let outcome = ctx.execute(Box::new(AddComment {
            card: location.clone(),
            text,
        }))?;
        if !outcome.is_applied() {
            bail!("Comment text is empty");
        }
    } else if let Some(comment_id) = args.delete {
        let outcome = ctx.execute(Box::new(DeleteComment {
            card: location.clone(),
            comment_id: comment_id.clone(),
        }))?;
        if !outcome.is_applied() {
            bail!("Comment not found: {}", comment_id);
        }
    }
    output_card(ctx, &location)
}

fn handle_attach(ctx: &mut CliContext, args: CardAttachArgs) -> anyhow::Result<()> {
    let location = ctx.locate(args.target.board, &args.target.card)?;
    if let Some(url) = args.url {
        let name = args.name.unwrap_or_else(|| attachment_name(&url));
        let outcome = ctx.execute(Box::new(AddAttachment {
            card: location.clone(),
            name,
            url,
        }))?;
        if !outcome.is_applied() {
            bail!("Attachment name and url must not be empty");
        }
    } else if let Some(attachment_id) = args.delete {
        let outcome = ctx.execute(Box::new(DeleteAttachment {
            card: location.clone(),
            attachment_id: attachment_id.clone(),
        }))?;
        if !outcome.is_applied() {
            bail!("Attachment not found: {}", attachment_id);
        }
    }
    output_card(ctx, &location)
}

fn handle_checklist(ctx: &mut CliContext, args: CardChecklistArgs) -> anyhow::Result<()> {
    let location = ctx.locate(args.target.board, &args.target.card)?;
    if let Some(title) = args.title {
        let outcome = ctx.execute(Box::new(AddChecklist {
            card: location.clone(),
            title,
        }))?;
        if !outcome.is_applied() {
            bail!("Card not found: {}", location.card_id);
        }
    } else if let (Some(checklist_id), Some(text)) = (args.checklist, args.item) {
        let outcome = ctx.execute(Box::new(AddChecklistItem {
            card: location.clone(),
            checklist_id: checklist_id.clone(),
            text,
        }))?;
        if !outcome.is_applied() {
            bail!("Checklist not found: {}", checklist_id);
        }
    }
    output_card(ctx, &location)
}

fn output_card(ctx: &CliContext, location: &CardLocation) -> anyhow::Result<()> {
    output::output_success(ctx.card_view(Some(location.board_id.clone()), &location.card_id)?);
    Ok(())
}

/// Last path segment of the url, or the url itself.
fn attachment_name(url: &str) -> String {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or(url)
        .to_string()
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (midnight UTC).
fn parse_date(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| format!("Invalid date '{}': use YYYY-MM-DD or RFC 3339", raw))
}

fn parse_priority(raw: &str) -> Result<FieldUpdate<CardPriority>, String> {
    if raw.eq_ignore_ascii_case("none") {
        return Ok(FieldUpdate::Clear);
    }
    raw.parse().map(FieldUpdate::Set)
}

fn build_card_update_from_create(args: &CardCreateArgs) -> Result<CardUpdate, String> {
    let mut updates = CardUpdate {
        description: args.description.clone(),
        ..Default::default()
    };
    if let Some(ref priority) = args.priority {
        updates.priority = parse_priority(priority)?;
    }
    if let Some(ref due) = args.due_date {
        updates.due_date = FieldUpdate::Set(parse_date(due)?);
    }
    Ok(updates)
}

fn build_card_update(args: &CardUpdateArgs) -> Result<CardUpdate, String> {
    let mut updates = CardUpdate {
        title: args.title.clone(),
        description: args.description.clone(),
        completed: args.completed,
        ..Default::default()
    };
    if let Some(ref priority) = args.priority {
        updates.priority = parse_priority(priority)?;
    }
    updates.due_date = if args.clear_due_date {
        FieldUpdate::Clear
    } else {
        match args.due_date {
            Some(ref due) => FieldUpdate::Set(parse_date(due)?),
            None => FieldUpdate::NoChange,
        }
    };
    updates.start_date = if args.clear_start_date {
        FieldUpdate::Clear
    } else {
        match args.start_date {
            Some(ref start) => FieldUpdate::Set(parse_date(start)?),
            None => FieldUpdate::NoChange,
        }
    };
    Ok(updates)
}
