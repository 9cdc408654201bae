use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::tempdir;

fn todoboard(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todoboard").unwrap();
    cmd.arg("--dir")
        .arg(dir)
        .env_remove("TODOBOARD_DEBUG_LOG")
        .env_remove("RUST_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn run_ok(dir: &Path, args: &[&str]) -> Value {
    let output = todoboard(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert!(json["success"].as_bool().unwrap());
    json
}

fn create_card(dir: &Path, list: &str, title: &str) -> String {
    let json = run_ok(dir, &["card", "create", "--list", list, "--title", title]);
    json["data"]["card"]["id"].as_str().unwrap().to_string()
}

fn list_cards(board: &Value, list_id: &str) -> Vec<String> {
    board["data"]["lists"]
        .as_array()
        .unwrap()
        .iter()
        .find(|l| l["id"] == list_id)
        .unwrap()["cards"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_str().unwrap().to_string())
        .collect()
}

mod board_tests {
    use super::*;

    #[test]
    fn test_fresh_directory_shows_default_board() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["board", "show"]);

        assert_eq!(json["data"]["id"], "board-1");
        assert_eq!(json["data"]["title"], "My Project");
        assert_eq!(json["data"]["current"], true);
        let titles: Vec<&str> = json["data"]["lists"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["title"].as_str().unwrap())
            .collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Completed"]);
    }

    #[test]
    fn test_board_create_and_select() {
        let dir = tempdir().unwrap();
        let created = run_ok(dir.path(), &["board", "create", "--title", "Side project"]);
        let board_id = created["data"]["id"].as_str().unwrap().to_string();
        assert!(board_id.starts_with("board-"));
        assert_eq!(created["data"]["lists"].as_array().unwrap().len(), 3);

        run_ok(dir.path(), &["board", "select", "--id", &board_id]);
        let listed = run_ok(dir.path(), &["board", "list"]);
        assert_eq!(listed["data"]["count"], 2);
        let current: Vec<&Value> = listed["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .filter(|b| b["current"] == true)
            .collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0]["id"], board_id.as_str());
    }

    #[test]
    fn test_select_unknown_board_fails() {
        let dir = tempdir().unwrap();
        todoboard(dir.path())
            .args(["board", "select", "--id", "board-404"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Board not found: board-404"));
    }

    #[test]
    fn test_list_create() {
        let dir = tempdir().unwrap();
        let json = run_ok(dir.path(), &["list", "create", "--title", "Blocked"]);
        assert_eq!(json["data"]["title"], "Blocked");
        assert!(json["data"]["id"].as_str().unwrap().starts_with("list-"));
    }
}

mod card_tests {
    use super::*;

    #[test]
    fn test_create_update_move_scenario() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "Write report");

        let got = run_ok(dir.path(), &["card", "get", "--card", &card_id]);
        assert_eq!(got["data"]["card"]["title"], "Write report");
        assert_eq!(got["data"]["card"]["completed"], false);
        assert_eq!(got["data"]["card"]["priority"], Value::Null);

        let updated = run_ok(
            dir.path(),
            &["card", "update", "--card", &card_id, "--priority", "high"],
        );
        assert_eq!(updated["data"]["card"]["priority"], "high");

        let moved = run_ok(
            dir.path(),
            &["card", "move", "--card", &card_id, "--to", "3", "--index", "0"],
        );
        assert_eq!(moved["data"]["list_id"], "3");
        // A plain move does not apply the status rule.
        assert_eq!(moved["data"]["card"]["completed"], false);

        let board = run_ok(dir.path(), &["board", "show"]);
        assert!(list_cards(&board, "1").is_empty());
        assert_eq!(list_cards(&board, "3"), vec![card_id]);
    }

    #[test]
    fn test_create_with_details() {
        let dir = tempdir().unwrap();
        let json = run_ok(
            dir.path(),
            &[
                "card",
                "create",
                "--list",
                "2",
                "--title",
                "Detailed",
                "--description",
                "Some words",
                "--priority",
                "low",
                "--due-date",
                "2030-01-15",
            ],
        );
        assert_eq!(json["data"]["card"]["description"], "Some words");
        assert_eq!(json["data"]["card"]["priority"], "low");
        assert_eq!(json["data"]["summary"]["dueStatus"], "on-track");
        assert_eq!(json["data"]["summary"]["dueLabel"], "15 Jan");
        assert_eq!(json["data"]["status"], "in-progress");
    }

    #[test]
    fn test_update_clears_fields() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "Clear me");
        run_ok(
            dir.path(),
            &["card", "update", "--card", &card_id, "--due-date", "2020-01-01", "--priority", "medium"],
        );
        let overdue = run_ok(dir.path(), &["card", "get", "--card", &card_id]);
        assert_eq!(overdue["data"]["summary"]["dueStatus"], "overdue");

        let cleared = run_ok(
            dir.path(),
            &["card", "update", "--card", &card_id, "--clear-due-date", "--priority", "none"],
        );
        assert_eq!(cleared["data"]["card"]["dueDate"], Value::Null);
        assert_eq!(cleared["data"]["card"]["priority"], Value::Null);
        assert_eq!(cleared["data"]["summary"]["dueStatus"], "no-due-date");
    }

    #[test]
    fn test_update_without_fields_fails() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "Untouched");
        todoboard(dir.path())
            .args(["card", "update", "--card", &card_id])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Nothing to update"));
    }

    #[test]
    fn test_delete_twice() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "Short lived");

        let json = run_ok(dir.path(), &["card", "delete", "--card", &card_id]);
        assert_eq!(json["data"]["deleted"], card_id.as_str());

        todoboard(dir.path())
            .args(["card", "delete", "--card", &card_id])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Card not found"));
    }

    #[test]
    fn test_status_moves_between_lists() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "Finish me");

        let done = run_ok(
            dir.path(),
            &["card", "status", "--card", &card_id, "--status", "completed"],
        );
        assert_eq!(done["data"]["list_id"], "3");
        assert_eq!(done["data"]["card"]["completed"], true);
        assert_eq!(done["data"]["status"], "completed");

        let reopened = run_ok(
            dir.path(),
            &["card", "status", "--card", &card_id, "--status", "todo"],
        );
        assert_eq!(reopened["data"]["list_id"], "1");
        assert_eq!(reopened["data"]["card"]["completed"], false);
    }

    #[test]
    fn test_label_toggle() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "Labelled");

        let on = run_ok(dir.path(), &["card", "label", "--card", &card_id, "--label", "4"]);
        assert_eq!(on["data"]["summary"]["labels"][0]["name"], "Bug");

        let off = run_ok(dir.path(), &["card", "label", "--card", &card_id, "--label", "4"]);
        assert!(off["data"]["summary"]["labels"].as_array().unwrap().is_empty());

        todoboard(dir.path())
            .args(["card", "label", "--card", &card_id, "--label", "99"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Label not found"));
    }

    #[test]
    fn test_comments() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "Discussed");

        let json = run_ok(
            dir.path(),
            &["card", "comment", "--card", &card_id, "--text", "  looks good  "],
        );
        let comment = &json["data"]["card"]["comments"][0];
        assert_eq!(comment["text"], "looks good");
        let comment_id = comment["id"].as_str().unwrap().to_string();

        todoboard(dir.path())
            .args(["card", "comment", "--card", &card_id, "--text", "   "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Comment text is empty"));

        let json = run_ok(
            dir.path(),
            &["card", "comment", "--card", &card_id, "--delete", &comment_id],
        );
        assert!(json["data"]["card"]["comments"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_attachments_infer_kind() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "With files");

        let json = run_ok(
            dir.path(),
            &["card", "attach", "--card", &card_id, "--url", "https://example.com/shot.JPG"],
        );
        let attachment = &json["data"]["card"]["attachments"][0];
        assert_eq!(attachment["type"], "image");
        assert_eq!(attachment["name"], "shot.JPG");

        let json = run_ok(
            dir.path(),
            &[
                "card",
                "attach",
                "--card",
                &card_id,
                "--name",
                "Docs",
                "--url",
                "https://example.com/docs",
            ],
        );
        assert_eq!(json["data"]["card"]["attachments"][1]["type"], "link");
        assert_eq!(json["data"]["summary"]["attachmentCount"], 2);
    }

    #[test]
    fn test_checklist_progress() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "Plan");

        run_ok(dir.path(), &["card", "checklist", "--card", &card_id, "--title", "Empty"]);
        let json = run_ok(dir.path(), &["card", "checklist", "--card", &card_id, "--title", "Steps"]);
        let checklist_id = json["data"]["card"]["checklists"][1]["id"]
            .as_str()
            .unwrap()
            .to_string();

        let mut item_ids = Vec::new();
        for text in ["one", "two", "three"] {
            let json = run_ok(
                dir.path(),
                &[
                    "card",
                    "checklist",
                    "--card",
                    &card_id,
                    "--checklist",
                    &checklist_id,
                    "--item",
                    text,
                ],
            );
            let items = json["data"]["card"]["checklists"][1]["items"].as_array().unwrap();
            item_ids.push(items.last().unwrap()["id"].as_str().unwrap().to_string());
        }

        for item_id in &item_ids[..2] {
            run_ok(
                dir.path(),
                &[
                    "card",
                    "check",
                    "--card",
                    &card_id,
                    "--checklist",
                    &checklist_id,
                    "--item",
                    item_id,
                ],
            );
        }

        let json = run_ok(dir.path(), &["card", "get", "--card", &card_id]);
        let progress = &json["data"]["summary"]["checklist"];
        assert_eq!(progress["completed"], 2);
        assert_eq!(progress["total"], 3);
        assert_eq!(progress["percentage"], 67);
    }

    #[test]
    fn test_unknown_card_fails() {
        let dir = tempdir().unwrap();
        todoboard(dir.path())
            .args(["card", "get", "--card", "card-404"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("\"success\":false"));
    }
}

mod drag_tests {
    use super::*;

    #[test]
    fn test_drag_onto_card_in_completed_list() {
        let dir = tempdir().unwrap();
        let dragged = create_card(dir.path(), "1", "Drag me");
        let anchor = create_card(dir.path(), "3", "Done already");

        let json = run_ok(
            dir.path(),
            &["drag", "--card", &dragged, "--onto-card", &anchor],
        );
        assert_eq!(json["data"]["moved"], true);
        assert_eq!(json["data"]["to"], "3");
        assert_eq!(json["data"]["index"], 0);
        assert_eq!(json["data"]["card"]["card"]["completed"], true);

        let board = run_ok(dir.path(), &["board", "show"]);
        assert_eq!(list_cards(&board, "3"), vec![dragged, anchor]);
    }

    #[test]
    fn test_drag_onto_list_appends() {
        let dir = tempdir().unwrap();
        let dragged = create_card(dir.path(), "3", "Reopen me");
        let existing = create_card(dir.path(), "2", "Busy");

        let json = run_ok(dir.path(), &["drag", "--card", &dragged, "--onto-list", "2"]);
        assert_eq!(json["data"]["index"], 1);
        assert_eq!(json["data"]["card"]["card"]["completed"], false);

        let board = run_ok(dir.path(), &["board", "show"]);
        assert_eq!(list_cards(&board, "2"), vec![existing, dragged]);
    }

    #[test]
    fn test_drag_within_list_is_ignored_unless_reordering() {
        let dir = tempdir().unwrap();
        let first = create_card(dir.path(), "1", "First");
        let second = create_card(dir.path(), "1", "Second");

        let json = run_ok(dir.path(), &["drag", "--card", &second, "--onto-card", &first]);
        assert_eq!(json["data"]["moved"], false);

        let json = run_ok(
            dir.path(),
            &["drag", "--card", &second, "--onto-card", &first, "--reorder"],
        );
        assert_eq!(json["data"]["moved"], true);
        let board = run_ok(dir.path(), &["board", "show"]);
        assert_eq!(list_cards(&board, "1"), vec![second, first]);
    }

    #[test]
    fn test_drag_without_target_aborts() {
        let dir = tempdir().unwrap();
        let card_id = create_card(dir.path(), "1", "Going nowhere");
        let json = run_ok(dir.path(), &["drag", "--card", &card_id]);
        assert_eq!(json["data"]["moved"], false);
    }
}

mod state_tests {
    use super::*;

    #[test]
    fn test_seed_and_reset() {
        let dir = tempdir().unwrap();
        let seeded = run_ok(dir.path(), &["seed"]);
        let sample = &seeded["data"]["lists"][0]["cards"][0];
        assert_eq!(sample["title"], "Create a sample task");
        assert_eq!(sample["priority"], "medium");
        assert_eq!(sample["labels"][0]["name"], "Design");
        assert_eq!(sample["checklist"]["total"], 2);
        assert_eq!(sample["dueStatus"], "on-track");

        let reset = run_ok(dir.path(), &["reset"]);
        assert_eq!(reset["data"]["boards"].as_array().unwrap().len(), 1);
        assert_eq!(reset["data"]["labels"].as_array().unwrap().len(), 6);
        assert_eq!(reset["data"]["selectedCard"], Value::Null);
        let board = run_ok(dir.path(), &["board", "show"]);
        assert!(list_cards(&board, "1").is_empty());
    }

    #[test]
    fn test_snapshot_file_written() {
        let dir = tempdir().unwrap();
        create_card(dir.path(), "1", "Saved");
        let raw = std::fs::read_to_string(dir.path().join("kanbanState.json")).unwrap();
        assert!(raw.contains("\"currentBoard\""));
        assert!(raw.contains("Saved"));
    }

    #[test]
    fn test_corrupt_snapshot_starts_fresh() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("kanbanState.json"), "not json").unwrap();
        let json = run_ok(dir.path(), &["board", "show"]);
        assert_eq!(json["data"]["id"], "board-1");
    }

    #[test]
    fn test_dir_from_environment() {
        let dir = tempdir().unwrap();
        let output = Command::cargo_bin("todoboard")
            .unwrap()
            .env("TODOBOARD_DIR", dir.path())
            .args(["card", "create", "--list", "2", "--title", "Via env"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json = parse_json_output(&output);
        assert_eq!(json["data"]["list_id"], "2");
        assert!(dir.path().join("kanbanState.json").exists());
    }

    #[test]
    fn test_completions() {
        let dir = tempdir().unwrap();
        todoboard(dir.path())
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("todoboard"));
    }
}
