//! Integration tests for durable persistence through the directory store.

use eyre::{OptionExt, Result, ensure};

use tasklist::task_list::{adapters::fs::DirStateStore, services::TaskListStore};

#[test]
fn sessions_against_the_same_directory_share_state() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir
        .path()
        .to_str()
        .ok_or_eyre("temp dir path should be valid UTF-8")?;

    let mut first = TaskListStore::load(DirStateStore::open(path)?);
    first.submit("Buy milk")?;
    first.submit("Walk dog")?;

    let second = TaskListStore::load(DirStateStore::open(path)?);
    let labels: Vec<&str> = second
        .tasks()
        .iter()
        .map(|task| task.label().as_str())
        .collect();
    ensure!(
        labels == ["Buy milk", "Walk dog"],
        "the second session should see both tasks in order"
    );
    Ok(())
}

#[test]
fn corrupt_snapshot_file_degrades_to_an_empty_list() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir
        .path()
        .to_str()
        .ok_or_eyre("temp dir path should be valid UTF-8")?;
    std::fs::write(dir.path().join("tasks.json"), "{ not json")?;

    let mut store = TaskListStore::load(DirStateStore::open(path)?);
    ensure!(
        store.tasks().is_empty(),
        "the corrupt snapshot should degrade to an empty list"
    );

    // The next successful submission repairs the snapshot.
    store.submit("fresh start")?;
    let repaired = TaskListStore::load(DirStateStore::open(path)?);
    ensure!(
        repaired.tasks().len() == 1,
        "the next submission should repair the snapshot"
    );
    Ok(())
}
