//! Then steps for task CRUD BDD scenarios.

use super::world::TaskApiWorld;
use chrono::Duration;
use rstest_bdd_macros::then;

#[then("the response status is {status:u16}")]
fn response_status_is(world: &TaskApiWorld, status: u16) -> Result<(), eyre::Report> {
    let actual = world
        .last_status
        .ok_or_else(|| eyre::eyre!("no request was sent in this scenario"))?;
    if actual.as_u16() != status {
        return Err(eyre::eyre!(
            "expected status {status}, got {actual} with body {:?}",
            world.last_body
        ));
    }
    Ok(())
}

#[then("the response contains a generated id and a current creation date")]
fn response_has_generated_fields(world: &TaskApiWorld) -> Result<(), eyre::Report> {
    let task = world.last_task()?;
    let (start, end) = world
        .create_window
        .ok_or_else(|| eyre::eyre!("missing create window in scenario world"))?;

    if task.id.is_nil() {
        return Err(eyre::eyre!("expected a generated task id"));
    }
    // Stored timestamps are truncated to microseconds.
    if task.creation_date + Duration::microseconds(1) < start || task.creation_date > end {
        return Err(eyre::eyre!(
            "creation date {} outside call window {start}..{end}",
            task.creation_date
        ));
    }
    if Some(task.expiration_date) != world.requested_expiration {
        return Err(eyre::eyre!("expiration date differs from the request"));
    }
    Ok(())
}

#[then("the response matches the created task")]
fn response_matches_created_task(world: &TaskApiWorld) -> Result<(), eyre::Report> {
    let fetched = world.last_task()?;
    if world.created_task.as_ref() != Some(&fetched) {
        return Err(eyre::eyre!(
            "fetched task {fetched:?} differs from created task {:?}",
            world.created_task
        ));
    }
    Ok(())
}

#[then("the expiration date is updated and the creation date is unchanged")]
fn expiration_updated_creation_kept(world: &TaskApiWorld) -> Result<(), eyre::Report> {
    let updated = world.last_task()?;
    let created = world
        .created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    if updated.id != created.id {
        return Err(eyre::eyre!("task id changed on update"));
    }
    if updated.creation_date != created.creation_date {
        return Err(eyre::eyre!("creation date changed on update"));
    }
    if Some(updated.expiration_date) != world.requested_expiration {
        return Err(eyre::eyre!("expiration date was not updated"));
    }
    Ok(())
}
