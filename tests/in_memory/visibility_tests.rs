//! Role-scoped lookup and listing through the lifecycle service.

use super::helpers::{
    TestService, analyst, analyst_id, bystander, client, north_manager, root, service,
    south_manager,
};
use rstest::rstest;
use zadachnik::access::domain::Region;
use zadachnik::task::domain::{TaskFilter, TaskStatus};
use zadachnik::workflow::{RejectionKind, TaskCommand, TaskDraft};

async fn seed(service: &TestService) -> eyre::Result<()> {
    let north = service
        .create(&client(), TaskDraft::new("Collateral assessment"))
        .await?;
    service
        .create(&south_manager(), TaskDraft::new("Southern branch audit"))
        .await?;
    service
        .create(
            &root(),
            TaskDraft::new("Group reporting")
                .with_region(Region::new("North")?)
                .with_task_type("Reporting"),
        )
        .await?;
    service
        .apply(
            &north_manager(),
            north.id(),
            TaskCommand::Assign {
                employees: vec![analyst_id()],
                comment: None,
            },
        )
        .await?;
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_are_scoped_by_role(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;
    let everything = TaskFilter::new();

    let counts = [
        (client(), 1),
        (north_manager(), 2),
        (south_manager(), 1),
        (analyst(), 1),
        (bystander(), 0),
        (root(), 3),
    ];
    for (actor, expected) in counts {
        let visible = service.list_visible(&actor, &everything).await?;
        eyre::ensure!(
            visible.len() == expected,
            "{} sees {} tasks, expected {expected}",
            actor.identifier(),
            visible.len()
        );
    }
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn filters_narrow_visible_tasks(service: TestService) -> eyre::Result<()> {
    seed(&service).await?;

    let assigned = service
        .list_visible(
            &north_manager(),
            &TaskFilter::new().with_status(TaskStatus::Assigned),
        )
        .await?;
    let reporting = service
        .list_visible(&root(), &TaskFilter::new().with_task_type("Reporting"))
        .await?;
    let southern = service
        .list_visible(
            &root(),
            &TaskFilter::new().with_region(Region::new("South")?),
        )
        .await?;
    let by_search = service
        .list_visible(&root(), &TaskFilter::new().with_search("audit"))
        .await?;

    eyre::ensure!(assigned.len() == 1, "status filter failed");
    eyre::ensure!(reporting.len() == 1, "type filter failed");
    eyre::ensure!(southern.len() == 1, "region filter failed");
    eyre::ensure!(by_search.len() == 1, "search failed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn hidden_task_looks_missing(service: TestService) -> eyre::Result<()> {
    let task = service
        .create(&client(), TaskDraft::new("Collateral assessment"))
        .await?;

    let result = service.find_visible(&south_manager(), task.id()).await;

    eyre::ensure!(
        result.err().and_then(|err| err.rejection_kind()) == Some(RejectionKind::TaskNotFound),
        "foreign manager could see the task"
    );
    Ok(())
}
