//! In-memory integration tests for task lifecycle operations.

use super::helpers::{TestService, analyst, analyst_id, client, north_manager, service};
use rstest::rstest;
use zadachnik::task::domain::{TaskAction, TaskStatus};
use zadachnik::workflow::{NewDocument, RejectionKind, TaskCommand, TaskDraft};

fn comment(text: &str) -> Option<String> {
    Some(text.to_owned())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rework_and_rejection_loop_ends_in_approval(service: TestService) -> eyre::Result<()> {
    let task = service
        .create(&client(), TaskDraft::new("Collateral assessment"))
        .await?;
    let id = task.id().clone();

    let steps = [
        (
            north_manager(),
            TaskCommand::Assign {
                employees: vec![analyst_id()],
                comment: None,
            },
        ),
        (analyst(), TaskCommand::Accept { comment: None }),
        (
            analyst(),
            TaskCommand::SendToRework {
                comment: comment("valuation report missing"),
            },
        ),
        (client(), TaskCommand::ReturnToWork { comment: None }),
        (
            analyst(),
            TaskCommand::AttachDocument {
                document: NewDocument::new("valuation.pdf", 52_000),
            },
        ),
        (analyst(), TaskCommand::SendToApproval { comment: None }),
        (
            north_manager(),
            TaskCommand::ReturnToEmployee {
                comment: comment("sign the report"),
            },
        ),
        (analyst(), TaskCommand::SendToApproval { comment: None }),
        (north_manager(), TaskCommand::Approve { comment: None }),
    ];
    for (actor, command) in steps {
        service.apply(&actor, &id, command).await?;
    }

    let stored = service.find_visible(&client(), &id).await?;
    eyre::ensure!(stored.status() == TaskStatus::Approved, "task not approved");
    eyre::ensure!(stored.history().len() == 10, "expected ten history entries");
    eyre::ensure!(stored.documents().len() == 1, "document not kept");
    eyre::ensure!(
        stored.status_trail()
            == vec![
                TaskStatus::Created,
                TaskStatus::Assigned,
                TaskStatus::InProgress,
                TaskStatus::Rework,
                TaskStatus::InProgress,
                TaskStatus::Approval,
                TaskStatus::InProgress,
                TaskStatus::Approval,
                TaskStatus::Approved,
            ],
        "unexpected trail {:?}",
        stored.status_trail()
    );
    let actions = service.available_actions(&north_manager(), &id).await?;
    eyre::ensure!(actions.is_empty(), "approved task still offers {actions:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_actions_do_not_touch_history(service: TestService) -> eyre::Result<()> {
    let task = service
        .create(&client(), TaskDraft::new("Collateral assessment"))
        .await?;
    let id = task.id().clone();
    service
        .apply(
            &north_manager(),
            &id,
            TaskCommand::Assign {
                employees: vec![analyst_id()],
                comment: None,
            },
        )
        .await?;
    service
        .apply(&analyst(), &id, TaskCommand::Accept { comment: None })
        .await?;

    let without_comment = service
        .apply(&analyst(), &id, TaskCommand::Pause { comment: None })
        .await;
    let by_author = service
        .apply(&client(), &id, TaskCommand::Approve { comment: None })
        .await;

    eyre::ensure!(
        without_comment.err().and_then(|err| err.rejection_kind())
            == Some(RejectionKind::CommentRequired),
        "pause without comment accepted"
    );
    eyre::ensure!(
        by_author.err().and_then(|err| err.rejection_kind())
            == Some(RejectionKind::PermissionDenied),
        "business user approved"
    );
    let stored = service.find_visible(&client(), &id).await?;
    eyre::ensure!(stored.history().len() == 3, "rejections were recorded");
    eyre::ensure!(
        stored.history().last().map(|entry| entry.action()) == Some(TaskAction::Accept),
        "last entry is not the acceptance"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_creations_get_distinct_ids(service: TestService) -> eyre::Result<()> {
    let mut handles = Vec::new();
    for index in 0..16 {
        let worker = service.clone();
        handles.push(tokio::spawn(async move {
            worker
                .create(&client(), TaskDraft::new(format!("Batch item {index}")))
                .await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await??.id().clone());
    }
    ids.sort();
    ids.dedup();

    eyre::ensure!(ids.len() == 16, "identifiers collided");
    Ok(())
}
