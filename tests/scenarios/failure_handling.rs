//! Test: Failure Handling - fail-fast on any stage error

use crate::helpers::*;
use blog_writer::{BlogPipeline, CompletionError, ExecutionEvent, ExecutionStatus, PipelineError, Stage};

/// A failure on stage 2 keeps the outline and leaves later fields empty
#[tokio::test]
async fn test_refine_failure_halts_pipeline() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![
            MockReply::text("Intro\nBody\nConclusion"),
            MockReply::fail(503, "Service Unavailable"),
            MockReply::text("# never used"),
        ],
    )
    .await;

    let err = result.result.unwrap_err();
    assert_eq!(err.stage(), Some(Stage::Refine));
    assert!(matches!(
        err.completion_error(),
        Some(CompletionError::Api { status: 503, .. })
    ));

    let state = &result.state;
    assert_eq!(state.outline().unwrap(), lines(&["Intro", "Body", "Conclusion"]));
    assert!(state.refined_outline().is_none());
    assert!(state.blog_content().is_none());
    assert_eq!(state.status(), ExecutionStatus::Failed);
    assert_eq!(state.stage(), Stage::Refine);

    // The write stage never ran
    assert_eq!(result.client.calls(), 2);
}

/// A failure on the first stage leaves every output empty
#[tokio::test]
async fn test_outline_failure() {
    let result =
        run_pipeline_with_mock("cats", vec![MockReply::fail(401, "Invalid API Key")]).await;

    assert!(matches!(
        result.result,
        Err(PipelineError::Stage {
            stage: Stage::Outline,
            source: CompletionError::Api { status: 401, .. },
        })
    ));
    assert!(result.state.outline().is_none());
    assert_eq!(result.client.calls(), 1);
}

/// A failure on the last stage keeps both outlines
#[tokio::test]
async fn test_write_failure() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![
            MockReply::text("Intro"),
            MockReply::text("1. Hook"),
            MockReply::fail(429, "Rate limit reached"),
        ],
    )
    .await;

    assert_eq!(result.result.unwrap_err().stage(), Some(Stage::Write));
    assert!(result.state.outline().is_some());
    assert!(result.state.refined_outline().is_some());
    assert!(result.state.blog_content().is_none());
}

/// `generate` returns no partial result on failure
#[tokio::test]
async fn test_generate_returns_only_error() {
    let client = MockClient::new(vec![
        MockReply::text("Intro"),
        MockReply::fail(500, "boom"),
    ]);
    let pipeline = BlogPipeline::new(client);

    let err = pipeline.generate("cats").await.unwrap_err();
    assert!(err.to_string().contains("refine stage failed"));
    assert!(err.to_string().contains("boom"));
}

/// Failure events are emitted before the pipeline completes as failed
#[tokio::test]
async fn test_failure_events() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![MockReply::text("Intro"), MockReply::fail(500, "boom")],
    )
    .await;

    let n = result.events.len();
    assert!(matches!(
        &result.events[n - 2],
        ExecutionEvent::StageFailed { stage: Stage::Refine, error } if error.contains("boom")
    ));
    assert!(matches!(
        result.events[n - 1],
        ExecutionEvent::PipelineCompleted {
            status: ExecutionStatus::Failed,
            ..
        }
    ));
}

/// A failed state is never resumed, even with a working client
#[tokio::test]
async fn test_failed_state_cannot_be_rerun() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![MockReply::text("Intro"), MockReply::fail(500, "boom")],
    )
    .await;
    let mut state = result.state;
    let failed_at = state.completed_at();

    let healthy = MockClient::with_texts(&["1. Hook", "ok"]);
    let pipeline = BlogPipeline::new(healthy);
    let err = pipeline.run(&mut state).await.unwrap_err();

    assert!(matches!(err, PipelineError::AlreadyFailed(Stage::Refine)));
    assert_eq!(state.status(), ExecutionStatus::Failed);
    assert!(state.refined_outline().is_none());
    assert!(state.blog_content().is_none());
    assert_eq!(state.completed_at(), failed_at);
}
