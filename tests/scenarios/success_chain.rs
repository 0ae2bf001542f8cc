//! Test: Success Chain - outline → refine → write with canned replies

use crate::helpers::*;
use blog_writer::{BlogPipeline, ExecutionEvent, ExecutionStatus, Stage};
use std::sync::Arc;

/// Canned replies for every stage produce exactly the final-stage text
#[tokio::test]
async fn test_cats_end_to_end() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![
            MockReply::text("Intro\nBody\nConclusion"),
            MockReply::text("1. Hook\n2. Details\n3. Takeaway"),
            MockReply::text("# Cats\n..."),
        ],
    )
    .await;

    assert!(result.result.is_ok());

    let state = &result.state;
    assert_eq!(state.topic(), "cats");
    assert_eq!(state.outline().unwrap(), lines(&["Intro", "Body", "Conclusion"]));
    assert_eq!(
        state.refined_outline().unwrap(),
        lines(&["1. Hook", "2. Details", "3. Takeaway"])
    );
    assert_eq!(state.blog_content(), Some("# Cats\n..."));
    assert_eq!(state.status(), ExecutionStatus::Completed);
    assert_eq!(state.stage(), Stage::Done);
    assert!(state.completed_at().is_some());

    // One request per stage
    assert_eq!(result.client.calls(), 3);
}

/// Any non-empty topic produces blog content
#[tokio::test]
async fn test_generate_returns_content_for_any_topic() {
    for topic in ["rust", "remote work in 2025", "🍣 sushi", "a"] {
        let client = MockClient::with_texts(&["A\nB", "1. A\n2. B", "Post body"]);
        let pipeline = BlogPipeline::new(client);

        let state = pipeline.generate(topic).await.unwrap();
        assert_eq!(state.topic(), topic);
        assert_eq!(state.into_blog_content().as_deref(), Some("Post body"));
    }
}

/// The pipeline reuses the one injected client for every stage
#[tokio::test]
async fn test_single_client_serves_all_stages() {
    let client = Arc::new(MockClient::with_texts(&["A", "B", "C"]));
    let pipeline = BlogPipeline::new(client.clone());

    pipeline.generate("one").await.unwrap();
    assert_eq!(client.calls(), 3);
}

/// Each invocation starts from a fresh state
#[tokio::test]
async fn test_invocations_do_not_share_state() {
    let client = Arc::new(MockClient::with_texts(&[
        "First A", "First B", "First post", "Second A", "Second B", "Second post",
    ]));
    let pipeline = BlogPipeline::new(client.clone());

    let first = pipeline.generate("first").await.unwrap();
    let second = pipeline.generate("second").await.unwrap();

    assert_ne!(first.execution_id, second.execution_id);
    assert_eq!(first.blog_content(), Some("First post"));
    assert_eq!(second.blog_content(), Some("Second post"));
    assert_eq!(second.outline().unwrap(), lines(&["Second A"]));
}

/// Events report every stage with usage
#[tokio::test]
async fn test_stage_events_carry_usage() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![
            MockReply::text("Intro\nBody"),
            MockReply::text("1. Hook"),
            MockReply::text("# Cats"),
        ],
    )
    .await;

    let completed: Vec<(Stage, usize)> = result
        .events
        .iter()
        .filter_map(|event| match event {
            ExecutionEvent::StageCompleted { stage, items, usage } => {
                assert!(usage.is_some());
                Some((*stage, *items))
            }
            _ => None,
        })
        .collect();

    assert_eq!(
        completed,
        vec![(Stage::Outline, 2), (Stage::Refine, 1), (Stage::Write, 1)]
    );
    assert!(matches!(
        result.events.last(),
        Some(ExecutionEvent::PipelineCompleted {
            status: ExecutionStatus::Completed,
            ..
        })
    ));
}
