//! Test: Edge Cases - degenerate model replies and topics

use crate::helpers::*;
use blog_writer::{ExecutionStatus, Stage};

/// An empty outline still flows into the refine prompt
#[tokio::test]
async fn test_empty_outline_passed_on() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![
            MockReply::text(""),
            MockReply::text("1. Hook"),
            MockReply::text("# Cats"),
        ],
    )
    .await;

    assert!(result.result.is_ok());
    assert_eq!(result.state.outline(), Some(&[][..]));

    let prompts = result.client.prompts();
    assert!(prompts[1].system.contains("# Input Outline:\n\n"));
    assert_eq!(result.state.blog_content(), Some("# Cats"));
}

/// Whitespace-only replies give empty lists, not failures
#[tokio::test]
async fn test_whitespace_only_replies() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![
            MockReply::text("  \n\t\n  "),
            MockReply::text("\n\n"),
            MockReply::text("Body"),
        ],
    )
    .await;

    assert!(result.result.is_ok());
    assert!(result.state.outline().unwrap().is_empty());
    assert!(result.state.refined_outline().unwrap().is_empty());
    assert_eq!(
        result.client.prompts()[2].human.as_deref(),
        Some("Here is the refined outline for the blog post:\n")
    );
}

/// A reply with no line breaks becomes a single item
#[tokio::test]
async fn test_single_line_reply() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![
            MockReply::text("Everything about cats in one line"),
            MockReply::text("  1. One section  "),
            MockReply::text("Short post"),
        ],
    )
    .await;

    assert_eq!(
        result.state.outline().unwrap(),
        lines(&["Everything about cats in one line"])
    );
    assert_eq!(result.state.refined_outline().unwrap(), lines(&["1. One section"]));
}

/// Blank lines and padding are dropped, order is kept
#[tokio::test]
async fn test_outline_lines_trimmed_and_ordered() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![
            MockReply::text("\n  Intro  \r\n\n Body\n\n\nConclusion \n"),
            MockReply::text("Hook"),
            MockReply::text("Post"),
        ],
    )
    .await;

    assert_eq!(
        result.state.outline().unwrap(),
        lines(&["Intro", "Body", "Conclusion"])
    );
}

/// The write stage keeps the reply verbatim
#[tokio::test]
async fn test_blog_content_not_split() {
    let post = "# Title\n\n  Indented paragraph.\n\n- bullet\n";
    let result = run_pipeline_with_mock(
        "cats",
        vec![MockReply::text("A"), MockReply::text("B"), MockReply::text(post)],
    )
    .await;

    assert_eq!(result.state.blog_content(), Some(post));
}

/// An empty topic is not rejected
#[tokio::test]
async fn test_empty_topic() {
    let result = run_pipeline_with_mock(
        "",
        vec![MockReply::text("A"), MockReply::text("B"), MockReply::text("C")],
    )
    .await;

    assert!(result.result.is_ok());
    assert_eq!(
        result.client.prompts()[0].human.as_deref(),
        Some("Generate the outline for the topic: ")
    );
    assert_eq!(result.state.status(), ExecutionStatus::Completed);
    assert_eq!(result.state.stage(), Stage::Done);
}
