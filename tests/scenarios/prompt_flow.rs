//! Test: Prompt Flow - each stage sees only the previous stage's output

use crate::helpers::*;

#[tokio::test]
async fn test_prompts_carry_previous_stage_output() {
    let result = run_pipeline_with_mock(
        "cats",
        vec![
            MockReply::text("Intro\nBody\nConclusion"),
            MockReply::text("Hook\nDetails"),
            MockReply::text("# Cats"),
        ],
    )
    .await;
    assert!(result.result.is_ok());

    let prompts = result.client.prompts();
    assert_eq!(prompts.len(), 3);

    // Outline: topic goes into the human message
    assert_eq!(
        prompts[0].human.as_deref(),
        Some("Generate the outline for the topic: cats")
    );
    assert!(prompts[0].system.contains("expert outline writer"));

    // Refine: numbered outline embedded in the instructions, no human message
    assert!(prompts[1].human.is_none());
    assert!(prompts[1]
        .system
        .contains("# Input Outline:\n1. Intro\n2. Body\n3. Conclusion\n"));
    assert!(!prompts[1].system.contains("cats"));

    // Write: numbered refined outline only
    let human = prompts[2].human.as_deref().unwrap();
    assert_eq!(
        human,
        "Here is the refined outline for the blog post:\n1. Hook\n2. Details"
    );
    assert!(!human.contains("Intro"));
    assert!(!prompts[2].system.contains("cats"));
}

#[tokio::test]
async fn test_no_placeholders_left_in_prompts() {
    let result = run_pipeline_with_mock(
        "rust",
        vec![
            MockReply::text("A"),
            MockReply::text("B"),
            MockReply::text("C"),
        ],
    )
    .await;

    for prompt in result.client.prompts() {
        assert!(!prompt.system.contains("{{"));
        assert!(!prompt.human.unwrap_or_default().contains("{{"));
    }
}
