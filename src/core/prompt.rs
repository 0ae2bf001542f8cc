//! Prompt templates for the three stages

use crate::llm::Prompt;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Placeholder filled with the blog topic
pub const TOPIC_VAR: &str = "topic";

/// Placeholder filled with the numbered outline
pub const OUTLINE_VAR: &str = "outline";

const OUTLINE_SYSTEM: &str = "You are an expert outline writer. Your job is to generate a structured outline
for a Blog post with a section title and key points based on the provided topic.";

const OUTLINE_HUMAN: &str = "Generate the outline for the topic: {{ topic }}";

const REFINE_SYSTEM: &str = "# Overview
You are an expert blog outline evaluator and reviser.
Your task is to take the provided outline and refine it to meet high-quality blog standards.

# Criteria for Revision:
(1) Engaging Introduction: Ensure the first section grabs the reader's attention.
(2) Clear Section Breakdown: Each main point should be distinct and logically organized.
(3) Logical Flow: The outline should transition smoothly from one section to the next.
(4) Conclusion with Key Takeaways: The final section should summarize main points and provide clear takeaways.
(5) Consistency: Ensure formatting and tone are consistent throughout.
(6) Actionable Titles: Section titles should be clear and indicative of content.

# Input Outline:
{{ outline }}

# Output:
Provide ONLY the revised and improved outline as a list of points. Do not include any
introductory or concluding remarks outside the outline itself.
Format each point on a new line.";

const WRITE_SYSTEM: &str = "You are an expert Blog writer. Your task is to generate a detailed, engaging,
and well-structured blog post based on the provided outline.

Ensure the blog post includes:
- An engaging and relevant title.
- A compelling introduction that hooks the reader.
- Well-developed paragraphs for each section of the outline, providing insightful
  information and maintaining a coherent flow.
- Smooth transitions between different sections.
- A strong conclusion that summarizes key takeaways and potentially offers
  a final thought or call to action.
- Use Markdown for formatting (e.g., headings for sections, bold text for emphasis,
  bullet points or numbered lists where appropriate).
- The tone should be informative and engaging, suitable for a general audience.";

const WRITE_HUMAN: &str = "Here is the refined outline for the blog post:\n{{ outline }}";

/// Render `items` as `1. first\n2. second…`; an empty slice renders as ""
pub fn numbered_list(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace `{{ name }}` placeholders with their values
///
/// Placeholders without a value are left as-is.
pub fn render_template(template: &str, variables: &HashMap<String, String>) -> String {
    let mut rendered = template.to_string();
    for (key, value) in variables {
        let placeholder = format!("{{{{ {} }}}}", key);
        rendered = rendered.replace(&placeholder, value);
    }
    rendered
}

/// Instruction template for one stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    /// System instructions
    pub system: String,

    /// Human request; `None` sends the system message alone
    #[serde(default)]
    pub human: Option<String>,
}

impl PromptTemplate {
    pub fn new(system: impl Into<String>, human: Option<&str>) -> Self {
        Self {
            system: system.into(),
            human: human.map(str::to_string),
        }
    }

    /// Fill in both messages
    pub fn render(&self, variables: &HashMap<String, String>) -> Prompt {
        let prompt = Prompt::new(render_template(&self.system, variables));
        match &self.human {
            Some(human) => prompt.with_human(render_template(human, variables)),
            None => prompt,
        }
    }

    /// Whether either message references `{{ name }}`
    pub fn uses_variable(&self, name: &str) -> bool {
        let placeholder = format!("{{{{ {} }}}}", name);
        self.system.contains(&placeholder)
            || self
                .human
                .as_ref()
                .is_some_and(|human| human.contains(&placeholder))
    }
}

/// Templates for every stage, overridable from the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTemplates {
    pub outline: PromptTemplate,
    pub refine: PromptTemplate,
    pub write: PromptTemplate,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            outline: PromptTemplate::new(OUTLINE_SYSTEM, Some(OUTLINE_HUMAN)),
            refine: PromptTemplate::new(REFINE_SYSTEM, None),
            write: PromptTemplate::new(WRITE_SYSTEM, Some(WRITE_HUMAN)),
        }
    }
}

impl PromptTemplates {
    /// Prompt asking for an outline of `topic`
    pub fn outline_prompt(&self, topic: &str) -> Prompt {
        self.outline.render(&variables(TOPIC_VAR, topic.to_string()))
    }

    /// Prompt asking to revise `outline` against the rubric
    pub fn refine_prompt(&self, outline: &[String]) -> Prompt {
        self.refine.render(&variables(OUTLINE_VAR, numbered_list(outline)))
    }

    /// Prompt asking for the full post from `refined_outline`
    pub fn write_prompt(&self, refined_outline: &[String]) -> Prompt {
        self.write
            .render(&variables(OUTLINE_VAR, numbered_list(refined_outline)))
    }

    /// Placeholders a template should reference but does not
    ///
    /// Returned as `(stage, placeholder)` pairs.
    pub fn missing_placeholders(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("outline", &self.outline, TOPIC_VAR),
            ("refine", &self.refine, OUTLINE_VAR),
            ("write", &self.write, OUTLINE_VAR),
        ]
        .into_iter()
        .filter(|(_, template, var)| !template.uses_variable(var))
        .map(|(stage, _, var)| (stage, var))
        .collect()
    }
}

fn variables(key: &str, value: String) -> HashMap<String, String> {
    HashMap::from([(key.to_string(), value)])
}
