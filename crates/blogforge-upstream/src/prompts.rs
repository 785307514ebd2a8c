//! Instruction templates sent with every completion request.

/// Fixed system instruction: blog-writing style and structure guidance.
pub const SYSTEM_PROMPT: &str = "\
You are an expert blog writer. Write well-structured, engaging, and informative blog posts.
Always follow this structure:
- A catchy title (use # for the main title)
- An engaging introduction paragraph
- Clear headings and subheadings (use ## and ### for headings)
- Relevant examples and insights
- A compelling conclusion
- Use proper markdown formatting
- Target approximately 1000 words";

/// Build the user instruction embedding the sanitized topic.
#[must_use]
pub fn build_user_prompt(topic: &str) -> String {
    format!("Write a comprehensive blog post on the following topic: {topic}")
}
