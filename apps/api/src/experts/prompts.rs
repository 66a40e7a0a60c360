// All LLM prompt templates for the expert personas.
// Templates are filled with `fill_template`, which substitutes `{name}` placeholders
// in a single pass so user text containing braces is inserted verbatim.

use crate::experts::JobContext;

/// Job description prefix length used as resume context.
pub const RESUME_JD_LIMIT: usize = 500;
/// Job description prefix length used as interview context.
pub const INTERVIEW_JD_LIMIT: usize = 400;

/// Resume rewriting prompt. Replace: {context}, {resume_text}
pub const RESUME_DOCTOR_TEMPLATE: &str = r#"You are ResumeDoctor, an expert resume writer.

{context}

ORIGINAL RESUME:
{resume_text}

Please rewrite this resume to:
- Improve clarity and structure
- Use strong action verbs
- Add quantifiable achievements where possible
- Make it ATS-friendly
- Enhance weak descriptions

Return only the enhanced resume content."#;

/// Cover letter prompt. Replace: {context}, {resume_text}
pub const COVER_LETTER_TEMPLATE: &str = r#"You are CoverLetterWriter, an expert in crafting compelling cover letters.

{context}

CANDIDATE'S RESUME:
{resume_text}

Create a professional cover letter that:
- Connects the candidate's experience to the job requirements
- Shows genuine interest in the role
- Highlights key achievements
- Has a strong opening and closing
- Is concise but impactful

Return only the cover letter content."#;

/// Interview preparation prompt. Replace: {context}, {resume_text}
pub const INTERVIEW_COACH_TEMPLATE: &str = r#"You are InterviewCoach, an expert interview preparation specialist.

{context}

CANDIDATE'S BACKGROUND:
{resume_text}

Generate comprehensive interview preparation with:

1. LIKELY QUESTIONS (8-10 questions they'll probably ask)
2. SAMPLE ANSWERS for 3-4 key questions using STAR method
3. QUESTIONS TO ASK THEM (5-6 thoughtful questions)
4. KEY TALKING POINTS (3-4 main strengths to highlight)

Make it specific to this candidate and role."#;

pub fn build_resume_prompt(resume_text: &str, job: &JobContext) -> String {
    let mut context = String::new();
    if let Some(title) = job.job_title() {
        context.push_str(&format!("\nTarget Job Title: {title}"));
    }
    if let Some(description) = job.job_description() {
        context.push_str(&format!(
            "\nJob Requirements: {}",
            truncate_chars(description, RESUME_JD_LIMIT)
        ));
    }

    fill_template(
        RESUME_DOCTOR_TEMPLATE,
        &[("context", &context), ("resume_text", resume_text)],
    )
}

/// The caller guarantees the job title is present.
pub fn build_cover_letter_prompt(resume_text: &str, job_title: &str, job: &JobContext) -> String {
    let mut context = format!("Job Title: {job_title}");
    if let Some(description) = job.job_description() {
        context.push_str(&format!("\n\nJob Description:\n{description}"));
    }

    fill_template(
        COVER_LETTER_TEMPLATE,
        &[("context", &context), ("resume_text", resume_text)],
    )
}

pub fn build_interview_prompt(resume_text: &str, job: &JobContext) -> String {
    let mut context = String::new();
    if let Some(title) = job.job_title() {
        context.push_str(&format!("Target Role: {title}\n"));
    }
    if let Some(description) = job.job_description() {
        context.push_str(&format!(
            "Job Requirements: {}\n",
            truncate_chars(description, INTERVIEW_JD_LIMIT)
        ));
    }

    fill_template(
        INTERVIEW_COACH_TEMPLATE,
        &[("context", &context), ("resume_text", resume_text)],
    )
}

/// Cuts `text` to at most `limit` characters, appending `...` only when something was cut.
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Substitutes `{name}` placeholders from `values` in one left-to-right pass.
/// Unknown placeholders and stray braces are copied through untouched.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let capacity = template.len() + values.iter().map(|(_, v)| v.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let replacement = after_open.find('}').and_then(|close| {
            let name = &after_open[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });

        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after_open[close + 1..];
            }
            None => {
                out.push('{');
                rest = after_open;
            }
        }
    }

    out.push_str(rest);
    out
}
