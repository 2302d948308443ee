// All LLM prompt text for the screening module.
// Reuses the cross-cutting JSON-only system fragment from llm_client::prompts.

pub use crate::llm_client::prompts::JSON_ONLY_SYSTEM as SCREENING_SYSTEM;

/// Fixed instruction block placed ahead of the resume and job description.
pub const SCREENING_INSTRUCTIONS: &str = r#"You are an expert HR recruitment assistant specializing in technical roles.
Your task is to analyze the following resume text and compare it against the provided job description.

First, parse the resume text into a structured JSON format with the following keys: "skills", "experience", and "education".
Then, compare the parsed resume to the job description and calculate a match score from 1 to 10.
Finally, provide a concise justification for your score.

Return a single, valid JSON object with the following structure and nothing else:
{
  "parsed_resume": {
    "skills": ["skill1", "skill2"],
    "experience": [
      {"title": "Job Title", "company": "Company Name", "duration": "Years"}
    ],
    "education": [
      {"degree": "Degree", "institution": "Institution Name"}
    ]
  },
  "match_score": <number from 1 to 10>,
  "justification": "<A concise paragraph explaining the score, highlighting matching skills and experience gaps.>"
}"#;

const RESUME_HEADER: &str = "--- RESUME TEXT ---";
const JOB_DESCRIPTION_HEADER: &str = "--- JOB DESCRIPTION ---";

/// Assembles the full screening prompt. Input text is embedded as-is:
/// no truncation, and braces or placeholder-like text are never re-interpreted.
pub fn build_screening_prompt(resume_text: &str, job_description: &str) -> String {
    format!(
        "{SCREENING_INSTRUCTIONS}\n\n{RESUME_HEADER}\n{resume_text}\n\n{JOB_DESCRIPTION_HEADER}\n{job_description}\n"
    )
}
