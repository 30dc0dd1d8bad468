//! Fixed prompt text for repository grading. The bold, numbered headers are
//! what the response interpreter keys on, so keep them in sync.

pub const ANALYSIS_PROMPT_INTRO: &str = "You are an expert code reviewer and educational mentor. \
Analyze the following student's GitHub repository and provide constructive feedback.";

pub const ANALYSIS_PROMPT_INSTRUCTIONS: &str = r#"Please provide a comprehensive analysis in the following format:

**1. Summary (50-75 words):**
Briefly describe what this project does and its overall quality.

**2. Strengths (3-5 points):**
List the positive aspects of this repository.

**3. Areas for Improvement (3-5 points):**
Suggest specific improvements the student could make.

**4. Performance Score (0-100):**
Provide a numerical score out of 100 (e.g., "85/100" or just "85"). Rate the overall quality of the project considering:
- Code activity and commit frequency
- Documentation quality (README, comments)
- Best practices (git workflow, code organization)
- Project completeness and functionality

**5. Recommendations:**
Provide 2-3 actionable next steps for the student.

Keep your feedback constructive, encouraging, and educational.
"#;
