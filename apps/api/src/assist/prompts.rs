//! Prompt templates for the two suggestion types.

pub const EXPERIENCE_SYSTEM: &str = "You are an expert career advisor. Generate professional, achievement-focused bullet points for a job experience. Focus on quantifiable results and action verbs. Return 3-5 bullet points.";

pub const EXPERIENCE_PROMPT: &str = "Generate professional bullet points for this role:
Position: {position}
Company: {company}
Current description: {description}

Generate 3-5 achievement-focused bullet points that:
- Start with strong action verbs
- Include quantifiable results when possible
- Are ATS-friendly
- Highlight key responsibilities and achievements";

pub const SUMMARY_SYSTEM: &str = "You are an expert career advisor. Generate a compelling professional summary that highlights key strengths and career objectives.";

pub const SUMMARY_PROMPT: &str = "Generate a professional summary for:
Name: {full_name}
Title: {title}
Experience highlights: {experience_highlights}

Generate a 2-3 sentence professional summary that is:
- Compelling and professional
- Highlights key strengths
- ATS-friendly
- Forward-looking";
