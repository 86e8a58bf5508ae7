//! TF-IDF cosine similarity between a resume and a job description.
//!
//! Both texts are vectorized in one joint vocabulary built from exactly the
//! two of them; vectorizing them independently would make the dot product
//! meaningless. The scorer never fails: degenerate inputs (nothing left
//! after stopword removal, zero-magnitude vectors) score 0.0.

use std::collections::HashMap;

use crate::scoring::stopwords::is_stopword;

/// Documents in the per-invocation corpus: always the resume and the JD.
const CORPUS_SIZE: f64 = 2.0;

/// Computes the ATS match score between a resume and a job description.
///
/// Returns a percentage in `[0, 100]`, rounded to two decimals. Identical
/// inputs score 100.00; inputs sharing no non-stopword token score 0.00.
pub fn ats_score(resume_text: &str, job_desc: &str) -> f64 {
    let resume_counts = term_counts(resume_text);
    let jd_counts = term_counts(job_desc);

    let mut dot = 0.0;
    let mut resume_sq = 0.0;
    let mut jd_sq = 0.0;

    for term in joint_vocabulary(&resume_counts, &jd_counts) {
        let tf_resume = resume_counts.get(term).copied().unwrap_or(0) as f64;
        let tf_jd = jd_counts.get(term).copied().unwrap_or(0) as f64;

        // Smoothed IDF over the two-document corpus: ln((1+N)/(1+df)) + 1.
        // Shared terms (df=2) weigh 1.0; terms unique to one side weigh more.
        let df = f64::from(u8::from(tf_resume > 0.0) + u8::from(tf_jd > 0.0));
        let idf = ((1.0 + CORPUS_SIZE) / (1.0 + df)).ln() + 1.0;

        let w_resume = tf_resume * idf;
        let w_jd = tf_jd * idf;
        dot += w_resume * w_jd;
        resume_sq += w_resume * w_resume;
        jd_sq += w_jd * w_jd;
    }

    if resume_sq == 0.0 || jd_sq == 0.0 {
        return 0.0;
    }

    // Clamp guards float drift nudging the ratio a hair past 1.
    let cosine = (dot / (resume_sq.sqrt() * jd_sq.sqrt())).clamp(0.0, 1.0);
    round_two_decimals(cosine * 100.0)
}

/// Tokenizes into lowercased alphanumeric runs of length ≥ 2, stopwords
/// removed, and counts occurrences per term.
fn term_counts(text: &str) -> HashMap<String, u32> {
    let lowered = text.to_lowercase();
    let mut counts = HashMap::new();
    for token in lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.len() > 1 && !is_stopword(t))
    {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Union of both documents' terms: the shared vector space.
fn joint_vocabulary<'a>(
    resume_counts: &'a HashMap<String, u32>,
    jd_counts: &'a HashMap<String, u32>,
) -> impl Iterator<Item = &'a str> {
    resume_counts
        .keys()
        .chain(jd_counts.keys().filter(|t| !resume_counts.contains_key(*t)))
        .map(String::as_str)
}

fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
