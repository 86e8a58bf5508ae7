//! End-to-end scoring pipeline: fetch the resume, extract its text, score
//! it against the job description.
//!
//! Transient storage is reclaimed on every exit path. The success and
//! extraction-failure paths release explicitly; anything that unwinds past
//! them is covered by the blob's own drop.

use tracing::{debug, info};

use crate::errors::AppError;
use crate::scoring::extractor::extract_text;
use crate::scoring::fetcher::DocumentFetcher;
use crate::scoring::similarity::ats_score;

/// Runs the full pipeline for one request and returns the 0-100 score.
///
/// Error mapping: fetch failures become [`AppError::Download`], unreadable
/// or textless documents become [`AppError::Extraction`]. Scoring itself
/// cannot fail.
pub async fn score_resume(
    fetcher: &dyn DocumentFetcher,
    resume_url: &str,
    job_desc: &str,
) -> Result<f64, AppError> {
    let blob = fetcher
        .fetch(resume_url)
        .await
        .map_err(|e| AppError::Download(e.to_string()))?;
    let blob_id = blob.id();
    debug!("fetched resume into transient blob {blob_id}");

    let path = blob.path().to_path_buf();
    let extracted = tokio::task::spawn_blocking(move || extract_text(&path)).await;
    let text = match extracted {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            blob.release();
            return Err(AppError::Extraction(e.to_string()));
        }
        // pdf parsing can panic on some malformed documents
        Err(join) if join.is_panic() => {
            blob.release();
            return Err(AppError::Extraction(
                "resume PDF could not be parsed".to_string(),
            ));
        }
        Err(join) => {
            blob.release();
            return Err(AppError::Internal(join.into()));
        }
    };

    if text.is_empty() {
        blob.release();
        return Err(AppError::Extraction(
            "no text could be extracted from the resume".to_string(),
        ));
    }
    blob.release();

    let score = ats_score(&text, job_desc);
    info!("scored resume {blob_id}: {score}");
    Ok(score)
}
