// ATS Scoring Engine
// Implements: resume download, PDF text extraction, TF-IDF cosine scoring.
// All network access goes through the DocumentFetcher trait.

pub mod extractor;
pub mod fetcher;
pub mod handlers;
pub mod pipeline;
pub mod similarity;
pub mod stopwords;

#[cfg(test)]
pub(crate) mod fixtures;
