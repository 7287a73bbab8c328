//! Password analysis orchestrator.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::{charset_profile, entropy_bits};
use crate::crack_time::crack_time_label;
use crate::sections::{
    BLACKLIST_PENALTY, DATE_PENALTY, DICTIONARY_PENALTY, KEYBOARD_PENALTY, LENGTH_BONUS,
    LENGTH_BONUS_THRESHOLD, PATTERN_PENALTY, blacklist_section, character_variety_section,
    date_section, dictionary_section, entropy_section, keyboard_section, length_section,
    pattern_analysis_section, uniqueness_section,
};
use crate::types::{AnalysisResult, Finding, Tier};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// Empty input carries no signal to score; callers decide how to
    /// surface this (the reference UI simply renders nothing).
    #[error("password is empty")]
    EmptyPassword,
    /// The cancellation token fired between pipeline stages.
    #[cfg(feature = "async")]
    #[error("analysis cancelled")]
    Cancelled,
}

/// Analyzes a password and returns the composite strength assessment.
///
/// Deterministic and side-effect free: the same input always produces an
/// identical result. Intermediate scores may run negative or past 100;
/// the final score is clamped to 0-100 and the tier derives from the
/// clamped value.
///
/// # Arguments
/// * `password` - The password to analyze
/// * `token` - Optional cancellation token (async feature only)
///
/// # Errors
/// [`AnalysisError::EmptyPassword`] for empty input, and
/// [`AnalysisError::Cancelled`] if the token fires mid-pipeline.
pub fn analyze_password(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> Result<AnalysisResult, AnalysisError> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return Err(AnalysisError::EmptyPassword);
    }

    #[cfg(feature = "async")]
    let checkpoint = || -> Result<(), AnalysisError> {
        if token.as_ref().is_some_and(|t| t.is_cancelled()) {
            Err(AnalysisError::Cancelled)
        } else {
            Ok(())
        }
    };
    #[cfg(not(feature = "async"))]
    let checkpoint = || -> Result<(), AnalysisError> { Ok(()) };

    let length = pwd.chars().count();
    let profile = charset_profile(pwd);
    let alphabet_size = profile.alphabet_size();
    let entropy = entropy_bits(alphabet_size, length);

    let mut findings: Vec<Finding> = Vec::new();
    let mut score: i64 = 0;

    let band = length_section(length);
    score += band.points;
    findings.push(band.finding);

    checkpoint()?;

    for finding in pattern_analysis_section(pwd) {
        score -= PATTERN_PENALTY;
        findings.push(finding);
    }

    let band = character_variety_section(&profile);
    score += band.points;
    findings.push(band.finding);

    let (uniqueness_percent, band) = uniqueness_section(pwd);
    score += band.points;
    findings.push(band.finding);

    let band = entropy_section(entropy);
    score += band.points;
    findings.push(band.finding);

    if alphabet_size == 0 {
        findings.push(Finding::error(
            "No recognized character classes found. Strength cannot be estimated reliably.",
        ));
    }

    checkpoint()?;

    if let Some(finding) = dictionary_section(pwd) {
        score -= DICTIONARY_PENALTY;
        findings.push(finding);
    }

    if let Some(finding) = keyboard_section(pwd) {
        score -= KEYBOARD_PENALTY;
        findings.push(finding);
    }

    if let Some(finding) = date_section(pwd) {
        score -= DATE_PENALTY;
        findings.push(finding);
    }

    if let Some(finding) = blacklist_section(pwd) {
        score -= BLACKLIST_PENALTY;
        findings.push(finding);
    }

    if length >= LENGTH_BONUS_THRESHOLD {
        score += LENGTH_BONUS;
    }

    let score = score.clamp(0, 100) as u8;
    let tier = Tier::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(score, %tier, "password analysis complete");

    Ok(AnalysisResult {
        score,
        tier,
        entropy_bits: entropy,
        crack_time: crack_time_label(entropy),
        alphabet_size,
        uniqueness_percent,
        findings,
    })
}

/// Async wrapper that debounces briefly, then sends the outcome over a
/// channel. Intended for interactive callers that re-analyze on every
/// keystroke.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<AnalysisResult, AnalysisError>>,
) {
    use std::time::Duration;

    const DEBOUNCE: Duration = Duration::from_millis(300);

    tokio::time::sleep(DEBOUNCE).await;
    let outcome = analyze_password(password, Some(token));

    if let Err(_e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("failed to deliver analysis result: {}", _e);
    }
}
