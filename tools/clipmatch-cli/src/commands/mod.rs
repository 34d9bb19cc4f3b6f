pub mod align;
pub mod config;
pub mod normalize;
pub mod process;

use clipmatch_common::cancel::CancellationToken;
use clipmatch_common::config::AppConfig;
use clipmatch_core::{AlignmentConfig, AlignmentOutput, Candidate, ClipAligner};
use clipmatch_model::Utterance;

/// Build an aligner from config, with an optional threshold override.
pub fn aligner_from(config: &AppConfig, threshold: Option<f64>) -> anyhow::Result<ClipAligner> {
    let mut alignment = AlignmentConfig::from(&config.matching);
    if let Some(threshold) = threshold {
        alignment.threshold = threshold;
    }
    Ok(ClipAligner::new(alignment)?)
}

/// Run alignment on a blocking worker; Ctrl-C cancels it between utterances.
pub async fn run_alignment(
    aligner: ClipAligner,
    utterances: Vec<Utterance>,
    candidates: Vec<Candidate>,
) -> anyhow::Result<AlignmentOutput> {
    let cancel = CancellationToken::new();
    let worker_cancel = cancel.clone();

    let mut task = tokio::task::spawn_blocking(move || {
        aligner.align_cancellable(&utterances, &candidates, &worker_cancel)
    });

    let result = tokio::select! {
        joined = &mut task => joined?,
        Ok(()) = tokio::signal::ctrl_c() => {
            tracing::warn!("Interrupted, stopping alignment");
            cancel.cancel();
            task.await?
        }
    };

    Ok(result?)
}
