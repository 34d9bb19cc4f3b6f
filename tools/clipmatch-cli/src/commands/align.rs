//! Align a local diarization file with a clip list.

use std::path::PathBuf;

use anyhow::Context;
use clipmatch_common::config::AppConfig;
use clipmatch_core::{Candidate, PublicUrlMapper};
use clipmatch_model::{load_clip_list, load_diarization};

use crate::render::{print_rows, OutputFormat};

pub async fn run(
    config: &AppConfig,
    diarization: PathBuf,
    clips: PathBuf,
    threshold: Option<f64>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let aligner = super::aligner_from(config, threshold)?;

    let utterances = load_diarization(&diarization)
        .with_context(|| format!("Failed to load diarization from {}", diarization.display()))?;
    let clip_paths = load_clip_list(&clips)
        .with_context(|| format!("Failed to load clip list from {}", clips.display()))?;
    tracing::info!(
        utterances = utterances.len(),
        clips = clip_paths.len(),
        threshold = aligner.config().threshold,
        "Loaded inputs"
    );

    let mapper = PublicUrlMapper::new(
        &config.service.internal_prefix,
        &config.service.public_host,
    );
    let candidates = Candidate::prepare_all(&clip_paths, &mapper);

    let output = super::run_alignment(aligner, utterances, candidates).await?;
    print_rows(&output.rows, &output.summary, format)
}
