//! Run a remote processing job and align its output.

use anyhow::Context;
use clipmatch_client::ProcessingClient;
use clipmatch_common::config::AppConfig;
use clipmatch_core::Candidate;

use crate::render::{print_rows, OutputFormat};

pub async fn run(
    config: &AppConfig,
    url: String,
    threshold: Option<f64>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let aligner = super::aligner_from(config, threshold)?;
    let client = ProcessingClient::new(&config.service)?;

    if format == OutputFormat::Table {
        println!("Processing {url}");
        println!("This may take 1-5 minutes to complete.");
    }

    let job = client
        .run_job(&url)
        .await
        .with_context(|| format!("Processing job for {url} failed"))?;

    let mapper = client.url_mapper();
    if format == OutputFormat::Table {
        if let Some(folder) = job.response.request_folder() {
            println!("Request: {folder}");
        }
        if let Some(audio) = job.response.audio_file() {
            println!("Audio:   {}", mapper.to_public(audio));
        }
        println!();
    }

    let candidates = Candidate::prepare_all(&job.response.extracted, mapper);
    let output = super::run_alignment(aligner, job.utterances, candidates).await?;
    print_rows(&output.rows, &output.summary, format)
}
