use std::path::PathBuf;

use clipmatch_model::{load_clip_list, load_diarization};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("sample-job")
        .join(name)
}

#[test]
fn sample_diarization_is_well_formed() {
    let utterances = load_diarization(fixture("diarization.json")).unwrap();
    assert_eq!(utterances.len(), 8);

    let mut prev_start = 0.0;
    for u in &utterances {
        assert!(u.start >= prev_start, "utterances should be in time order");
        assert!(u.end >= u.start);
        assert!((u.duration - (u.end - u.start)).abs() < 1e-6);
        prev_start = u.start;
    }
}

#[test]
fn sample_clip_list_skips_header_and_blank_lines() {
    let clips = load_clip_list(fixture("clips.txt")).unwrap();
    assert_eq!(clips.len(), 6);
    assert!(clips.iter().all(|c| c.starts_with("/app/output_clips/req-7f3a/")));
    assert!(clips[0].ends_with("001_SPEAKER_00_all-right-thats-it.wav"));
}
