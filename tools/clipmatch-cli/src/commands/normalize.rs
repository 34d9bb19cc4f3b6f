//! Show how text or a clip filename tokenizes.

use clipmatch_core::{base_name, extract_payload_slug, normalize_to_slug, tokenize_slug};

pub fn run(input: &str, is_file: bool) -> anyhow::Result<()> {
    let slug = if is_file {
        let name = base_name(input);
        println!("File:   {name}");
        extract_payload_slug(name)
    } else {
        normalize_to_slug(input)
    };

    let tokens = tokenize_slug(&slug);
    println!("Slug:   {slug}");
    println!("Tokens: {} {:?}", tokens.len(), tokens);

    Ok(())
}
