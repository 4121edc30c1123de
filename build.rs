//! Build script to generate embedded word lists
//!
//! Reads two raw lists per language (secret candidates and extra accepted guesses)
//! and generates Rust source code with const arrays.
//! Filtering happens at runtime when the dictionary index is built, so the lists are
//! embedded exactly as shipped.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/en.txt",
        &Path::new(&out_dir).join("en.rs"),
        "ENGLISH",
        "Raw English word list",
    );

    generate_word_list(
        "data/fr.txt",
        &Path::new(&out_dir).join("fr.rs"),
        "FRENCH",
        "Raw French word list",
    );

    generate_word_list(
        "data/en-allowed.txt",
        &Path::new(&out_dir).join("en_allowed.rs"),
        "ENGLISH_ALLOWED",
        "Extra accepted English guesses",
    );

    generate_word_list(
        "data/fr-allowed.txt",
        &Path::new(&out_dir).join("fr_allowed.rs"),
        "FRENCH_ALLOWED",
        "Extra accepted French guesses",
    );

    // Rebuild if word lists change
    for list in ["en", "fr", "en-allowed", "fr-allowed"] {
        println!("cargo:rerun-if-changed=data/{list}.txt");
    }
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment} ({count} entries)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    {word:?},").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of raw entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
