use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct VocabularyData {
    honorific_prefixes: Vec<String>,
    suffixes: Vec<String>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/vocabulary.json")?;
    let vocabulary: VocabularyData = serde_json::from_str(&json)?;

    write_ordered_set(
        &output.join("honorific_prefixes.rs"),
        &longest_first(vocabulary.honorific_prefixes),
    )?;
    write_ordered_set(
        &output.join("suffixes.rs"),
        &longest_first(vocabulary.suffixes.clone()),
    )?;

    // Keyed by lowercase so formatting can recover the canonical casing
    // of a suffix in one lookup.
    let suffixes_by_lowercase = vocabulary
        .suffixes
        .iter()
        .map(|s| (s.to_lowercase(), s.clone()))
        .collect::<HashMap<_, _>>();
    write_map(
        &output.join("suffixes_by_lowercase.rs"),
        &suffixes_by_lowercase,
        |v| format!("\"{}\"", v),
    )?;

    Ok(())
}

// Multi-word entries have to be tried before any single word they start
// with; the sort is stable so declaration order breaks ties.
fn longest_first(mut entries: Vec<String>) -> Vec<String> {
    entries.sort_by_key(|e| std::cmp::Reverse(e.split_whitespace().count()));
    entries
}

fn write_map<'a, K, V, F>(output: &Path, map: &'a HashMap<K, V>, transform: F) -> Result<()>
where
    K: std::ops::Deref<Target = str>,
    F: Fn(&'a V) -> String,
{
    let mut builder = phf_codegen::Map::new();
    for (k, v) in map {
        builder.entry(k.to_string(), &transform(v));
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_ordered_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::OrderedSet::new();
    for v in set {
        builder.entry(v);
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}
