use serde::Deserialize;
use std::collections::{BTreeSet, HashMap};
use std::env;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
struct CaseData {
    family_exceptions: Vec<String>,
    split_starters: Vec<String>,
    irish_o: Vec<String>,
    irish_vowels: Vec<String>,
    irish_post_bean: Vec<String>,
}

#[derive(Deserialize)]
struct FamilyData {
    chinese: Vec<String>,
    chinese_roman: Vec<String>,
    korean: Vec<String>,
    korean_roman: Vec<String>,
    vietnamese_roman: Vec<String>,
}

#[derive(Deserialize)]
struct JapaneseData {
    family_name_probabilities: HashMap<String, f64>,
}

type Result<T> = std::result::Result<T, Box<dyn Error>>;

fn main() -> Result<()> {
    let input = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);
    let output = PathBuf::from(env::var("OUT_DIR")?);

    let json = read_file(&input, "build/case_data.json")?;
    let case: CaseData = serde_json::from_str(&json)?;
    write_set(&output.join("family_exceptions.rs"), &case.family_exceptions)?;
    write_set(&output.join("split_starters.rs"), &case.split_starters)?;
    write_list(&output.join("irish_o.rs"), &case.irish_o)?;
    write_list(&output.join("irish_vowels.rs"), &case.irish_vowels)?;
    write_list(&output.join("irish_post_bean.rs"), &case.irish_post_bean)?;

    let json = read_file(&input, "build/family_data.json")?;
    let families: FamilyData = serde_json::from_str(&json)?;
    write_set(&output.join("chinese_family_names.rs"), &families.chinese)?;
    write_set(&output.join("korean_family_names.rs"), &families.korean)?;
    // Romanizations overlap heavily between the two languages, and we never
    // need to know which one a match came from
    let mut roman = families.chinese_roman;
    roman.extend(families.korean_roman);
    write_set(&output.join("ck_roman_family_names.rs"), &roman)?;
    write_set(
        &output.join("vietnamese_family_names.rs"),
        &families.vietnamese_roman,
    )?;

    let json = read_file(&input, "build/japanese_data.json")?;
    let japanese: JapaneseData = serde_json::from_str(&json)?;
    write_map(
        &output.join("japanese_family_probabilities.rs"),
        &japanese.family_name_probabilities,
        |v| format!("{:?}", v),
    )?;

    Ok(())
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

// The source lists repeat some entries, which phf rejects
fn write_set(output: &Path, set: &[String]) -> Result<()> {
    let mut builder = phf_codegen::Set::new();
    for v in set.iter().collect::<BTreeSet<_>>() {
        builder.entry(v.as_str());
    }
    fs::write(output, format!("{}", builder.build()))?;
    Ok(())
}

fn write_list(output: &Path, list: &[String]) -> Result<()> {
    fs::write(output, format!("&[{}]", quoted_comma_separated(list)))?;
    Ok(())
}

fn read_file(input_dir: &Path, file_path: &str) -> Result<String> {
    println!("cargo:rerun-if-changed={}", file_path);
    let s = fs::read_to_string(input_dir.join(file_path))?;
    Ok(s)
}

fn quoted_comma_separated(vs: &[String]) -> String {
    vs.iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ")
}
