use std::env;
use std::fs;
use std::path::PathBuf;

use plagcheck_core::config::expand_path;
use plagcheck_core::summary::ResultSummary;
use plagcheck_core::types::AnalysisResult;
use plagcheck_highlight::{render_page, render_terminal, resolve_spans};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <result.json> [--html <out.html>]", args[0]);
        eprintln!("Renders a previously captured analysis response without touching the network.");
        std::process::exit(1);
    }
    let json_path = expand_path(&args[1]);
    let mut html: Option<PathBuf> = None;
    if let Some(pos) = args.iter().position(|a| a == "--html") {
        match args.get(pos + 1) {
            Some(out) => html = Some(expand_path(out)),
            None => {
                eprintln!("Error: --html requires a path");
                std::process::exit(1);
            }
        }
    }

    let result: AnalysisResult = serde_json::from_str(&fs::read_to_string(&json_path)?)?;
    let summary = ResultSummary::from_result(&result);
    let spans = resolve_spans(&result.full_text, &result.fragment_matches);

    println!("plagcheck-render\n================");
    println!("Result file: {}", json_path.display());

    println!("\nUploaded Text\n=============");
    println!("{}", render_terminal(&result.full_text, &spans));

    println!("\nPlagiarism Result\n=================");
    println!(
        "Total Sentences: {}   Unique: {}   Plagiarized: {}",
        summary.total_sentences, summary.unique_sentences, summary.matched_sentences
    );
    if result.fragment_matches.is_empty() {
        println!("✅ No Plagiarism Detected!");
    } else {
        println!(
            "❌ Plagiarism Found: {}% plagiarized, {}% unique",
            summary.plagiarism_pct, summary.unique_pct
        );
        println!("\nSources:");
        for (i, frag) in result.fragment_matches.iter().enumerate() {
            println!("  {}. Matched: {}", i + 1, frag.matched_sentence);
            println!("     Your Text: {}", frag.user_sentence);
            println!("     Similarity: {}%", frag.similarity_pct());
            match &frag.title {
                Some(title) => println!("     Source: {} ({})", frag.source, title),
                None => println!("     Source: {}", frag.source),
            }
            if let Some(url) = &frag.url {
                println!("     URL: {}", url);
            }
        }
    }

    if let Some(out) = html {
        fs::write(
            &out,
            render_page("Plagiarism Checker Results", &result.full_text, &spans),
        )?;
        println!("\n📄 Wrote HTML report to {}", out.display());
    }
    Ok(())
}
