use std::env;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use indicatif::ProgressBar;

use plagcheck_client::HttpAnalysisClient;
use plagcheck_core::config::{expand_path, Config};
use plagcheck_core::report::render_report;
use plagcheck_core::summary::ResultSummary;
use plagcheck_core::types::AnalysisResult;
use plagcheck_highlight::{render_page, render_terminal, resolve_spans, HighlightSpan};
use plagcheck_session::{NotificationKind, Session, ViewState, MSG_COPIED};

struct Args {
    /// Path to the text to check, or "-" for stdin.
    input: String,
    copy: bool,
    html: Option<PathBuf>,
    endpoint: Option<String>,
}

fn parse_args() -> Args {
    let mut args: Vec<String> = env::args().collect();
    let prog = args.remove(0);
    let mut input = None;
    let mut copy = false;
    let mut html = None;
    let mut endpoint = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--copy" | "-c" => copy = true,
            "--html" => {
                if i + 1 < args.len() {
                    html = Some(expand_path(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --html requires a path");
                    std::process::exit(1);
                }
            }
            "--endpoint" => {
                if i + 1 < args.len() {
                    endpoint = Some(args[i + 1].clone());
                    i += 1;
                } else {
                    eprintln!("Error: --endpoint requires a URL");
                    std::process::exit(1);
                }
            }
            "-" => input = Some("-".to_string()),
            _ if !args[i].starts_with('-') => input = Some(args[i].clone()),
            _ => {
                eprintln!("Unknown flag: {}", args[i]);
                std::process::exit(1);
            }
        }
        i += 1;
    }
    let input = input.unwrap_or_else(|| {
        eprintln!(
            "Usage: {} <text-file|-> [--copy] [--html <out.html>] [--endpoint <url>]",
            prog
        );
        std::process::exit(1)
    });
    Args {
        input,
        copy,
        html,
        endpoint,
    }
}

fn read_input(arg: &str) -> anyhow::Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(expand_path(arg))?)
    }
}

fn print_result(result: &AnalysisResult, spans: &[HighlightSpan]) {
    let summary = ResultSummary::from_result(result);

    println!("\nUploaded Text\n=============");
    println!("{}", render_terminal(&result.full_text, spans));

    println!("\nPlagiarism Result\n=================");
    println!(
        "Total Sentences: {}   Unique: {}   Plagiarized: {}",
        summary.total_sentences, summary.unique_sentences, summary.matched_sentences
    );
    if result.fragment_matches.is_empty() {
        println!("✅ No Plagiarism Detected!");
        return;
    }
    println!(
        "❌ Plagiarism Found: {}% plagiarized, {}% unique",
        summary.plagiarism_pct, summary.unique_pct
    );
    if summary.has_excess_matches() {
        println!("⚠️  Service reported more matches than sentences; percentages are off the scale");
    }
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

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let config = Config::load().map_err(|e| {
        eprintln!("Error loading config: {}", e);
        e
    })?;
    let args = parse_args();
    let text = read_input(&args.input)?;

    let endpoint = args.endpoint.clone().unwrap_or_else(|| config.endpoint());
    println!("Plagiarism Checker\n==================");
    println!("Endpoint: {}", endpoint);

    let mut session = Session::new(HttpAnalysisClient::new(endpoint)?);
    session.set_input(text);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(100));
    tokio::runtime::Runtime::new()?.block_on(session.submit());
    spinner.finish_and_clear();

    if let Some(n) = session.notification() {
        match n.kind {
            NotificationKind::Success => println!("✅ {}", n.message),
            NotificationKind::Error => eprintln!("❌ {}", n.message),
        }
    }

    let result = match session.state() {
        ViewState::Success(result) => result,
        _ => std::process::exit(1),
    };
    let spans = resolve_spans(&result.full_text, &result.fragment_matches);
    print_result(result, &spans);

    if let Some(out) = &args.html {
        fs::write(
            out,
            render_page("Plagiarism Checker Results", &result.full_text, &spans),
        )?;
        println!("\n📄 Wrote HTML report to {}", out.display());
    }
    if args.copy {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(render_report(result))?;
        println!("✅ {}", MSG_COPIED);
    }
    Ok(())
}
