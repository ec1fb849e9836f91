//! Chat mode UI components.

use crate::config::ResolvedConfig;
use crate::documents::{DocumentSelection, SampleCatalog};
use crate::session::Message;
use crate::ui::{self, Style};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP: &[(&str, &str)] = &[
    ("/add <file>...", "Stage PDF files for upload"),
    ("/sample [label]", "Choose a sample document (None clears it)"),
    ("/samples", "List sample documents"),
    ("/selection", "Show staged documents"),
    ("/submit", "Upload the staged documents"),
    ("/history", "Show the whole conversation"),
    ("/config", "Show current configuration"),
    ("/help", "Show this help"),
    ("/quit", "Exit chat mode"),
];

pub fn print_header() {
    println!(
        "{} {} - Legal Document Assistant",
        Style::header("docqa"),
        Style::version(format!("v{VERSION}"))
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_messages(messages: &[Message]) {
    for message in messages {
        println!("{}", ui::render_message(message));
        println!();
    }
}

pub fn print_config(config: &ResolvedConfig) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}    {}",
        Style::label("api url"),
        Style::value(&config.api_url)
    );
    println!(
        "  {}   {}",
        Style::label("attempts"),
        Style::value(config.retry.max_attempts)
    );
    println!(
        "  {}    {}",
        Style::label("backoff"),
        Style::secondary(format!("{}s", config.retry.backoff.as_secs_f64()))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (command, description) in HELP {
        println!(
            "  {} {}",
            Style::command(format!("{command:<18}")),
            Style::secondary(description)
        );
    }
    println!("  {}", Style::hint("Anything else is sent as a question."));
    println!();
}

pub fn print_samples(catalog: &SampleCatalog) {
    println!("{}", Style::header("Sample documents"));
    for (label, path) in catalog.iter() {
        let missing = if path.is_file() {
            String::new()
        } else {
            format!(" {}", Style::warning("(missing)"))
        };
        println!(
            "  {}  {}{missing}",
            Style::value(label),
            Style::secondary(path.display())
        );
    }
    println!();
}

pub fn print_selection(selection: &DocumentSelection) {
    println!("{}", Style::header("Staged documents"));
    if selection.is_empty() {
        println!("  {}", Style::hint("Nothing staged yet. Use /add or /sample."));
    }
    for file in selection.files() {
        println!("  - {}", Style::value(file.display()));
    }
    if let Some(sample) = selection.sample() {
        println!(
            "  - {} {}",
            Style::value(format!("{sample}.pdf")),
            Style::secondary("(sample)")
        );
    }
    println!();
}

pub fn print_uploaded(message: &str, filenames: &[String]) {
    println!("{} {message}", Style::success("✓"));
    println!("{}", Style::header("Uploaded files:"));
    for name in filenames {
        println!("  - {}", Style::value(name));
    }
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
}

pub fn print_warning(message: &str) {
    eprintln!("{} {message}", Style::warning("Warning:"));
    eprintln!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
