//! Emolens CLI
//!
//! Usage:
//!   emolens --text "your text here"     # Single evaluation
//!   emolens --interactive               # Interactive mode
//!   emolens --demo                      # Built-in sample sentences
//!   emolens --serve                     # HTTP API server
//!   emolens --text "text" --json        # JSON output

use clap::Parser;
use std::io::{self, BufRead, Write};

use emolens::core::{run_server, EmotionDetector, LexiconAnalyzer, PolarityAnalyzer, StyleExtractor};
use emolens::types::{DetectionOutput, Emotion};
use emolens::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "emolens",
    version = VERSION,
    about = "Emolens - offline emotion detection for short text",
    long_about = "Emolens assigns a probability distribution over five emotion\n\
                  categories (anger, disgust, fear, joy, sadness) to a short piece\n\
                  of text, plus a dominant label. Fully offline: a lexicon polarity\n\
                  analyzer plus punctuation/casing style signals, no model files.\n\n\
                  Modes:\n  \
                  --text         Single evaluation\n  \
                  --interactive  Read lines from stdin\n  \
                  --demo         Run the built-in sample sentences\n  \
                  --serve        HTTP API server"
)]
struct Args {
    /// Text to evaluate (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Interactive mode - read lines from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Run the built-in sample sentences
    #[arg(short, long)]
    demo: bool,

    /// Run as HTTP API server
    #[arg(short, long)]
    serve: bool,

    /// Server address (default: 127.0.0.1:5001)
    #[arg(long, default_value = "127.0.0.1:5001")]
    addr: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,

    /// Show polarity and style signal breakdown
    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.serve {
        run_serve(&args).await;
    } else if args.demo {
        run_demo(&args);
    } else if args.interactive {
        run_interactive(&args);
    } else if let Some(ref text) = args.text {
        let detector = EmotionDetector::new();
        run_single(&detector, text, &args);
    } else {
        // Default to interactive if no mode specified
        run_interactive(&args);
    }
}

/// Run single text evaluation
fn run_single(detector: &EmotionDetector, text: &str, args: &Args) {
    let output = DetectionOutput::new(detector.detect(text));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&output).unwrap());
    } else if args.verbose {
        print_verbose(text, &output, args.no_color);
    } else if args.no_color {
        println!("{}", output.to_parseable_string());
    } else {
        println!("{}", output.to_terminal_string());
    }
}

/// Run interactive mode
fn run_interactive(args: &Args) {
    let detector = EmotionDetector::new();

    print_header("Interactive Mode", args.no_color);
    println!("Type text and press Enter to detect emotion. Type 'quit' to exit.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        stdout.flush().unwrap();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended.");
            break;
        }
        if line.is_empty() {
            continue;
        }

        run_single(&detector, line, args);
    }
}

/// Run built-in sample sentences
fn run_demo(args: &Args) {
    let detector = EmotionDetector::new();

    let samples = [
        "I am feeling tensed about work.",
        "I am extremely worried.",
        "I am infuriated about the situation.",
        "This is UNACCEPTABLE!!!",
        "Are we in danger??",
        "I feel sad and down.",
        "I am very happy today!",
    ];

    print_header("Demo", args.no_color);
    for text in samples {
        println!("{:?}", text);
        run_single(&detector, text, args);
        println!();
    }
}

/// Print header
fn print_header(mode: &str, no_color: bool) {
    if no_color {
        println!("========================================");
        println!("  Emolens v{} - {}", VERSION, mode);
        println!("========================================");
    } else {
        println!("\x1b[1m========================================\x1b[0m");
        println!("\x1b[1m  Emolens v{} - {}\x1b[0m", VERSION, mode);
        println!("\x1b[1m========================================\x1b[0m");
    }
    println!();
}

/// Print verbose breakdown: polarity reading, style signals, distribution
fn print_verbose(text: &str, output: &DetectionOutput, no_color: bool) {
    let reading = LexiconAnalyzer::new().analyze(text);
    let signals = StyleExtractor::new().extract(text);

    let (color, reset) = match (no_color, output.distribution.dominant_emotion) {
        (false, Some(dominant)) => (dominant.color_code(), Emotion::color_reset()),
        _ => ("", ""),
    };

    println!("{}+-----------------------------------------{}", color, reset);
    println!(
        "{}| polarity: pos={:.3} neg={:.3} comp={:.3}{}",
        color, reading.positive, reading.negative, reading.compound, reset
    );
    println!(
        "{}| style: anger={:.3} fear={:.3} (excl={} ques={} caps={:.2} elong={}){}",
        color,
        signals.anger_signal,
        signals.fear_signal,
        signals.features.exclamations,
        signals.features.questions,
        signals.features.caps_ratio,
        signals.features.elongation,
        reset
    );
    println!("{}+-----------------------------------------{}", color, reset);
    for (emotion, value) in output.distribution.iter() {
        match value {
            Some(v) => println!("{}| {:<8} {:.4}{}", color, emotion.to_string(), v, reset),
            None => println!("{}| {:<8} -{}", color, emotion.to_string(), reset),
        }
    }
    match output.distribution.dominant_emotion {
        Some(dominant) => println!("{}| dominant: {}{}", color, dominant, reset),
        None => println!("{}| no emotion detected{}", color, reset),
    }
    println!("{}+-----------------------------------------{}", color, reset);
}

/// Run HTTP API server
async fn run_serve(args: &Args) {
    println!();
    println!("Emolens v{} - API Server", VERSION);
    println!();

    if let Err(e) = run_server(&args.addr).await {
        eprintln!("Server error: {}", e);
        std::process::exit(1);
    }
}
