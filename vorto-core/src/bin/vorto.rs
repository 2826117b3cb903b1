//! Vorto command-line classifier
//!
//! Reads Esperanto text line by line and prints the classification of every
//! word: its labels, its feature vector, or both.
//!
//! ## Usage
//!
//! ```bash
//! # Labels for every word with more than one label
//! ./target/release/vorto /path/to/text.txt
//!
//! # Feature vectors, read from stdin
//! cat text.txt | ./target/release/vorto - vector
//!
//! # Labels and vectors for every word
//! ./target/release/vorto /path/to/text.txt both --all
//! ```
//!
//! ## Output
//!
//! One line per word on stdout, the word and its output separated by a tab
//! (shown here as `<TAB>`):
//!
//! ```text
//! hundo<TAB>singular; noun
//! knabeto<TAB>singular; noun; diminutive
//! ```
//!
//! A summary goes to stderr. Set `RUST_LOG=trace` to watch the cascade.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::time::{Duration, Instant};

use tracing_subscriber::EnvFilter;
use vorto_core::{Analysis, Mode, Token};

#[derive(Default)]
struct Totals {
    lines: u64,
    words: u64,
    incorrect: u64,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: vorto <path|-> [description|vector|both] [--all]");
        std::process::exit(1);
    }

    let path = &args[1];
    let show_all = args.iter().skip(2).any(|a| a == "--all");

    let mode = match args.iter().skip(2).find(|a| *a != "--all") {
        Some(m) => match m.parse::<Mode>() {
            Ok(mode) => mode,
            Err(e) => {
                eprintln!("vorto: {e}");
                std::process::exit(2);
            }
        },
        None => Mode::Description,
    };

    let reader: Box<dyn BufRead> = if path == "-" {
        Box::new(BufReader::new(io::stdin().lock()))
    } else {
        Box::new(BufReader::new(File::open(path)?))
    };

    let mut out = BufWriter::new(io::stdout().lock());
    let mut totals = Totals::default();
    let start = Instant::now();

    for line in reader.lines() {
        let line = line?;
        totals.lines += 1;

        let token = Token::new(&line);
        let words = if token.is_word() {
            std::slice::from_ref(&token)
        } else {
            token.words()
        };

        for word in words {
            let analysis = word.analyze();
            totals.words += 1;
            if analysis.is_incorrect() {
                totals.incorrect += 1;
            }
            if show_all || analysis.labels.len() > 1 {
                print_word(&mut out, word, &analysis, mode)?;
            }
        }
    }

    out.flush()?;
    print_summary(&totals, start.elapsed());

    Ok(())
}

fn print_word<W: Write>(
    out: &mut W,
    word: &Token,
    analysis: &Analysis,
    mode: Mode,
) -> io::Result<()> {
    let labels = analysis.labels.join("; ");
    match mode {
        Mode::Description => writeln!(out, "{}\t{}", word, labels),
        Mode::Vector => writeln!(out, "{}\t{}", word, analysis.vector),
        Mode::Both => writeln!(out, "{}\t{}\t{}", word, labels, analysis.vector),
    }
}

fn print_summary(totals: &Totals, elapsed: Duration) {
    let secs = elapsed.as_secs_f64().max(f64::EPSILON);

    eprintln!("--------------------------------");
    eprintln!("Lines       : {}", fmt_count(totals.lines));
    eprintln!("Words       : {}", fmt_count(totals.words));
    eprintln!("Incorrect   : {}", fmt_count(totals.incorrect));
    eprintln!("Elapsed     : {:.3} s", elapsed.as_secs_f64());
    eprintln!(
        "Words/sec   : {}",
        fmt_count((totals.words as f64 / secs) as u64)
    );
    eprintln!("--------------------------------");
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
