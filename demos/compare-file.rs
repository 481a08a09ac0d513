use std::{env, fs, process};

use inline_diff::{AlignmentOptions, compare_bytes};

/// Prints the inline difference of two files, similar to how a failed
/// assertion would show it.
///
/// Run it with:
/// `cargo run --example compare-file left.txt right.txt [matching_pad_len] [min_substr_len]`
fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 5 {
        eprintln!("Usage: compare-file <left> <right> [matching_pad_len] [min_substr_len]");
        process::exit(1);
    }

    let left_file = &args[1];
    let right_file = &args[2];

    let mut options = AlignmentOptions::default();
    if let Some(pad) = args.get(3) {
        options = options.with_matching_pad_len(parse_number(pad));
    }
    if let Some(min_substr_len) = args.get(4) {
        options = options.with_min_substr_len(parse_number(min_substr_len));
    }

    let left_content = fs::read(left_file).unwrap_or_else(|e| {
        eprintln!("Error reading {left_file}: {e}");
        process::exit(1);
    });

    let right_content = fs::read(right_file).unwrap_or_else(|e| {
        eprintln!("Error reading {right_file}: {e}");
        process::exit(1);
    });

    match compare_bytes(&left_content, &right_content, &options) {
        Ok(difference) if difference.is_empty() => println!("Files are identical"),
        Ok(difference) => println!("{difference}"),
        Err(e) => {
            eprintln!("Error comparing files: {e}");
            process::exit(1);
        }
    }
}

fn parse_number(value: &str) -> usize {
    value.parse().unwrap_or_else(|e| {
        eprintln!("Invalid number {value:?}: {e}");
        process::exit(1);
    })
}
