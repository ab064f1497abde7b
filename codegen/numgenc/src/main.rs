//! numgen CLI
//!
//! Emits the switch-statement dispatch source for the numeric data layer.

use numgenc::commands::{parse_target, run_generate, Artifact, GenerateOptions};

fn main() {
    numgenc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let artifact = match command.as_str() {
        "convert" => Artifact::Conversion,
        "extract" => Artifact::Extraction,
        "all" => Artifact::All,
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        other => {
            eprintln!("error: unknown command '{other}'");
            print_usage();
            std::process::exit(1);
        }
    };

    let mut options = GenerateOptions::default();
    let mut i = 2;
    while i < args.len() {
        let arg = &args[i];
        if let Some(path) = arg.strip_prefix("--table=") {
            options.table = Some(std::path::PathBuf::from(path));
        } else if let Some(name) = arg.strip_prefix("--target=") {
            match parse_target(name) {
                Ok(target) => options.target = Some(target),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        } else if arg == "-o" && i + 1 < args.len() {
            options.output = Some(std::path::PathBuf::from(&args[i + 1]));
            i += 1;
        } else {
            eprintln!("error: unknown option '{arg}'");
            print_usage();
            std::process::exit(1);
        }
        i += 1;
    }

    if let Err(e) = run_generate(artifact, &options) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: numgen <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  convert    Emit the byte-buffer conversion dispatch");
    eprintln!("  extract    Emit the boxed sample-extraction dispatch");
    eprintln!("  all        Emit both, under their paste-location labels");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --table=<file.json>   Taxonomy file (default: built-in reference table)");
    eprintln!("  --target=<cp|bw>      Host class symbol set (default: cp)");
    eprintln!("  -o <path>             Output file (default: stdout)");
}
