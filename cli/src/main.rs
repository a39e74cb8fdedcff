//! svitch CLI - driving adapter for the switch-condition engine.
//!
//! Subcommands:
//! - `eval [--lang <tags>] <name=value>...` - evaluate conditional attributes
//! - `trace [--lang <tags>] [--json] <name=value>...` - per-check report
//! - `features` - print the implemented feature URIs
//!
//! Exit codes: 0 permitted, 1 not permitted, 2 usage error.

use std::process;

use svitch::prelude::*;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(2);
    }

    let result = match args[1].as_str() {
        "eval" => cmd_eval(&args[2..]),
        "trace" => cmd_trace(&args[2..]),
        "features" => cmd_features(),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("error: unknown command \"{other}\"");
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(2);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_eval(args: &[String]) -> Result<(), String> {
    let parsed = parse_eval_args(args, false)?;
    let decision = evaluate_switch_conditions_with(parsed.pairs(), &parsed.preferences);

    if decision.has_conditionals {
        println!(
            "{}",
            if decision.permitted {
                "permitted"
            } else {
                "not permitted"
            }
        );
    } else {
        println!("permitted (no conditional attributes)");
    }

    if !decision.permitted {
        process::exit(1);
    }
    Ok(())
}

fn cmd_trace(args: &[String]) -> Result<(), String> {
    let parsed = parse_eval_args(args, true)?;
    let trace = evaluate_switch_conditions_with_trace(parsed.pairs(), &parsed.preferences);

    if parsed.json {
        let rendered = serde_json::to_string_pretty(&trace)
            .map_err(|e| format!("serialization failed: {e}"))?;
        println!("{rendered}");
    } else {
        for check in &trace.checks {
            let verdict = if check.satisfied { "ok  " } else { "FAIL" };
            println!("{verdict} {}=\"{}\"", check.attribute, check.value);
        }
        if trace.checks.is_empty() {
            println!("(no conditional attributes)");
        }
        println!(
            "=> {}",
            if trace.decision.permitted {
                "permitted"
            } else {
                "not permitted"
            }
        );
    }

    if !trace.decision.permitted {
        process::exit(1);
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Uniform return type for all commands
fn cmd_features() -> Result<(), String> {
    println!("Implemented features:");
    for uri in IMPLEMENTED_FEATURES.iter() {
        println!("  {uri}");
    }

    println!("\nImplemented extensions:");
    if IMPLEMENTED_EXTENSIONS.is_empty() {
        println!("  (none)");
    } else {
        for uri in IMPLEMENTED_EXTENSIONS.iter() {
            println!("  {uri}");
        }
    }
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════════
// Argument parsing
// ═══════════════════════════════════════════════════════════════════════════════

struct EvalArgs {
    attributes: Vec<(String, String)>,
    preferences: LanguagePreferences,
    json: bool,
}

impl EvalArgs {
    fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

fn parse_eval_args(args: &[String], allow_json: bool) -> Result<EvalArgs, String> {
    let mut attributes = Vec::new();
    let mut preferences = None;
    let mut json = false;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--lang" => {
                let tags = iter
                    .next()
                    .ok_or_else(|| "--lang requires a value".to_string())?;
                preferences = Some(LanguagePreferences::new(
                    tags.split([',', ':']).filter(|tag| !tag.is_empty()),
                ));
            }
            "--json" if allow_json => json = true,
            other => {
                let (name, value) = other
                    .split_once('=')
                    .ok_or_else(|| format!("expected name=value, got \"{other}\""))?;
                attributes.push((name.to_string(), value.to_string()));
            }
        }
    }

    Ok(EvalArgs {
        attributes,
        // Without --lang, read the environment the same way the library's
        // default entry point does.
        preferences: preferences.unwrap_or_else(LanguagePreferences::from_env),
        json,
    })
}

fn print_usage() {
    println!("svitch - conditional-processing evaluation for SVG <switch>");
    println!();
    println!("USAGE:");
    println!("  svitch eval [--lang <tags>] <name=value>...");
    println!("  svitch trace [--lang <tags>] [--json] <name=value>...");
    println!("  svitch features");
    println!();
    println!("EXAMPLES:");
    println!("  svitch eval systemLanguage=en,fr --lang en-US");
    println!("  svitch trace requiredFeatures=http://www.w3.org/TR/SVG11/feature#Shape");
    println!();
    println!("Exit codes: 0 permitted, 1 not permitted, 2 usage error.");
}
