//! Para CLI
//!
//! Describes, analyzes and runs the demonstration parameter program.

use parac::commands::{analyze_program, describe_program, parse_run_options, run_program};

const RUN_USAGE: &str = "Usage: para run [--set R<n>=<number|true|false>]... [--halt-on-fault]";

fn main() {
    parac::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "describe" => {
            println!("{}", describe_program());
        }
        "analyze" => {
            print!("{}", analyze_program());
        }
        "run" => {
            let options = match parse_run_options(&args[2..]) {
                Ok(options) => options,
                Err(err) => {
                    eprintln!("error: {err}");
                    eprintln!("{RUN_USAGE}");
                    std::process::exit(1);
                }
            };

            let outcome = run_program(&options);
            for action in &outcome.actions {
                println!("{action}");
            }
            for fault in &outcome.faults {
                eprintln!("fault: {fault}");
            }
            if !outcome.faults.is_empty() {
                std::process::exit(2);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("para {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Para parameter engine");
    println!();
    println!("Usage: para <command> [options]");
    println!();
    println!("Commands:");
    println!("  describe             Print the demo program, one instruction per line");
    println!("  analyze              List the parameters the demo program reads");
    println!("  run                  Execute the demo program");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Run options:");
    println!("  --set R<n>=<value>   Bind a parameter (number, true or false); repeatable");
    println!("  --halt-on-fault      Stop at the first runtime fault");
    println!();
    println!("Parameters:");
    println!("  R1 width   R2 height   R3 offset");
    println!();
    println!("Exit status: 0 on success, 1 on usage errors, 2 if faults were reported.");
    println!();
    println!("Examples:");
    println!("  para describe");
    println!("  para run --set R1=3 --set R2=4");
    println!("  RUST_LOG=debug PARA_LOG_TREE=1 para run --set R1=true");
}
