//! An interactive front end for the belief revision library.
//!
//! Statements typed at the prompt revise the base; meta commands, prefixed with `:`, inspect it:
//!
//! - `:base` --- the held beliefs, least entrenched first.
//! - `:consistent` --- a satisfiability report for the base.
//! - `:graph` --- the dependency graph of the base, in DOT form.
//! - `:retract <rendering>` --- contract the base by a belief's rendering.
//! - `:quit` --- end the session.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;

use agm_belief::{
    base::ReviseOk,
    config::{Config, UnsatisfiablePolicy},
    context::Context,
    graph,
};

#[derive(Parser)]
#[command(name = "agm_cli", about = "AGM-style belief revision at a prompt.")]
struct Args {
    /// Apply each line of the file as a statement before reading from stdin.
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Admit statements which are unsatisfiable on their own, letting revision empty the base.
    #[arg(long)]
    admit_unsatisfiable: bool,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    let config = Config {
        unsatisfiable: match args.admit_unsatisfiable {
            true => UnsatisfiablePolicy::Admit,
            false => UnsatisfiablePolicy::Reject,
        },
    };

    let mut the_context = Context::from_config(config);

    if let Some(path) = &args.script {
        match std::fs::read_to_string(path) {
            Ok(script) => {
                for line in script.lines() {
                    interpret(&mut the_context, line);
                }
            }
            Err(e) => {
                eprintln!("Failed to read {}: {e}", path.display());
                std::process::exit(1);
            }
        }
    }

    let stdin = std::io::stdin();
    let mut input = String::new();

    loop {
        print!("> ");
        let _ = std::io::stdout().flush();

        input.clear();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let line = input.trim();
        if line == ":quit" {
            break;
        }
        interpret(&mut the_context, line);
    }
}

fn interpret(the_context: &mut Context, line: &str) {
    if line.is_empty() {
        return;
    }

    match line.split_once(char::is_whitespace) {
        Some((":retract", rendering)) => {
            the_context.contract(rendering.trim());
            show_base(the_context);
        }

        _ if line == ":base" => show_base(the_context),

        _ if line == ":consistent" => println!("{}", the_context.report()),

        _ if line == ":graph" => print!("{}", graph::as_dot(&the_context.dependency_graph())),

        _ if line.starts_with(':') => println!("Unknown command: {line}"),

        _ => match the_context.revise(line) {
            Ok(ReviseOk::Added) => show_base(the_context),

            Ok(ReviseOk::Evicted(evicted)) => {
                for belief in evicted {
                    println!("Evicted: {belief}");
                }
                show_base(the_context);
            }

            Ok(ReviseOk::Duplicate) => println!("Already held."),

            Err(e) => println!("Invalid input: {e}"),
        },
    }
}

fn show_base(the_context: &Context) {
    if the_context.base.is_empty() {
        println!("No beliefs held.");
        return;
    }

    for (position, (rendering, _)) in the_context.current_base().iter().enumerate() {
        println!("{}. {rendering}", position + 1);
    }
}
