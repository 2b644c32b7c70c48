//! Line-oriented session: `integral x^2 dx`, `limit sin(x)/x x->0`, ...
//!
//! Set `RUST_LOG=neuralmath=debug` to see rule selection.

use neuralmath::prelude::{Command, Engine, EngineConfig};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

fn main() -> rustyline::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => match EngineConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}; using defaults");
                EngineConfig::default()
            }
        },
        None => EngineConfig::default(),
    };
    let engine = match Engine::with_config(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("{err}; using defaults");
            Engine::new()
        }
    };

    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline("math> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                rl.add_history_entry(line)?;
                if line == "quit" || line == "exit" {
                    break;
                }

                let answer = line
                    .parse::<Command>()
                    .and_then(|command| engine.run(&command));
                match answer {
                    Ok(answer) => {
                        println!("{}", answer.value);
                        for step in &answer.steps {
                            println!("  · {step}");
                        }
                    }
                    Err(err) => println!("error ({:?}): {err}", err.kind()),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err:?}");
                break;
            }
        }
    }
    Ok(())
}
