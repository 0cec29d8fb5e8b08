//!
//! Replays keystrokes against a few formatted inputs and prints
//! every intermediate state. The caret is shown as `|`.
//!
//! Run with a trace as arguments, e.g.
//! `cargo run --example replay -- "put 1234" "move -2" bs`.
//! The debug log goes to `replay.log`.
//!

use rat_reformat::emulator::{InputCommand, InputEmulator};
use rat_reformat::formats::{FixedPoint, Grouping, Template};
use rat_reformat::{CharRule, Condition, DeleteMode, Reformat};
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let trace = if args.is_empty() {
        vec![
            "put 1".to_string(),
            "put 46".into(),
            "move -2".into(),
            "put 23".into(),
            "move 1".into(),
            "bs".into(),
            "del".into(),
            "put x".into(),
        ]
    } else {
        args
    };
    let commands = trace
        .iter()
        .map(|v| parse(v))
        .collect::<Result<Vec<_>, _>>()?;

    let inputs = [
        ("grouping", Reformat::new(Grouping::default())),
        (
            "grouping/step-over",
            Reformat::new(Grouping::default()).delete_mode(DeleteMode::StepOver),
        ),
        (
            "currency",
            Reformat::new(Grouping::new('’').fraction('.', 2)).accept(CharRule::digits_and(".")),
        ),
        ("fixed-point", Reformat::new(FixedPoint::default())),
        (
            "phone",
            Reformat::new(Template::new("(###) ###-####"))
                .mask(Condition::when(|s| s.len() < 14))
                .jump_template(true),
        ),
    ];

    for (name, fmt) in inputs {
        println!("{}", name);
        let mut input = InputEmulator::new(fmt);
        for (cmd, text) in commands.iter().zip(trace.iter()) {
            let outcome = input.exec(cmd.clone())?;
            println!("    {:<12} {:<20} {:?}", text, input.render(), outcome);
        }
    }

    Ok(())
}

fn parse(cmd: &str) -> Result<InputCommand, anyhow::Error> {
    Ok(match cmd.split_once(' ') {
        Some(("put", s)) => InputCommand::Put(s.to_string()),
        Some(("move", n)) => InputCommand::MoveCaret(n.parse()?),
        None if cmd == "bs" => InputCommand::Backspace,
        None if cmd == "del" => InputCommand::Delete,
        _ => anyhow::bail!("unknown command {:?}", cmd),
    })
}

fn setup_logging() -> Result<(), anyhow::Error> {
    let log = PathBuf::from("replay.log");
    if log.exists() {
        fs::remove_file(&log)?;
    }
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file(&log)?)
        .apply()?;
    Ok(())
}
