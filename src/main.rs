// SPDX-License-Identifier: MIT
//
// spinwheel — the host binary that wires the wheel together.
//
// The core is deliberately inert: it owns no clock, no randomness
// source beyond its seed, no output device. This binary supplies all
// three:
//
//   wheel-core    → state, layout, geometry, spin timeline
//   wheel-svg     → font metrics (TextMeasure) + SVG emission
//   command line  → the interaction source
//
// Each mutation flag becomes a WheelEvent; the returned Effects decide
// what happens next: `changed` fires the change notification (stdout
// here — a persistence collaborator would serialize the item list at
// that moment), `redraw` marks the frame stale, and a completed spin's
// `outcome` is printed as the winner. A spin runs to completion on a
// synthetic 16ms-per-frame clock — the timeline only ever sees total
// elapsed time, so the frame step is cosmetic.

use std::env;
use std::fs;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use regex::Regex;

use wheel_core::geometry::Circle;
use wheel_core::{Item, Wheel, WheelEvent};
use wheel_palette::Color;
use wheel_svg::FontMetrics;

/// Synthetic frame step while driving a spin, in milliseconds.
const FRAME_MS: f64 = 16.0;

/// Rendered document edge, matching the default circle.
const CANVAS_PX: f64 = 800.0;

// ─── Command line ───────────────────────────────────────────────────────────

/// A mutation or spin request, in command-line order.
#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add(String),
    Edit(usize, String),
    Remove(usize),
    Spin,
}

/// Parsed invocation.
struct Invocation {
    seed: Option<u32>,
    initial_items: Vec<String>,
    commands: Vec<Command>,
    out_path: Option<String>,
}

fn usage() -> ! {
    eprintln!(
        "usage: spinwheel [options]\n\
         \n\
         options:\n\
           --seed <u32>        fix the random seed (default: derived from the clock)\n\
           --item <text>       start from this item instead of the built-in set (repeatable)\n\
           --add <text>        append an item (repeatable)\n\
           --edit <n>=<text>   replace the text of item n (repeatable)\n\
           --remove <n>        remove item n (repeatable)\n\
           --spin              spin the wheel and print the winner\n\
           --out <file>        write the rendered SVG here\n\
           --help              show this message"
    );
    process::exit(2);
}

fn parse_args(args: &[String]) -> Invocation {
    let edit_spec = Regex::new(r"^(\d+)=(.*)$").expect("edit spec pattern");

    let mut invocation = Invocation {
        seed: None,
        initial_items: Vec::new(),
        commands: Vec::new(),
        out_path: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next().cloned().unwrap_or_else(|| {
                eprintln!("spinwheel: {flag} needs a value");
                process::exit(2);
            })
        };
        match arg.as_str() {
            "--seed" => {
                let raw = value("--seed");
                match raw.parse() {
                    Ok(seed) => invocation.seed = Some(seed),
                    Err(_) => {
                        eprintln!("spinwheel: bad seed {raw:?}");
                        process::exit(2);
                    }
                }
            }
            "--item" => invocation.initial_items.push(value("--item")),
            "--add" => invocation.commands.push(Command::Add(value("--add"))),
            "--edit" => {
                let raw = value("--edit");
                let Some((index, text)) = parse_edit_spec(&edit_spec, &raw) else {
                    eprintln!("spinwheel: bad edit spec {raw:?} (expected n=text)");
                    process::exit(2);
                };
                invocation.commands.push(Command::Edit(index, text));
            }
            "--remove" => {
                let raw = value("--remove");
                match raw.parse() {
                    Ok(index) => invocation.commands.push(Command::Remove(index)),
                    Err(_) => {
                        eprintln!("spinwheel: bad index {raw:?}");
                        process::exit(2);
                    }
                }
            }
            "--spin" => invocation.commands.push(Command::Spin),
            "--out" => invocation.out_path = Some(value("--out")),
            "--help" | "-h" => usage(),
            other => {
                eprintln!("spinwheel: unknown option {other:?}");
                process::exit(2);
            }
        }
    }
    invocation
}

/// Split `n=text` into its parts.
fn parse_edit_spec(pattern: &Regex, raw: &str) -> Option<(usize, String)> {
    let captures = pattern.captures(raw)?;
    let index = captures.get(1)?.as_str().parse().ok()?;
    let text = captures.get(2)?.as_str().to_string();
    Some((index, text))
}

// ─── Host wiring ────────────────────────────────────────────────────────────

/// The persistence collaborator's hook: called once per change, reads
/// the item list synchronously.
fn notify_change(wheel: &Wheel) {
    println!("state changed: {} item(s)", wheel.items().len());
}

/// Apply one command, routing effects to the host's outputs.
fn run_command(wheel: &mut Wheel, command: &Command) {
    let effects = match command {
        Command::Add(text) => wheel.apply(WheelEvent::AddItem(text)),
        Command::Edit(index, text) => wheel.apply(WheelEvent::EditItem(*index, text)),
        Command::Remove(index) => wheel.apply(WheelEvent::RemoveItem(*index)),
        Command::Spin => {
            let started = wheel.apply(WheelEvent::SpinRequested);
            if wheel.is_spinning() {
                run_spin(wheel);
            } else {
                println!("nothing to spin");
            }
            started
        }
    };
    if effects.changed {
        notify_change(wheel);
    }
}

/// Drive a live spin to completion and print the winner.
fn run_spin(wheel: &mut Wheel) {
    let mut elapsed = 0.0;
    loop {
        elapsed += FRAME_MS;
        let effects = wheel.apply(WheelEvent::Tick { elapsed_ms: elapsed });
        if let Some(winner) = effects.outcome {
            if winner.is_empty() {
                println!("the wheel came up empty");
            } else {
                println!("winner: {winner}");
            }
            return;
        }
    }
}

/// Default seed when none is given: sub-second clock noise.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let invocation = parse_args(&args);

    let seed = invocation.seed.unwrap_or_else(clock_seed);
    let mut wheel = if invocation.initial_items.is_empty() {
        Wheel::new(seed)
    } else {
        let items = invocation
            .initial_items
            .iter()
            .map(|text| Item {
                text: text.clone(),
                // Placeholder fill; the store's contrast pass will keep
                // it label-safe. Collaborator-supplied lists normally
                // carry their own colors.
                color: Color::rgb(0x1E, 0x1E, 0x1E),
            })
            .collect();
        Wheel::with_items(items, seed)
    };

    for command in &invocation.commands {
        run_command(&mut wheel, command);
    }

    for (index, item) in wheel.items().iter().enumerate() {
        println!("{index}: {} [{}]", item.text, item.color);
    }

    if let Some(path) = invocation.out_path {
        let scene = wheel.scene(Circle::default(), &FontMetrics::bold_sans());
        let document = wheel_svg::render_document(&scene, CANVAS_PX, CANVAS_PX);
        if let Err(e) = fs::write(&path, document) {
            eprintln!("spinwheel: failed to write {path}: {e}");
            process::exit(1);
        }
        println!("wrote {path}");
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn edit_spec_parses_index_and_text() {
        let pattern = Regex::new(r"^(\d+)=(.*)$").unwrap();
        assert_eq!(
            parse_edit_spec(&pattern, "2=Movie night"),
            Some((2, "Movie night".to_string()))
        );
        assert_eq!(
            parse_edit_spec(&pattern, "0="),
            Some((0, String::new()))
        );
    }

    #[test]
    fn edit_spec_rejects_garbage() {
        let pattern = Regex::new(r"^(\d+)=(.*)$").unwrap();
        assert!(parse_edit_spec(&pattern, "x=1").is_none());
        assert!(parse_edit_spec(&pattern, "nope").is_none());
        assert!(parse_edit_spec(&pattern, "=text").is_none());
    }

    #[test]
    fn commands_keep_argv_order() {
        let invocation = parse_args(&args(&[
            "--add", "tacos", "--remove", "0", "--spin", "--add", "pizza",
        ]));
        assert_eq!(
            invocation.commands,
            vec![
                Command::Add("tacos".into()),
                Command::Remove(0),
                Command::Spin,
                Command::Add("pizza".into()),
            ]
        );
    }

    #[test]
    fn seed_and_out_are_captured() {
        let invocation = parse_args(&args(&["--seed", "7", "--out", "wheel.svg"]));
        assert_eq!(invocation.seed, Some(7));
        assert_eq!(invocation.out_path.as_deref(), Some("wheel.svg"));
    }

    #[test]
    fn initial_items_bypass_the_starter_set() {
        let invocation = parse_args(&args(&["--item", "a", "--item", "b"]));
        assert_eq!(invocation.initial_items, vec!["a", "b"]);
    }

    #[test]
    fn a_scripted_session_is_deterministic() {
        let mut wheel = Wheel::new(7);
        run_command(&mut wheel, &Command::Add("tacos".into()));
        run_command(&mut wheel, &Command::Remove(0));
        assert_eq!(wheel.items().len(), 5);
        run_command(&mut wheel, &Command::Spin);
        assert!(!wheel.is_spinning());

        let mut again = Wheel::new(7);
        run_command(&mut again, &Command::Add("tacos".into()));
        run_command(&mut again, &Command::Remove(0));
        run_command(&mut again, &Command::Spin);
        assert!((wheel.rotation_deg() - again.rotation_deg()).abs() < f64::EPSILON);
    }
}
