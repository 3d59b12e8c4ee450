use std::fmt::Display;

use aocv_webclient::PuzzleRef;
use colored::{Color, ColoredString, Colorize};
use crossterm::terminal;

use crate::puzzle::{PuzzleInstance, Slot};
use crate::scoreboard::Scoreboard;
use crate::verify::Verification;

#[macro_export]
macro_rules! print_success {
    ($fmt:literal, $($e:tt)*) => {
        use ::colored::Colorize as _;
        println!("{}", format!($fmt, $($e)*).green())
    }
}

pub fn is_truecolor_supported() -> bool {
    let Ok(v) = std::env::var("COLORTERM") else {
        return false
    };
    matches!(v.as_str(), "truecolor" | "24bit")
}

pub trait ColorTheme {
    fn color(&self) -> Color;
}

impl ColorTheme for Verification {
    fn color(&self) -> Color {
        use Verification::*;
        if !self::is_truecolor_supported() {
            return match self {
                Correct(_) => Color::Green,
                Wrong(_) => Color::Red,
                RateLimited => Color::Yellow,
                Unknown => Color::BrightBlack,
            };
        }

        match self {
            Correct(_) => Color::TrueColor {
                r: 30,
                g: 180,
                b: 40,
            },
            Wrong(_) => Color::TrueColor {
                r: 220,
                g: 42,
                b: 42,
            },
            RateLimited => Color::TrueColor {
                r: 210,
                g: 138,
                b: 4,
            },
            Unknown => Color::TrueColor {
                r: 110,
                g: 110,
                b: 110,
            },
        }
    }
}

fn badge_label<E>(outcome: &Result<Verification, E>) -> &'static str {
    match outcome {
        Ok(Verification::Correct(_)) => "OK",
        Ok(Verification::Wrong(_)) => "NG",
        Ok(Verification::RateLimited) => "RL",
        Ok(Verification::Unknown) => "--",
        Err(_) => "!!",
    }
}

pub fn verification_badge<E>(outcome: &Result<Verification, E>) -> ColoredString {
    let bg = match outcome {
        Ok(v) => v.color(),
        Err(_) => Color::Magenta,
    };
    let fg = if is_truecolor_supported() {
        Color::TrueColor {
            r: 255,
            g: 255,
            b: 255,
        }
    } else {
        Color::BrightWhite
    };
    format!(" {} ", badge_label(outcome))
        .on_color(bg)
        .bold()
        .color(fg)
}

/// Human readable verdict for one slot.
pub fn slot_message<E: Display>(candidate: &str, outcome: &Result<Verification, E>) -> String {
    use Verification::*;
    match outcome {
        Ok(Correct(answer)) => format!("Answer '{}' is correct!", answer),
        Ok(Wrong(right)) if right.is_empty() => {
            format!("Answer '{}' is wrong! Solution is unknown", candidate)
        }
        Ok(Wrong(right)) => format!(
            "Answer '{}' is wrong! Correct solution is: '{}'",
            candidate, right
        ),
        Ok(RateLimited) => format!(
            "Answer '{}' is unchecked!: answered too recently, try again later",
            candidate
        ),
        Ok(Unknown) => "Answer is unknown! (skipping solution fetch to be friendly)".to_owned(),
        Err(e) => format!("Answer '{}' is unchecked!: {}", candidate, e),
    }
}

fn slot_header(seq: usize, puzzle: PuzzleRef, level: impl Display) -> String {
    format!(
        "TEST {:4} [{}, {:2}, {:>2}]:",
        seq, puzzle.year, puzzle.day, level
    )
}

pub fn print_slot_report<E: Display>(
    seq: usize,
    puzzle: PuzzleRef,
    slot: Slot,
    candidate: &str,
    outcome: &Result<Verification, E>,
) {
    println!(
        "{} {} {}",
        slot_header(seq, puzzle, slot.level()).cyan(),
        verification_badge(outcome),
        slot_message(candidate, outcome),
    );
}

pub fn print_puzzle_failure(seq: usize, puzzle: PuzzleRef, err: &anyhow::Error) {
    println!(
        "{} {} {}",
        slot_header(seq, puzzle, "-").cyan(),
        " !! ".on_color(Color::Magenta).bold(),
        format!("{:#}", err).bright_red(),
    );
}

pub fn print_candidates(instance: &PuzzleInstance) {
    for slot in Slot::all() {
        let answer = instance.answer(slot);
        let shown = if answer.is_empty() {
            "<EMPTY>".magenta().dimmed()
        } else {
            answer.bold().bright_white()
        };
        println!(
            "{} level {}: {}",
            instance.puzzle.to_string().cyan(),
            slot.level(),
            shown
        );
    }
}

pub fn summary_lines(sb: &Scoreboard) -> Vec<String> {
    vec![
        format!(
            "Correct: {}, Wrong: {}, Unchecked: {} (of {})",
            sb.correct(),
            sb.wrong(),
            sb.unchecked,
            sb.total_slots
        ),
        format!("Problems with *: {}", sb.correct_per_level[0]),
        format!("Problems with **: {}", sb.correct_per_level[1]),
        format!("Solved: {}, Unsolved: {}", sb.solved(), sb.unsolved()),
    ]
}

pub fn print_summary(sb: &Scoreboard) {
    let (cols, _) = terminal::size().unwrap_or((40, 40));

    const BOLD_LINE: &str = "━";
    let bold_bar = BOLD_LINE.repeat(cols as usize).blue().bold();

    println!("{}", bold_bar);
    for (i, line) in self::summary_lines(sb).into_iter().enumerate() {
        let line = match i {
            0 if sb.wrong() > 0 => line.bright_red().bold(),
            0 => line.green().bold(),
            _ => line.normal(),
        };
        println!("{}", line);
    }
    println!("{}", bold_bar);
}
