//! Command line handling.
//!
//! The accepted grammar is deliberately loose: `-r <color>` and
//! `-s <color>` in any order, `-h`/`--help` anywhere, and anything else
//! skipped. Mistakes show the usage text instead of failing.

use skullrain_core::{ColorSelection, Palette};

/// Fewest arguments that can carry both `-r <color>` and `-s <color>`.
const MIN_ARGS: usize = 4;

/// What the command line asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage and exit successfully.
    Help,
    /// Run the animation with the given colors.
    Animate(ColorSelection),
}

/// Interpret the arguments following the program name.
pub fn parse<I, S>(args: I) -> Invocation
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(Into::into).collect();
    if args.len() < MIN_ARGS {
        return Invocation::Help;
    }

    let mut rain = None;
    let mut skull = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-r" => {
                if let Some(value) = iter.next() {
                    rain = Some(value.as_str());
                }
            }
            "-s" => {
                if let Some(value) = iter.next() {
                    skull = Some(value.as_str());
                }
            }
            "-h" | "--help" => return Invocation::Help,
            _ => {}
        }
    }

    match (rain, skull) {
        (Some(rain), Some(skull)) => {
            Invocation::Animate(ColorSelection::from_names(Some(rain), Some(skull)))
        }
        _ => Invocation::Help,
    }
}

/// Usage text shown for `--help` and for incomplete command lines.
pub fn usage() -> String {
    let bin = env!("CARGO_PKG_NAME");
    let colors = Palette::ALL
        .iter()
        .map(|slot| slot.name())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Usage:\n  {bin} -r <rain_color> -s <skull_color>\n\n\
         Available colors: {colors}\n\n\
         Example:\n  {bin} -r green -s red\n"
    )
}
