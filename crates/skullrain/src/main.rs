use rand::{SeedableRng, rngs::StdRng};
use ratatui::DefaultTerminal;
use skullrain_art::{ArtBuffer, DEFAULT_ART_PATH};
use skullrain_core::ColorSelection;
use tracing::debug;

mod app;
mod cli;
mod telemetry;

use app::App;
use cli::Invocation;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    telemetry::init();

    let args = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned());
    let colors = match cli::parse(args) {
        Invocation::Help => {
            print!("{}", cli::usage());
            return Ok(());
        }
        Invocation::Animate(colors) => colors,
    };
    debug!(rain = %colors.rain, art = %colors.art, "colors selected");

    // Load before touching the terminal so a missing asset is reported on a
    // normal screen.
    let art = ArtBuffer::load(DEFAULT_ART_PATH)?;

    // Setup can fail after raw mode is already on.
    let terminal = ratatui::try_init().inspect_err(|_| ratatui::restore())?;
    let result = run(terminal, art, colors);
    ratatui::restore();
    result
}

fn run(
    terminal: DefaultTerminal,
    art: ArtBuffer,
    colors: ColorSelection,
) -> color_eyre::Result<()> {
    let size = terminal.size()?;
    App::new(art, colors, size, StdRng::from_entropy()).run(terminal)
}
