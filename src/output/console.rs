//! Console confirmation line

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Decide whether stdout should be colored.
pub fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable (https://no-color.org/)
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }
    if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
        return false;
    }
    io::stdout().is_terminal()
}

/// Text of the confirmation line, without color.
pub fn confirmation_message(path: &Path) -> String {
    format!("Project structure written to {}", path.display())
}

/// Print the confirmation line naming the output file.
pub fn print_confirmation(path: &Path, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_confirmation(&mut stdout, path)
}

fn write_confirmation<W: WriteColor>(out: &mut W, path: &Path) -> io::Result<()> {
    write!(out, "Project structure ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(out, "written")?;
    out.reset()?;
    write!(out, " to ")?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{}", path.display())?;
    out.reset()?;
    writeln!(out)
}
