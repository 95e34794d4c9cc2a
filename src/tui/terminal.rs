// crossterm-backed Renderer: normal-screen messages plus alternate-screen live redraws.
// Raw mode stays off so Ctrl+C still reaches the process as SIGINT.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::execute;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::{Terminal, TerminalOptions, Viewport};

use super::{Renderer, draw_layout};
use crate::dashboard::layout::DashboardLayout;

pub struct TerminalRenderer<W: Write> {
    terminal: Terminal<CrosstermBackend<W>>,
    live: bool,
}

impl TerminalRenderer<Stdout> {
    /// Full-screen renderer on stdout. Fails when stdout is not a terminal.
    pub fn stdout() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        Ok(Self {
            terminal,
            live: false,
        })
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Renderer with a fixed drawing area; does not query the terminal size.
    pub fn with_viewport(writer: W, area: Rect) -> io::Result<Self> {
        let terminal = Terminal::with_options(
            CrosstermBackend::new(writer),
            TerminalOptions {
                viewport: Viewport::Fixed(area),
            },
        )?;
        Ok(Self {
            terminal,
            live: false,
        })
    }

    pub fn is_live(&self) -> bool {
        self.live
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) -> io::Result<()> {
        execute!(
            self.terminal.backend_mut(),
            Clear(ClearType::All),
            MoveTo(0, 0)
        )
    }

    fn print_banner(&mut self, message: &str) -> io::Result<()> {
        execute!(
            self.terminal.backend_mut(),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Green),
            Print(message),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\n")
        )
    }

    fn print_line(&mut self, message: &str) -> io::Result<()> {
        execute!(self.terminal.backend_mut(), Print(message), Print("\n"))
    }

    fn enter_live(&mut self) -> io::Result<()> {
        execute!(self.terminal.backend_mut(), EnterAlternateScreen, Hide)?;
        self.live = true;
        // Fresh buffers so the first frame repaints everything
        self.terminal.clear()
    }

    fn draw(&mut self, layout: &DashboardLayout) -> io::Result<()> {
        self.terminal.draw(|f| draw_layout(f, layout))?;
        Ok(())
    }

    fn leave_live(&mut self) -> io::Result<()> {
        if !self.live {
            return Ok(());
        }
        execute!(self.terminal.backend_mut(), Show, LeaveAlternateScreen)?;
        self.live = false;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        let _ = self.leave_live();
    }
}

/// Leave the alternate screen before the default hook prints the panic message.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        default_hook(info);
    }));
}
