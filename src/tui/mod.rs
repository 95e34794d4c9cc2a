// Terminal rendering: the Renderer seam plus its ratatui/crossterm implementation

mod draw;
mod terminal;

pub use draw::draw_layout;
pub use terminal::{TerminalRenderer, install_panic_hook};

use crate::dashboard::layout::DashboardLayout;
use std::io;

/// Display backend driven by the dashboard loop.
pub trait Renderer {
    /// Clear the normal screen.
    fn clear(&mut self) -> io::Result<()>;
    /// Print a highlighted one-line message to the normal screen.
    fn print_banner(&mut self, message: &str) -> io::Result<()>;
    /// Print a plain line to the normal screen.
    fn print_line(&mut self, message: &str) -> io::Result<()>;
    /// Switch to the alternate screen for in-place redraws.
    fn enter_live(&mut self) -> io::Result<()>;
    /// Redraw the whole layout.
    fn draw(&mut self, layout: &DashboardLayout) -> io::Result<()>;
    /// Return to the normal screen. Safe to call when not live.
    fn leave_live(&mut self) -> io::Result<()>;
}
