//! Terminal window built on crossterm
//!
//! The arena is stretched over the whole terminal grid. A cell is painted
//! when its center falls inside a shape. Mouse motion drives the pointer;
//! `q`, `Esc` or `Ctrl-C` close the window.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
};
use crossterm::{execute, queue};

use super::Surface;
use crate::consts::TITLE;
use crate::renderer::Rgb;
use crate::sim::BBox;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Rgb,
    bg: Rgb,
}

/// Arena-to-grid mapping
#[derive(Debug, Clone, Copy, PartialEq)]
struct Grid {
    cols: u16,
    rows: u16,
    cell_w: f32,
    cell_h: f32,
}

impl Grid {
    fn new(cols: u16, rows: u16, arena_w: f32, arena_h: f32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell_w: arena_w / cols as f32,
            cell_h: arena_h / rows as f32,
        }
    }

    fn len(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Arena coordinates of the center of cell (`col`, `row`)
    fn cell_center(&self, col: u16, row: u16) -> (f32, f32) {
        (
            (col as f32 + 0.5) * self.cell_w,
            (row as f32 + 0.5) * self.cell_h,
        )
    }

    /// Cell containing arena point (`x`, `y`), clamped to the grid
    fn cell_at(&self, x: f32, y: f32) -> (u16, u16) {
        let col = (x / self.cell_w).floor().clamp(0.0, (self.cols - 1) as f32) as u16;
        let row = (y / self.cell_h).floor().clamp(0.0, (self.rows - 1) as f32) as u16;
        (col, row)
    }

    /// Cells a box could touch, clamped to the grid
    fn span(&self, rect: &BBox) -> (u16, u16, u16, u16) {
        let (c0, r0) = self.cell_at(rect.x0, rect.y0);
        let (c1, r1) = self.cell_at(rect.x1, rect.y1);
        (c0, r0, c1, r1)
    }
}

pub struct TerminalSurface {
    out: Stdout,
    arena_w: f32,
    arena_h: f32,
    grid: Grid,
    cells: Vec<Cell>,
    background: Rgb,
    pointer_x: Option<f32>,
    open: bool,
}

impl TerminalSurface {
    /// Enter raw mode and the alternate screen with mouse capture enabled
    pub fn new(arena_w: f32, arena_h: f32) -> io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        let mut out = io::stdout();

        enable_raw_mode()?;
        if let Err(e) = enter_screen(&mut out) {
            restore_terminal(&mut out);
            return Err(e);
        }

        let grid = Grid::new(cols, rows, arena_w, arena_h);
        log::info!("Terminal surface {}x{} cells", grid.cols, grid.rows);

        Ok(Self {
            out,
            arena_w,
            arena_h,
            grid,
            cells: vec![Self::blank(Rgb::WHITE); grid.len()],
            background: Rgb::WHITE,
            pointer_x: None,
            open: true,
        })
    }

    fn blank(bg: Rgb) -> Cell {
        Cell { ch: ' ', fg: bg, bg }
    }

    fn resize(&mut self, cols: u16, rows: u16) {
        self.grid = Grid::new(cols, rows, self.arena_w, self.arena_h);
        self.cells = vec![Self::blank(self.background); self.grid.len()];
        log::debug!("Terminal resized to {}x{}", cols, rows);
    }

    fn cell_mut(&mut self, col: u16, row: u16) -> &mut Cell {
        let index = row as usize * self.grid.cols as usize + col as usize;
        &mut self.cells[index]
    }

    /// Paint every cell whose center passes `inside`; small shapes get at
    /// least the cell under their center
    fn paint(&mut self, rect: BBox, color: Rgb, inside: impl Fn(f32, f32) -> bool) {
        let (c0, r0, c1, r1) = self.grid.span(&rect);
        let mut painted = false;
        for row in r0..=r1 {
            for col in c0..=c1 {
                let (x, y) = self.grid.cell_center(col, row);
                if inside(x, y) {
                    *self.cell_mut(col, row) = Cell {
                        ch: ' ',
                        fg: color,
                        bg: color,
                    };
                    painted = true;
                }
            }
        }
        if !painted {
            let center = rect.center();
            let (col, row) = self.grid.cell_at(center.x, center.y);
            *self.cell_mut(col, row) = Cell {
                ch: ' ',
                fg: color,
                bg: color,
            };
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => {
                let ctrl_c = code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || matches!(code, KeyCode::Char('q') | KeyCode::Esc) {
                    log::info!("Quit requested");
                    self.open = false;
                }
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Moved | MouseEventKind::Drag(_) | MouseEventKind::Down(_),
                column,
                ..
            }) => {
                let (x, _) = self.grid.cell_center(column.min(self.grid.cols - 1), 0);
                self.pointer_x = Some(x);
            }
            Event::Resize(cols, rows) => self.resize(cols, rows),
            _ => {}
        }
    }

    fn flush_frame(&mut self) -> io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        for row in 0..self.grid.rows {
            queue!(self.out, MoveTo(0, row))?;
            for col in 0..self.grid.cols {
                let cell = self.cells[row as usize * self.grid.cols as usize + col as usize];
                if fg != Some(cell.fg) {
                    queue!(self.out, SetForegroundColor(to_term(cell.fg)))?;
                    fg = Some(cell.fg);
                }
                if bg != Some(cell.bg) {
                    queue!(self.out, SetBackgroundColor(to_term(cell.bg)))?;
                    bg = Some(cell.bg);
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }
}

fn enter_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(
        out,
        SetTitle(TITLE),
        EnterAlternateScreen,
        EnableMouseCapture,
        Hide
    )
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, ResetColor, Show, DisableMouseCapture, LeaveAlternateScreen)
}

/// Undo every setup step; each one is harmless if it never took effect
fn restore_terminal<W: Write>(out: &mut W) {
    let _ = leave_screen(out);
    let _ = disable_raw_mode();
}

fn to_term(color: Rgb) -> TermColor {
    TermColor::Rgb {
        r: color.0,
        g: color.1,
        b: color.2,
    }
}

impl Surface for TerminalSurface {
    fn is_open(&self) -> bool {
        self.open
    }

    fn poll_pointer(&mut self) -> Option<f32> {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => match event::read() {
                    Ok(event) => self.handle_event(event),
                    Err(e) => {
                        log::warn!("Terminal read failed: {}", e);
                        self.open = false;
                        break;
                    }
                },
                Ok(false) => break,
                Err(e) => {
                    log::warn!("Terminal poll failed: {}", e);
                    self.open = false;
                    break;
                }
            }
        }
        self.pointer_x
    }

    fn clear(&mut self, background: Rgb) {
        self.background = background;
        self.cells.fill(Self::blank(background));
    }

    fn fill_rect(&mut self, rect: BBox, color: Rgb) {
        self.paint(rect, color, |x, y| {
            x >= rect.x0 && x <= rect.x1 && y >= rect.y0 && y <= rect.y1
        });
    }

    fn fill_oval(&mut self, rect: BBox, color: Rgb) {
        let center = rect.center();
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        self.paint(rect, color, |x, y| {
            let dx = (x - center.x) / rx;
            let dy = (y - center.y) / ry;
            dx * dx + dy * dy <= 1.0
        });
    }

    fn draw_text(&mut self, x: f32, y: f32, text: &str, color: Rgb) {
        let (center_col, row) = self.grid.cell_at(x, y);
        let len = text.chars().count() as u16;
        let start = center_col.saturating_sub(len / 2);
        for (i, ch) in text.chars().enumerate() {
            let col = start + i as u16;
            if col >= self.grid.cols {
                break;
            }
            let cell = self.cell_mut(col, row);
            cell.ch = ch;
            cell.fg = color;
        }
    }

    fn present(&mut self) {
        if let Err(e) = self.flush_frame() {
            log::warn!("Terminal write failed: {}", e);
            self.open = false;
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        restore_terminal(&mut self.out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_maps_arena_onto_cells() {
        let grid = Grid::new(100, 40, 500.0, 680.0);
        assert_eq!(grid.cell_w, 5.0);
        assert_eq!(grid.cell_h, 17.0);
        assert_eq!(grid.cell_at(0.0, 0.0), (0, 0));
        assert_eq!(grid.cell_at(499.0, 679.0), (99, 39));
        // Out-of-arena points clamp to the border cells
        assert_eq!(grid.cell_at(-20.0, 900.0), (0, 39));
        assert_eq!(grid.cell_center(1, 0), (7.5, 8.5));
    }

    #[test]
    fn test_span_covers_box() {
        let grid = Grid::new(100, 40, 500.0, 680.0);
        let (c0, r0, c1, r1) = grid.span(&BBox::new(5.0, 50.0, 49.5, 70.0));
        assert_eq!((c0, r0, c1, r1), (1, 2, 9, 4));
    }

    #[test]
    fn test_enter_screen_sets_title_and_alternate_screen() {
        let mut out = Vec::new();
        enter_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();

        assert!(written.contains("\x1b]0;Brick Breaker\x07"));
        assert!(written.contains("\x1b[?1049h"));
        assert!(written.contains("\x1b[?25l"));
    }

    #[test]
    fn test_leave_screen_undoes_every_step() {
        let mut out = Vec::new();
        leave_screen(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();

        // Cursor shown, mouse capture released, then the main screen restored
        let show = written.find("\x1b[?25h").unwrap();
        let mouse_off = written.find("\x1b[?1000l").unwrap();
        let main_screen = written.find("\x1b[?1049l").unwrap();
        assert!(show < mouse_off && mouse_off < main_screen);
    }

    #[test]
    fn test_degenerate_terminal_size() {
        let grid = Grid::new(0, 0, 500.0, 680.0);
        assert_eq!((grid.cols, grid.rows), (1, 1));
        assert_eq!(grid.len(), 1);
    }
}
