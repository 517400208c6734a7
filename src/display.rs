//! Rendering layer — all terminal I/O lives here.
//!
//! Each function receives a mutable writer and a read-only snapshot of the
//! session.  No game logic is performed; this module only scales pixel
//! coordinates into terminal cells and queues terminal commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use side_shooter::entities::{Bullet, Direction, Enemy, Player, RenderSnapshot};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_TIME: Color = Color::Cyan;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET_FORWARD: Color = Color::Cyan;
const C_BULLET_VERTICAL: Color = Color::Magenta;
const C_HINT: Color = Color::DarkGrey;

// ── Pixel → cell mapping ──────────────────────────────────────────────────────

/// The play area inside the border, and the scale from viewport pixels to it.
struct Screen {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
    sx: f32,
    sy: f32,
}

impl Screen {
    fn new(width: u16, height: u16, snap: &RenderSnapshot<'_>) -> Self {
        // Row 0 is the HUD, rows 1 and height-2 are the border, height-1 the hint.
        let cols = width.saturating_sub(2).max(1);
        let rows = height.saturating_sub(4).max(1);
        Screen {
            left: 1,
            top: 2,
            cols,
            rows,
            sx: cols as f32 / snap.viewport_width,
            sy: rows as f32 / snap.viewport_height,
        }
    }

    /// Cells covered by a pixel box, clipped to the play area.
    /// Every visible box covers at least one cell.
    fn span(&self, x: f32, y: f32, w: f32, h: f32) -> Option<(u16, u16, u16, u16)> {
        let c0 = (x * self.sx).floor() as i32;
        let r0 = (y * self.sy).floor() as i32;
        let c1 = ((x + w) * self.sx).ceil().max(c0 as f32 + 1.0) as i32;
        let r1 = ((y + h) * self.sy).ceil().max(r0 as f32 + 1.0) as i32;

        let c0 = c0.max(0);
        let r0 = r0.max(0);
        let c1 = c1.min(self.cols as i32);
        let r1 = r1.min(self.rows as i32);
        if c0 >= c1 || r0 >= r1 {
            return None;
        }
        Some((
            self.left + c0 as u16,
            self.top + r0 as u16,
            self.left + c1 as u16,
            self.top + r1 as u16,
        ))
    }

    /// Single cell under a pixel point, if it is on screen.
    fn cell(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        let c = (x * self.sx).floor() as i32;
        let r = (y * self.sy).floor() as i32;
        if c < 0 || r < 0 || c >= self.cols as i32 || r >= self.rows as i32 {
            return None;
        }
        Some((self.left + c as u16, self.top + r as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, snap: &RenderSnapshot<'_>) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let screen = Screen::new(width, height, snap);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, snap, width)?;

    for enemy in snap.enemies {
        draw_enemy(out, &screen, enemy)?;
    }
    for bullet in snap.bullets {
        draw_bullet(out, &screen, bullet)?;
    }
    if let Some(player) = snap.player {
        draw_player(out, &screen, player)?;
    }

    draw_controls_hint(out, height)?;

    if snap.game_over {
        draw_game_over(out, snap, width, height)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, snap: &RenderSnapshot<'_>, width: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(format!("Score:{:>7}", snap.score)))?;

    let time_str = format!("Time:{:>6.1}s", snap.elapsed);
    let tx = width.saturating_sub(time_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(tx, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_TIME))?;
    out.queue(Print(&time_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn fill<W: Write>(
    out: &mut W,
    (c0, r0, c1, r1): (u16, u16, u16, u16),
    glyph: &str,
) -> std::io::Result<()> {
    let line = glyph.repeat((c1 - c0) as usize);
    for row in r0..r1 {
        out.queue(cursor::MoveTo(c0, row))?;
        out.queue(Print(&line))?;
    }
    Ok(())
}

fn draw_player<W: Write>(out: &mut W, screen: &Screen, p: &Player) -> std::io::Result<()> {
    let Some(span) = screen.span(p.x, p.y, p.width, p.height) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_PLAYER))?;
    fill(out, span, "▓")?;

    // Nose on the middle row, pointing the way the forward shot goes
    let (_, r0, c1, r1) = span;
    out.queue(cursor::MoveTo(c1.saturating_sub(1), r0 + (r1 - r0) / 2))?;
    out.queue(Print("▶"))?;
    Ok(())
}

fn draw_enemy<W: Write>(out: &mut W, screen: &Screen, e: &Enemy) -> std::io::Result<()> {
    let Some(span) = screen.span(e.x, e.y, e.width, e.height) else {
        return Ok(());
    };
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    fill(out, span, "█")?;

    let (c0, r0, _, r1) = span;
    out.queue(cursor::MoveTo(c0, r0 + (r1 - r0) / 2))?;
    out.queue(Print("◀"))?;
    Ok(())
}

fn draw_bullet<W: Write>(out: &mut W, screen: &Screen, b: &Bullet) -> std::io::Result<()> {
    let Some((col, row)) = screen.cell(b.x + b.width / 2.0, b.y + b.height / 2.0) else {
        return Ok(());
    };
    out.queue(cursor::MoveTo(col, row))?;
    match b.direction {
        Direction::Forward => {
            out.queue(style::SetForegroundColor(C_BULLET_FORWARD))?;
            out.queue(Print("━"))?;
        }
        Direction::Up | Direction::Down => {
            out.queue(style::SetForegroundColor(C_BULLET_VERTICAL))?;
            out.queue(Print("┃"))?;
        }
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("←↑↓→ / WASD : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(
    out: &mut W,
    snap: &RenderSnapshot<'_>,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let score_line = format!("Final Score: {:>6}", snap.score);
    let time_line = format!("Survived: {:>7.1}s", snap.elapsed);
    let hint = "R - Play Again  Q - Quit";

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
        (score_line.as_str(), Color::Yellow),
        (time_line.as_str(), Color::DarkGrey),
        (hint, Color::White),
    ];

    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    Ok(())
}
