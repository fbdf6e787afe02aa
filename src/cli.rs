#![cfg(feature = "std")]
//! Terminal front end: command parsing, board rendering and the play loop.

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use rand::Rng;

use crate::common::{Cell, SessionError, ShotOutcome};
use crate::coordinates::{latitude_degrees, longitude_degrees, to_coordinates};
use crate::session::{CellView, GameSession, SessionStatus};

/// A single line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Select(Cell),
    Fire,
    New,
    Ships,
    Help,
    Quit,
}

/// Column letter and 1-based row, e.g. `C4` for `Cell { x: 2, y: 3 }`.
pub fn cell_label(cell: Cell) -> String {
    let col = (b'A' + cell.x as u8) as char;
    format!("{}{}", col, cell.y + 1)
}

/// Parse a cell label such as `c4` or `J10`.
pub fn parse_cell(input: &str, grid_size: usize) -> Result<Cell, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., C4)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    let last_col = (b'A' + grid_size.saturating_sub(1) as u8) as char;
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!(
            "Invalid column '{}' - must be a letter A-{}",
            col_ch, last_col
        ));
    }
    let x = (col_ch as u8 - b'A') as usize;
    if x >= grid_size {
        return Err(format!(
            "Column '{}' out of bounds - must be A-{}",
            col_ch, last_col
        ));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, grid_size))?;
    if row == 0 || row > grid_size {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, grid_size));
    }
    Ok(Cell::new(x, row - 1))
}

/// Parse one line of input into a [`Command`].
pub fn parse_command(line: &str, grid_size: usize) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let head = words.next().ok_or("Empty input")?;
    let command = match head.to_ascii_lowercase().as_str() {
        "fire" | "f" => Command::Fire,
        "new" | "n" => Command::New,
        "ships" | "s" => Command::Ships,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        "select" => {
            let target = words.next().ok_or("select needs a cell, e.g. select C4")?;
            Command::Select(parse_cell(target, grid_size)?)
        }
        _ => Command::Select(parse_cell(head, grid_size)?),
    };
    if words.next().is_some() {
        return Err(format!("Unexpected input after '{}'", head));
    }
    Ok(command)
}

/// Draw the board as seen by the player.
pub fn render_board(session: &GameSession) -> String {
    let size = session.config().grid_size();
    let mut out = String::new();
    out.push_str("    ");
    for x in 0..size {
        let _ = write!(out, " {}", (b'A' + x as u8) as char);
    }
    out.push('\n');
    for y in 0..size {
        let _ = write!(out, "  {:2}", y + 1);
        for x in 0..size {
            let ch = match session.cell_view(Cell::new(x, y)) {
                CellView::Island => '#',
                CellView::Hit => 'X',
                CellView::Miss => 'o',
                CellView::Selected => '*',
                CellView::Sea => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out.push_str("    Legend: #=Island  X=Hit  o=Miss  *=Selected  .=Sea\n");
    if let Some(cell) = session.selected_cell() {
        let _ = writeln!(out, "    Selected {}: {}", cell_label(cell), to_coordinates(cell));
    }
    out
}

/// List every ship with its damage.
pub fn render_ships(session: &GameSession) -> String {
    let mut out = String::from("    Ships:\n");
    for status in session.ship_statuses() {
        let ship = status.ship();
        let state = if status.destroyed() { "SUNK" } else { "Afloat" };
        let _ = writeln!(
            out,
            "      {} ({}): {}/{} hits, {}",
            ship.label(),
            ship.length(),
            status.hits(),
            ship.length(),
            state
        );
    }
    out
}

/// Latitude of every row and longitude of every column.
pub fn render_coordinate_table(grid_size: usize) -> String {
    let mut out = String::from("Rows:\n");
    for y in 0..grid_size {
        let coords = to_coordinates(Cell::new(0, y));
        let _ = writeln!(
            out,
            "  {:2}  {:>8}  ({:.4})",
            y + 1,
            coords.latitude,
            latitude_degrees(y)
        );
    }
    out.push_str("Columns:\n");
    for x in 0..grid_size {
        let coords = to_coordinates(Cell::new(x, 0));
        let _ = writeln!(
            out,
            "  {:>2}  {:>8}  ({:.4})",
            (b'A' + x as u8) as char,
            coords.longitude,
            longitude_degrees(x)
        );
    }
    out
}

const HELP: &str = "Commands:
  <cell> | select <cell>   choose a target, e.g. C4
  fire                     shoot at the selected cell
  new                      start a new game
  ships                    show ship status
  help                     show this text
  quit                     leave the game
";

fn describe_rejection(err: SessionError) -> String {
    match err {
        SessionError::AlreadyShot(cell) => format!("{} has already been fired upon", cell_label(cell)),
        SessionError::IslandCell(cell) => format!("{} is an island", cell_label(cell)),
        SessionError::OutOfBounds(cell) => format!("{} is outside the grid", cell_label(cell)),
        SessionError::NothingSelected => "Select a cell before firing".to_string(),
        SessionError::NotStarted => "Start a game with 'new'".to_string(),
    }
}

/// Drive `session` from `input` until `quit` or end of input.
///
/// The session is started immediately, then every command is applied and
/// the board redrawn to `output`.
pub fn run<R, I, O>(
    session: &mut GameSession,
    rng: &mut R,
    input: I,
    mut output: O,
) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    session.start(rng).map_err(|e| anyhow::anyhow!(e))?;
    writeln!(output, "Coordinates Battleship - type 'help' for commands")?;
    write!(output, "{}", render_board(session))?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line, session.config().grid_size()) {
            Ok(command) => command,
            Err(msg) => {
                writeln!(output, "{}", msg)?;
                continue;
            }
        };
        match command {
            Command::Quit => break,
            Command::Help => {
                write!(output, "{}", HELP)?;
                continue;
            }
            Command::Ships => {
                write!(output, "{}", render_ships(session))?;
                continue;
            }
            Command::New => {
                session.start(rng).map_err(|e| anyhow::anyhow!(e))?;
                writeln!(output, "New game started.")?;
            }
            Command::Select(cell) => {
                if let Err(e) = session.select_cell(cell) {
                    writeln!(output, "{}", describe_rejection(e))?;
                    continue;
                }
            }
            Command::Fire => {
                let previous = session.status();
                match session.fire() {
                    Ok(ShotOutcome::Miss) => writeln!(output, "Miss.")?,
                    Ok(ShotOutcome::Hit) => writeln!(output, "Hit!")?,
                    Ok(ShotOutcome::Sunk(label)) => writeln!(output, "Hit! {} destroyed!", label)?,
                    Err(e) => {
                        writeln!(output, "{}", describe_rejection(e))?;
                        continue;
                    }
                }
                if previous != SessionStatus::AllSunk && session.all_destroyed() {
                    writeln!(
                        output,
                        "All ships destroyed in {} shots! Type 'new' to play again.",
                        session.shots().len()
                    )?;
                }
            }
        }
        write!(output, "{}", render_board(session))?;
    }
    output.flush()?;
    Ok(())
}
