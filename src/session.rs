//! Game session: placement, shot history and per-ship damage for one game.

use alloc::vec::Vec;
use log::{debug, info};
use rand::Rng;

use crate::bitboard::Mask;
use crate::common::{Cell, GameError, SessionError, ShotOutcome};
use crate::config::GameConfig;
use crate::placement::generate;
use crate::ship::{PlacedShip, ShipStatus};

/// Current status of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    NotStarted,
    InProgress,
    /// Every ship is destroyed. Firing is still accepted.
    AllSunk,
}

/// What the player sees in a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Island,
    Hit,
    Miss,
    Selected,
    Sea,
}

/// State of one game, owned by whoever drives it.
///
/// A session only changes through [`GameSession::start`],
/// [`GameSession::select_cell`] and [`GameSession::fire`]. Rejected requests
/// return an error and leave the session exactly as it was.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    ships: Vec<ShipStatus>,
    shots: Vec<Cell>,
    shot_mask: Mask,
    hits: Vec<Cell>,
    hit_mask: Mask,
    selected: Option<Cell>,
    started: bool,
}

impl GameSession {
    /// Create an unstarted session on the reference layout.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// Create an unstarted session on a custom layout.
    pub fn with_config(config: GameConfig) -> Self {
        let empty = Mask::new(config.grid_size());
        Self {
            config,
            ships: Vec::new(),
            shots: Vec::new(),
            shot_mask: empty,
            hits: Vec::new(),
            hit_mask: empty,
            selected: None,
            started: false,
        }
    }

    /// Start a new game, discarding everything from the previous one.
    ///
    /// On error the session is left untouched.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        let placement = generate(
            rng,
            self.config.islands(),
            self.config.roster(),
            self.config.grid_size(),
        )?;
        self.ships = placement.into_iter().map(ShipStatus::new).collect();
        self.shots.clear();
        self.shot_mask.clear_all();
        self.hits.clear();
        self.hit_mask.clear_all();
        self.selected = None;
        self.started = true;
        info!("new game started with {} ships", self.ships.len());
        Ok(())
    }

    /// Mark `cell` as the next target, replacing any earlier selection.
    pub fn select_cell(&mut self, cell: Cell) -> Result<(), SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        if !cell.in_bounds(self.config.grid_size()) {
            return Err(SessionError::OutOfBounds(cell));
        }
        if self.config.is_island(cell) {
            return Err(SessionError::IslandCell(cell));
        }
        if self.shot_mask.contains(cell) {
            return Err(SessionError::AlreadyShot(cell));
        }
        self.selected = Some(cell);
        Ok(())
    }

    /// Fire at the selected cell and clear the selection.
    pub fn fire(&mut self) -> Result<ShotOutcome, SessionError> {
        if !self.started {
            return Err(SessionError::NotStarted);
        }
        let cell = self.selected.ok_or(SessionError::NothingSelected)?;

        // masks are committed only once the shot is accepted
        let mut shot_mask = self.shot_mask;
        let fresh = shot_mask
            .insert(cell)
            .map_err(|_| SessionError::OutOfBounds(cell))?;
        if !fresh {
            return Err(SessionError::AlreadyShot(cell));
        }
        let owner = self.ships.iter().position(|s| s.ship().contains(cell));
        let mut hit_mask = self.hit_mask;
        if owner.is_some() {
            hit_mask
                .insert(cell)
                .map_err(|_| SessionError::OutOfBounds(cell))?;
        }

        self.shot_mask = shot_mask;
        self.hit_mask = hit_mask;
        self.shots.push(cell);
        self.selected = None;

        let outcome = match owner {
            Some(idx) => {
                let status = &mut self.ships[idx];
                status.register_hit();
                self.hits.push(cell);
                if status.destroyed() {
                    ShotOutcome::Sunk(status.ship().label())
                } else {
                    ShotOutcome::Hit
                }
            }
            None => ShotOutcome::Miss,
        };
        debug!("shot at {}: {:?}", cell, outcome);
        Ok(outcome)
    }

    /// Layout this session plays on.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Cells fired upon, oldest first.
    pub fn shots(&self) -> &[Cell] {
        &self.shots
    }

    /// Shots that struck a ship, oldest first.
    pub fn hits(&self) -> &[Cell] {
        &self.hits
    }

    /// Per-ship damage, in roster order.
    pub fn ship_statuses(&self) -> &[ShipStatus] {
        &self.ships
    }

    /// Ships of the current game, in roster order.
    pub fn placement(&self) -> impl Iterator<Item = &PlacedShip> + '_ {
        self.ships.iter().map(|s| s.ship())
    }

    pub fn selected_cell(&self) -> Option<Cell> {
        self.selected
    }

    /// Number of ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.destroyed()).count()
    }

    /// Returns `true` once a started game has no ship left afloat.
    pub fn all_destroyed(&self) -> bool {
        self.started && self.ships.iter().all(|s| s.destroyed())
    }

    pub fn status(&self) -> SessionStatus {
        if !self.started {
            SessionStatus::NotStarted
        } else if self.all_destroyed() {
            SessionStatus::AllSunk
        } else {
            SessionStatus::InProgress
        }
    }

    /// Classify `cell` for display.
    pub fn cell_view(&self, cell: Cell) -> CellView {
        if self.config.is_island(cell) {
            CellView::Island
        } else if self.shot_mask.contains(cell) {
            if self.hit_mask.contains(cell) {
                CellView::Hit
            } else {
                CellView::Miss
            }
        } else if self.selected == Some(cell) {
            CellView::Selected
        } else {
            CellView::Sea
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
