use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use cascade_core::{Action, Grid, Piece, PieceKind};
use cascade_engine::{apply_action, freeze, inject_garbage, overlaps, try_drop, AttackConfig, PieceBag};

use crate::controller::{Command, Controller};

/// What happened during one step or one frame of commands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// A piece locked and the next one spawned.
    pub locked: bool,
    pub lines: u8,
    /// Rows to send to the opponent.
    pub garbage_out: u8,
    pub lost: bool,
}

impl StepReport {
    fn merge(&mut self, other: StepReport) {
        self.locked |= other.locked;
        self.lines = self.lines.saturating_add(other.lines);
        self.garbage_out = self.garbage_out.saturating_add(other.garbage_out);
        self.lost |= other.lost;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub pieces: u32,
    pub lines: u32,
    pub garbage_sent: u32,
    pub garbage_received: u32,
}

impl GameStats {
    pub fn absorb(&mut self, other: &GameStats) {
        self.pieces += other.pieces;
        self.lines += other.lines;
        self.garbage_sent += other.garbage_sent;
        self.garbage_received += other.garbage_received;
    }
}

/// One player's side: grid, falling piece, preview and a controller.
pub struct Game<C> {
    grid: Grid,
    piece: Piece,
    next: Option<PieceKind>,
    bag: PieceBag<StdRng>,
    rng: StdRng,
    controller: C,
    attack: AttackConfig,
    replan_row: i8,
    lost: bool,
    stats: GameStats,
}

impl<C: Controller> Game<C> {
    /// New game with a spawned piece. `seed` drives the piece bag and the
    /// garbage holes.
    pub fn new(controller: C, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bag = PieceBag::new(StdRng::seed_from_u64(rng.gen()));
        let mut game = Self {
            grid: Grid::new(),
            piece: Piece::spawn(PieceKind::T),
            next: None,
            bag,
            rng,
            controller,
            attack: AttackConfig::default(),
            replan_row: Piece::SPAWN_ROW,
            lost: false,
            stats: GameStats::default(),
        };
        game.reset();
        game
    }

    pub fn with_attack(mut self, attack: AttackConfig) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_replan_row(mut self, row: i8) -> Self {
        self.replan_row = row;
        self
    }

    /// Empty grid, fresh piece, nothing lost.
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.next = None;
        self.lost = false;
        self.stats = GameStats::default();
        self.spawn();
    }

    /// Promote the preview to the falling piece and draw a new preview.
    pub fn spawn(&mut self) {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.bag.next_piece(),
        };
        self.next = Some(self.bag.next_piece());
        self.piece = Piece::spawn(kind);
        self.stats.pieces += 1;

        if overlaps(&self.grid, &self.piece) {
            debug!("{kind:?} spawned into the stack after {} pieces", self.stats.pieces);
            self.lost = true;
            return;
        }
        self.controller.replan(&self.grid, &self.piece);
    }

    /// One gravity tick: replan on the replan row, apply the controller's
    /// action, then fall.
    pub fn step(&mut self) -> StepReport {
        if self.lost {
            return self.lost_report();
        }
        if self.piece.row == self.replan_row {
            self.controller.replan(&self.grid, &self.piece);
        }
        let action = self.controller.tick_action();
        self.act(action);
        self.fall()
    }

    /// A frame between ticks: apply whatever the controller queued.
    pub fn update(&mut self) -> StepReport {
        let mut report = StepReport::default();
        for command in self.controller.frame_commands() {
            if self.lost {
                break;
            }
            match command {
                Command::Act(action) => self.act(action),
                Command::SoftDrop => report.merge(self.fall()),
                Command::HardDrop => loop {
                    let step = self.fall();
                    report.merge(step);
                    if step.locked || step.lost {
                        break;
                    }
                },
            }
        }
        report.lost |= self.lost;
        report
    }

    /// Raise the stack by `rows` garbage rows and replan.
    pub fn receive_garbage(&mut self, rows: u8) {
        if rows == 0 || self.lost {
            return;
        }
        inject_garbage(&mut self.grid, rows, &mut self.rng);
        self.stats.garbage_received += rows as u32;
        self.controller.replan(&self.grid, &self.piece);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn controller(&self) -> &C {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut C {
        &mut self.controller
    }

    fn act(&mut self, action: Action) {
        if let Err(blocked) = apply_action(&self.grid, &mut self.piece, action) {
            trace!("{blocked}");
        }
    }

    /// Fall one row, or lock where it is and spawn the next piece.
    fn fall(&mut self) -> StepReport {
        if try_drop(&self.grid, &mut self.piece) {
            return StepReport::default();
        }

        let lines = freeze(&mut self.grid, &self.piece);
        let garbage_out = self.attack.rows_sent(lines);
        self.stats.lines += lines as u32;
        self.stats.garbage_sent += garbage_out as u32;
        if lines > 0 {
            trace!("{:?} cleared {lines}, sending {garbage_out}", self.piece.kind);
        }

        self.spawn();
        StepReport {
            locked: true,
            lines,
            garbage_out,
            lost: self.lost,
        }
    }

    fn lost_report(&self) -> StepReport {
        StepReport {
            lost: true,
            ..StepReport::default()
        }
    }
}
