//! Non-interactive playback of a move sequence.

use serde::Serialize;
use strictly_timetravel::{Board, GameController, MoveListEntry, Win};
use tracing::{info, instrument, warn};

/// A cell the replay could not play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedMove {
    /// Position of the move in the input sequence.
    pub ordinal: usize,
    /// Requested cell.
    pub cell: usize,
    /// Why it was rejected.
    pub reason: String,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Board after the last accepted move.
    pub board: Board,
    /// Status text as shown in the UI.
    pub status: String,
    /// Completed line, if any.
    pub winner: Option<Win>,
    /// The move list as shown in the UI.
    pub moves: Vec<MoveListEntry>,
    /// Moves skipped because they were illegal.
    pub rejected: Vec<RejectedMove>,
}

impl ReplayReport {
    /// Formats the report for a terminal.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.board, self.status);
        if let Some(win) = &self.winner {
            let [a, b, c] = win.line();
            out.push_str(&format!("Winning line: {} {} {}\n", a, b, c));
        }
        out.push('\n');
        for entry in &self.moves {
            out.push_str(&format!("{}. {}\n", entry.step + 1, entry.label));
        }
        for rejected in &self.rejected {
            out.push_str(&format!(
                "skipped move {} (cell {}): {}\n",
                rejected.ordinal + 1,
                rejected.cell,
                rejected.reason
            ));
        }
        out
    }
}

/// Plays `cells` in order through a fresh game.
///
/// Illegal moves are skipped the same way the UI ignores them, and listed in
/// the report.
#[instrument]
pub fn replay(cells: &[usize]) -> ReplayReport {
    let mut game = GameController::new();
    let mut rejected = Vec::new();

    for (ordinal, &cell) in cells.iter().enumerate() {
        if let Err(e) = game.play(cell) {
            warn!(ordinal, cell, error = %e, "Skipping illegal move");
            rejected.push(RejectedMove {
                ordinal,
                cell,
                reason: e.to_string(),
            });
        }
    }

    info!(
        steps = game.history_len(),
        rejected = rejected.len(),
        "Replay finished"
    );
    ReplayReport {
        board: *game.current_board(),
        status: game.status_line(),
        winner: game.winner(),
        moves: game.move_list(),
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_timetravel::Mark;

    #[test]
    fn test_replay_reports_winner() {
        let report = replay(&[0, 4, 1, 5, 2]);
        assert_eq!(report.status, "Winner: X");
        assert_eq!(
            report.winner.map(|w| (w.winner(), w.line())),
            Some((Mark::X, [0, 1, 2]))
        );
        assert_eq!(report.moves.len(), 6);
        assert!(report.rejected.is_empty());
    }

    #[test]
    fn test_replay_skips_illegal_moves() {
        let report = replay(&[4, 4, 12, 0]);
        assert_eq!(report.moves.len(), 3);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[0].cell, 4);
        assert_eq!(report.rejected[1].ordinal, 2);
        assert_eq!(report.status, "Next player: X");
    }

    #[test]
    fn test_text_report() {
        let text = replay(&[0, 1, 3, 4, 6]).to_text();
        assert!(text.starts_with("X|O|3\n-+-+-\nX|O|6\n-+-+-\nX|8|9"));
        assert!(text.contains("Winner: X"));
        assert!(text.contains("Winning line: 0 3 6"));
        assert!(text.contains("1. Game start"));
        assert!(text.contains("6. You are at move #5"));
    }
}
