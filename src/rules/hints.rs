//! Legal move enumeration.

use crate::core::action::MoveRequest;
use crate::core::state::GameState;
use crate::piles::Location;

impl GameState {
    /// Every pile-to-pile move `request_move` would currently accept.
    ///
    /// Sources are scanned waste first, then tableau and foundations left to
    /// right; tableau runs are listed shortest first. Drawing from the stock
    /// is always possible and is not listed.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<MoveRequest> {
        let sources = std::iter::once(Location::Waste)
            .chain(Location::tableau())
            .chain(Location::foundations());
        let destinations: Vec<Location> = Location::tableau().chain(Location::foundations()).collect();

        let mut moves = Vec::new();
        for from in sources {
            let movable = self.movable_run_length(from).unwrap_or(0);
            for run_length in 1..=movable {
                for &to in &destinations {
                    let request = MoveRequest::with_run(from, to, run_length);
                    if self.check_move(request).is_ok() {
                        moves.push(request);
                    }
                }
            }
        }
        moves
    }
}
