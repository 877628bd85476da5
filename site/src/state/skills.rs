//! Skills section state: the selected tab and its jigsaw board.
//!
//! DESIGN
//! ======
//! Each tab owns a fixed skill list and accent colour. Selecting a tab throws
//! the previous board away and builds a fresh, assembled one seeded by the
//! tab key, so a tab always shows the same edge shapes.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use puzzle::board::{Board, BoardError, PieceSpec};

use crate::content::{CYBER_SKILLS, DESIGN_SKILLS, DEVELOPMENT_SKILLS, SkillPiece};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillTab {
    #[default]
    Development,
    Design,
    Cyber,
}

impl SkillTab {
    pub const ALL: [SkillTab; 3] = [SkillTab::Development, SkillTab::Design, SkillTab::Cyber];

    /// Stable key; also the edge-generation seed.
    pub fn key(self) -> &'static str {
        match self {
            SkillTab::Development => "development",
            SkillTab::Design => "design",
            SkillTab::Cyber => "cyber",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SkillTab::Development => "Development",
            SkillTab::Design => "Design",
            SkillTab::Cyber => "Cyber Security",
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            SkillTab::Development => "#FFD400",
            SkillTab::Design => "#3B82F6",
            SkillTab::Cyber => "#FF2D2D",
        }
    }

    pub fn skills(self) -> &'static [SkillPiece] {
        match self {
            SkillTab::Development => DEVELOPMENT_SKILLS,
            SkillTab::Design => DESIGN_SKILLS,
            SkillTab::Cyber => CYBER_SKILLS,
        }
    }
}

/// Selected tab plus the live board for it.
#[derive(Clone, Debug)]
pub struct SkillsState {
    pub tab: SkillTab,
    pub board: Board,
}

impl SkillsState {
    /// Build the state for `tab` with an assembled board.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError`] if the tab's skill list is malformed.
    pub fn new(tab: SkillTab) -> Result<Self, BoardError> {
        Ok(Self { tab, board: build_board(tab)? })
    }

    /// Switch tabs. Re-selecting the current tab keeps the board as is.
    /// Returns whether anything changed. Flash ids keep counting across
    /// boards so a pending overlay timer only ever matches its own board.
    ///
    /// # Errors
    ///
    /// Propagates [`BoardError`]; the current state is left untouched.
    pub fn select(&mut self, tab: SkillTab) -> Result<bool, BoardError> {
        if tab == self.tab {
            return Ok(false);
        }
        let mut board = build_board(tab)?;
        board.continue_flash_ids(&self.board);
        self.board = board;
        self.tab = tab;
        Ok(true)
    }

    /// Content entry for the board piece at `index`.
    pub fn skill_at(&self, index: usize) -> Option<&'static SkillPiece> {
        let piece = self.board.piece(index)?;
        self.tab.skills().iter().find(|s| s.id == piece.id)
    }
}

fn build_board(tab: SkillTab) -> Result<Board, BoardError> {
    let specs: Vec<PieceSpec> = tab.skills().iter().map(SkillPiece::to_spec).collect();
    Board::new(&specs, tab.key())
}
