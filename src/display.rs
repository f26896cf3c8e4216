//! Human-readable rendering of a Klondike board.
//!
//! This module renders a `GameState` as multi-line text. Face-down cards
//! are shown as "XX" and face-up cards with their `short_str()` rank/suit
//! code.
//!
//! The intent is a stable, readable CLI representation that is useful for
//! debugging and for logging positions. A real presentation layer reads the
//! piles (or a snapshot) directly instead.

use crate::card::PlayingCard;
use crate::game::GameState;
use crate::pile::{Pile, NUM_TABLEAUS};

/// Format a single board card, face-up or face-down.
///
/// - Face-down cards are rendered as `"XX"`.
/// - Face-up cards use `Card::short_str()` such as `"AH"`, `"7C"`, `"TD"`.
pub fn format_card_visible(pc: &PlayingCard) -> String {
    if pc.face_down {
        "XX".to_string()
    } else {
        pc.card.short_str()
    }
}

/// Render only the foundation row.
///
/// Only the *top* card of each foundation is shown:
///   - Empty foundation: `[  ]`
///   - Non-empty: e.g. `[AH]`, `[7C]`, `[KD]`
pub fn render_foundations(game: &GameState) -> String {
    let mut s = String::new();
    s.push_str("Foundations: ");
    for f in game.foundations() {
        match f.top_card() {
            None => s.push_str("[  ] "),
            Some(card) => {
                s.push('[');
                s.push_str(&card.short_str());
                s.push_str("] ");
            }
        }
    }
    s.trim_end().to_string()
}

/// Render the stock (face-down) and waste (face-up) piles on a single line.
///
/// Stock is shown as a count of remaining cards.
/// Waste shows the top card if present and the number of cards in it.
pub fn render_stock_and_waste(game: &GameState) -> String {
    let mut s = String::new();

    let stock_len = game.stock().len();
    if stock_len == 0 {
        s.push_str("Stock: [empty]");
    } else {
        s.push_str(&format!("Stock: [{} cards]", stock_len));
    }

    s.push_str("    ");

    match game.waste().top_card() {
        None => s.push_str("Waste: [empty]"),
        Some(top) => s.push_str(&format!(
            "Waste: [{}] ({} cards)",
            top.short_str(),
            game.waste().len()
        )),
    }

    s
}

/// Render all tableau piles as a multi-line string.
///
/// Piles are arranged in 7 vertical stacks, each cell three characters
/// wide. The stacks are **top-justified**: the bottom card of every pile
/// sits on the first row and each pile grows downward, so the last
/// non-empty row of a column is its exposed card.
pub fn render_columns(game: &GameState) -> String {
    let mut s = String::new();

    s.push_str("Tableaus:\n");
    s.push_str("      ");
    for col_idx in 0..NUM_TABLEAUS {
        s.push_str(&format!(" T{} ", col_idx + 1));
    }
    s.push('\n');

    let max_height = game.tableaus().iter().map(Pile::len).max().unwrap_or(0);

    for row in 0..max_height {
        s.push_str("      ");
        for pile in game.tableaus() {
            match pile.cards().get(row) {
                None => s.push_str("    "),
                Some(pc) => s.push_str(&format!("{:>3} ", format_card_visible(pc))),
            }
        }
        s.push('\n');
    }

    s
}

/// Render the whole board (foundations, stock/waste, tableaus).
pub fn render_game(game: &GameState) -> String {
    let mut s = String::new();

    s.push_str(&render_foundations(game));
    s.push('\n');
    s.push_str(&render_stock_and_waste(game));
    s.push('\n');
    s.push('\n');
    s.push_str(&render_columns(game));
    if game.game_won() {
        s.push_str("\n*** You win! ***\n");
    }

    s
}

/// One-line summary of the exposed card of each tableau.
///
/// Example:
///   T1: 4S  T2: 2H  T3: JS  T4: --  T5: TC  T6: 7C  T7: 2D
pub fn render_playing_edge(game: &GameState) -> String {
    game.tableaus()
        .iter()
        .enumerate()
        .map(|(i, pile)| match pile.top() {
            None => format!("T{}: --", i + 1),
            Some(pc) => format!("T{}: {:>2}", i + 1, format_card_visible(pc)),
        })
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Card, Rank, Suit};
    use crate::config::GameOptions;
    use crate::deck::shuffled_deck_from_seed;
    use crate::layout::Layout;
    use crate::pile::PileId;

    /// Print a hint about how to run these tests to see clean, non-interleaved
    /// human-readable output.
    fn print_run_hint() {
        println!("(Hint: for readable, non-interleaved output from this module,");
        println!("       run: cargo test display -- --nocapture --test-threads=1)");
    }

    /// The grid the board *should* show, computed without `render_columns`.
    ///
    ///   grid[row][col] = "", "XX", or "AH", etc.
    fn expected_column_grid(game: &GameState) -> Vec<Vec<String>> {
        let max_height = game.tableaus().iter().map(Pile::len).max().unwrap_or(0);
        let mut grid = vec![vec![String::new(); NUM_TABLEAUS]; max_height];

        for (col_idx, pile) in game.tableaus().iter().enumerate() {
            for (row, pc) in pile.iter().enumerate() {
                grid[row][col_idx] = if pc.face_down {
                    "XX".to_string()
                } else {
                    pc.card.short_str()
                };
            }
        }

        grid
    }

    /// Parse `render_columns` output back into a grid of cells.
    fn parse_rendered_column_grid(rendered: &str) -> Vec<Vec<String>> {
        let lines: Vec<&str> = rendered.lines().collect();
        if lines.len() <= 2 {
            return Vec::new();
        }
        let body = &lines[2..];
        let mut grid = vec![vec![String::new(); NUM_TABLEAUS]; body.len()];

        let base_offset = 6;
        for (row_idx, line) in body.iter().enumerate() {
            for col_idx in 0..NUM_TABLEAUS {
                let start = base_offset + 4 * col_idx;
                if start >= line.len() {
                    continue;
                }
                let end = (start + 4).min(line.len());
                grid[row_idx][col_idx] = line[start..end].trim().to_string();
            }
        }

        grid
    }

    #[test]
    fn rendered_columns_match_the_piles() {
        print_run_hint();

        let mut game = GameState::deal(&shuffled_deck_from_seed(123456789), GameOptions::default());
        // Move something around so the grid is not just the opening staircase.
        game.turn_stock();
        game.sweep_to_foundations();

        let rendered = render_columns(&game);
        println!("{rendered}");

        assert_eq!(parse_rendered_column_grid(&rendered), expected_column_grid(&game));
    }

    #[test]
    fn stock_and_waste_line_tracks_counts_and_top() {
        let mut game = GameState::deal(&shuffled_deck_from_seed(9), GameOptions::default());

        let line = render_stock_and_waste(&game);
        assert!(line.contains("Stock: [24 cards]"));
        assert!(line.contains("Waste: [empty]"));

        game.turn_stock();
        game.turn_stock();
        let top = game.waste().top_card().unwrap();
        let line = render_stock_and_waste(&game);
        assert!(line.contains("Stock: [22 cards]"));
        assert!(line.contains(&format!("Waste: [{}] (2 cards)", top.short_str())));
    }

    #[test]
    fn foundations_show_top_cards() {
        let layout = Layout::default()
            .with_foundation(1, [Card::new(Suit::Diamonds, Rank::Ace)])
            .with_foundation(
                3,
                Rank::ALL[..5].iter().map(|&r| Card::new(Suit::Spades, r)),
            )
            .fill_stock_with_remaining();
        let game = GameState::from_layout(layout).unwrap();

        assert_eq!(render_foundations(&game), "Foundations: [  ] [AD] [  ] [5S]");
    }

    #[test]
    fn playing_edge_marks_empty_tableaus() {
        let layout = Layout::default()
            .with(PileId::Tableau(1), PlayingCard::face_up(Card::new(Suit::Hearts, Rank::Two)))
            .fill_stock_with_remaining();
        let game = GameState::from_layout(layout).unwrap();

        let edge = render_playing_edge(&game);
        assert!(edge.starts_with("T1: --  T2: 2H  T3: --"));
    }
}
