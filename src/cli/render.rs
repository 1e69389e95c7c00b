//! Terminal rendering: colors, dice glyphs, tables.

use colored::{Color, ColoredString, Colorize};

use crate::core::{Bid, DiceRoller, Player, PlayerId};
use crate::engine::{ChallengeKind, ChallengeResult, Game};
use crate::rules::BidOdds;

const BANNER: &str = r"
  _     _            _       ____  _
 | |   (_) __ _ _ __( )___  |  _ \(_) ___ ___
 | |   | |/ _` | '__|// __| | | | | |/ __/ _ \
 | |___| | (_| | |    \__ \ | |_| | | (_|  __/
 |_____|_|\__,_|_|    |___/ |____/|_|\___\___|
";

const SEAT_COLORS: [Color; 10] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightBlue,
    Color::BrightMagenta,
];

/// How dice and names are drawn.
#[derive(Clone, Copy, Debug)]
pub struct Style {
    pub unicode_dice: bool,
    pub faces: u8,
}

impl Style {
    /// Render one die.
    #[must_use]
    pub fn die(&self, face: u8) -> String {
        const GLYPHS: [char; 6] = ['⚀', '⚁', '⚂', '⚃', '⚄', '⚅'];
        match face {
            1..=6 if self.unicode_dice && self.faces == 6 => GLYPHS[usize::from(face - 1)].to_string(),
            _ => format!("[{}]", face),
        }
    }

    /// Render a hand of dice.
    #[must_use]
    pub fn dice(&self, dice: &[u8]) -> String {
        dice.iter()
            .map(|&d| self.die(d))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render a bid as "3x ⚃".
    #[must_use]
    pub fn bid(&self, bid: Bid) -> String {
        format!("{}x {}", bid.quantity, self.die(bid.face))
    }
}

/// Stable color for a seat.
#[must_use]
pub fn seat_color(id: PlayerId) -> Color {
    SEAT_COLORS[id.index() % SEAT_COLORS.len()]
}

/// A player's name in their seat color.
#[must_use]
pub fn name(player: &Player) -> ColoredString {
    player.name.as_str().color(seat_color(player.id)).bold()
}

/// Clear the terminal.
pub fn clear() {
    print!("\x1B[2J\x1B[1;1H");
}

pub fn banner() {
    clear();
    println!("{}", BANNER.green());
}

pub fn error(message: impl std::fmt::Display) {
    println!("{}", message.to_string().red().bold());
}

/// Every surviving player's dice. Only for debug mode and reveals.
pub fn table<R: DiceRoller>(game: &Game<R>, style: &Style) {
    println!(
        "{}",
        format!("Liar's Dice | Round {}", game.round()).italic()
    );
    let current = game.current_player();
    let current_name = game.player(current).map(|p| p.name.as_str()).unwrap_or("?");
    println!("  Current player: {}", current_name);
    match game.current_bid() {
        Some(record) => println!("  Current bid:    {}", style.bid(record.bid)),
        None => println!("  Current bid:    none"),
    }
    for player in game.surviving_players() {
        println!("  {:>12}  {}", name(player), style.dice(player.dice()));
    }
    println!();
}

/// The dice reveal and verdict after a call.
pub fn challenge<R: DiceRoller>(game: &Game<R>, result: &ChallengeResult, style: &Style) {
    for (id, dice) in result.reveal.hands() {
        if let Some(player) = game.player(id) {
            println!("  {:>12}  {}", name(player), style.dice(dice));
        }
    }
    println!();
    println!(
        "Bid {} had {} matching.",
        style.bid(result.bid),
        result.actual_count
    );

    let label = |id: PlayerId| {
        game.player(id)
            .map(|p| name(p).to_string())
            .unwrap_or_else(|| id.to_string())
    };
    let challenger = label(result.challenger);
    let bidder = label(result.bidder);
    match (result.kind, result.challenger_won()) {
        (ChallengeKind::Bluff, true) => {
            println!("✅ {} was right! {} loses a die.", challenger, bidder)
        }
        (ChallengeKind::Bluff, false) => {
            println!("❎ {} was wrong and loses a die.", challenger)
        }
        (ChallengeKind::SpotOn, true) => println!(
            "✅ {} was spot-on! Everyone else loses a die.",
            challenger
        ),
        (ChallengeKind::SpotOn, false) => {
            println!("❎ {} was not spot-on and loses a die.", challenger)
        }
    }
}

/// The odds the caller faced, from their own dice.
pub fn odds(kind: ChallengeKind, odds: &BidOdds) {
    let line = match kind {
        ChallengeKind::Bluff => format!("The odds of that bid being true were {:.2}%.", odds.at_least * 100.0),
        ChallengeKind::SpotOn => format!("The odds of that bid being spot-on were {:.2}%.", odds.exactly * 100.0),
    };
    println!("{}", line.italic().dimmed());
}
