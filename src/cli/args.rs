//! Command-line flags.

use clap::Parser;

use crate::core::GameConfig;
use crate::rules::WildRule;

/// Liar's Dice for one terminal passed around the table.
#[derive(Clone, Debug, Parser)]
#[command(name = "liars-dice", version, about)]
pub struct Args {
    /// Dice each player starts with.
    #[arg(short = 'c', long = "dice", default_value_t = 5)]
    pub dice: usize,

    /// Faces per die.
    #[arg(short = 'd', long = "faces", default_value_t = 6)]
    pub faces: u8,

    /// Print dice as [n] instead of Unicode die faces.
    #[arg(short = 'u', long)]
    pub no_unicode: bool,

    /// Show every player's dice on each turn and enable debug logging.
    #[arg(long)]
    pub debug: bool,

    /// Hide the odds shown after each call.
    #[arg(long)]
    pub no_odds: bool,

    /// Seed for dice and bots. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer opponents to add after the named players.
    #[arg(short = 'b', long, default_value_t = 0)]
    pub bots: usize,

    /// Wild rule: off, counting, or doubling.
    #[arg(short = 'w', long, default_value = "doubling", value_parser = parse_wild_rule)]
    pub wild: WildRule,

    /// Disallow declaring the standing bid spot-on.
    #[arg(long)]
    pub no_spot_on: bool,

    /// Player names. Prompted for when omitted.
    #[arg(short = 'p', long = "player", num_args = 1..)]
    pub players: Vec<String>,
}

impl Args {
    /// Table rules selected by the flags.
    #[must_use]
    pub fn config(&self) -> GameConfig {
        GameConfig::default()
            .with_dice_per_player(self.dice)
            .with_faces(self.faces)
            .with_wild_rule(self.wild)
            .with_spot_on(!self.no_spot_on)
    }

    /// Default log filter for these flags.
    #[must_use]
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

fn parse_wild_rule(name: &str) -> Result<WildRule, String> {
    WildRule::from_name(name).ok_or_else(|| format!("unknown wild rule '{}'", name))
}
