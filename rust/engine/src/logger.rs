use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::PotAward;
use crate::player::PlayerAction;
use crate::pot::Pot;

/// A betting street in Texas Hold'em.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Street {
    /// Before the flop (hole cards dealt)
    Preflop,
    /// After the flop (3 community cards)
    Flop,
    /// After the turn (4th community card)
    Turn,
    /// After the river (5th community card)
    River,
}

/// One player action, tagged with the seat and the street it happened on.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub player_id: usize,
    pub street: Street,
    pub action: PlayerAction,
}

/// Complete record of one hand: every action, the board, the pot breakdown,
/// and how each pot was awarded. Serialized as one JSONL line per hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Hand identifier (format: YYYYMMDD-NNNNNN)
    pub hand_id: String,
    /// RNG seed for the deck, when the table was seeded deterministically
    pub seed: Option<u64>,
    /// Chronological player actions
    pub actions: Vec<ActionRecord>,
    /// Community cards revealed (up to 5)
    pub board: Vec<Card>,
    /// Pot layers at settlement
    #[serde(default)]
    pub pots: Vec<Pot>,
    /// Per-pot winners and payouts
    #[serde(default)]
    pub awards: Vec<PotAward>,
    /// Free-form outcome note for host-side display
    #[serde(default)]
    pub result: Option<String>,
    /// Timestamp when the hand was written (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`HandRecord`]s to a JSONL file, one object per line, stamping
/// each record with the write time when the hand carries no timestamp.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
