//! Bank outreach tracker types and the fixed institution catalog.

use serde::{Deserialize, Serialize};

/// Per-institution outreach status. Transitions only move forward within
/// a session: `not-started → letter-generated → sent → {reply-found,
/// reply-not-found}`. Skipping `sent` is allowed (marking a reply straight
/// from `letter-generated`); moving backward is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutreachStatus {
    NotStarted,
    LetterGenerated,
    Sent,
    ReplyFound,
    ReplyNotFound,
}

impl OutreachStatus {
    /// Position along the outreach pipeline. Both reply outcomes are
    /// terminal and share a rank.
    pub fn rank(&self) -> u8 {
        match self {
            OutreachStatus::NotStarted => 0,
            OutreachStatus::LetterGenerated => 1,
            OutreachStatus::Sent => 2,
            OutreachStatus::ReplyFound | OutreachStatus::ReplyNotFound => 3,
        }
    }
}

/// One known financial institution.
#[derive(Debug, Clone)]
pub struct BankStatus {
    pub id: String,
    pub name: String,
    pub selected: bool,
    pub status: OutreachStatus,
}

impl BankStatus {
    fn seeded(id: &str, name: &str, selected: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            selected,
            status: OutreachStatus::NotStarted,
        }
    }
}

/// The fixed institution catalog. The six major local banks start
/// selected; the two international ones opt in.
pub fn seed_banks() -> Vec<BankStatus> {
    vec![
        BankStatus::seeded("dbs", "DBS Bank", true),
        BankStatus::seeded("posb", "POSB", true),
        BankStatus::seeded("ocbc", "OCBC Bank", true),
        BankStatus::seeded("uob", "UOB", true),
        BankStatus::seeded("sc", "Standard Chartered", true),
        BankStatus::seeded("maybank", "Maybank", true),
        BankStatus::seeded("hsbc", "HSBC", false),
        BankStatus::seeded("citibank", "Citibank", false),
    ]
}

/// Balance a simulated reply scan resolves to, by bank id.
/// DBS is the designated high-value institution; every other reply
/// carries the common default.
pub fn reply_value(bank_id: &str) -> u64 {
    const BANK_REPLY_VALUES: &[(&str, u64)] = &[("dbs", 12_500)];
    const DEFAULT_REPLY_VALUE: u64 = 5_000;

    BANK_REPLY_VALUES
        .iter()
        .find(|(id, _)| *id == bank_id)
        .map(|(_, v)| *v)
        .unwrap_or(DEFAULT_REPLY_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_defaults() {
        let banks = seed_banks();
        assert_eq!(banks.len(), 8);
        assert!(banks.iter().all(|b| b.status == OutreachStatus::NotStarted));
        assert_eq!(banks.iter().filter(|b| b.selected).count(), 6);
        assert!(!banks.iter().find(|b| b.id == "hsbc").unwrap().selected);
    }

    #[test]
    fn dbs_reply_is_designated_high_value() {
        assert_eq!(reply_value("dbs"), 12_500);
        assert_eq!(reply_value("ocbc"), 5_000);
        assert_eq!(reply_value("unknown-bank"), 5_000);
    }

    #[test]
    fn reply_outcomes_share_terminal_rank() {
        assert_eq!(OutreachStatus::ReplyFound.rank(), OutreachStatus::ReplyNotFound.rank());
        assert!(OutreachStatus::ReplyFound.rank() > OutreachStatus::Sent.rank());
        assert!(OutreachStatus::Sent.rank() > OutreachStatus::LetterGenerated.rank());
        assert!(OutreachStatus::LetterGenerated.rank() > OutreachStatus::NotStarted.rank());
    }
}
