use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AscentStyle {
    Flash = 0x00,
    Send = 0x01,
    Attempt = 0x02,
}

/// One logged go on a boulder. Carries the session it was ticked in, if
/// one was open at the time.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Ascent {
    pub style: AscentStyle,
    pub timestamp: i64,
    pub session_id: Option<Uuid>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Boulder {
    pub title: String,
    pub color: String,
    pub grade: String,
    pub place_id: Option<Uuid>,
    pub ascents: Vec<Ascent>,
}

impl Boulder {
    pub fn num_sends(&self) -> usize {
        self.ascents
            .iter()
            .filter(|ascent| ascent.style != AscentStyle::Attempt)
            .count()
    }

    pub fn num_attempts(&self) -> usize {
        self.ascents
            .iter()
            .filter(|ascent| ascent.style == AscentStyle::Attempt)
            .count()
    }

    pub fn is_sent(&self) -> bool {
        self.num_sends() > 0
    }

    pub fn last_ascent(&self) -> Option<&Ascent> {
        self.ascents.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boulder_with(styles: &[AscentStyle]) -> Boulder {
        Boulder {
            title: "Slab of Doom".into(),
            color: "red".into(),
            grade: "6A".into(),
            place_id: None,
            ascents: styles
                .iter()
                .enumerate()
                .map(|(n, &style)| Ascent {
                    style,
                    timestamp: n as i64,
                    session_id: None,
                })
                .collect(),
        }
    }

    #[test]
    fn flashes_count_as_sends() {
        let boulder = boulder_with(&[
            AscentStyle::Attempt,
            AscentStyle::Flash,
            AscentStyle::Send,
        ]);
        assert_eq!(boulder.num_sends(), 2);
        assert_eq!(boulder.num_attempts(), 1);
        assert!(boulder.is_sent());
    }

    #[test]
    fn last_ascent_is_the_most_recent_tick() {
        let boulder = boulder_with(&[AscentStyle::Attempt, AscentStyle::Send]);
        assert_eq!(boulder.last_ascent().map(|a| a.timestamp), Some(1));
        assert!(boulder_with(&[]).last_ascent().is_none());
    }
}
