//! Score and countdown for one round.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub score: u32,
    pub time_left: u32,
    /// Terminal once set.
    pub game_over: bool,
}

impl RoundState {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            score: 0,
            time_left: duration_secs,
            game_over: false,
        }
    }

    /// One second of round time passed. Returns true when this call ended the round.
    pub fn second_elapsed(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.game_over = true;
            return true;
        }
        false
    }

    pub fn add_point(&mut self) -> u32 {
        self.score += 1;
        self.score
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_seconds_end_the_round_once() {
        let mut r = RoundState::default();
        let mut ended = 0;
        for i in 1..=60 {
            if r.second_elapsed() {
                ended += 1;
                assert_eq!(i, 60);
            }
            assert_eq!(r.time_left, 60 - i);
        }
        assert_eq!(ended, 1);
        assert!(r.game_over);
        // terminal: further seconds change nothing
        assert!(!r.second_elapsed());
        assert_eq!(r.time_left, 0);
        assert!(r.game_over);
    }

    #[test]
    fn zero_duration_ends_on_first_second() {
        let mut r = RoundState::new(0);
        assert!(!r.game_over);
        assert!(r.second_elapsed());
        assert_eq!(r.time_left, 0);
    }
}
