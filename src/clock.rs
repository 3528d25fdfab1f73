//! Per-player countdown clock with Fischer increment
//!
//! Only the side to move loses time. After a player completes a move their
//! clock gains the increment (10+5 means ten minutes base and five seconds
//! per move). A clock that reaches zero stops and reports which side flagged,
//! and the session turns that into [`GameState::force_end`].
//!
//! [`GameState::force_end`]: chess_rules::GameState::force_end

use std::time::Duration;

use chess_rules::{Color, EndReason};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameTimer {
    pub white_time_left: Duration,
    pub black_time_left: Duration,
    pub increment: Duration,
    pub is_running: bool,
}

impl Default for GameTimer {
    fn default() -> Self {
        Self::new(Duration::from_secs(600), Duration::ZERO)
    }
}

impl GameTimer {
    /// Both clocks at `base`, stopped
    pub fn new(base: Duration, increment: Duration) -> Self {
        Self {
            white_time_left: base,
            black_time_left: base,
            increment,
            is_running: false,
        }
    }

    pub fn start(&mut self) {
        self.is_running = true;
    }

    pub fn stop(&mut self) {
        self.is_running = false;
    }

    pub fn time_left(&self, color: Color) -> Duration {
        match color {
            Color::White => self.white_time_left,
            Color::Black => self.black_time_left,
        }
    }

    fn time_left_mut(&mut self, color: Color) -> &mut Duration {
        match color {
            Color::White => &mut self.white_time_left,
            Color::Black => &mut self.black_time_left,
        }
    }

    /// Charge `elapsed` to `to_move`
    ///
    /// Returns the end reason when this tick ran the clock out. The timer
    /// stops at that point, so later ticks return `None`.
    pub fn tick(&mut self, to_move: Color, elapsed: Duration) -> Option<EndReason> {
        if !self.is_running {
            return None;
        }

        let left = self.time_left_mut(to_move);
        *left = left.saturating_sub(elapsed);
        if left.is_zero() {
            self.is_running = false;
            return Some(EndReason::for_flagged(to_move));
        }
        None
    }

    pub fn apply_increment(&mut self, color: Color) {
        if !self.increment.is_zero() {
            let increment = self.increment;
            *self.time_left_mut(color) += increment;
        }
    }
}

/// `MM:SS`, rounding partial seconds up so a clock only reads `00:00` once
/// it has actually run out
pub fn format_clock(time: Duration) -> String {
    let mut secs = time.as_secs();
    if time.subsec_nanos() > 0 {
        secs += 1;
    }
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    #[test]
    fn test_game_timer_default() {
        //! Ten minutes each, no increment, stopped
        let timer = GameTimer::default();
        assert_eq!(timer.white_time_left, secs(600));
        assert_eq!(timer.black_time_left, secs(600));
        assert_eq!(timer.increment, Duration::ZERO);
        assert!(!timer.is_running);
    }

    #[test]
    fn test_tick_only_charges_side_to_move() {
        let mut timer = GameTimer::new(secs(300), Duration::ZERO);
        timer.start();

        assert_eq!(timer.tick(Color::White, secs(10)), None);
        assert_eq!(timer.time_left(Color::White), secs(290));
        assert_eq!(timer.time_left(Color::Black), secs(300));
    }

    #[test]
    fn test_tick_ignored_when_stopped() {
        let mut timer = GameTimer::new(secs(300), Duration::ZERO);
        assert_eq!(timer.tick(Color::Black, secs(400)), None);
        assert_eq!(timer.time_left(Color::Black), secs(300));
    }

    #[test]
    fn test_flag_fall() {
        let mut timer = GameTimer::new(secs(5), Duration::ZERO);
        timer.start();

        assert_eq!(
            timer.tick(Color::Black, secs(6)),
            Some(EndReason::BlackRanOutOfTime)
        );
        assert_eq!(timer.time_left(Color::Black), Duration::ZERO);
        assert!(!timer.is_running);
        assert_eq!(timer.tick(Color::Black, secs(1)), None);
    }

    #[test]
    fn test_apply_increment() {
        //! Increment goes to the player who just moved
        let mut timer = GameTimer::new(secs(300), secs(5));
        timer.apply_increment(Color::White);
        assert_eq!(timer.time_left(Color::White), secs(305));
        assert_eq!(timer.time_left(Color::Black), secs(300));

        let mut no_increment = GameTimer::new(secs(300), Duration::ZERO);
        no_increment.apply_increment(Color::Black);
        assert_eq!(no_increment.time_left(Color::Black), secs(300));
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(secs(600)), "10:00");
        assert_eq!(format_clock(secs(65)), "01:05");
        assert_eq!(format_clock(Duration::from_millis(59_200)), "01:00");
        assert_eq!(format_clock(Duration::from_millis(300)), "00:01");
        assert_eq!(format_clock(Duration::ZERO), "00:00");
    }
}
