//! Static weekly workout schedule
//!
//! Pure lookup: every weekday maps to a fixed, pre-authored exercise block.
//! The push, pull, and shoulder/leg days each appear twice a week; Sunday is
//! cardio and core.

use chrono::Weekday;

/// Weekday display order used by the schedule screen.
pub const WEEK: [Weekday; 7] = [
  Weekday::Mon,
  Weekday::Tue,
  Weekday::Wed,
  Weekday::Thu,
  Weekday::Fri,
  Weekday::Sat,
  Weekday::Sun,
];

const CHEST_TRICEPS: &str = "\
Chest Exercise
3 sets / 8 - 12 reps
   - high to low flyes
   - mid chest flyes
3 sets / 12 - 15 reps
   - wide push ups

Tricep Exercise
3 sets / 8 - 12 reps
   - over head tricep extensions
   - tricep push down
3 sets / 12 - 15 reps
   - diamond push ups";

const BICEPS_BACK: &str = "\
Bicep Exercise
3 sets / 8 - 12 reps
   - bicep curls
   - hammer curls
   - cross body hammer curls
Back Exercise
3 sets / 8 - 12 reps
   - arm pull down
   - lat pull down
   - supinated lat pull down
   - under hand row
3 sets / 12 - 15 reps
   - close grip push ups";

const SHOULDERS_LEGS: &str = "\
Shoulder Exercise
3 sets / 8 - 12 reps
   - shoulder press
   - lateral raise
   - face pulls
3 sets / 12 - 15 reps
   - pike push ups

Leg Exercise
3 sets / 8 - 12 reps
   - squats
   - stiff leg dead lift
   - lunges";

const CARDIO_CORE: &str = "\
Cardio
ABS Exercise
3 sets / 8 - 12 reps
   - crunches
   - russian twist
   - leg raise
   - plank (30 seconds to 1 minute)";

/// Full English day name, as shown on the schedule buttons.
pub fn day_name(day: Weekday) -> &'static str {
  match day {
    Weekday::Mon => "Monday",
    Weekday::Tue => "Tuesday",
    Weekday::Wed => "Wednesday",
    Weekday::Thu => "Thursday",
    Weekday::Fri => "Friday",
    Weekday::Sat => "Saturday",
    Weekday::Sun => "Sunday",
  }
}

/// The pre-authored exercise block for one weekday.
pub fn workout_text(day: Weekday) -> &'static str {
  match day {
    Weekday::Mon | Weekday::Thu => CHEST_TRICEPS,
    Weekday::Tue | Weekday::Fri => BICEPS_BACK,
    Weekday::Wed | Weekday::Sat => SHOULDERS_LEGS,
    Weekday::Sun => CARDIO_CORE,
  }
}

/// The whole week in display order as (day name, workout) pairs.
pub fn full_week() -> Vec<(&'static str, &'static str)> {
  WEEK
    .iter()
    .map(|day| (day_name(*day), workout_text(*day)))
    .collect()
}
