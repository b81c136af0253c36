//! Lifecycle clock for `created_at` / `updated_at` columns.

use chrono::{Local, NaiveDateTime, SubsecRound, TimeDelta};

/// Current local wall-clock time at the precision a Postgres `TIMESTAMP`
/// column stores (microseconds), so a stamped value and the value read back
/// compare equal.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

/// Stamp for a write that supersedes one stamped at `previous`.
///
/// Always strictly later than `previous`: when the wall clock has not moved
/// past it (two writes in the same microsecond, or the clock stepped back),
/// the result is `previous` plus one microsecond.
pub fn after(previous: NaiveDateTime) -> NaiveDateTime {
    now().max(previous + TimeDelta::microseconds(1))
}
