use std::hint::black_box;
use std::time::{Duration, Instant};

/// Run `f` `runs` times, stopping at the first error.
pub fn warm_up<E, F: FnMut() -> Result<(), E>>(runs: usize, mut f: F) -> Result<(), E> {
    for _ in 0..runs {
        black_box(f())?;
    }
    Ok(())
}

/// Wall-clock time of `trials` back-to-back calls to `f`, stopping at the
/// first error.
///
/// Every result goes through [`black_box`] so the calls cannot be elided.
pub fn time_trials<T, E, F: FnMut() -> Result<T, E>>(trials: usize, mut f: F) -> Result<Duration, E> {
    let start = Instant::now();
    for _ in 0..trials {
        black_box(f()?);
    }
    Ok(start.elapsed())
}

/// Whole milliseconds, truncated.
pub fn millis(d: Duration) -> u128 {
    d.as_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_exactly_the_requested_trials() {
        let mut calls = 0;
        let elapsed: Result<Duration, ()> = time_trials(17, || {
            calls += 1;
            Ok(())
        });
        assert!(elapsed.is_ok());
        assert_eq!(calls, 17);

        let res: Result<(), ()> = warm_up(3, || {
            calls += 1;
            Ok(())
        });
        assert!(res.is_ok());
        assert_eq!(calls, 20);
    }

    #[test]
    fn warm_up_stops_at_first_error() {
        let mut calls = 0;
        let res = warm_up(5, || {
            calls += 1;
            if calls == 2 { Err("boom") } else { Ok(()) }
        });
        assert_eq!(res, Err("boom"));
        assert_eq!(calls, 2);
    }

    #[test]
    fn timed_call_errors_are_returned() {
        let mut calls = 0;
        let res = time_trials(10, || {
            calls += 1;
            if calls == 4 { Err("bad shape") } else { Ok(calls) }
        });
        assert_eq!(res, Err("bad shape"));
        assert_eq!(calls, 4);
    }

    #[test]
    fn millis_truncates() {
        assert_eq!(millis(Duration::from_micros(1999)), 1);
    }
}
