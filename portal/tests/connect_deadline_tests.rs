use skimap_portal::link::{ConnectAttempt, ConnectStatus};

const DEADLINE_MS: u64 = 10_000;
const POLL_MS: u64 = 500;

#[test]
fn connects_immediately_when_link_is_up() {
    let mut attempt = ConnectAttempt::new(DEADLINE_MS, POLL_MS);
    assert_eq!(attempt.advance(true), ConnectStatus::Connected);
}

#[test]
fn never_pending_at_or_past_the_deadline() {
    let mut attempt = ConnectAttempt::new(DEADLINE_MS, POLL_MS);
    let mut polls = 0;
    loop {
        match attempt.advance(false) {
            ConnectStatus::Pending => polls += 1,
            ConnectStatus::TimedOut => break,
            ConnectStatus::Connected => panic!("link never came up"),
        }
        assert!(
            u64::from(polls) * POLL_MS <= DEADLINE_MS,
            "attempt still pending past the deadline"
        );
    }
    // Twenty 500 ms waits fit inside the 10 s deadline, never more.
    assert_eq!(polls, 20u32);
}

#[test]
fn connect_on_the_last_poll_still_succeeds() {
    let mut attempt = ConnectAttempt::new(DEADLINE_MS, POLL_MS);
    for _ in 0..20 {
        assert_eq!(attempt.advance(false), ConnectStatus::Pending);
    }
    // Deadline reached, but an up link always wins over the timeout.
    assert_eq!(attempt.advance(true), ConnectStatus::Connected);
}

#[test]
fn time_spent_associating_counts_against_the_deadline() {
    let mut attempt = ConnectAttempt::new(DEADLINE_MS, POLL_MS);
    attempt.consume(9_800);
    assert_eq!(attempt.advance(false), ConnectStatus::Pending);
    assert_eq!(attempt.advance(false), ConnectStatus::TimedOut);
}

#[test]
fn consuming_the_whole_deadline_times_out_at_once() {
    let mut attempt = ConnectAttempt::new(DEADLINE_MS, POLL_MS);
    attempt.consume(DEADLINE_MS);
    assert_eq!(attempt.advance(false), ConnectStatus::TimedOut);
}
