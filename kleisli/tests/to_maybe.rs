use std::sync::Mutex;

use kleisli::{left, right, Either};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _: &Metadata) -> bool { true }

    fn log(&self, record: &Record) {
        self.records
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

fn warnings() -> usize {
    LOGGER
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == Level::Warn)
        .count()
}

// a single test, so that no other test logs while the warnings are counted.
#[test]
fn test_to_maybe() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    assert_eq!(right::<&str, _>(1).to_maybe(), Some(1));
    assert_eq!(left::<_, i32>("bad").to_maybe(), None);
    assert_eq!(
        right::<&str, _>(Some("x")).to_maybe(),
        Some(Some("x"))
    );
    assert_eq!(warnings(), 0);

    assert_eq!(right::<&str, Option<i32>>(None).to_maybe(), None);
    assert_eq!(warnings(), 1);

    assert_eq!(Either::<&str, ()>::Right(()).to_maybe(), None);
    assert_eq!(warnings(), 2);

    // a left is never warned about, whatever it holds.
    assert_eq!(left::<Option<i32>, Option<i32>>(None).to_maybe(), None);
    assert_eq!(warnings(), 2);

    let records = LOGGER.records.lock().unwrap();
    assert!(records
        .iter()
        .any(|(_, message)| message.contains("null value")));
}
