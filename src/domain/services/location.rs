#[cfg(test)]
#[path = "location_test.rs"]
mod tests;

use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::sync::Mutex;

#[derive(Default)]
struct Committed {
    ticket: u64,
    location: Option<String>,
}

/// Orders replace-location commits from overlapping encodes so the final
/// URL always reflects the newest edit, not the slowest encode.
///
/// A ticket is issued when an edit triggers re-encoding; a commit carrying
/// a ticket older than the last applied one is discarded. There is no
/// cancellation: a superseded encode's result is never observed.
#[derive(Default)]
pub struct LocationSync {
    tickets: AtomicU64,
    committed: Mutex<Committed>,
}

impl LocationSync {
    pub fn begin(&self) -> u64 {
        return self.tickets.fetch_add(1, Ordering::SeqCst) + 1;
    }

    pub fn commit(&self, ticket: u64, location: String) -> bool {
        let mut committed = self.committed.lock().unwrap();
        if ticket <= committed.ticket {
            return false;
        }

        committed.ticket = ticket;
        committed.location = Some(location);

        return true;
    }

    pub fn current(&self) -> Option<String> {
        return self.committed.lock().unwrap().location.clone();
    }
}
