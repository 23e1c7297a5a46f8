//! Pausas entre operaciones sobre hosts.
//!
//! Las esperas son bloqueantes y sin cancelación. Pasan por `Sleeper` para
//! que los tests puedan observarlas sin dormir.

use std::sync::Mutex;
use std::time::Duration;

pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Sleeper que no duerme: sólo anota las duraciones pedidas.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    slept: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self { Self::default() }

    pub fn slept(&self) -> Vec<Duration> { self.slept.lock().map(|s| s.clone()).unwrap_or_default() }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        if let Ok(mut slept) = self.slept.lock() {
            slept.push(duration);
        }
    }
}

/// Espera acotada para que un host arrancado sea alcanzable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self { attempts: crate::constants::DEFAULT_READY_ATTEMPTS,
               interval: Duration::from_secs(crate::constants::DEFAULT_READY_INTERVAL_SECS) }
    }
}
