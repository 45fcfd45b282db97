//! High frequency clock control

use crate::error::{Error, RetVal};
use crate::raw;
use core::cell::Cell;
use core::future::poll_fn;
use core::sync::atomic::{AtomicBool, Ordering};
use core::task::Poll;
use critical_section::Mutex;
use embassy_sync::waitqueue::AtomicWaker;

static HFCLK_WAKER: AtomicWaker = AtomicWaker::new();
static HFCLK_STARTED: AtomicBool = AtomicBool::new(false);
// Live `HfClock` handles. MPSL keeps a single request, so only the first handle requests the
// oscillator and only the last one releases it.
static HFCLK_USERS: Mutex<Cell<usize>> = Mutex::new(Cell::new(0));

unsafe extern "C" fn hfclk_started() {
    trace!("HFCLK started");
    HFCLK_STARTED.store(true, Ordering::Release);
    HFCLK_WAKER.wake();
}

/// An outstanding request for the high frequency crystal oscillator.
///
/// Handles are reference counted. The oscillator is released when the last handle is dropped.
#[derive(Debug)]
pub struct HfClock {
    _private: (),
}

impl HfClock {
    /// Requests the high frequency crystal oscillator
    pub fn request() -> Result<Self, Error> {
        critical_section::with(|cs| {
            let users = HFCLK_USERS.borrow(cs);
            if users.get() == 0 {
                HFCLK_STARTED.store(false, Ordering::Release);
                unsafe { raw::mpsl_clock_hfclk_request(Some(hfclk_started)) }.check()?;
            }
            users.set(users.get() + 1);
            Ok(Self { _private: () })
        })
    }

    /// Waits until the oscillator is running
    pub async fn wait(&self) {
        poll_fn(|cx| {
            HFCLK_WAKER.register(cx.waker());
            if HFCLK_STARTED.load(Ordering::Acquire) || matches!(hfclk_is_running(), Ok(true)) {
                Poll::Ready(())
            } else {
                Poll::Pending
            }
        })
        .await
    }
}

impl Drop for HfClock {
    fn drop(&mut self) {
        let last = critical_section::with(|cs| {
            let users = HFCLK_USERS.borrow(cs);
            users.set(users.get().saturating_sub(1));
            users.get() == 0
        });
        if !last {
            return;
        }
        if let Err(e) = unsafe { raw::mpsl_clock_hfclk_release() }.check() {
            warn!("HFCLK release failed: {}", e);
        }
    }
}

/// Whether the high frequency crystal oscillator is running
pub fn hfclk_is_running() -> Result<bool, Error> {
    let mut is_running = 0u32;
    unsafe { raw::mpsl_clock_hfclk_is_running(&mut is_running) }.check()?;
    Ok(is_running != 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::sync::atomic::AtomicUsize;

    static REQUESTS: AtomicUsize = AtomicUsize::new(0);
    static RELEASES: AtomicUsize = AtomicUsize::new(0);
    static RUNNING: AtomicBool = AtomicBool::new(false);

    #[no_mangle]
    unsafe extern "C" fn mpsl_clock_hfclk_request(callback: raw::mpsl_clock_hfclk_callback_t) -> i32 {
        REQUESTS.fetch_add(1, Ordering::SeqCst);
        if let Some(callback) = callback {
            callback();
        }
        0
    }

    #[no_mangle]
    unsafe extern "C" fn mpsl_clock_hfclk_release() -> i32 {
        RELEASES.fetch_add(1, Ordering::SeqCst);
        0
    }

    #[no_mangle]
    unsafe extern "C" fn mpsl_clock_hfclk_is_running(is_running: *mut u32) -> i32 {
        *is_running = RUNNING.load(Ordering::SeqCst) as u32;
        0
    }

    #[test]
    fn test_hfclk_released_by_last_handle() {
        let first = HfClock::request().unwrap();
        let second = HfClock::request().unwrap();
        assert_eq!(REQUESTS.load(Ordering::SeqCst), 1);

        drop(first);
        assert_eq!(RELEASES.load(Ordering::SeqCst), 0);
        embassy_futures::block_on(second.wait());

        drop(second);
        assert_eq!(RELEASES.load(Ordering::SeqCst), 1);

        let third = HfClock::request().unwrap();
        assert_eq!(REQUESTS.load(Ordering::SeqCst), 2);
        drop(third);
        assert_eq!(RELEASES.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_hfclk_is_running() {
        RUNNING.store(true, Ordering::SeqCst);
        assert_eq!(hfclk_is_running(), Ok(true));
        RUNNING.store(false, Ordering::SeqCst);
        assert_eq!(hfclk_is_running(), Ok(false));
    }
}
