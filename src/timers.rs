use std::time::Duration;

use futures::channel::{mpsc, oneshot};

use crate::app::Message;

/// Wall-clock tick. One thread per subscription; it exits once the
/// subscription is dropped and the receiver goes away.
pub(crate) fn clock_stream(ms: &u64) -> mpsc::UnboundedReceiver<Message> {
    interval_stream(*ms, || Message::Tick)
}

/// Frame pulses that drive snap and exit animations.
pub(crate) fn frame_stream(ms: &u64) -> mpsc::UnboundedReceiver<Message> {
    interval_stream(*ms, || Message::Frame)
}

fn interval_stream(ms: u64, make: fn() -> Message) -> mpsc::UnboundedReceiver<Message> {
    let (tx, rx) = mpsc::unbounded();
    std::thread::spawn(move || loop {
        std::thread::sleep(Duration::from_millis(ms));
        if tx.unbounded_send(make()).is_err() {
            break;
        }
    });
    rx
}

/// Resolves after `duration`. Used for one-shot transitions.
pub(crate) async fn delay(duration: Duration) {
    let (tx, rx) = oneshot::channel();
    std::thread::spawn(move || {
        std::thread::sleep(duration);
        let _ = tx.send(());
    });
    if rx.await.is_err() {
        tracing::warn!("delay thread dropped before firing");
    }
}
