//! Closable FIFO channels with an unbuffered and a bounded flavor
//!
//! Both flavors are built on `tokio::sync::mpsc`. The unbuffered flavor turns
//! every send into a rendezvous: the value travels with a oneshot
//! acknowledgement and `send` only returns once a receiver has taken it.
//!
//! The [`Sender`] is the single writer and the single closer. It is not
//! `Clone`, and closing consumes it, so a write after close or a second close
//! cannot be expressed.

use crate::error::ChannelError;
use std::fmt;
use tokio::sync::{mpsc, oneshot};

type Handoff<T> = (T, oneshot::Sender<()>);

enum SenderFlavor<T> {
    Rendezvous(mpsc::Sender<Handoff<T>>),
    Buffered(mpsc::Sender<T>),
}

enum ReceiverFlavor<T> {
    Rendezvous(mpsc::Receiver<Handoff<T>>),
    Buffered(mpsc::Receiver<T>),
}

/// Writing half of a channel
pub struct Sender<T> {
    flavor: SenderFlavor<T>,
    capacity: usize,
}

/// Reading half of a channel
pub struct Receiver<T> {
    flavor: ReceiverFlavor<T>,
    capacity: usize,
}

/// Create a zero-capacity channel: each send waits for a receiver to take the value
pub fn unbuffered<T>() -> (Sender<T>, Receiver<T>) {
    // One slot carries the pending handoff; the ack keeps the effective capacity at zero
    let (tx, rx) = mpsc::channel(1);
    (
        Sender {
            flavor: SenderFlavor::Rendezvous(tx),
            capacity: 0,
        },
        Receiver {
            flavor: ReceiverFlavor::Rendezvous(rx),
            capacity: 0,
        },
    )
}

/// Create a channel that queues up to `capacity` values before sends suspend
///
/// # Panics
///
/// Panics if `capacity` is zero; use [`unbuffered`] for a synchronous handoff.
pub fn bounded<T>(capacity: usize) -> (Sender<T>, Receiver<T>) {
    let (tx, rx) = mpsc::channel(capacity);
    (
        Sender {
            flavor: SenderFlavor::Buffered(tx),
            capacity,
        },
        Receiver {
            flavor: ReceiverFlavor::Buffered(rx),
            capacity,
        },
    )
}

impl<T> Sender<T> {
    /// Send a value, suspending while the channel has no room for it
    pub async fn send(&self, value: T) -> Result<(), ChannelError> {
        match &self.flavor {
            SenderFlavor::Buffered(tx) => tx
                .send(value)
                .await
                .map_err(|_| ChannelError::ReceiverDropped),
            SenderFlavor::Rendezvous(tx) => {
                let (ack_tx, ack_rx) = oneshot::channel();
                tx.send((value, ack_tx))
                    .await
                    .map_err(|_| ChannelError::ReceiverDropped)?;
                // The ack is dropped unanswered only if the receiver went away with the value queued
                ack_rx.await.map_err(|_| ChannelError::ReceiverDropped)
            },
        }
    }

    /// Close the channel. Receivers drain what is queued and then see `None`.
    pub fn close(self) {
        tracing::trace!(capacity = self.capacity, "channel closed by sender");
    }

    /// Capacity the channel was created with (zero for unbuffered)
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether the receiving half has been dropped
    pub fn is_receiver_dropped(&self) -> bool {
        match &self.flavor {
            SenderFlavor::Rendezvous(tx) => tx.is_closed(),
            SenderFlavor::Buffered(tx) => tx.is_closed(),
        }
    }
}

impl<T> Receiver<T> {
    /// Receive the next value, or `None` once the channel is closed and drained
    pub async fn recv(&mut self) -> Option<T> {
        match &mut self.flavor {
            ReceiverFlavor::Buffered(rx) => rx.recv().await,
            ReceiverFlavor::Rendezvous(rx) => {
                let (value, ack) = rx.recv().await?;
                // The sender may have been cancelled while waiting; the value is still ours
                let _ = ack.send(());
                Some(value)
            },
        }
    }

    /// Capacity the channel was created with (zero for unbuffered)
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> fmt::Debug for Sender<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sender")
            .field("capacity", &self.capacity)
            .field("receiver_dropped", &self.is_receiver_dropped())
            .finish()
    }
}

impl<T> fmt::Debug for Receiver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Receiver")
            .field("capacity", &self.capacity)
            .finish()
    }
}
