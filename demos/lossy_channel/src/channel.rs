//! Simulated unreliable link between a sender and one receiver
//!
//! Packets get a base delay plus uniform jitter and may be dropped. Because
//! jitter is independent per packet, a later packet can arrive first.

use crate::rng::JitterRng;
use reckon_core::Seconds;

/// A packet in flight
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packet<V> {
    pub sent_at: Seconds,
    pub arrives_at: Seconds,
    pub pos: V,
}

/// Link characteristics
#[derive(Debug, Clone, Copy)]
pub struct ChannelParams {
    pub base_delay: Seconds,
    pub jitter: Seconds,
    pub loss: f64,
}

/// Lossy, reordering channel
#[derive(Debug)]
pub struct LossyChannel<V> {
    params: ChannelParams,
    rng: JitterRng,
    in_flight: Vec<Packet<V>>,
    dropped: usize,
}

impl<V: Copy> LossyChannel<V> {
    pub fn new(params: ChannelParams, seed: u64) -> Self {
        Self {
            params,
            rng: JitterRng::new(seed),
            in_flight: Vec::new(),
            dropped: 0,
        }
    }

    /// Send `pos` stamped with `sent_at`
    pub fn send(&mut self, sent_at: Seconds, pos: V) {
        if self.rng.chance(self.params.loss) {
            self.dropped += 1;
            return;
        }
        let delay = self.params.base_delay + self.rng.range_f64(0.0, self.params.jitter);
        self.in_flight.push(Packet {
            sent_at,
            arrives_at: sent_at + delay,
            pos,
        });
    }

    /// Remove and return every packet that has arrived by `now`, in arrival order
    pub fn receive(&mut self, now: Seconds) -> Vec<Packet<V>> {
        let (mut arrived, pending): (Vec<_>, Vec<_>) = self
            .in_flight
            .drain(..)
            .partition(|p| p.arrives_at <= now);
        self.in_flight = pending;
        arrived.sort_by(|a, b| a.arrives_at.total_cmp(&b.arrives_at));
        arrived
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(loss: f64) -> ChannelParams {
        ChannelParams {
            base_delay: 0.05,
            jitter: 0.1,
            loss,
        }
    }

    #[test]
    fn test_nothing_arrives_before_base_delay() {
        let mut channel = LossyChannel::new(params(0.0), 1);
        channel.send(0.0, 1.0f64);
        assert!(channel.receive(0.04).is_empty());
        assert_eq!(channel.in_flight(), 1);
        assert_eq!(channel.receive(0.2).len(), 1);
        assert_eq!(channel.in_flight(), 0);
    }

    #[test]
    fn test_total_loss_drops_everything() {
        let mut channel = LossyChannel::new(params(1.0), 1);
        for i in 0..10 {
            channel.send(i as f64, 0.0f64);
        }
        assert_eq!(channel.dropped(), 10);
        assert!(channel.receive(100.0).is_empty());
    }

    #[test]
    fn test_receive_sorted_by_arrival() {
        let mut channel = LossyChannel::new(params(0.0), 9);
        for i in 0..50 {
            channel.send(i as f64 * 0.01, i as f64);
        }
        let arrived = channel.receive(10.0);
        assert_eq!(arrived.len(), 50);
        assert!(arrived
            .windows(2)
            .all(|w| w[0].arrives_at <= w[1].arrives_at));
    }
}
