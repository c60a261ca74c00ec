use anyhow::Result;
use futures_channel::oneshot;

use crate::Network;

/// Creates a one-shot channel for delivering loaded data. Until something arrives through the
/// `DataSender`, the `DataGate` stays pending and nothing should be computed.
pub fn data_gate() -> (DataSender, DataGate) {
    let (tx, rx) = oneshot::channel();
    (DataSender(tx), DataGate(rx))
}

pub struct DataSender(oneshot::Sender<Result<Network>>);

impl DataSender {
    pub fn deliver(self, data: Result<Network>) {
        if self.0.send(data).is_err() {
            warn!("Nothing is waiting for the loaded data anymore");
        }
    }
}

pub struct DataGate(oneshot::Receiver<Result<Network>>);

pub enum GateStatus {
    Pending,
    Ready(Network),
    Failed(anyhow::Error),
}

impl DataGate {
    /// Doesn't block. Once this returns something besides `Pending`, don't call it again.
    pub fn poll(&mut self) -> GateStatus {
        match self.0.try_recv() {
            Ok(None) => GateStatus::Pending,
            Ok(Some(Ok(network))) => GateStatus::Ready(network),
            Ok(Some(Err(err))) => GateStatus::Failed(err),
            Err(oneshot::Canceled) => GateStatus::Failed(dropped_sender()),
        }
    }

    pub async fn wait(&mut self) -> Result<Network> {
        match (&mut self.0).await {
            Ok(result) => result,
            Err(oneshot::Canceled) => Err(dropped_sender()),
        }
    }
}

fn dropped_sender() -> anyhow::Error {
    anyhow!("The data loader quit without delivering anything")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_then_ready() {
        let (tx, mut gate) = data_gate();
        assert!(matches!(gate.poll(), GateStatus::Pending));
        assert!(matches!(gate.poll(), GateStatus::Pending));

        tx.deliver(Ok(Network::empty()));
        assert!(matches!(gate.poll(), GateStatus::Ready(_)));
    }

    #[test]
    fn test_load_failure() {
        let (tx, mut gate) = data_gate();
        tx.deliver(Err(anyhow!("couldn't read stations")));
        match gate.poll() {
            GateStatus::Failed(err) => assert_eq!(err.to_string(), "couldn't read stations"),
            _ => panic!("expected a failure"),
        }
    }

    #[test]
    fn test_dropped_sender() {
        let (tx, mut gate) = data_gate();
        drop(tx);
        assert!(matches!(gate.poll(), GateStatus::Failed(_)));

        let (tx, mut gate) = data_gate();
        drop(tx);
        assert!(futures::executor::block_on(gate.wait()).is_err());
    }

    #[test]
    fn test_wait() {
        let (tx, mut gate) = data_gate();
        let handle = std::thread::spawn(move || tx.deliver(Ok(Network::empty())));
        let network = futures::executor::block_on(gate.wait()).unwrap();
        assert!(network.stations().is_empty());
        handle.join().unwrap();
    }
}
