use anyhow::Result;

use crate::{DataGate, GateStatus, Network, Station, StationMarker, TimeFilter, TrafficView};

/// Drives the pipeline from UI events. Time selections can arrive at any point, but nothing is
/// computed until the data has loaded. Each recomputation replaces the previous view entirely.
pub struct Session {
    state: State,
    filter: TimeFilter,
}

enum State {
    Loading(DataGate),
    Ready { network: Network, view: TrafficView },
    Failed(anyhow::Error),
}

impl Session {
    pub fn new(gate: DataGate) -> Self {
        Self {
            state: State::Loading(gate),
            filter: TimeFilter::Any,
        }
    }

    /// Call from the event loop. Returns true once the data is ready.
    pub fn poll_loaded(&mut self) -> bool {
        if let State::Loading(ref mut gate) = self.state {
            match gate.poll() {
                GateStatus::Pending => {}
                GateStatus::Ready(network) => self.finish_loading(Ok(network)),
                GateStatus::Failed(err) => self.finish_loading(Err(err)),
            }
        }
        self.is_ready()
    }

    pub async fn wait_until_loaded(&mut self) {
        if let State::Loading(ref mut gate) = self.state {
            let result = gate.wait().await;
            self.finish_loading(result);
        }
    }

    fn finish_loading(&mut self, result: Result<Network>) {
        self.state = match result {
            Ok(network) => {
                let view = network.recompute(self.filter);
                info!(
                    "Data ready, showing {} trips for {}",
                    view.num_trips,
                    self.filter.label()
                );
                State::Ready { network, view }
            }
            Err(err) => {
                error!("Loading failed: {err}");
                State::Failed(err)
            }
        };
    }

    /// Handles a change to the time slider. Before the data is ready, the selection is just
    /// remembered.
    pub fn set_time_filter(&mut self, slider_value: i32) -> Result<()> {
        self.filter = TimeFilter::from_slider(slider_value)?;
        self.poll_loaded();
        if let State::Ready {
            ref network,
            ref mut view,
        } = self.state
        {
            *view = network.recompute(self.filter);
        }
        Ok(())
    }

    pub fn filter(&self) -> TimeFilter {
        self.filter
    }

    pub fn time_label(&self) -> String {
        self.filter.label()
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready { .. })
    }

    pub fn load_error(&self) -> Option<&anyhow::Error> {
        match self.state {
            State::Failed(ref err) => Some(err),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&TrafficView> {
        match self.state {
            State::Ready { ref view, .. } => Some(view),
            _ => None,
        }
    }

    /// Empty until the data is ready
    pub fn stations(&self) -> &[Station] {
        match self.state {
            State::Ready { ref network, .. } => network.stations(),
            _ => &[],
        }
    }

    pub fn markers(&self) -> Vec<StationMarker> {
        match self.state {
            State::Ready {
                ref network,
                ref view,
            } => view.markers(network.stations()),
            _ => Vec::new(),
        }
    }
}
