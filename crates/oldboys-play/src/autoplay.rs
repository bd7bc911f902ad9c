use oldboys_input::{InputBackend, Key, LaneBinding, VirtualInput};
use oldboys_model::{Chart, LANE_COUNT, Lane};

/// Scripted key presses replayed through a `VirtualInput`.
///
/// A lane's key goes down on the first frame whose tick reaches the next
/// scheduled press and comes back up on the following frame, so every press
/// is a single edge.
#[derive(Debug, Clone)]
pub struct Autoplay {
    keys: [Key; LANE_COUNT],
    presses: [Vec<f64>; LANE_COUNT],
    next: [usize; LANE_COUNT],
    input: VirtualInput,
}

impl Autoplay {
    /// Press every chart note on time.
    pub fn new(chart: &Chart, bindings: &[LaneBinding; LANE_COUNT]) -> Self {
        Self::from_presses(chart.iter().map(|(_, n)| (n.lane, n.tick)), bindings)
    }

    /// Replay arbitrary `(lane, tick)` presses.
    pub fn from_presses(
        presses: impl IntoIterator<Item = (Lane, f64)>,
        bindings: &[LaneBinding; LANE_COUNT],
    ) -> Self {
        let mut per_lane: [Vec<f64>; LANE_COUNT] = Default::default();
        for (lane, tick) in presses {
            per_lane[lane.index()].push(tick);
        }
        for ticks in &mut per_lane {
            ticks.sort_by(f64::total_cmp);
        }
        Self {
            keys: bindings.map(|b| b.key),
            presses: per_lane,
            next: [0; LANE_COUNT],
            input: VirtualInput::new(),
        }
    }

    /// Presses not yet issued.
    pub fn remaining(&self) -> usize {
        self.presses
            .iter()
            .zip(self.next)
            .map(|(p, n)| p.len() - n)
            .sum()
    }

    /// Input state for the frame that will be judged at `tick`.
    pub fn input_for(&mut self, tick: f64) -> &VirtualInput {
        for lane in Lane::ALL {
            let i = lane.index();
            let key = self.keys[i];
            if self.input.is_key_pressed(key) {
                // Release for one frame so the next press is a new edge
                self.input.release(key);
                continue;
            }
            if self.presses[i].get(self.next[i]).is_some_and(|&t| t <= tick) {
                self.input.press(key);
                self.next[i] += 1;
            }
        }
        &self.input
    }
}
