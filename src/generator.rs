//! Synthetic vessel generation.

use crate::model::{Destination, Flag, NavigationalStatus, Port, Vessel, VesselType};
use crate::sea_area::{SeaArea, OPEN_WATER_AREAS, SEA_AREAS};
use rand::seq::SliceRandom;
use rand::Rng;

/// Share of vessels placed next to a port when ports are available.
pub const PORT_SHARE: f64 = 0.2;
/// Maximum offset from a port on either axis, in degrees.
pub const PORT_OFFSET: f64 = 0.5;

pub const HEADING_RANGE: (u16, u16) = (0, 360);
pub const SPEED_RANGE: (f64, f64) = (5.0, 25.0);
pub const LENGTH_RANGE: (u32, u32) = (50, 400);
pub const TONNAGE_RANGE: (u32, u32) = (1_000, 250_000);

/// How vessel positions are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementMode {
    /// Every vessel goes into one of the sea areas, rivers and deltas included.
    SeaAreaOnly,
    /// A share of vessels clusters around ports, the rest goes into the open water areas.
    PortAwareOrSeaArea,
}

impl PlacementMode {
    pub fn sea_areas(&self) -> &'static [SeaArea] {
        match self {
            PlacementMode::SeaAreaOnly => &SEA_AREAS[..],
            PlacementMode::PortAwareOrSeaArea => &SEA_AREAS[..OPEN_WATER_AREAS],
        }
    }
}

pub struct Generator<R: Rng> {
    mode: PlacementMode,
    ports: Vec<Port>,
    rng: R,
}

impl<R: Rng> Generator<R> {
    /// Ports are dropped for [`PlacementMode::SeaAreaOnly`].
    pub fn new(mode: PlacementMode, ports: Vec<Port>, rng: R) -> Self {
        let ports = match mode {
            PlacementMode::SeaAreaOnly => Vec::new(),
            PlacementMode::PortAwareOrSeaArea => ports,
        };
        Generator { mode, ports, rng }
    }

    pub fn mode(&self) -> PlacementMode {
        self.mode
    }

    pub fn ports(&self) -> &[Port] {
        &self.ports
    }

    /// Generate `count` vessels with ids `VESSEL-00001` onwards.
    pub fn generate(&mut self, count: usize) -> Vec<Vessel> {
        (0..count).map(|index| self.next_vessel(index)).collect()
    }

    /// Build the vessel at zero-based position `index`.
    pub fn next_vessel(&mut self, index: usize) -> Vessel {
        let (latitude, longitude) = self.position();

        let name_type = pick(&mut self.rng, &VesselType::ALL);
        let letter = char::from(b'A' + (index % 26) as u8);

        Vessel {
            id: format!("VESSEL-{:05}", index + 1),
            name: format!("{} {}{}", name_type.as_str(), letter, index + 1),
            vessel_type: pick(&mut self.rng, &VesselType::ALL),
            latitude: round_to(latitude, 6),
            longitude: round_to(longitude, 6),
            heading: self.rng.gen_range(HEADING_RANGE.0..=HEADING_RANGE.1),
            speed: round_to(self.rng.gen_range(SPEED_RANGE.0..=SPEED_RANGE.1), 1),
            destination: pick(&mut self.rng, &Destination::ALL),
            flag: pick(&mut self.rng, &Flag::ALL),
            length: self.rng.gen_range(LENGTH_RANGE.0..=LENGTH_RANGE.1),
            tonnage: self.rng.gen_range(TONNAGE_RANGE.0..=TONNAGE_RANGE.1),
            status: pick(&mut self.rng, &NavigationalStatus::ALL),
        }
    }

    fn position(&mut self) -> (f64, f64) {
        // the share draw only happens when there is a port to pick
        if !self.ports.is_empty() && self.rng.gen::<f64>() < PORT_SHARE {
            if let Some(port) = self.ports.choose(&mut self.rng) {
                let lat = port.latitude + self.rng.gen_range(-PORT_OFFSET..=PORT_OFFSET);
                let lon = port.longitude + self.rng.gen_range(-PORT_OFFSET..=PORT_OFFSET);
                return (lat, lon);
            }
        }

        pick(&mut self.rng, self.mode.sea_areas()).sample(&mut self.rng)
    }
}

// Only called with the fixed domain and sea-area tables, none of them empty.
fn pick<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> T {
    *items.choose(rng).expect("empty domain table")
}

/// Values too large to scale by `10^places` are already integral and pass through.
fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / factor
}
