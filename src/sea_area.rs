use rand::Rng;

/// Named bounding box vessels get scattered in.
///
/// Bounds are `(first, second)` pairs sampled as `first + (second - first) * u`.
/// The pair is not required to be ordered: Pacific and Bering Sea list the
/// larger longitude first, so their samples land in the inverted interval
/// instead of wrapping across the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeaArea {
    pub name: &'static str,
    pub lat: (f64, f64),
    pub lon: (f64, f64),
}

impl SeaArea {
    const fn new(name: &'static str, lat: (f64, f64), lon: (f64, f64)) -> Self {
        SeaArea { name, lat, lon }
    }

    /// Draw a (latitude, longitude) pair uniformly within the bounds.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> (f64, f64) {
        let lat = interpolate(self.lat, rng.gen::<f64>());
        let lon = interpolate(self.lon, rng.gen::<f64>());
        (lat, lon)
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        within(self.lat, lat) && within(self.lon, lon)
    }
}

fn interpolate(bounds: (f64, f64), u: f64) -> f64 {
    bounds.0 + (bounds.1 - bounds.0) * u
}

fn within(bounds: (f64, f64), value: f64) -> bool {
    let (low, high) = if bounds.0 <= bounds.1 {
        bounds
    } else {
        (bounds.1, bounds.0)
    };
    value >= low && value <= high
}

/// Number of leading entries of [`SEA_AREAS`] used for port-aware placement.
pub const OPEN_WATER_AREAS: usize = 17;

pub static SEA_AREAS: [SeaArea; 20] = [
    SeaArea::new("North Atlantic", (20.0, 60.0), (-80.0, -10.0)),
    SeaArea::new("Mediterranean", (30.0, 46.0), (-6.0, 36.0)),
    SeaArea::new("North Sea", (51.0, 61.0), (-2.0, 10.0)),
    SeaArea::new("Caribbean", (10.0, 25.0), (-90.0, -60.0)),
    SeaArea::new("Pacific", (-20.0, 50.0), (100.0, -80.0)),
    SeaArea::new("Indian Ocean", (-40.0, 25.0), (20.0, 120.0)),
    SeaArea::new("South Atlantic", (-40.0, 20.0), (-60.0, 20.0)),
    SeaArea::new("Red Sea", (12.0, 30.0), (32.0, 44.0)),
    SeaArea::new("Baltic Sea", (54.0, 66.0), (9.0, 30.0)),
    SeaArea::new("Gulf of Mexico", (18.0, 30.0), (-98.0, -80.0)),
    SeaArea::new("South China Sea", (0.0, 25.0), (100.0, 120.0)),
    SeaArea::new("Arabian Sea", (10.0, 25.0), (55.0, 75.0)),
    SeaArea::new("Bering Sea", (52.0, 66.0), (162.0, -168.0)),
    SeaArea::new("Black Sea", (41.0, 47.0), (27.0, 42.0)),
    SeaArea::new("Mississippi Delta", (29.0, 30.5), (-91.0, -89.0)),
    SeaArea::new("Thames Estuary", (51.3, 51.7), (0.5, 1.5)),
    SeaArea::new("Suez Canal", (29.8, 31.3), (32.3, 32.6)),
    // rivers and deltas, sea-area-only placement
    SeaArea::new("Rhine-Meuse Delta", (51.7, 52.1), (3.9, 4.6)),
    SeaArea::new("Yangtze Estuary", (30.9, 31.9), (121.0, 122.5)),
    SeaArea::new("Amazon River Mouth", (-1.0, 1.5), (-50.5, -48.0)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn area(name: &str) -> &'static SeaArea {
        SEA_AREAS.iter().find(|a| a.name == name).unwrap()
    }

    fn is_inverted(area: &SeaArea) -> bool {
        area.lon.1 < area.lon.0
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in SEA_AREAS.iter().enumerate() {
            assert!(SEA_AREAS[i + 1..].iter().all(|b| b.name != a.name));
        }
    }

    #[test]
    fn only_pacific_and_bering_are_inverted() {
        let inverted: Vec<&str> = SEA_AREAS
            .iter()
            .filter(|a| is_inverted(a))
            .map(|a| a.name)
            .collect();
        assert_eq!(inverted, vec!["Pacific", "Bering Sea"]);
        assert!(SEA_AREAS.iter().all(|a| a.lat.0 <= a.lat.1));
    }

    #[test]
    fn samples_stay_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for a in SEA_AREAS.iter() {
            for _ in 0..200 {
                let (lat, lon) = a.sample(&mut rng);
                assert!(a.contains(lat, lon), "{} produced ({lat}, {lon})", a.name);
            }
        }
    }

    #[test]
    fn inverted_range_samples_literally() {
        let mut rng = StdRng::seed_from_u64(11);
        let pacific = area("Pacific");
        let bering = area("Bering Sea");
        for _ in 0..500 {
            let (_, lon) = pacific.sample(&mut rng);
            assert!((-80.0..=100.0).contains(&lon));

            let (_, lon) = bering.sample(&mut rng);
            assert!((-168.0..=162.0).contains(&lon));
        }
    }

    #[test]
    fn contains_checks_both_axes() {
        let thames = area("Thames Estuary");
        assert!(thames.contains(51.5, 1.0));
        assert!(!thames.contains(51.5, 2.0));
        assert!(!thames.contains(52.0, 1.0));

        let pacific = area("Pacific");
        assert!(pacific.contains(0.0, 0.0));
        assert!(!pacific.contains(0.0, 150.0));
    }
}
