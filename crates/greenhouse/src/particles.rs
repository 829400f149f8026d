// Particle placement inside the canvas disk by rejection sampling

use crate::constants::MAX_SAMPLE_ATTEMPTS;
use crate::coupling::Gas;
use crate::error::{ConfigError, Result};
use crate::layout::Region;
use glam::Vec2;
use log::debug;
use rand::Rng;

/// A single particle position for one frame, in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticlePoint {
    pub position: Vec2,
    pub gas: Gas,
}

/// Produces fresh particle positions for a gas share
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSampler {
    total_concentration: f32,
    max_attempts: u32,
}

impl ParticleSampler {
    pub fn new(total_concentration: f32, max_attempts: u32) -> Result<Self> {
        if !(total_concentration.is_finite() && total_concentration > 0.0) {
            return Err(ConfigError::invalid(format!(
                "total concentration must be positive, got {}",
                total_concentration
            )));
        }
        if max_attempts == 0 {
            return Err(ConfigError::invalid("max sample attempts must be at least 1"));
        }

        Ok(Self {
            total_concentration,
            max_attempts,
        })
    }

    /// Number of particles for a gas: `round(total * concentration / total_concentration)`
    pub fn count(&self, total_particles: u32, concentration: f32) -> usize {
        let count = (total_particles as f32 * (concentration / self.total_concentration)).round();
        // negative or NaN shares draw nothing
        if count > 0.0 { count as usize } else { 0 }
    }

    /// Generate the particles of one gas for the current frame
    pub fn sample<R: Rng>(
        &self,
        rng: &mut R,
        gas: Gas,
        total_particles: u32,
        concentration: f32,
        region: &Region,
    ) -> Vec<ParticlePoint> {
        let count = self.count(total_particles, concentration);

        (0..count)
            .map(|_| ParticlePoint {
                position: self.sample_point(rng, region),
                gas,
            })
            .collect()
    }

    /// Draw uniform points in the region until one lands in its centered disk
    ///
    /// Each draw is accepted with probability π/4 for a square region, so the
    /// loop terminates with probability 1. After `max_attempts` rejections the
    /// last candidate is projected onto the disk boundary.
    pub fn sample_point<R: Rng>(&self, rng: &mut R, region: &Region) -> Vec2 {
        let center = region.center();
        let radius = region.radius();
        let mut candidate = center;

        for _ in 0..self.max_attempts {
            candidate = Vec2::new(
                rng.random_range(0.0..region.width()),
                rng.random_range(0.0..region.height()),
            );
            if candidate.distance(center) <= radius {
                return candidate;
            }
        }

        debug!(
            "No particle position accepted after {} attempts, clamping to the boundary",
            self.max_attempts
        );
        clamp_to_disk(candidate, center, radius)
    }
}

fn clamp_to_disk(point: Vec2, center: Vec2, radius: f32) -> Vec2 {
    let offset = point - center;
    if offset.length() <= radius {
        point
    } else {
        center + offset.normalize_or_zero() * radius
    }
}

/// Sample the particles of one gas in a `region_width x region_height` canvas
///
/// # Arguments
/// * `total_particle_count` - Particle slider value shared by both gases
/// * `concentration` - Share of this gas
/// * `total_concentration` - Sum of both shares, must be positive
///
/// # Returns
/// Fresh points, or `InvalidConfiguration` for a zero total or an empty region
pub fn sample_particles<R: Rng>(
    rng: &mut R,
    gas: Gas,
    total_particle_count: u32,
    concentration: f32,
    total_concentration: f32,
    region_width: f32,
    region_height: f32,
) -> Result<Vec<ParticlePoint>> {
    let sampler = ParticleSampler::new(total_concentration, MAX_SAMPLE_ATTEMPTS)?;
    let region = Region::new(region_width, region_height)?;

    Ok(sampler.sample(rng, gas, total_particle_count, concentration, &region))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    fn seeded_rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[rstest]
    #[case(600.0, 400.0)]
    #[case(400.0, 600.0)]
    #[case(300.0, 300.0)]
    #[case(1000.0, 10.0)] // thin strip
    fn test_points_stay_inside_disk(#[case] width: f32, #[case] height: f32) {
        let mut rng = seeded_rng();

        let points =
            sample_particles(&mut rng, Gas::Methane, 500, 100.0, 100.0, width, height).unwrap();

        let center = Vec2::new(width / 2.0, height / 2.0);
        let radius = width.min(height) / 2.0;
        assert_eq!(points.len(), 500);
        for point in &points {
            assert!(point.position.distance(center) <= radius + 1e-3);
            assert_eq!(point.gas, Gas::Methane);
        }
    }

    #[rstest]
    #[case(100, 50.0, 50)]
    #[case(100, 33.0, 33)]
    #[case(7, 50.0, 4)] // 3.5 rounds up
    #[case(1000, 12.5, 125)]
    #[case(100, 0.0, 0)]
    #[case(100, 100.0, 100)]
    #[case(100, -10.0, 0)]
    fn test_count_follows_share(
        #[case] total: u32,
        #[case] concentration: f32,
        #[case] expected: usize,
    ) {
        let mut rng = seeded_rng();

        let points =
            sample_particles(&mut rng, Gas::Co2, total, concentration, 100.0, 600.0, 400.0)
                .unwrap();

        assert_eq!(points.len(), expected);
    }

    #[test]
    fn test_both_gases_add_up_to_total() {
        let sampler = ParticleSampler::new(100.0, MAX_SAMPLE_ATTEMPTS).unwrap();

        for methane in 0..=100 {
            let methane = methane as f32;
            let total = sampler.count(250, methane) + sampler.count(250, 100.0 - methane);
            assert!((249..=251).contains(&total), "methane {} gave {}", methane, total);
        }
    }

    #[test]
    fn test_zero_total_concentration_is_rejected() {
        let mut rng = seeded_rng();

        let result = sample_particles(&mut rng, Gas::Methane, 100, 0.0, 0.0, 600.0, 400.0);

        assert!(matches!(result, Err(ConfigError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_empty_region_is_rejected() {
        let mut rng = seeded_rng();

        let result = sample_particles(&mut rng, Gas::Methane, 100, 50.0, 100.0, 0.0, 400.0);

        assert!(matches!(result, Err(ConfigError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_zero_attempts_is_rejected() {
        assert!(ParticleSampler::new(100.0, 0).is_err());
    }

    #[test]
    fn test_single_attempt_falls_back_to_boundary() {
        let sampler = ParticleSampler::new(100.0, 1).unwrap();
        let region = Region::new(600.0, 400.0).unwrap();
        let mut rng = seeded_rng();

        for _ in 0..1000 {
            let point = sampler.sample_point(&mut rng, &region);
            assert!(point.distance(region.center()) <= region.radius() + 1e-3);
        }
    }

    #[test]
    fn test_samples_spread_over_the_disk() {
        let mut rng = seeded_rng();

        let points =
            sample_particles(&mut rng, Gas::Co2, 4000, 100.0, 100.0, 400.0, 400.0).unwrap();

        // every quadrant of the disk receives roughly a quarter of the points
        let center = Vec2::splat(200.0);
        let mut quadrants = [0usize; 4];
        for point in &points {
            let offset = point.position - center;
            let index = (offset.x >= 0.0) as usize + 2 * (offset.y >= 0.0) as usize;
            quadrants[index] += 1;
        }
        for count in quadrants {
            assert!((800..=1200).contains(&count), "quadrant count {}", count);
        }
    }

    #[test]
    fn test_each_call_produces_fresh_points() {
        let mut rng = seeded_rng();

        let first = sample_particles(&mut rng, Gas::Methane, 10, 100.0, 100.0, 600.0, 400.0)
            .unwrap();
        let second = sample_particles(&mut rng, Gas::Methane, 10, 100.0, 100.0, 600.0, 400.0)
            .unwrap();

        assert_ne!(first, second);
    }
}
