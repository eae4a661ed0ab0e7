//! Saturated liquid and vapor lines of a fluid.

mod error;

pub use error::VaporDomeError;

use tracing::debug;
use uom::si::{f64::Pressure, pressure::kilopascal};

use crate::support::thermo::{
    Curve, Quality,
    capability::{HasReferencePoints, StateFrom},
};

/// Default number of isobars sampled across the dome.
pub const DEFAULT_VAPOR_DOME_POINTS: usize = 500;

/// Lowest sampled pressure as a multiple of the triple point pressure.
const TRIPLE_MARGIN: f64 = 1.001;

/// Highest sampled pressure as a multiple of the critical pressure.
const CRITICAL_MARGIN: f64 = 0.99;

/// The two saturation lines, each closed by the critical state.
#[derive(Debug, Clone, PartialEq)]
pub struct VaporDome<Fluid> {
    pub saturated_liquid: Curve<Fluid>,
    pub saturated_vapor: Curve<Fluid>,
}

/// Samples both saturation lines on log-spaced isobars.
///
/// # Errors
///
/// Returns [`VaporDomeError::TooFewPoints`] before any query if
/// `point_count < 2`, and [`VaporDomeError::PropertyLookup`] if a sample or
/// the critical state cannot be evaluated.
pub(super) fn vapor_dome<Fluid, T>(
    thermo: &T,
    point_count: usize,
) -> Result<VaporDome<Fluid>, VaporDomeError>
where
    Fluid: Clone + Default,
    T: HasReferencePoints<Fluid = Fluid> + StateFrom<(Fluid, Pressure, Quality)>,
{
    if point_count < 2 {
        return Err(VaporDomeError::TooFewPoints { count: point_count });
    }

    let low = thermo.triple_point().pressure * TRIPLE_MARGIN;
    let high = thermo.critical_point().pressure * CRITICAL_MARGIN;

    let mut saturated_liquid = Curve::with_capacity(point_count + 1);
    let mut saturated_vapor = Curve::with_capacity(point_count + 1);

    for pressure in log_spaced(low, high, point_count) {
        let kpa = pressure.get::<kilopascal>();
        let sample = |quality: Quality| {
            thermo
                .state_from((Fluid::default(), pressure, quality))
                .map_err(|err| {
                    VaporDomeError::thermo_failed(
                        format!("saturation at {kpa:.4} kPa, x = {}", quality.value()),
                        err,
                    )
                })
        };
        saturated_liquid.push(sample(Quality::saturated_liquid())?);
        saturated_vapor.push(sample(Quality::saturated_vapor())?);
    }

    let critical = thermo
        .critical_state()
        .map_err(|err| VaporDomeError::thermo_failed("critical state", err))?;
    saturated_liquid.push(critical.clone());
    saturated_vapor.push(critical);

    debug!(
        point_count,
        p_min_kpa = low.get::<kilopascal>(),
        p_max_kpa = high.get::<kilopascal>(),
        "built vapor dome"
    );

    Ok(VaporDome {
        saturated_liquid,
        saturated_vapor,
    })
}

/// `count` pressures evenly spaced in `ln p`, with the end values hit exactly.
fn log_spaced(low: Pressure, high: Pressure, count: usize) -> impl Iterator<Item = Pressure> {
    let (ln_low, ln_high) = (
        low.get::<kilopascal>().ln(),
        high.get::<kilopascal>().ln(),
    );
    let last = count - 1;

    (0..count).map(move |n| {
        if n == 0 {
            low
        } else if n == last {
            high
        } else {
            #[allow(clippy::cast_precision_loss)]
            let z = n as f64 / last as f64;
            Pressure::new::<kilopascal>((ln_low + (ln_high - ln_low) * z).exp())
        }
    })
}
