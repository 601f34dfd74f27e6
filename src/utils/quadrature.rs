// src/utils/quadrature.rs

use log::{trace, warn};
use crate::utils::{QuadratureError, SolverSettings};

/// Kronrod abscissae on [-1, 1]; odd indices are shared with the 7-point Gauss rule.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_639_206_854_697_526_329,
    0.949_107_912_342_758_524_526_189_684_047_851,
    0.864_864_423_359_769_072_789_712_788_640_926,
    0.741_531_185_599_394_439_863_864_773_280_788,
    0.586_087_235_467_691_130_294_144_845_693_013,
    0.405_845_151_377_397_166_906_606_412_076_961,
    0.207_784_955_007_898_467_600_689_403_773_245,
    0.0,
];

const WGK: [f64; 8] = [
    0.022_935_322_010_529_224_963_732_008_058_970,
    0.063_092_092_629_978_553_290_700_663_189_204,
    0.104_790_010_322_250_183_839_876_322_541_518,
    0.140_653_259_715_525_918_745_189_590_510_238,
    0.169_004_726_639_267_902_826_583_426_598_550,
    0.190_350_578_064_785_409_913_256_402_421_014,
    0.204_432_940_075_298_892_414_161_999_234_649,
    0.209_482_141_084_727_828_012_999_174_891_714,
];

const WG: [f64; 4] = [
    0.129_484_966_168_869_693_270_611_432_679_082,
    0.279_705_391_489_276_667_901_467_771_423_780,
    0.381_830_050_505_118_944_950_369_775_488_975,
    0.417_959_183_673_469_387_755_102_040_816_327,
];

/// Value and error estimate of a converged integral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureResult {
    pub value: f64,
    pub error: f64,
    /// Number of intervals in the final partition.
    pub intervals: usize,
}

#[derive(Debug, Clone, Copy)]
struct Segment {
    lo: f64,
    hi: f64,
    value: f64,
    error: f64,
}

/// Global adaptive Gauss-Kronrod (G7/K15) integrator.
///
/// The interval with the largest error estimate is bisected until the summed error
/// falls below `max(abs_tolerance, rel_tolerance * |I|)`.
///
/// # Examples
///
/// ```
/// use rs_plate_capacitance::utils::{AdaptiveQuadrature, QuadratureError};
///
/// let quad = AdaptiveQuadrature::default();
/// let result = quad
///     .integrate(|x| Ok::<f64, QuadratureError>(x.sin()), 0.0, std::f64::consts::PI)
///     .unwrap();
/// assert!((result.value - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveQuadrature {
    pub abs_tolerance: f64,
    pub rel_tolerance: f64,
    pub max_subdivisions: usize,
}

impl Default for AdaptiveQuadrature {
    fn default() -> Self {
        Self::from_settings(&SolverSettings::default())
    }
}

impl AdaptiveQuadrature {
    pub fn new(abs_tolerance: f64, rel_tolerance: f64, max_subdivisions: usize) -> Self {
        Self { abs_tolerance, rel_tolerance, max_subdivisions }
    }

    pub fn from_settings(settings: &SolverSettings) -> Self {
        Self::new(settings.abs_tolerance, settings.rel_tolerance, settings.max_subdivisions)
    }

    /// Integrates `f` over `[lo, hi]`.
    ///
    /// The integrand is fallible so that a caller can abort the integral from inside an
    /// evaluation; its error type only has to absorb [`QuadratureError`].
    pub fn integrate<F, E>(&self, mut f: F, lo: f64, hi: f64) -> Result<QuadratureResult, E>
    where
        F: FnMut(f64) -> Result<f64, E>,
        E: From<QuadratureError>,
    {
        if lo == hi {
            return Ok(QuadratureResult { value: 0.0, error: 0.0, intervals: 0 });
        }

        let first = kronrod_segment(&mut f, lo, hi)?;
        let mut segments = vec![first];
        let mut value = first.value;
        let mut error = first.error;

        loop {
            let tolerance = self.abs_tolerance.max(self.rel_tolerance * value.abs());
            if error <= tolerance {
                return Ok(QuadratureResult { value, error, intervals: segments.len() });
            }
            if segments.len() >= self.max_subdivisions {
                warn!("Quadrature over [{:e}, {:e}] stopped at {} intervals (error {:e} > {:e})",
                      lo, hi, segments.len(), error, tolerance);
                return Err(QuadratureError::SubdivisionLimit { estimate: value, error }.into());
            }

            let worst = segments
                .iter()
                .enumerate()
                .max_by(|(_, a), (_, b)| a.error.total_cmp(&b.error))
                .map(|(index, _)| index)
                .unwrap_or(0);
            let parent = segments.swap_remove(worst);
            let mid = 0.5 * (parent.lo + parent.hi);
            if mid == parent.lo || mid == parent.hi {
                return Err(QuadratureError::RoundoffLimit { at: mid }.into());
            }

            let left = kronrod_segment(&mut f, parent.lo, mid)?;
            let right = kronrod_segment(&mut f, mid, parent.hi)?;
            trace!("Bisected [{:e}, {:e}]: error {:e} -> {:e}",
                   parent.lo, parent.hi, parent.error, left.error + right.error);

            value += left.value + right.value - parent.value;
            error += left.error + right.error - parent.error;
            segments.push(left);
            segments.push(right);

            // Running sums drift; resum once the partition has grown.
            if segments.len() % 32 == 0 {
                value = segments.iter().map(|s| s.value).sum();
                error = segments.iter().map(|s| s.error).sum();
            }
        }
    }

    /// Integrates `f(inner, outer)` with the outer variable over `outer` and the inner
    /// variable over `[inner_lo(outer), inner_hi(outer)]`.
    ///
    /// The argument order follows the usual `dblquad` convention: the integrand takes the
    /// inner variable first, and the bounds of the inner variable are functions of the outer.
    pub fn integrate_2d<F, G, H, E>(
        &self,
        mut f: F,
        outer: (f64, f64),
        inner_lo: G,
        inner_hi: H,
    ) -> Result<QuadratureResult, E>
    where
        F: FnMut(f64, f64) -> Result<f64, E>,
        G: Fn(f64) -> f64,
        H: Fn(f64) -> f64,
        E: From<QuadratureError>,
    {
        self.integrate(
            |y| {
                self.integrate(|x| f(x, y), inner_lo(y), inner_hi(y))
                    .map(|inner| inner.value)
            },
            outer.0,
            outer.1,
        )
    }
}

fn kronrod_segment<F, E>(f: &mut F, lo: f64, hi: f64) -> Result<Segment, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<QuadratureError>,
{
    let center = 0.5 * (lo + hi);
    let half = 0.5 * (hi - lo);

    let mut sample = |x: f64| -> Result<f64, E> {
        let y = f(x)?;
        if y.is_finite() {
            Ok(y)
        } else {
            Err(QuadratureError::NonFiniteIntegrand { at: x }.into())
        }
    };

    let f_center = sample(center)?;
    let mut kronrod = WGK[7] * f_center;
    let mut gauss = WG[3] * f_center;

    for (j, (&node, &weight)) in XGK.iter().zip(WGK.iter()).take(7).enumerate() {
        let dx = half * node;
        let pair = sample(center - dx)? + sample(center + dx)?;
        kronrod += weight * pair;
        if j % 2 == 1 {
            gauss += WG[j / 2] * pair;
        }
    }

    Ok(Segment {
        lo,
        hi,
        value: kronrod * half,
        error: ((kronrod - gauss) * half).abs(),
    })
}
