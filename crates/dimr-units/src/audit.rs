//! Catalog verification
//!
//! Runs the algebra over every unit the catalogs declare and collects the
//! results. Typed code would reject a broken unit at its first use; this pass
//! checks all of them at once, including units nothing uses yet.

use dimr_core::{AlgebraError, Analyzer};

use crate::imperial::*;
use crate::si::*;

macro_rules! analyze_all {
    ($analyzer:expr; $($unit:ty),+ $(,)?) => {
        $(
            $analyzer.analyze::<$unit>()?;
        )+
    };
}

/// Analyse every SI and Imperial unit.
///
/// Each must canonicalize, project onto a dimension and resolve to a positive
/// factor. Returns the analyzer holding one analysis per unit, or the first
/// error.
pub fn verify_catalog() -> Result<Analyzer, AlgebraError> {
    let mut analyzer = Analyzer::new();

    analyze_all!(analyzer; Metre, Gram, Second, Ampere, Kelvin, Mole, Candela);
    analyze_all!(analyzer;
        Radian, Hertz, Newton, Pascal, Joule, Watt, Coulomb, Volt, Farad, Ohm, Siemens,
        Weber, Tesla, Henry, Lumen, Lux, Gray, Katal,
    );
    analyze_all!(analyzer;
        Minute, Hour, Day, PlaneDegree, PlaneMinute, PlaneSecond, Hectare, Litre, Tonne,
        ElectronVolt, AtomicMass, AstronomicalUnit, Angstrom, Are, Barn, Bar,
        Atmosphere, MillimetreOfMercury, Torr,
    );
    analyze_all!(analyzer;
        Thou, Inch, Foot, Yard, Chain, Furlong, Mile, League, Fathom, Cable, NauticalMile, Link, Rod,
        Perch, Rood, Acre,
        FluidOunce, Gill, Pint, Quart, Gallon,
        Grain, Drachm, Ounce, Pound, Stone, Quarter, Hundredweight, Ton,
    );

    tracing::info!(units = analyzer.len(), "unit catalog verified");
    Ok(analyzer)
}
