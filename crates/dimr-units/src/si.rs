//! SI units
//!
//! The seven SI dimensions and their base units, the decimal prefixes,
//! the named derived units and the non-SI units accepted for use with SI.
//!
//! The gram, not the kilogram, is the base unit of mass so that prefixes
//! compose the same way for every unit: `Milli<Gram>` rather than a milli
//! kilogram. Prefixes are plain products with a power of ten and nest freely,
//! so `Kilo<Kilo<Metre>>` is a megametre.

use std::f64::consts::PI;

use dimr_core::{base_dimension, base_unit, Factor, Inv, Multiple, Pow, Resolved};

base_dimension! {
    pub Length;
    pub Mass;
    pub Time;
    pub ElectricCurrent;
    /// Only multiplicative scales are modelled: kelvin-sized degrees convert,
    /// offset scales such as Celsius do not.
    pub ThermodynamicTemperature;
    pub SubstanceAmount;
    pub LuminousIntensity;
}

base_unit! {
    pub Metre: Length = Factor::ONE;
    pub Gram: Mass = Factor::ONE;
    pub Second: Time = Factor::ONE;
    pub Ampere: ElectricCurrent = Factor::ONE;
    pub Kelvin: ThermodynamicTemperature = Factor::ONE;
    pub Mole: SubstanceAmount = Factor::ONE;
    pub Candela: LuminousIntensity = Factor::ONE;
}

pub type Deca<U> = (Pow<Multiple<10>, 1>, U);
pub type Hecto<U> = (Pow<Multiple<10>, 2>, U);
pub type Kilo<U> = (Pow<Multiple<10>, 3>, U);
pub type Mega<U> = (Pow<Multiple<10>, 6>, U);
pub type Giga<U> = (Pow<Multiple<10>, 9>, U);
pub type Tera<U> = (Pow<Multiple<10>, 12>, U);
pub type Peta<U> = (Pow<Multiple<10>, 15>, U);
pub type Exa<U> = (Pow<Multiple<10>, 18>, U);
pub type Zetta<U> = (Pow<Multiple<10>, 21>, U);
pub type Yotta<U> = (Pow<Multiple<10>, 24>, U);

pub type Deci<U> = (Pow<Multiple<10>, -1>, U);
pub type Centi<U> = (Pow<Multiple<10>, -2>, U);
pub type Milli<U> = (Pow<Multiple<10>, -3>, U);
pub type Micro<U> = (Pow<Multiple<10>, -6>, U);
pub type Nano<U> = (Pow<Multiple<10>, -9>, U);
pub type Pico<U> = (Pow<Multiple<10>, -12>, U);
pub type Femto<U> = (Pow<Multiple<10>, -15>, U);
pub type Atto<U> = (Pow<Multiple<10>, -18>, U);
pub type Zepto<U> = (Pow<Multiple<10>, -21>, U);
pub type Yocto<U> = (Pow<Multiple<10>, -24>, U);

pub type Kilogram = Kilo<Gram>;

// Derived units
pub type Radian = ();
pub type Steradian = ();
pub type Hertz = Inv<Second>;
pub type Newton = (Kilogram, Metre, Pow<Second, -2>);
pub type Pascal = (Kilogram, Pow<Metre, -1>, Pow<Second, -2>);
pub type Joule = (Kilogram, Pow<Metre, 2>, Pow<Second, -2>);
pub type Watt = (Kilogram, Pow<Metre, 2>, Pow<Second, -3>);
pub type Coulomb = (Second, Ampere);
pub type Volt = (Kilogram, Pow<Metre, 2>, Pow<Second, -3>, Pow<Ampere, -1>);
pub type Farad = (Pow<Kilogram, -1>, Pow<Metre, -2>, Pow<Second, 4>, Pow<Ampere, 2>);
pub type Ohm = (Kilogram, Pow<Metre, 2>, Pow<Second, -3>, Pow<Ampere, -2>);
pub type Siemens = (Pow<Kilogram, -1>, Pow<Metre, -2>, Pow<Second, 3>, Pow<Ampere, 2>);
pub type Weber = (Kilogram, Pow<Metre, 2>, Pow<Second, -2>, Pow<Ampere, -1>);
pub type Tesla = (Kilogram, Pow<Second, -2>, Pow<Ampere, -1>);
pub type Henry = (Kilogram, Pow<Metre, 2>, Pow<Second, -2>, Pow<Ampere, -2>);
pub type Lumen = (Candela, Steradian);
pub type Lux = (Pow<Metre, -2>, Candela);
pub type Becquerel = Inv<Second>;
pub type Gray = (Pow<Metre, 2>, Pow<Second, -2>);
pub type Sievert = (Pow<Metre, 2>, Pow<Second, -2>);
pub type Katal = (Inv<Second>, Mole);

// Non-SI units accepted for use with SI
pub type Minute = (Multiple<60>, Second);
pub type Hour = (Pow<Multiple<60>, 2>, Second);
pub type Day = (Multiple<24>, Hour);
pub type PlaneMinute = (Pow<Multiple<60>, -1>, PlaneDegree);
pub type PlaneSecond = (Pow<Multiple<60>, -2>, PlaneDegree);
pub type Hectare = (Pow<Multiple<10>, 4>, Pow<Metre, 2>);
pub type Litre = (Pow<Multiple<10>, -3>, Pow<Metre, 3>);
pub type Tonne = (Pow<Multiple<10>, 6>, Gram);
pub type Angstrom = (Pow<Multiple<10>, -10>, Metre);
pub type Are = (Pow<Multiple<10>, 2>, Pow<Metre, 2>);
pub type Barn = (Pow<Multiple<10>, -28>, Pow<Metre, 2>);
pub type Bar = (Pow<Multiple<10>, 5>, Pascal);

base_unit! {
    /// 1/360 of a turn; dimensionless like the radian
    pub PlaneDegree: () = Factor::Floating(PI / 180.0);
    pub ElectronVolt: Joule = Factor::Floating(1.602_176_53e-19).mul(Resolved::<Joule>::FACTOR);
    /// Dalton, in grams
    pub AtomicMass: Mass = Factor::Floating(1.660_538_921e-24);
    pub AstronomicalUnit: Length = Factor::Integral(149_597_870_692);
    pub Atmosphere: Pascal = Factor::Integral(101_325).mul(Resolved::<Pascal>::FACTOR);
    pub MillimetreOfMercury: Pascal = Factor::Floating(133.322_387_415).mul(Resolved::<Pascal>::FACTOR);
    pub Torr: Pascal = Factor::Floating(133.322_368_421).mul(Resolved::<Pascal>::FACTOR);
}
