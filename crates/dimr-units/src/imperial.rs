//! British Imperial units, defined through their exact SI values

use dimr_core::{base_unit, Factor, Pow, Resolved};

use crate::si::{Length, Litre, Mass};

// Length, in metres
base_unit! {
    pub Thou: Length = Factor::Floating(0.000_025_4);
    pub Inch: Length = Factor::Floating(0.0254);
    pub Foot: Length = Factor::Floating(0.3048);
    pub Yard: Length = Factor::Floating(0.9144);
    pub Chain: Length = Factor::Floating(20.1168);
    pub Furlong: Length = Factor::Floating(201.168);
    pub Mile: Length = Factor::Floating(1609.344);
    pub League: Length = Factor::Floating(4828.032);
    pub Fathom: Length = Factor::Floating(1.8288);
    pub Cable: Length = Factor::Floating(185.3184);
    pub NauticalMile: Length = Factor::Floating(1853.184);
    pub Link: Length = Factor::Floating(0.201_168);
    pub Rod: Length = Factor::Floating(5.0292);
}

// Area
pub type Perch = Pow<Rod, 2>;
pub type Rood = (Furlong, Rod);
pub type Acre = (Furlong, Chain);

// Volume, in litres
base_unit! {
    pub FluidOunce: Litre = Factor::Floating(0.028_413_062_5).mul(Resolved::<Litre>::FACTOR);
    pub Gill: Litre = Factor::Floating(0.142_065_312_5).mul(Resolved::<Litre>::FACTOR);
    pub Pint: Litre = Factor::Floating(0.568_261_25).mul(Resolved::<Litre>::FACTOR);
    pub Quart: Litre = Factor::Floating(1.136_522_5).mul(Resolved::<Litre>::FACTOR);
    pub Gallon: Litre = Factor::Floating(4.546_09).mul(Resolved::<Litre>::FACTOR);
}

// Mass, in grams
base_unit! {
    pub Grain: Mass = Factor::Floating(0.064_798_91);
    pub Drachm: Mass = Factor::Floating(1.771_845_195_312_5);
    pub Ounce: Mass = Factor::Floating(28.349_523_125);
    pub Pound: Mass = Factor::Floating(453.592_37);
    pub Stone: Mass = Factor::Floating(6350.293_18);
    pub Quarter: Mass = Factor::Floating(12_700.586_36);
    pub Hundredweight: Mass = Factor::Floating(50_802.345_44);
    pub Ton: Mass = Factor::Floating(1_016_046.908_8);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::si::{Gram, Kilo, Metre};
    use dimr_core::{Conversion, Rescale};

    fn ratio<From: dimr_core::Unit, To: dimr_core::Unit>() -> f64 {
        Conversion::<From, To>::RATIO.to_f64()
    }

    fn close(a: f64, b: f64) -> bool {
        (a / b - 1.0).abs() < 1e-9
    }

    #[test]
    fn test_lengths() {
        assert!(close(ratio::<Foot, Inch>(), 12.0));
        assert!(close(ratio::<Yard, Foot>(), 3.0));
        assert!(close(ratio::<Mile, Yard>(), 1760.0));
        assert!(close(ratio::<Inch, Thou>(), 1000.0));
        assert!(close(Rescale::<Mile, Kilo<Metre>, f64>::apply(1.0), 1.609_344));
    }

    #[test]
    fn test_areas() {
        assert!(close(ratio::<Acre, Pow<Yard, 2>>(), 4840.0));
        assert!(close(ratio::<Acre, Rood>(), 4.0));
        assert!(close(ratio::<Rood, Perch>(), 40.0));
    }

    #[test]
    fn test_volumes_and_masses() {
        assert!(close(ratio::<Gallon, Pint>(), 8.0));
        assert!(close(ratio::<Pint, FluidOunce>(), 20.0));
        assert!(close(ratio::<Pound, Ounce>(), 16.0));
        assert!(close(ratio::<Stone, Pound>(), 14.0));
        assert!(close(ratio::<Ton, Hundredweight>(), 20.0));
        assert!(close(Rescale::<Pound, Gram, f64>::apply(1.0), 453.592_37));
    }

    #[test]
    fn test_thou_is_a_length() {
        assert!(Conversion::<Thou, Metre>::COMPATIBLE);
        assert!(!Conversion::<Thou, Gram>::COMPATIBLE);
    }
}
