//! End-to-end scenarios: typed constants and the run-time functions agree

use dimr_core::{
    base_dimension, base_unit, canonicalize, equal, ratio_between, AlgebraError, Analyzer, Conversion, Factor, Form,
    Multiple, Per, Pow, Rescale, Resolved, Unit,
};
use pretty_assertions::assert_eq;

base_dimension!(Length);
base_dimension!(Mass);
base_dimension!(Time);
base_unit! {
    Metre: Length = Factor::ONE;
    Gram: Mass = Factor::ONE;
    Second: Time = Factor::ONE;
}

type Kilo<U> = (Pow<Multiple<10>, 3>, U);

#[test]
fn test_kilogram_to_gram_stays_integral() {
    assert_eq!(Resolved::<Gram>::FACTOR, Factor::Integral(1));
    assert_eq!(Resolved::<Kilo<Gram>>::FACTOR, Factor::Integral(1000));
    assert_eq!(Conversion::<Kilo<Gram>, Gram>::RATIO, Factor::Integral(1000));

    let grams: i32 = Rescale::<Kilo<Gram>, Gram, i32>::apply(5);
    assert_eq!(grams, 5000);
}

#[test]
fn test_force_in_any_term_order() {
    type Newton = (Pow<Kilo<Gram>, 1>, Pow<Metre, 1>, Pow<Second, -2>);
    type Reordered = (Pow<Second, -2>, Pow<Metre, 1>, Pow<Kilo<Gram>, 1>);

    assert!(Conversion::<Newton, Reordered>::SAME);
    assert_eq!(equal(&Newton::EXPR, &Reordered::EXPR), Ok(true));
    assert_eq!(Conversion::<Newton, Reordered>::RATIO, Factor::ONE);
}

#[test]
fn test_length_to_time_is_refused() {
    assert!(!Conversion::<Metre, Second>::COMPATIBLE);
    assert_eq!(
        ratio_between(&Metre::EXPR, &Second::EXPR),
        Err(AlgebraError::DimensionMismatch)
    );

    let mut analyzer = Analyzer::new();
    assert_eq!(analyzer.compatible::<Metre, Second>(), Ok(false));
}

#[test]
fn test_metre_per_metre_cancels() {
    let canonical = canonicalize(&<Per<Metre, Metre> as Unit>::EXPR).unwrap();
    assert_eq!(canonical.form(), Form::Dimensionless);
    assert!(Resolved::<(Metre, Pow<Metre, -1>)>::CANONICAL.is_dimensionless());
}

#[test]
fn test_typed_and_runtime_agree() {
    type Speed = Per<Kilo<Metre>, Pow<Second, 1>>;
    let mut analyzer = Analyzer::new();
    let analysis = analyzer.analyze::<Speed>().unwrap();
    assert_eq!(analysis.factor, Resolved::<Speed>::FACTOR);
    assert_eq!(analysis.simplified, Resolved::<Speed>::IS_SIMPLIFIED);
    assert_eq!(analysis.canonical.len(), Resolved::<Speed>::CANONICAL.len());
}
