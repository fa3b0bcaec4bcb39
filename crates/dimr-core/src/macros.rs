//! Declaration macros for bases

/// Declare one or more base dimensions.
///
/// Each becomes an uninhabited tag type whose identity is its module path.
///
/// # Identity
///
/// The algebra tells bases apart by `module_path!()` and name only. Two
/// declarations of the same name in one module (say, in two function bodies)
/// are the same base, whatever they declare. Declare bases at module level,
/// or give each its own module:
///
/// ```
/// use dimr_core::Conversion;
///
/// mod ship {
///     dimr_core::base_dimension!(pub Speed);
/// }
/// mod wind {
///     dimr_core::base_dimension!(pub Speed);
/// }
///
/// assert!(!Conversion::<ship::Speed, wind::Speed>::SAME);
/// ```
///
/// ```
/// dimr_core::base_dimension!(pub Length);
/// dimr_core::base_dimension! {
///     /// Amount of stuff
///     pub Stuff;
///     Hidden;
/// }
/// ```
#[macro_export]
macro_rules! base_dimension {
    ($($(#[$meta:meta])* $vis:vis $name:ident);+ $(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum $name {}

            impl $crate::Unit for $name {
                const EXPR: $crate::UnitExpr<'static> = $crate::UnitExpr::Base($crate::Base::dimension(
                    concat!(module_path!(), "::", stringify!($name)),
                ));
            }
        )+
    };
}

/// Declare one or more base units as `Name: Dimension = factor`.
///
/// The dimension may be any tag type: a dimension expression, or another unit
/// whose dimension the new unit shares. The factor is a [`crate::Factor`]
/// constant expression relative to the dimension's canonical unit. Identity
/// follows the same rule as [`base_dimension!`]: module path and name.
///
/// ```
/// use dimr_core::{base_dimension, base_unit, Factor, Pow, Resolved};
///
/// base_dimension!(pub Length);
/// base_unit! {
///     pub Metre: Length = Factor::ONE;
///     pub Foot: Length = Factor::Floating(0.3048);
///     /// Shares the dimension of a squared foot
///     pub Acre: Pow<Foot, 2> = Factor::Floating(4046.8564224);
/// }
///
/// assert_eq!(Resolved::<Acre>::DIMENSION.len(), 1);
/// ```
#[macro_export]
macro_rules! base_unit {
    ($($(#[$meta:meta])* $vis:vis $name:ident: $dim:ty = $factor:expr);+ $(;)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            $vis enum $name {}

            impl $crate::Unit for $name {
                const EXPR: $crate::UnitExpr<'static> = $crate::UnitExpr::Base($crate::Base::unit(
                    concat!(module_path!(), "::", stringify!($name)),
                    <$dim as $crate::Unit>::EXPR_REF,
                    $factor,
                ));
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use crate::{factor_of, Factor, Unit, UnitExpr};

    base_dimension! {
        Mass;
        Volume;
    }
    base_unit! {
        Gram: Mass = Factor::ONE;
        /// A scaled unit sharing another unit's dimension
        Pound: Gram = Factor::Floating(453.59237);
    }

    mod imperial {
        crate::base_unit! {
            pub Gram: super::Mass = crate::Factor::Floating(1.0);
        }
    }

    #[test]
    fn test_same_name_in_another_module_is_another_base() {
        use crate::Conversion;

        assert!(!Conversion::<Gram, imperial::Gram>::SAME);
        assert!(Conversion::<Gram, imperial::Gram>::COMPATIBLE);
        assert!(Conversion::<Gram, Gram>::SAME);
    }

    #[test]
    fn test_declared_bases() {
        assert!(matches!(Mass::EXPR, UnitExpr::Base(b) if b.is_dimension()));
        assert!(matches!(Volume::EXPR, UnitExpr::Base(b) if b.name().ends_with("::Volume")));
        assert_eq!(factor_of(&Pound::EXPR), Ok(Factor::Floating(453.59237)));
    }
}
