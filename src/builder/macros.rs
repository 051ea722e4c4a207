//! Macros for declaring phase enums.

/// Generate a phase enum together with its `State` implementation.
///
/// Extra derives can be passed as attributes; `Clone`, `PartialEq`, `Debug`
/// and the serde traits are always added.
///
/// # Example
///
/// ```
/// use stagegate::phase_enum;
/// use stagegate::core::State;
///
/// phase_enum! {
///     #[derive(Copy, Eq)]
///     pub enum DoorPhase {
///         Shut,
///         Open,
///     }
///     final: [Open]
/// }
///
/// assert_eq!(DoorPhase::Shut.name(), "Shut");
/// assert!(DoorPhase::Open.is_final());
/// ```
#[macro_export]
macro_rules! phase_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
