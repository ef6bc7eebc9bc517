//! Macros for ergonomic state declaration.

/// Declare a state enum and implement [`StateId`](crate::core::StateId) for it.
///
/// Variants get ordinals in declaration order starting at zero, and `COUNT`
/// is the number of variants. Explicit discriminants are not accepted, which
/// keeps the ordinals contiguous.
///
/// # Example
///
/// ```
/// use tickstate::core::StateId;
/// use tickstate::state_enum;
///
/// state_enum! {
///     pub enum PlayerState {
///         Idle,
///         Running,
///         Jumping,
///     }
/// }
///
/// assert_eq!(PlayerState::COUNT, 3);
/// assert_eq!(PlayerState::Jumping.ordinal(), 2);
/// assert_eq!(PlayerState::from_ordinal(1), Some(PlayerState::Running));
/// assert_eq!(PlayerState::Idle.name(), "Idle");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::core::StateId for $name {
            const COUNT: usize = [$(stringify!($variant)),+].len();

            fn ordinal(self) -> usize {
                self as usize
            }

            fn from_ordinal(ordinal: usize) -> Option<Self> {
                const VARIANTS: &[$name] = &[$($name::$variant),+];
                VARIANTS.get(ordinal).copied()
            }

            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}
