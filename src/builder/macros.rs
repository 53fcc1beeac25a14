//! Macros for declaring resume points.

/// Declare a `Position` enumeration.
///
/// The terminal sentinel is not listed: every generator shares
/// [`Tag::Done`](crate::core::Tag::Done) for it.
///
/// # Example
///
/// ```
/// use resumable::positions;
/// use resumable::core::Position;
///
/// positions! {
///     pub enum NestedLoop {
///         Outer,
///         Inner,
///     }
///     initial: Outer
/// }
///
/// assert_eq!(NestedLoop::INITIAL, NestedLoop::Outer);
/// assert_eq!(NestedLoop::Inner.name(), "Inner");
/// ```
#[macro_export]
macro_rules! positions {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }

        initial: $initial:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $crate::core::Position for $name {
            const INITIAL: Self = Self::$initial;

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }
        }
    };
}
