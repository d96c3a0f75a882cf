//! Macros for declaring chart identifiers.

/// Generate a state enum and its `State` implementation.
///
/// Variants may carry an explicit name, which is used both by
/// `State::name` and by serde, so JSON charts can use the same spelling.
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`
/// and serde's traits.
///
/// # Example
///
/// ```
/// use finite::core::State;
/// use finite::state_enum;
///
/// state_enum! {
///     pub enum Screen {
///         Start = "start",
///         Loading = "loading",
///         Gallery,
///     }
/// }
///
/// assert_eq!(Screen::Start.name(), "start");
/// assert_eq!(Screen::Gallery.name(), "Gallery");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }
    ) => {
        $crate::__identifier_enum! {
            $crate::core::State;
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant $(= $label)?
                ),*
            }
        }
    };
}

/// Generate an event enum and its `Event` implementation.
///
/// Same syntax as [`state_enum!`](crate::state_enum).
///
/// ```
/// use finite::core::Event;
/// use finite::event_enum;
///
/// event_enum! {
///     pub enum SearchEvent {
///         Search = "SEARCH",
///         CancelSearch = "CANCEL_SEARCH",
///     }
/// }
///
/// assert_eq!(SearchEvent::CancelSearch.name(), "CANCEL_SEARCH");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }
    ) => {
        $crate::__identifier_enum! {
            $crate::core::Event;
            $(#[$meta])*
            $vis enum $name {
                $(
                    $(#[$variant_meta])*
                    $variant $(= $label)?
                ),*
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __identifier_enum {
    (
        $trait:path;
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $(#[serde(rename = $label)])?
                $variant
            ),*
        }

        impl $trait for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::__identifier_label!($variant $(, $label)?)),*
                }
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __identifier_label {
    ($variant:ident) => {
        stringify!($variant)
    };
    ($variant:ident, $label:literal) => {
        $label
    };
}
