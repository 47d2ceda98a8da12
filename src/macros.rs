//! Macros for ergonomic state declaration.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// Variants may carry explicit discriminants. The generated enum derives
/// `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`, and each variant's
/// name is its identifier.
///
/// # Example
///
/// ```
/// use lifecycle_fsm::core::State;
/// use lifecycle_fsm::state_enum;
///
/// state_enum! {
///     pub enum Status {
///         Offline = 0,
///         Online = 10,
///     }
/// }
///
/// assert_eq!(Status::Online.name(), "Online");
/// assert_eq!(Status::Online as i32, 10);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(= $discriminant:expr)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(= $discriminant)?
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn state_enum_supports_discriminants() {
        state_enum! {
            #[repr(u8)]
            pub enum Level {
                Low = 1,
                High = 200,
            }
        }

        assert_eq!(Level::Low as u8, 1);
        assert_eq!(Level::High as u8, 200);
        assert_eq!(Level::High.name(), "High");
    }

    #[test]
    fn state_enum_is_copy_and_hashable() {
        let mut set = std::collections::HashSet::new();
        let state = TestState::Processing;
        let copied = state;
        set.insert(state);
        assert!(set.contains(&copied));
    }
}
