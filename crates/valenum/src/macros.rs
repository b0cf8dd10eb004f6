///
/// members!
///
/// Declares an enumeration type and its canonical entries in one block.
/// Each entry becomes a `static` singleton, so identity comparisons and
/// registry discovery see one stable address per entry. Declaration
/// order is preserved for equal values.
///
/// ```ignore
/// members! {
///     pub Suit: u8 {
///         CLUBS    = 0 => "Clubs",
///         DIAMONDS = 1 => "Diamonds",
///         HEARTS   = 2 => "Hearts",
///         SPADES   = 3 => "Spades",
///     }
/// }
/// ```
///
/// Values must be const-constructible; enumerations whose values are
/// built at runtime implement `Enumerated` by hand instead.
///

#[macro_export]
macro_rules! members {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident: $value:ty {
            $(
                $(#[$entry_meta:meta])*
                $entry:ident = $entry_value:expr => $entry_name:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis struct $name {
            member: $crate::Member<$value>,
        }

        $(
            $(#[$entry_meta])*
            $vis static $entry: $name = $name {
                member: $crate::Member::new($entry_value, $entry_name),
            };
        )*

        impl $name {
            /// Build an instance outside the canonical set. Only the
            /// `static` items above participate in discovery.
            $vis const fn adhoc(value: $value, name: &'static str) -> Self {
                Self {
                    member: $crate::Member::new(value, name),
                }
            }
        }

        impl $crate::Enumerated for $name {
            type Value = $value;

            fn member(&self) -> &$crate::Member<$value> {
                &self.member
            }

            fn declared() -> &'static [&'static Self] {
                static DECLARED: &[&$name] = &[$(&$entry),*];

                DECLARED
            }
        }

        impl ::std::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.member == other.member
            }
        }

        impl ::std::cmp::Eq for $name {}

        impl ::std::cmp::PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> ::std::option::Option<::std::cmp::Ordering> {
                ::std::option::Option::Some(self.cmp(other))
            }
        }

        impl ::std::cmp::Ord for $name {
            fn cmp(&self, other: &Self) -> ::std::cmp::Ordering {
                self.member.cmp(&other.member)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.member, f)
            }
        }
    };
}

///
/// TESTS
///
