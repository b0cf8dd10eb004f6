//! Shared enumeration fixtures for the test suites.

pub use tier::Tier;

crate::members! {
    /// Four distinct card suits over `u8`.
    pub Suit: u8 {
        CLUBS    = 0 => "Clubs",
        DIAMONDS = 1 => "Diamonds",
        HEARTS   = 2 => "Hearts",
        SPADES   = 3 => "Spades",
    }
}

crate::members! {
    /// Two aliases: equal values, distinct names and positions.
    pub Truck: u8 {
        PICKUP        = 3 => "Pickup",
        BIG_ASS_TRUCK = 3 => "Big Ass Truck",
    }
}

crate::members! {
    /// Zero declared entries.
    pub Nothing: u8 {}
}

///
/// A hand-implemented enumeration: runtime-built `String` values plus a
/// per-entry field, the shape the declaration macro cannot express.
///

pub mod tier {
    use crate::{Enumerated, Member};
    use std::sync::LazyLock;

    #[derive(Debug)]
    pub struct Tier {
        member: Member<String>,
        pub multiplier: u32,
    }

    impl Tier {
        fn declare(value: &str, name: &'static str, multiplier: u32) -> Self {
            Self {
                member: Member::with_name(value.to_owned(), name),
                multiplier,
            }
        }
    }

    pub static BRONZE: LazyLock<Tier> = LazyLock::new(|| Tier::declare("bronze", "Bronze", 1));
    pub static GOLD: LazyLock<Tier> = LazyLock::new(|| Tier::declare("gold", "Gold", 4));
    pub static SILVER: LazyLock<Tier> = LazyLock::new(|| Tier::declare("silver", "Silver", 2));

    impl Enumerated for Tier {
        type Value = String;

        fn member(&self) -> &Member<String> {
            &self.member
        }

        fn declared() -> &'static [&'static Self] {
            static DECLARED: LazyLock<Vec<&'static Tier>> =
                LazyLock::new(|| vec![&*BRONZE, &*GOLD, &*SILVER]);

            DECLARED.as_slice()
        }
    }
}
