use crate::{
    iter::{Ascending, Descending},
    member::Member,
    registry,
};
use std::cmp::Ordering;

///
/// Enumerated
///
/// Contract implemented by a concrete enumeration type: the underlying
/// comparable value type, the named payload of each instance, and the
/// statically declared canonical set.
///
/// Declaration is explicit rather than reflective: `declared` returns
/// references to the singleton `static` items that make up the
/// canonical set, in declaration order. The registry consults only the
/// exact type's own declarations, so sibling enumeration types can
/// never contaminate each other.
///
/// Everything else is provided. Instances constructed outside the
/// declared set ("ad-hoc") get the full surface; they compare by value
/// and resolve against the canonical table on demand.
///

pub trait Enumerated: Send + Sync + Sized + 'static {
    /// Underlying comparable value type.
    type Value: Clone + Ord + Send + Sync + 'static;

    /// The named payload of this instance.
    fn member(&self) -> &Member<Self::Value>;

    /// The canonical entries, in declaration order.
    fn declared() -> &'static [&'static Self];

    ///
    /// PROVIDED SURFACE
    ///

    /// The underlying value.
    fn value(&self) -> &Self::Value {
        self.member().value()
    }

    /// The display name.
    fn name(&self) -> &str {
        self.member().name()
    }

    /// Total order against another instance; an absent counterpart
    /// compares as less than any present value.
    fn compare(&self, other: Option<&Self>) -> Ordering {
        self.member().compare(other.map(Self::member))
    }

    /// Total order against a raw value.
    fn compare_value(&self, value: &Self::Value) -> Ordering {
        self.member().compare_value(value)
    }

    /// Structural equality against a raw value.
    fn eq_value(&self, value: &Self::Value) -> bool {
        self.member().eq_value(value)
    }

    /// Whether this instance's value matches one of the declared entries.
    fn is_canonical(&self) -> bool {
        registry::global().ordered::<Self>().contains_value(self.value())
    }

    /// Resolve to the matching declared entry, if any.
    ///
    /// A declared entry resolves to its own position (an alias never
    /// resolves to its sibling); any other instance resolves to the
    /// first entry with an equal value. The resolved position is cached
    /// per instance after the first success.
    fn resolve_canonical(&self) -> Option<&'static Self> {
        let ordered = registry::global().ordered::<Self>();

        if let Some(&position) = self.member().resolution_cache().get() {
            return ordered.get(position);
        }

        let position = ordered.resolution_position(self)?;
        let _ = self.member().resolution_cache().set(position);

        ordered.get(position)
    }

    /// Ascending window over the canonical entries strictly after this
    /// instance. Restartable: each call re-reads the registry.
    fn ascend(&self) -> Ascending<Self> {
        registry::global().ordered::<Self>().ascend_from(self)
    }

    /// Descending window over the canonical entries strictly before
    /// this instance.
    fn descend(&self) -> Descending<Self> {
        registry::global().ordered::<Self>().descend_from(self)
    }

    /// The canonical entry immediately after this instance.
    fn next(&self) -> Option<&'static Self> {
        self.ascend().next()
    }

    /// The canonical entry immediately before this instance.
    fn prior(&self) -> Option<&'static Self> {
        self.descend().next()
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use crate::test_fixtures::{
        BIG_ASS_TRUCK, CLUBS, DIAMONDS, HEARTS, Nothing, PICKUP, SPADES, Suit,
    };
    use crate::{Enumerated, global};
    use std::cmp::Ordering;

    #[test]
    fn end_to_end_suit_scenario() {
        let suits = global().ordered::<Suit>();

        assert_eq!(suits.len(), 4);
        assert!(std::ptr::eq(suits.find_by_value(&2).unwrap(), &HEARTS));
        assert!(std::ptr::eq(DIAMONDS.next().unwrap(), &HEARTS));
        assert_eq!(suits.at(3).unwrap().name(), "Spades");
        assert!(suits.get(4).is_none());
    }

    #[test]
    fn next_and_prior_stop_at_the_edges() {
        assert!(SPADES.next().is_none());
        assert!(CLUBS.prior().is_none());
        assert!(std::ptr::eq(HEARTS.prior().unwrap(), &DIAMONDS));
        assert!(std::ptr::eq(HEARTS.next().unwrap(), &SPADES));
    }

    #[test]
    fn canonicality_is_derived_from_the_declared_set() {
        assert!(CLUBS.is_canonical());
        assert!(Suit::adhoc(3, "Espadas").is_canonical()); // value matches SPADES
        assert!(!Suit::adhoc(77, "Nope").is_canonical());
    }

    #[test]
    fn resolution_caches_the_position_once() {
        let adhoc = Suit::adhoc(0, "Trefle");
        assert!(adhoc.member().resolution_cache().get().is_none());

        let resolved = adhoc.resolve_canonical().unwrap();
        assert!(std::ptr::eq(resolved, &CLUBS));
        assert_eq!(adhoc.member().resolution_cache().get(), Some(&0));

        // second access is served from the cache
        assert!(std::ptr::eq(adhoc.resolve_canonical().unwrap(), &CLUBS));
    }

    #[test]
    fn failed_resolution_is_not_cached() {
        let adhoc = Suit::adhoc(99, "Unknown");

        assert!(adhoc.resolve_canonical().is_none());
        assert!(adhoc.member().resolution_cache().get().is_none());
    }

    #[test]
    fn an_alias_resolves_to_itself() {
        let resolved = BIG_ASS_TRUCK.resolve_canonical().unwrap();

        assert!(std::ptr::eq(resolved, &BIG_ASS_TRUCK));
        assert!(!std::ptr::eq(resolved, &PICKUP));
    }

    #[test]
    fn compare_treats_absent_as_lesser() {
        assert_eq!(CLUBS.compare(None), Ordering::Greater);
        assert_eq!(CLUBS.compare(Some(&SPADES)), Ordering::Less);
        assert_eq!(
            CLUBS.compare(Some(&Suit::adhoc(0, "other zero"))),
            Ordering::Equal
        );
        assert_eq!(CLUBS.compare_value(&0), Ordering::Equal);
        assert!(CLUBS.eq_value(&0));
    }

    #[test]
    fn empty_enumerations_answer_everything_with_absence() {
        let probe = Nothing::adhoc(0, "probe");

        assert!(probe.next().is_none());
        assert!(probe.prior().is_none());
        assert!(!probe.is_canonical());
        assert!(probe.resolve_canonical().is_none());
    }
}
