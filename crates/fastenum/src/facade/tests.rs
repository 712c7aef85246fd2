use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Barrier, OnceLock};

use rstest::rstest;

use super::*;
use crate::constants;
use crate::enumeration::Discovery;

constants! {
	/// Traffic light colors with an alias.
	struct Light: i32 {
		const RED = 0 => "stop";
		const AMBER = 1;
		const GREEN = 2 => "go";
		const YELLOW = 1;
	}
}

constants! {
	#[flags]
	struct Access: u8 {
		const NONE = 0;
		const READ = 1;
		const WRITE = 2;
		const EXEC = 4;
	}
}

constants! {
	struct Nothing: u16 {}
}

constants! {
	struct Extremes: i64 {
		const MIN = i64::MIN;
		const ZERO = 0;
		const MAX = i64::MAX;
	}
}

#[test]
fn ordered_views() {
	assert_eq!(values::<Light>(), &[Light::RED, Light::AMBER, Light::GREEN, Light::YELLOW]);
	assert_eq!(names::<Light>(), &["RED", "AMBER", "GREEN", "YELLOW"]);
	assert_eq!(members::<Light>().len(), 4);
	assert_eq!(distinct_members::<Light>().len(), 3);
	assert_eq!(len::<Light>(), 4);
}

#[test]
fn derived_properties() {
	assert!(is_continuous::<Light>());
	assert!(!is_flags::<Light>());
	assert!(!is_empty::<Light>());
	assert_eq!(repr::<Light>(), Repr::I32);

	assert!(!is_continuous::<Access>());
	assert!(is_flags::<Access>());
	assert_eq!(repr::<Access>(), Repr::U8);
}

#[test]
fn bounds() {
	assert_eq!(min_value::<Light>(), Some(Light::RED));
	assert_eq!(max_value::<Light>(), Some(Light::GREEN));
	assert_eq!(min_value::<Extremes>(), Some(Extremes::MIN));
	assert_eq!(max_value::<Extremes>(), Some(Extremes::MAX));
}

#[test]
fn empty_enumeration() {
	assert!(is_empty::<Nothing>());
	assert!(!is_continuous::<Nothing>());
	assert_eq!(min_value::<Nothing>(), None);
	assert_eq!(max_value::<Nothing>(), None);
	assert!(values::<Nothing>().is_empty());
	assert_eq!(try_parse::<Nothing>("0"), None);
	assert!(matches!(parse::<Nothing>("Anything"), Err(EnumError::NotAMember { .. })));
}

#[test]
fn member_lookup_prefers_first_alias() {
	assert_eq!(get_name(Light::YELLOW), Ok("AMBER"));
	assert_eq!(get_member(Light::GREEN).map(Member::label), Ok(Some("go")));
	assert_eq!(Light::YELLOW.name(), Some("AMBER"));
	assert_eq!(Light::RED.label(), Some("stop"));
}

#[test]
fn member_lookup_miss_is_an_error() {
	let err = get_member(Access(3)).unwrap_err();
	assert!(matches!(err, EnumError::NotAMember { ref value, .. } if value == "3"));
	assert!(get_name(Access(3)).is_err());
	assert_eq!(Access(3).member(), None);
	assert_eq!(Access(3).name(), None);
}

#[test]
fn is_defined_by_value() {
	assert!(is_defined(Light::YELLOW));
	assert!(!is_defined(Light(3)));
	assert!(!is_defined(Light(-1)));
	assert!(is_defined(Access::EXEC));
	assert!(!is_defined(Access(3)));
	assert!(Access::WRITE.is_defined());
	assert!(is_defined(Extremes::MIN));
	assert!(!is_defined(Extremes(1)));
}

#[test]
fn is_defined_repr_requires_exact_type() {
	assert_eq!(is_defined_repr::<Light, i32>(2), Ok(true));
	assert_eq!(is_defined_repr::<Light, i32>(7), Ok(false));
	assert_eq!(
		is_defined_repr::<Light, u8>(1),
		Err(EnumError::ReprMismatch {
			enum_name: metadata::<Light>().type_name(),
			expected: Repr::I32,
			found: Repr::U8,
		})
	);
	assert!(matches!(is_defined_repr::<Light, i64>(1), Err(EnumError::ReprMismatch { .. })));
	assert!(matches!(is_defined_repr::<Access, i8>(1), Err(EnumError::ReprMismatch { .. })));
	assert_eq!(is_defined_repr::<Access, u8>(4), Ok(true));
}

#[test]
fn is_defined_repr_agrees_with_value_lookup() {
	for raw in u8::MIN..=u8::MAX {
		assert_eq!(is_defined_repr::<Access, u8>(raw), Ok(is_defined(Access(raw))), "disagree on {raw}");
	}
	for raw in -4..=4 {
		assert_eq!(is_defined_repr::<Light, i32>(raw), Ok(is_defined(Light(raw))), "disagree on {raw}");
	}
}

#[test]
fn is_defined_by_name_is_case_sensitive() {
	assert!(is_defined_name::<Light>("YELLOW"));
	assert!(!is_defined_name::<Light>("yellow"));
	assert!(!is_defined_name::<Light>("1"));
}

#[rstest]
#[case("RED", Some(Light::RED))]
#[case("YELLOW", Some(Light::YELLOW))]
#[case("2", Some(Light::GREEN))]
#[case("+2", Some(Light::GREEN))]
#[case("1", Some(Light::AMBER))]
#[case("-0", Some(Light::RED))]
#[case("3", None)]
#[case("-1", None)]
#[case("red", None)]
#[case("2x", None)]
#[case("99999999999", None)]
#[case("", None)]
#[case(" RED", None)]
fn try_parse_cases(#[case] text: &str, #[case] expected: Option<Light>) {
	assert_eq!(try_parse::<Light>(text), expected);
}

#[test]
fn try_parse_ignores_case_when_asked() {
	assert_eq!(try_parse_ignore_case::<Light>("red"), Some(Light::RED));
	assert_eq!(try_parse_ignore_case::<Light>("yElLoW"), Some(Light::YELLOW));
	assert_eq!(try_parse_ignore_case::<Light>("2"), Some(Light::GREEN));
	assert_eq!(try_parse_ignore_case::<Light>("blue"), None);
	assert_eq!(parse_ignore_case::<Access>("write"), Ok(Access::WRITE));
}

#[test]
fn numeric_dispatch_uses_first_character_only() {
	// A leading digit commits to numeric parsing even when the rest looks like a name.
	assert!(matches!(parse::<Light>("1RED"), Err(EnumError::MalformedLiteral { .. })));
	assert!(matches!(parse::<Light>("RED1"), Err(EnumError::NotAMember { .. })));
}

#[test]
fn parse_errors() {
	assert!(matches!(parse::<Light>(""), Err(EnumError::EmptyInput { .. })));
	assert!(matches!(
		parse::<Access>("256"),
		Err(EnumError::MalformedLiteral { repr: Repr::U8, .. })
	));
	assert!(matches!(parse::<Access>("-1"), Err(EnumError::MalformedLiteral { .. })));
	assert!(matches!(parse::<Access>("3"), Err(EnumError::NotAMember { .. })));
	assert!(matches!(parse::<Access>("read"), Err(EnumError::NotAMember { .. })));
}

#[test]
fn parse_round_trips_every_member() {
	for member in members::<Light>() {
		assert_eq!(parse::<Light>(member.name()), Ok(member.value()));
		let numeric = parse::<Light>(&member.repr().to_string()).expect("declared value parses");
		assert!(Member::new(member.name(), numeric).same_value(member));
	}
	for member in members::<Extremes>() {
		assert_eq!(parse::<Extremes>(&member.repr().to_string()), Ok(member.value()));
	}
}

#[test]
fn metadata_is_a_single_instance() {
	assert!(core::ptr::eq(metadata::<Light>(), metadata::<Light>()));
}

static COUNTED_DISCOVERIES: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Counted(u16);

impl Enumeration for Counted {
	type Repr = u16;

	fn discover() -> Discovery<Self> {
		COUNTED_DISCOVERIES.fetch_add(1, Ordering::SeqCst);
		std::thread::yield_now();
		Discovery::new(vec![Member::new("A", Counted(10)), Member::new("B", Counted(11))])
	}

	fn to_repr(self) -> u16 {
		self.0
	}

	fn metadata() -> &'static Metadata<Self> {
		static CACHE: OnceLock<Metadata<Counted>> = OnceLock::new();
		CACHE.get_or_init(Metadata::build)
	}
}

static REGISTERED_DISCOVERIES: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Registered(i8);

impl Enumeration for Registered {
	type Repr = i8;

	fn discover() -> Discovery<Self> {
		REGISTERED_DISCOVERIES.fetch_add(1, Ordering::SeqCst);
		std::thread::yield_now();
		Discovery::new(vec![
			Member::new("Neg", Registered(-1)),
			Member::new("Pos", Registered(1)),
		])
		.flags(true)
	}

	fn to_repr(self) -> i8 {
		self.0
	}
}

/// Races `threads` first accesses and returns the addresses each thread observed.
fn race_first_access<E: Enumeration>(threads: usize) -> Vec<usize> {
	let barrier = &Barrier::new(threads);
	std::thread::scope(|scope| {
		let handles: Vec<_> = (0..threads)
			.map(|_| {
				scope.spawn(move || {
					barrier.wait();
					let meta = metadata::<E>();
					assert_eq!(meta.len(), 2, "observed a partially built cache");
					meta as *const Metadata<E> as usize
				})
			})
			.collect();
		handles.into_iter().map(|h| h.join().expect("reader thread panicked")).collect()
	})
}

#[test]
fn concurrent_first_access_builds_once() {
	let seen = race_first_access::<Counted>(16);
	assert!(seen.windows(2).all(|w| w[0] == w[1]));
	assert_eq!(COUNTED_DISCOVERIES.load(Ordering::SeqCst), 1);
	assert_eq!(try_parse::<Counted>("11"), Some(Counted(11)));
}

#[test]
fn concurrent_registry_access_builds_once() {
	let seen = race_first_access::<Registered>(16);
	assert!(seen.windows(2).all(|w| w[0] == w[1]));
	assert_eq!(REGISTERED_DISCOVERIES.load(Ordering::SeqCst), 1);
	assert!(is_flags::<Registered>());
	assert!(!is_continuous::<Registered>());
	assert!(crate::registry::len() >= 1);
}
