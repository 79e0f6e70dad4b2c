use enumtab::{
	EntrySet, Enumerate, Order, Strategy, enum_cast, enum_contains, enum_contains_value, enum_count,
	enum_entries, enum_hash, enum_index, enum_json, enum_name, enum_name_or, enum_names, enum_unique_count,
	enum_unique_index, fingerprint,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
enum Color {
	Red,
	Green,
	Blue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
#[repr(u8)]
enum Numbers {
	One = 1,
	Two = 2,
	#[enumtab(alias = "V")]
	Five = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
#[repr(i8)]
enum Temperature {
	Hot = 100,
	Cold = -40,
	Mild = 20,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
#[repr(u64)]
enum Wide {
	Zero = 0,
	Max = u64::MAX,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
enum Never {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
#[allow(non_camel_case_types)]
enum Keyword {
	r#type,
	r#fn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
enum Weekday {
	Monday,
	Tuesday,
	Wednesday,
	Thursday,
	Friday,
	Saturday,
	Sunday,
	#[enumtab(alias = "Holiday")]
	Unknown,
	Pending,
	Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
#[enumtab(hash_threshold = 2)]
enum Coin {
	Heads,
	Tails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
enum Opcode {
	Nop,
	Push,
	Pop,
	Dup,
	Swap,
	Add,
	Sub,
	Mul,
	Div,
	Rem,
	Neg,
	And,
	Or,
	Xor,
	Not,
	Shl,
	Shr,
	Eq,
	Ne,
	Lt,
	Le,
	Gt,
	Ge,
	Jump,
	JumpIf,
	Call,
	Ret,
	Load,
	Store,
	LoadGlobal,
	StoreGlobal,
	Alloc,
	Free,
	Print,
	Halt,
	Trap,
}

#[test]
fn color_names_and_values_round_trip() {
	assert_eq!(enum_name(Color::Red), "Red");
	assert_eq!(enum_cast::<Color>("Green"), Some(Color::Green));
	assert_eq!(enum_cast::<Color>(2), Some(Color::Blue));
	assert_eq!(enum_count::<Color>(), 3);
	assert_eq!(enum_unique_count::<Color>(), 3);
}

#[test]
fn color_misses_are_none_or_fallback() {
	assert_eq!(enum_cast::<Color>(99), None);
	assert_eq!(enum_cast::<Color>("red"), None);
	assert_eq!(enum_cast::<Color>(""), None);
	assert_eq!(enum_name_or::<Color>(99, "?"), "?");
	assert_eq!(enum_name_or::<Color>(1u64, "?"), "Green");
	assert!(!enum_contains::<Color>("Purple"));
	assert!(enum_contains::<Color>(String::from("Blue")));
}

#[test]
fn contains_accepts_enumerators_names_and_integers() {
	assert!(enum_contains_value(Color::Blue));
	assert!(enum_contains_value(Numbers::Five));
	assert!(enum_contains::<Color>("Red"));
	assert!(enum_contains::<Color>(0u8));
	assert!(!enum_contains::<Color>(3u8));
}

#[test]
fn alias_shares_its_variant() {
	assert_eq!(enum_cast::<Numbers>("V"), Some(Numbers::Five));
	assert_eq!(enum_cast::<Numbers>(5u8), Some(Numbers::Five));
	assert_eq!(enum_name(Numbers::Five), "Five");
	assert_eq!(enum_count::<Numbers>(), 4);
	assert_eq!(enum_unique_count::<Numbers>(), enum_count::<Numbers>() - 1);
	assert_eq!(enum_names::<Numbers>(Order::Declaration).collect::<Vec<_>>(), ["One", "Two", "Five", "V"]);
	assert_eq!(enum_unique_index(Numbers::Five), Some(2));
	assert_eq!(enum_json::<Numbers>(Order::ByValue), r#"{"One":1,"Two":2,"Five":5,"V":5}"#);
}

#[rstest]
#[case(Order::Declaration, &["One", "Two", "Five", "V"])]
#[case(Order::ByValue, &["One", "Two", "Five", "V"])]
#[case(Order::ByName, &["Five", "One", "Two", "V"])]
fn names_follow_order(#[case] order: Order, #[case] expected: &[&str]) {
	assert_eq!(enum_names::<Numbers>(order).collect::<Vec<_>>(), expected);
}

#[rstest]
#[case(Temperature::Cold, Order::Declaration, 1)]
#[case(Temperature::Cold, Order::ByValue, 0)]
#[case(Temperature::Hot, Order::ByValue, 2)]
#[case(Temperature::Mild, Order::ByName, 2)]
fn index_in_order(#[case] value: Temperature, #[case] order: Order, #[case] expected: usize) {
	assert_eq!(enum_index(value, order), Some(expected));
}

#[test]
fn signed_discriminants_do_not_alias_unsigned_queries() {
	assert_eq!(enum_cast::<Temperature>(-40i32), Some(Temperature::Cold));
	assert_eq!(enum_cast::<Temperature>(216u8), None);
	assert_eq!(
		enum_names::<Temperature>(Order::ByValue).collect::<Vec<_>>(),
		["Cold", "Mild", "Hot"]
	);
	assert_eq!(enum_json::<Temperature>(Order::ByValue), r#"{"Cold":-40,"Mild":20,"Hot":100}"#);
}

#[test]
fn wide_unsigned_discriminants() {
	assert_eq!(enum_cast::<Wide>(u64::MAX), Some(Wide::Max));
	assert_eq!(enum_cast::<Wide>(-1i64), None);
	assert_eq!(Wide::Max.to_underlying(), u64::MAX as i128);
	assert_eq!(enum_json::<Wide>(Order::ByValue), format!(r#"{{"Zero":0,"Max":{}}}"#, u64::MAX));
}

#[test]
fn empty_enum_answers_every_query_with_a_miss() {
	assert_eq!(enum_count::<Never>(), 0);
	assert_eq!(enum_cast::<Never>("Anything"), None);
	assert_eq!(enum_cast::<Never>(0), None);
	assert_eq!(enum_json::<Never>(Order::ByName), "{}");
	assert_eq!(enum_entries::<Never>(Order::ByValue).len(), 0);
}

#[test]
fn raw_identifiers_are_unescaped() {
	assert_eq!(enum_name(Keyword::r#type), "type");
	assert_eq!(enum_cast::<Keyword>("fn"), Some(Keyword::r#fn));
	assert_eq!(Keyword::META.type_name, "Keyword");
}

#[test]
fn strategy_follows_size() {
	assert_eq!(Color::META.dispatch.strategy, Strategy::Linear);
	assert_eq!(Weekday::META.dispatch.strategy, Strategy::Binary);
	assert_eq!(Opcode::META.dispatch.strategy, Strategy::Hash);
	assert_eq!(Coin::META.dispatch.strategy, Strategy::Hash);
	assert!(Color::META.dispatch.buckets.is_empty());
	assert!(!Opcode::META.dispatch.buckets.is_empty());
}

#[test]
fn every_strategy_round_trips_every_name() {
	fn check<E: Enumerate + PartialEq + std::fmt::Debug>() {
		for (variant, name) in enum_entries::<E>(Order::Declaration) {
			assert_eq!(enum_cast::<E>(name), Some(variant), "{name}");
			assert_eq!(enum_cast::<E>(variant.to_underlying()), Some(variant), "{name}");
		}
		assert_eq!(enum_cast::<E>("NoSuchName"), None);
	}
	check::<Color>();
	check::<Weekday>();
	check::<Opcode>();
	check::<Coin>();
	assert_eq!(enum_cast::<Weekday>("Holiday"), Some(Weekday::Unknown));
	assert_eq!(enum_name(Weekday::Unknown), "Unknown");
}

#[test]
fn views_are_consistent() {
	let meta = &Opcode::META;
	let values: Vec<i128> = meta.by_value.iter().map(|&i| meta.entries[i as usize].value).collect();
	assert!(values.is_sorted());
	let names: Vec<&str> = meta.by_name.iter().map(|&i| meta.entries[i as usize].name).collect();
	assert!(names.is_sorted());
	assert_eq!(meta.unique.len(), meta.entries.len());
}

#[test]
fn fingerprint_ignores_declaration_order() {
	let mut reversed = Color::META.entries.to_vec();
	reversed.reverse();
	assert_eq!(fingerprint(&reversed), enum_hash::<Color>());
	assert_ne!(enum_hash::<Color>(), enum_hash::<Numbers>());
	assert_eq!(EntrySet::of::<Numbers>().fingerprint(), enum_hash::<Numbers>());
}

#[test]
fn hash_is_a_compile_time_constant() {
	const COLOR_HASH: u64 = enum_hash::<Color>();
	const COLOR_COUNT: usize = enum_count::<Color>();
	assert_eq!(COLOR_HASH, enum_hash::<Color>());
	assert_eq!(COLOR_COUNT, 3);
}

#[test]
fn entry_set_mirrors_derived_queries() {
	let set = EntrySet::of::<Weekday>();
	for (variant, name) in enum_entries::<Weekday>(Order::Declaration) {
		assert_eq!(set.value_of(name), Some(variant.to_underlying()));
	}
	assert_eq!(set.to_json(Order::ByName), enum_json::<Weekday>(Order::ByName));
	assert_eq!(set.unique_count(), enum_unique_count::<Weekday>());
}
