//! Procedural macros for enumtab.
//!
//! Provides a derive macro and an attribute macro:
//! * `#[derive(Enumerate)]` - records an enum's enumerators and precomputes
//!   its name dispatch
//! * `#[enum_table(...)]` - builds an enum-keyed lookup table from the members
//!   of an `impl` block, a struct or an inline module

use proc_macro::TokenStream;

/// Enumerate derive macro implementation.
mod enumerate;
mod table;

/// Implements `enumtab::Enumerate` for a fieldless enum.
///
/// Attributes:
/// * `#[enumtab(alias = "Name")]` on a variant - adds an entry `Name` with the
///   variant's discriminant, right after the variant; repeatable
/// * `#[enumtab(hash_threshold = N, binary_threshold = M)]` on the enum -
///   overrides the dispatch thresholds for this enum only
///
/// The thresholds otherwise come from `ENUMTAB_HASH_THRESHOLD` and
/// `ENUMTAB_BINARY_THRESHOLD` in the build environment, then default to 32
/// and 8.
///
/// ```ignore
/// #[derive(Clone, Copy, Enumerate)]
/// #[repr(u8)]
/// enum Level {
///     Low = 1,
///     #[enumtab(alias = "Mid")]
///     Medium = 2,
///     High = 3,
/// }
/// ```
#[proc_macro_derive(Enumerate, attributes(enumtab))]
pub fn derive_enumerate(input: TokenStream) -> TokenStream {
	enumerate::derive_enumerate(input)
}

/// Builds a `LookupTable` from members whose names embed enumerator names.
///
/// ```ignore
/// #[enum_table(pub GETTERS: Color, prefix = "get_", rule = "pascal_case")]
/// impl Palette {
///     fn get_red() -> u32 { 0xff0000 }
///     fn get_green() -> u32 { 0x00ff00 }
///     #[enumtab(key = "Blue")]
///     fn azure() -> u32 { 0x0000ff }
/// }
/// ```
///
/// # Arguments
///
/// - `VIS NAME: Enum` - Required: the generated static and its key enum
/// - `prefix = "..."`, `suffix = "..."` - stripped from member names
/// - `rule = "..."` - case conversion applied to what remains (`verbatim`,
///   `snake_case`, `pascal_case`, `camel_case`, `screaming_snake_case`,
///   `kebab_case`)
/// - `matcher = path` - a `const fn(&'static str) -> Option<&'static str>`
///   used instead of prefix, suffix and rule
/// - `members = "static | function"` - member class filter
/// - `payload = Type` - payload type, when it cannot be read off the first
///   member
/// - `exhaustive` - every distinct enumerator must be mapped
///
/// Member attributes `#[enumtab(key = "Name")]` and `#[enumtab(skip)]`
/// override key derivation and are removed from the output.
///
/// # Payloads
///
/// * functions and methods - a function pointer, with `Self` resolved
/// * constants and statics - a `&'static` reference
/// * struct fields - an accessor `fn(&Struct) -> &Field`
#[proc_macro_attribute]
pub fn enum_table(attr: TokenStream, item: TokenStream) -> TokenStream {
	table::enum_table(attr, item)
}
