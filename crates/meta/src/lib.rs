//! Enumerator metadata algorithms shared by `enumtab` and `enumtab-macros`.
//!
//! Everything here operates on plain slices (`&[EnumEntry]`, or bare names
//! for collision analysis) so the same code runs in three places:
//! - inside the derive macro, where names are known but values are not
//! - inside `const` items emitted by the macro, where values are known
//! - at runtime, for entry sets assembled by hand
//!
//! # Modules
//!
//! - [`entry`]: the `(name, value)` unit
//! - [`order`]: by-value and by-name permutations
//! - [`unique`]: alias de-duplication
//! - [`hash`]: the seeded FNV-1a string hash and bucket policy
//! - [`collision`]: name-hash collision analysis
//! - [`strategy`]: linear / binary / hash selection and thresholds
//! - [`naming`]: identifier case conversion rules
//! - [`pattern`]: prefix/suffix member name patterns
//! - [`filter`]: member class filter flags

pub mod collision;
pub mod entry;
pub mod filter;
pub mod hash;
pub mod naming;
pub mod order;
pub mod pattern;
pub mod strategy;
pub mod unique;

pub use collision::{CollisionReport, analyze_collisions, has_name_hash_collision};
pub use entry::{EMPTY_SLOT, EnumEntry, MAX_ENTRIES};
pub use filter::{FilterError, MemberKinds};
pub use naming::{NamingRule, UnknownNamingRule};
pub use pattern::NamePattern;
pub use strategy::{ConfigError, DispatchConfig, Strategy, select_strategy};
