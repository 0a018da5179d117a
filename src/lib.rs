//! Selection and engagement engine for a courtly praise service.
//!
//! `praise-core` picks the next praise to show a visitor without immediately
//! repeating the last one, substitutes a personalization token into praise
//! text, records visitor thanks against a shared popularity counter, tracks a
//! per-visit engagement count, and derives the Top-10 leaderboard. Storage is
//! reached through an injected async repository; native share and clipboard
//! facilities stay behind traits.
//!
//! See <https://www.foximoatyourservice.today/> for the live court.

pub mod engagement;
pub mod record;
pub mod selection;
pub mod session;
pub mod store;
pub mod types;
