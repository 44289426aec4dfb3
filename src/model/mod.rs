/// Types around game modifiers.
pub mod mods;
