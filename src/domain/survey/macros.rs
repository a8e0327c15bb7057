//! Declarative macro for fixed option vocabularies.
//!
//! Every single/multi-select question owns a closed list of Korean labels
//! that are also its wire representation. `vocabulary!` turns such a list
//! into a `Copy` enum that:
//!
//! - serializes/deserializes as its label (`#[serde(rename = ...)]`)
//! - implements [`Vocabulary`](super::Vocabulary) (`ALL`, `label`, `from_label`)
//! - implements `Display` as its label
//!
//! # Usage
//!
//! ```ignore
//! vocabulary! {
//!     /// Physical stamina self-assessment.
//!     pub enum StaminaLevel {
//!         High => "높음",
//!         Medium => "보통",
//!         Low => "낮음",
//!     }
//! }
//! ```

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::domain::survey::Vocabulary for $name {
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::domain::survey::Vocabulary::label(self))
            }
        }
    };
}
