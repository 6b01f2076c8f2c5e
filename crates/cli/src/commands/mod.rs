//! Commandes de la CLI

pub mod generate;
