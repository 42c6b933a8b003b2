//! Impulsive transfer utilities: classical Hohmann and bi-elliptic delta-v estimators.

pub mod transfers;

pub use transfers::{
    BiEllipticBurns, EllipseTransferOptions, TransferBurns, hohmann_bielliptic_ctoc,
    hohmann_transfer_ctoc, hohmann_transfer_etoe, hohmann_transfer_htoe,
};
