//! Terminal rendering for the relaunch binary

pub mod context;
pub mod error;
pub mod output;
pub mod terminal;
pub mod theme;

pub mod primitives {
    pub mod icon;
    pub mod text;
}

pub mod blocks {
    pub mod build_failure;
    pub mod header;
}

pub mod views {
    pub mod devloop;
}
