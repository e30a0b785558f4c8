//! Tabular output of leaf statistics.
//!
//! Records are written as one header line followed by one line per leaf,
//! values in the fixed order of [COLUMNS](crate::stats::COLUMNS):
//!
//! ```text
//! name,diagnosis,efficacy,edge_length,root_to_tip,root_to_tip_u,sib_leaves,closest_leaf
//! A,3.5,0.5,1.0,1.0,1,1,3.0
//! B,None,1.0,2.0,2.0,1,1,3.0
//! ```
//!
//! [TableStyle] controls delimiter, header and the token for absent values.

pub mod writer;

pub use writer::{
    DEFAULT_MISSING, TableStyle, format_real, header_line, record_line, to_leaf_table,
    write_leaf_table,
};
