//! I/O for the count-map text format

mod text;

pub use text::{
    read_count_map, read_count_map_from_buffer, write_count_map, write_count_map_to_buffer,
};
