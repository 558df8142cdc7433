pub mod disc_builder;
pub mod makemkvcon;
pub mod makemkvcon_parser;
pub mod rip_output;
pub mod size;
pub mod summary;
